use crate::schema::{Field, Record};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for rowmap types
    rowmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let ident = &self.record.ident;

        let properties = self.expand_properties();
        let read_arms = self
            .record
            .properties()
            .filter(|field| field.readable())
            .map(|field| self.expand_read_arm(field));
        let write_arms = self
            .record
            .properties()
            .filter(|field| field.writable())
            .map(|field| self.expand_write_arm(field));

        wrap_in_const(quote! {
            impl #rowmap::Record for #ident {
                fn type_name() -> &'static str {
                    concat!(module_path!(), "::", stringify!(#ident))
                }

                fn properties() -> Vec<#rowmap::Property> {
                    vec![ #( #properties ),* ]
                }

                fn read(&self, property: &str) -> #rowmap::Result<#rowmap::Value> {
                    match property {
                        #( #read_arms )*
                        _ => Err(#rowmap::Error::mapping(
                            <Self as #rowmap::Record>::type_name(),
                            property,
                        )),
                    }
                }

                fn write(&mut self, property: &str, value: #rowmap::Value) -> #rowmap::Result<()> {
                    let _ = &value;
                    match property {
                        #( #write_arms )*
                        _ => Err(#rowmap::Error::mapping(
                            <Self as #rowmap::Record>::type_name(),
                            property,
                        )),
                    }
                }
            }
        })
    }

    fn expand_properties(&self) -> Vec<TokenStream> {
        let rowmap = &self.rowmap;

        self.record
            .properties()
            .map(|field| {
                let name = &field.name;
                let ty = &field.ty;

                let mut property = quote! {
                    #rowmap::Property::new(#name)
                        .ty(<#ty as #rowmap::Primitive>::TYPE)
                };

                if let Some(column) = field.column_name() {
                    property.extend(quote!(.column(#column)));
                }

                if field.is_key() {
                    property.extend(quote!(.primary_key()));
                }

                if !field.writable() {
                    property.extend(quote!(.read_only()));
                }

                if !field.readable() {
                    property.extend(quote!(.write_only()));
                }

                property
            })
            .collect()
    }

    fn expand_read_arm(&self, field: &Field) -> TokenStream {
        let rowmap = &self.rowmap;
        let name = &field.name;
        let ident = &field.ident;
        let ty = &field.ty;

        quote! {
            #name => Ok(<#ty as #rowmap::Primitive>::to_value(&self.#ident)),
        }
    }

    fn expand_write_arm(&self, field: &Field) -> TokenStream {
        let rowmap = &self.rowmap;
        let name = &field.name;
        let ident = &field.ident;
        let ty = &field.ty;

        quote! {
            #name => {
                self.#ident = <#ty as #rowmap::Primitive>::load(value)?;
                Ok(())
            }
        }
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        rowmap: quote!(_rowmap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowmap as _rowmap;
            #code
        };
    }
}
