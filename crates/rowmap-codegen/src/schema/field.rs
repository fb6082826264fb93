use super::{Access, Column, ErrorSet};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Property name, the field identifier without any `r#` prefix
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Column mapping from `#[column(..)]`
    pub(crate) column: Option<Column>,

    /// Set if the field is annotated with `#[skip]`
    pub(crate) skip: Option<syn::Attribute>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Field> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else if errs.check(attr.meta.require_path_only()).is_some() {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    attrs.column = errs.check(Column::from_ast(attr));
                }
            } else if attr.path().is_ident("skip") {
                if attrs.skip.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[skip] attribute"));
                } else if errs.check(attr.meta.require_path_only()).is_some() {
                    attrs.skip = Some(attr.clone());
                }
            }
        }

        if let Some(skip) = &attrs.skip {
            if attrs.key.is_some() || attrs.column.is_some() {
                errs.push(syn::Error::new_spanned(
                    skip,
                    "#[skip] cannot be combined with #[key] or #[column]",
                ));
            }
        }

        errs.finish()?;

        Ok(Field {
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            ty: field.ty.clone(),
            attrs,
        })
    }

    pub(crate) fn is_skipped(&self) -> bool {
        self.attrs.skip.is_some()
    }

    pub(crate) fn is_key(&self) -> bool {
        self.attrs.key.is_some()
    }

    /// Column name, if the field is mapped. Defaults to the property name.
    pub(crate) fn column_name(&self) -> Option<String> {
        let column = self.attrs.column.as_ref()?;

        Some(match &column.name {
            Some(name) => name.value(),
            None => self.name.clone(),
        })
    }

    pub(crate) fn access(&self) -> Option<Access> {
        self.attrs.column.as_ref().and_then(|column| column.access)
    }

    pub(crate) fn readable(&self) -> bool {
        self.access() != Some(Access::WriteOnly)
    }

    pub(crate) fn writable(&self) -> bool {
        self.access() != Some(Access::ReadOnly)
    }
}
