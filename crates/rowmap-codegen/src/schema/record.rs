use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// All fields, including skipped ones
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Record> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        for node in node.named.iter() {
            fields.extend(errs.check(Field::from_ast(node)));
        }

        // Column names must be unique within a record
        for (i, field) in fields.iter().enumerate() {
            let Some(column) = field.column_name() else {
                continue;
            };

            let duplicate = fields[..i]
                .iter()
                .any(|prev| prev.column_name().as_deref() == Some(column.as_str()));

            if duplicate {
                errs.push(syn::Error::new_spanned(
                    &field.ident,
                    format!("duplicate column `{column}`"),
                ));
            }
        }

        errs.finish()?;

        Ok(Record {
            ident: ast.ident.clone(),
            fields,
        })
    }

    /// Fields that are record properties.
    pub(crate) fn properties(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| !field.is_skipped())
    }
}
