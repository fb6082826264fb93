#[derive(Debug, Default)]
pub(crate) struct Column {
    pub(crate) name: Option<syn::LitStr>,
    pub(crate) access: Option<Access>,
}

/// Restricts which accessors the mappers use for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    ReadOnly,
    WriteOnly,
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        match &attr.meta {
            // Bare `#[column]`
            syn::Meta::Path(_) => Ok(Column::default()),
            _ => attr.parse_args(),
        }
    }
}

mod kw {
    syn::custom_keyword!(read_only);
    syn::custom_keyword!(write_only);
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Column::default();

        // Allowed syntax:
        //
        // #[column("NAME")]
        // #[column(read_only)]
        // #[column("NAME", write_only)]
        // #[column(read_only, "NAME")]
        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                if result.name.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column name"));
                }
                result.name = Some(input.parse()?);
            } else if lookahead.peek(kw::read_only) || lookahead.peek(kw::write_only) {
                if result.access.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column access"));
                }
                result.access = Some(input.parse()?);
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        Ok(result)
    }
}

impl syn::parse::Parse for Access {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(kw::read_only) {
            let _kw: kw::read_only = input.parse()?;
            Ok(Access::ReadOnly)
        } else if lookahead.peek(kw::write_only) {
            let _kw: kw::write_only = input.parse()?;
            Ok(Access::WriteOnly)
        } else {
            Err(lookahead.error())
        }
    }
}
