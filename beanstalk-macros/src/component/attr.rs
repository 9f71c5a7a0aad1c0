use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

pub(crate) mod kw {
    syn::custom_keyword!(provides);
}

pub(crate) struct ComponentArgs {
    pub(crate) provides: Vec<Type>,
}

impl Parse for ComponentArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut provides = Vec::new();
        let mut seen = false;

        while !input.is_empty() {
            let lh = input.lookahead1();
            if lh.peek(kw::provides) {
                let keyword = input.parse::<kw::provides>()?;
                if seen {
                    return Err(syn::Error::new_spanned(keyword, "`provides` specified more than once"));
                }
                seen = true;

                let content;
                syn::parenthesized!(content in input);
                provides.extend(content.parse_terminated(Type::parse, Token![,])?);
            } else {
                return Err(lh.error());
            }

            let _ = input.parse::<Token![,]>();
        }

        Ok(Self { provides })
    }
}
