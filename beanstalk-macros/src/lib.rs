use proc_macro::TokenStream;

mod component;

/// Marks an inherent impl block as a managed component.
///
/// `#[component]` takes an optional `provides(..)` list naming the
/// capabilities the type implements; the constructor is the single method of
/// the block marked `#[construct]`.
#[proc_macro_attribute]
pub fn component(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = syn::parse_macro_input!(attr as component::ComponentArgs);
    let item = syn::parse_macro_input!(item as syn::Item);

    match component::expand(args, item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
