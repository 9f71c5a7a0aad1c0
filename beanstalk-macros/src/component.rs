mod attr;

pub(crate) use attr::ComponentArgs;

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{spanned::Spanned as _, Error, FnArg, Ident, ImplItem, ImplItemFn, Item, ItemImpl, ReturnType, Type};

pub(crate) fn expand(args: ComponentArgs, mut item: Item) -> syn::Result<TokenStream> {
    match item {
        Item::Impl(ItemImpl { trait_: Some(_), .. }) => Err(Error::new_spanned(item, "`#[component]` cannot be used on trait impls")),
        Item::Impl(ItemImpl {
            trait_: None,
            ref generics,
            ref mut items,
            ref self_ty,
            ..
        }) => {
            if !generics.params.is_empty() {
                return Err(Error::new_spanned(generics, "generic components are not supported"));
            }

            let self_ty = self_ty.clone();
            let ty_ident = self_type_ident(&self_ty)?;

            let mut construct_methods = items
                .iter_mut()
                .filter_map(|item| {
                    if let ImplItem::Fn(impl_item_fn) = item {
                        Some(impl_item_fn)
                    } else {
                        None
                    }
                })
                .filter(|impl_item_fn| has_construct_attr(impl_item_fn))
                .collect::<Vec<_>>();

            if construct_methods.len() > 1 {
                return Err(Error::new_spanned(
                    &construct_methods[1],
                    "`#[construct]` can only be used once per component",
                ));
            }

            let constructor = match construct_methods.first_mut() {
                Some(impl_item_fn) => {
                    let parts = ConstructorParts::from_method(impl_item_fn)?;
                    // Remove `construct` attribute from final code
                    impl_item_fn.attrs.retain(|attr| !attr.path().is_ident("construct"));
                    Some(parts)
                }
                None => None,
            };

            let tokens = expand_component(&self_ty, &ty_ident, &args, constructor.as_ref());

            Ok(quote! {
                #item
                #tokens
            })
        }
        _ => Err(Error::new_spanned(item, "`#[component]` can only be used on `impl` blocks")),
    }
}

struct ConstructorParts {
    fn_name: Ident,
    param_types: Vec<Type>,
    impl_span: Span,
}

impl ConstructorParts {
    fn from_method(impl_item_fn: &ImplItemFn) -> syn::Result<Self> {
        if matches!(impl_item_fn.sig.output, ReturnType::Default) {
            return Err(Error::new_spanned(
                &impl_item_fn.sig.output,
                "constructor must have an explicit return type",
            ));
        }

        let param_types = impl_item_fn
            .sig
            .inputs
            .iter()
            .map(|input| match input {
                FnArg::Typed(pat_type) => Ok((*pat_type.ty).clone()),
                FnArg::Receiver(_) => Err(Error::new_spanned(input, "constructors with `self` are not supported")),
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self {
            fn_name: impl_item_fn.sig.ident.clone(),
            param_types,
            impl_span: impl_item_fn.span(),
        })
    }
}

fn expand_component(self_ty: &Type, ty_ident: &Ident, args: &ComponentArgs, constructor: Option<&ConstructorParts>) -> TokenStream {
    let lower = ty_ident.to_string().to_lowercase();
    let upper = ty_ident.to_string().to_uppercase();

    let descriptor_name = format_ident!("__beanstalk_{}_descriptor", lower);
    let construct_name = format_ident!("__beanstalk_{}_construct", lower);
    let entry_name = format_ident!("__BEANSTALK_{}_ENTRY", upper);

    let bind_names = (0..args.provides.len())
        .map(|index| format_ident!("__beanstalk_{}_bind_{}", lower, index))
        .collect::<Vec<_>>();

    let bind_fns = args.provides.iter().zip(&bind_names).map(|(capability, bind_name)| {
        quote_spanned! { capability.span() =>
            #[doc(hidden)]
            fn #bind_name(store: &mut ::beanstalk::BeanStore) {
                if let ::core::option::Option::Some(bean) = store.get::<#self_ty>() {
                    store.insert::<#capability>(bean);
                }
            }
        }
    });

    let capabilities = if args.provides.is_empty() {
        quote! { ::beanstalk::macros_utils::aliases::Vec::new() }
    } else {
        let bindings = args.provides.iter().zip(&bind_names).map(|(capability, bind_name)| {
            quote_spanned! { capability.span() =>
                ::beanstalk::CapabilityBinding {
                    type_info: ::beanstalk::TypeInfo::of::<#capability>(),
                    bind: #bind_name,
                }
            }
        });
        quote! { ::beanstalk::macros_utils::aliases::Vec::from([ #( #bindings, )* ]) }
    };

    let (dependencies, constructor_expr, construct_fn) = match constructor {
        Some(parts) => {
            let dependencies = if parts.param_types.is_empty() {
                quote! { ::beanstalk::macros_utils::aliases::Vec::new() }
            } else {
                let entries = parts.param_types.iter().map(|ty| {
                    quote_spanned! { ty.span() =>
                        <#ty as ::beanstalk::DependencyResolver>::dependency()
                    }
                });
                quote! { ::beanstalk::macros_utils::aliases::Vec::from([ #( #entries, )* ]) }
            };

            let fn_name = &parts.fn_name;
            let arg_names = (0..parts.param_types.len())
                .map(|index| Ident::new(&format!("arg{index}"), Span::call_site()))
                .collect::<Vec<_>>();
            let resolve_args = parts.param_types.iter().zip(&arg_names).map(|(ty, arg_name)| {
                quote_spanned! { ty.span() =>
                    let #arg_name = <#ty as ::beanstalk::DependencyResolver>::resolve(resolver)?;
                }
            });

            let construct_fn = quote_spanned! { parts.impl_span =>
                #[doc(hidden)]
                fn #construct_name(
                    resolver: &mut ::beanstalk::BeanResolver<'_>,
                ) -> ::core::result::Result<(), ::beanstalk::ResolveErrorKind> {
                    #( #resolve_args )*
                    let component = #self_ty::#fn_name(#( #arg_names ),*)
                        .map_err(|err| ::beanstalk::ResolveErrorKind::Instantiate(::core::convert::Into::into(err)))?;
                    resolver.insert(::beanstalk::macros_utils::aliases::Arc::new(component));
                    ::core::result::Result::Ok(())
                }
            };

            (
                dependencies,
                quote! { ::core::option::Option::Some(#construct_name) },
                construct_fn,
            )
        }
        None => (
            quote! { ::beanstalk::macros_utils::aliases::Vec::new() },
            quote! { ::core::option::Option::None },
            quote! {},
        ),
    };

    quote! {
        #( #bind_fns )*

        #construct_fn

        #[doc(hidden)]
        fn #descriptor_name() -> ::beanstalk::ComponentDescriptor {
            ::beanstalk::ComponentDescriptor {
                type_info: ::beanstalk::TypeInfo::of::<#self_ty>(),
                capabilities: #capabilities,
                dependencies: #dependencies,
                constructor: #constructor_expr,
            }
        }

        #[doc(hidden)]
        #[::beanstalk::entries::distributed_slice(::beanstalk::entries::__COMPONENT_ENTRIES)]
        #[linkme(crate = ::beanstalk::entries::linkme)]
        static #entry_name: ::beanstalk::ComponentEntry = ::beanstalk::ComponentEntry {
            module_path: ::core::module_path!(),
            descriptor: #descriptor_name,
        };
    }
}

fn has_construct_attr(impl_item_fn: &ImplItemFn) -> bool {
    impl_item_fn.attrs.iter().any(|attr| attr.path().is_ident("construct"))
}

fn self_type_ident(self_ty: &Type) -> syn::Result<Ident> {
    let Type::Path(type_path) = self_ty else {
        return Err(Error::new_spanned(self_ty, "component type must be a plain path"));
    };
    let Some(segment) = type_path.path.segments.last() else {
        return Err(Error::new_spanned(self_ty, "component type must be a plain path"));
    };
    if !segment.arguments.is_none() {
        return Err(Error::new_spanned(self_ty, "generic components are not supported"));
    }

    Ok(segment.ident.clone())
}
