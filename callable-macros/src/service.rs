//! The `#[service]` attribute macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    FnArg, GenericArgument, Ident, ItemFn, LitInt, LitStr, Pat, PathArguments, ReturnType, Token,
    Type,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments for the `#[service]` macro.
pub(crate) struct ServiceArgs {
    pub name: Option<String>,
    pub arity: Option<usize>,
    pub keywords: bool,
}

impl Parse for ServiceArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name = None;
        let mut arity = None;
        let mut keywords = false;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            match ident.to_string().as_str() {
                "name" => {
                    input.parse::<Token![=]>()?;
                    let lit: LitStr = input.parse()?;
                    name = Some(lit.value());
                }
                "arity" => {
                    input.parse::<Token![=]>()?;
                    let lit: LitInt = input.parse()?;
                    arity = Some(lit.base10_parse()?);
                }
                "keywords" => {
                    keywords = true;
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(ServiceArgs {
            name,
            arity,
            keywords,
        })
    }
}

/// A value parameter of the service function.
struct Field<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    optional: bool,
}

/// Implementation of the `#[service]` attribute macro.
pub fn service_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ServiceArgs);
    let input = parse_macro_input!(item as ItemFn);

    match expand(&args, &input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(args: &ServiceArgs, input: &ItemFn) -> syn::Result<TokenStream2> {
    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let fn_block = &input.block;

    if let Some(asyncness) = &input.sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "Service function must not be async",
        ));
    }
    if !input.sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.sig.generics,
            "Service function cannot be generic",
        ));
    }

    let mut fields: Vec<Field<'_>> = Vec::new();
    let mut callback = None;

    for arg in &input.sig.inputs {
        let pat_type = match arg {
            FnArg::Typed(pat_type) => pat_type,
            FnArg::Receiver(receiver) => {
                return Err(syn::Error::new_spanned(
                    receiver,
                    "Service function cannot take `self`",
                ));
            }
        };

        if is_callback(&pat_type.ty) {
            if callback.is_some() {
                return Err(syn::Error::new_spanned(
                    pat_type,
                    "Service function takes at most one callback",
                ));
            }
            callback = Some(&pat_type.pat);
            continue;
        }

        let ident = match &*pat_type.pat {
            Pat::Ident(pat_ident) => &pat_ident.ident,
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "Service parameters must be plain identifiers",
                ));
            }
        };

        let optional = option_inner(&pat_type.ty).is_some();
        if !args.keywords && !optional && fields.iter().any(|field| field.optional) {
            return Err(syn::Error::new_spanned(
                pat_type,
                "Required positional parameters must come before optional ones",
            ));
        }

        fields.push(Field {
            ident,
            ty: &pat_type.ty,
            optional,
        });
    }

    let struct_name = if let Some(ref custom_name) = args.name {
        Ident::new(custom_name, fn_name.span())
    } else {
        fn_name.clone()
    };
    let name_str = struct_name.to_string();

    let field_idents: Vec<_> = fields.iter().map(|f| f.ident).collect();
    let field_types: Vec<_> = fields.iter().map(|f| f.ty).collect();

    let (spec, bindings) = if args.keywords {
        keyword_binding(&fields)
    } else {
        positional_binding(&fields)
    };

    let arity_const = args.arity.map(|n| {
        quote! {
            const ARITY: ::callable::Arity = ::callable::Arity::optional(#n);
        }
    });

    let callback_binding = match callback {
        Some(pat) => quote! { let #pat = __callback; },
        None => quote! { let _ = __callback; },
    };

    let (output, body) = match &input.sig.output {
        ReturnType::Default => (
            quote! { () },
            quote! {
                (move || #fn_block)();
                ::core::result::Result::Ok(())
            },
        ),
        ReturnType::Type(_, ty) => match result_parts(ty) {
            Some((ok, Some(err))) if is_failure(err) => (quote! { #ok }, quote! { #fn_block }),
            Some((ok, _)) => (
                quote! { #ok },
                quote! {
                    let __result: #ty = (move || -> #ty #fn_block)();
                    __result.map_err(::callable::Failure::custom)
                },
            ),
            None => (
                quote! { #ty },
                quote! {
                    let __output: #ty = (move || -> #ty #fn_block)();
                    ::core::result::Result::Ok(__output)
                },
            ),
        },
    };

    Ok(quote! {
        #[allow(non_camel_case_types)]
        #[doc = concat!("Auto-generated Callable from `#[callable::service]` on `", stringify!(#fn_name), "`")]
        #fn_vis struct #struct_name {
            #(#field_idents: #field_types,)*
        }

        impl ::callable::Callable for #struct_name {
            type Output = #output;

            #arity_const

            fn name() -> &'static str {
                #name_str
            }

            #[allow(unused_variables)]
            fn construct(
                __params: ::callable::Params,
                _: ::core::option::Option<::callable::Callback<'_>>,
            ) -> ::core::result::Result<Self, ::callable::Failure> {
                const SPEC: ::callable::ParamSpec = #spec;
                let __bound = __params.bind(&SPEC)?;
                #(#bindings)*
                ::core::result::Result::Ok(Self { #(#field_idents,)* })
            }

            #[allow(unused_variables)]
            fn call(
                self,
                __callback: ::core::option::Option<::callable::Callback<'_>>,
            ) -> ::core::result::Result<Self::Output, ::callable::Failure> {
                let Self { #(#field_idents,)* } = self;
                #callback_binding
                #body
            }
        }
    })
}

fn positional_binding(fields: &[Field<'_>]) -> (TokenStream2, Vec<TokenStream2>) {
    let required = fields.iter().filter(|f| !f.optional).count();
    let optional = fields.len() - required;
    let spec = quote! { ::callable::ParamSpec::positional(#required, #optional) };

    let bindings = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let ident = field.ident;
            let ty = field.ty;
            if field.optional {
                quote! { let #ident: #ty = __bound.arg_opt(#index)?; }
            } else {
                quote! { let #ident: #ty = __bound.arg(#index)?; }
            }
        })
        .collect();

    (spec, bindings)
}

fn keyword_binding(fields: &[Field<'_>]) -> (TokenStream2, Vec<TokenStream2>) {
    let keywords = fields.iter().map(|field| {
        let name = field.ident.to_string();
        if field.optional {
            quote! { ::callable::Keyword::optional(#name) }
        } else {
            quote! { ::callable::Keyword::required(#name) }
        }
    });
    let spec = quote! { ::callable::ParamSpec::NONE.with_keywords(&[#(#keywords),*]) };

    let bindings = fields
        .iter()
        .map(|field| {
            let ident = field.ident;
            let ty = field.ty;
            let name = ident.to_string();
            if field.optional {
                quote! { let #ident: #ty = __bound.keyword_opt(#name)?; }
            } else {
                quote! { let #ident: #ty = __bound.keyword(#name)?; }
            }
        })
        .collect();

    (spec, bindings)
}

/// The generic type arguments of a type path whose last segment is `wrapper`.
fn generics<'a>(ty: &'a Type, wrapper: &str) -> Option<Vec<&'a Type>> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(generics) = &segment.arguments else {
        return None;
    };
    let types = generics
        .args
        .iter()
        .filter_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        })
        .collect();
    Some(types)
}

fn option_inner(ty: &Type) -> Option<&Type> {
    generics(ty, "Option")?.first().copied()
}

/// `Option<Callback<'_>>`.
fn is_callback(ty: &Type) -> bool {
    let Some(Type::Path(inner)) = option_inner(ty) else {
        return false;
    };
    inner
        .path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "Callback")
}

/// `T` and, when spelled out, `E` of a `Result<T, E>` return type.
///
/// Aliases such as `io::Result<T>` carry no error type.
fn result_parts(ty: &Type) -> Option<(&Type, Option<&Type>)> {
    let types = generics(ty, "Result")?;
    let ok = types.first().copied()?;
    Some((ok, types.get(1).copied()))
}

fn is_failure(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    type_path
        .path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "Failure")
}
