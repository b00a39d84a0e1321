use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::DeriveInput;

use crate::common::{to_snake_case, VariantModel};

/// #[derive(Variant)] entry point. Validation errors become `compile_error!`s
/// spanned on the offending variant or type.
pub fn expand_derive_variant(input: DeriveInput) -> TokenStream2 {
    match VariantModel::from_derive(&input) {
        Ok(model) => expand_variant(&model),
        Err(err) => err.to_compile_error(),
    }
}

fn expand_variant(model: &VariantModel) -> TokenStream2 {
    let variant_impl = expand_variant_trait(model);
    let alternative_impls = expand_alternatives(model);
    let default_impl = expand_default(model);
    let visit_impls = expand_visit(model);
    let visit_with = expand_visit_with(model);

    quote! {
        #variant_impl
        #alternative_impls
        #default_impl
        #visit_impls
        #visit_with
    }
}

// =============================================================================
// Variant
// =============================================================================

fn expand_variant_trait(model: &VariantModel) -> TokenStream2 {
    let name = &model.ident;
    let name_str = name.to_string();
    let names = model.alternatives.iter().map(|alt| alt.ident.to_string());

    let index_arms = model.alternatives.iter().enumerate().map(|(index, alt)| {
        let ident = &alt.ident;
        quote! { Self::#ident(_) => #index, }
    });
    let type_name_arms = model.alternatives.iter().map(|alt| {
        let ident = &alt.ident;
        let ty = &alt.ty;
        quote! { Self::#ident(_) => ::core::any::type_name::<#ty>(), }
    });

    quote! {
        impl ::tola_variant::Variant for #name {
            const NAME: &'static str = #name_str;
            const ALTERNATIVES: &'static [&'static str] = &[#(#names),*];

            #[inline]
            fn index(&self) -> usize {
                match self {
                    #(#index_arms)*
                }
            }

            fn type_name(&self) -> &'static str {
                match self {
                    #(#type_name_arms)*
                }
            }
        }
    }
}

// =============================================================================
// Alternative<T> + From<T>
// =============================================================================

fn expand_alternatives(model: &VariantModel) -> TokenStream2 {
    let name = &model.ident;

    let impls = model.alternatives.iter().enumerate().map(|(index, alt)| {
        let ident = &alt.ident;
        let ty = &alt.ty;
        quote! {
            impl ::tola_variant::Alternative<#ty> for #name {
                const INDEX: usize = #index;

                #[inline]
                fn wrap(value: #ty) -> Self {
                    Self::#ident(value)
                }

                #[inline]
                #[allow(unreachable_patterns)]
                fn peek(&self) -> ::core::option::Option<&#ty> {
                    match self {
                        Self::#ident(value) => ::core::option::Option::Some(value),
                        _ => ::core::option::Option::None,
                    }
                }

                #[inline]
                #[allow(unreachable_patterns)]
                fn peek_mut(&mut self) -> ::core::option::Option<&mut #ty> {
                    match self {
                        Self::#ident(value) => ::core::option::Option::Some(value),
                        _ => ::core::option::Option::None,
                    }
                }

                #[inline]
                #[allow(unreachable_patterns)]
                fn unwrap_alternative(self) -> ::core::result::Result<#ty, Self> {
                    match self {
                        Self::#ident(value) => ::core::result::Result::Ok(value),
                        other => ::core::result::Result::Err(other),
                    }
                }
            }

            impl ::core::convert::From<#ty> for #name {
                #[inline]
                fn from(value: #ty) -> Self {
                    Self::#ident(value)
                }
            }
        }
    });

    quote! { #(#impls)* }
}

// =============================================================================
// Default: first alternative, default-valued
// =============================================================================

fn expand_default(model: &VariantModel) -> TokenStream2 {
    if model.no_default {
        return TokenStream2::new();
    }
    let name = &model.ident;
    let first = &model.alternatives[0].ident;

    quote! {
        impl ::core::default::Default for #name {
            fn default() -> Self {
                Self::#first(::core::default::Default::default())
            }
        }
    }
}

// =============================================================================
// Visit<V> / VisitMut<V>
// =============================================================================

/// The where-clause lists one `Visitor<T, Output = __O>` bound per
/// alternative, so a visitor missing a case never satisfies the impl.
fn expand_visit(model: &VariantModel) -> TokenStream2 {
    let name = &model.ident;

    let bounds = model.alternatives.iter().map(|alt| {
        let ty = &alt.ty;
        quote! { ::tola_variant::Visitor<#ty, Output = __O> }
    });
    let bounds_mut = model.alternatives.iter().map(|alt| {
        let ty = &alt.ty;
        quote! { ::tola_variant::VisitorMut<#ty, Output = __O> }
    });
    let arms = model.alternatives.iter().map(|alt| {
        let ident = &alt.ident;
        let ty = &alt.ty;
        quote! {
            Self::#ident(value) => <__V as ::tola_variant::Visitor<#ty>>::visit(visitor, value),
        }
    });
    let arms_mut = model.alternatives.iter().map(|alt| {
        let ident = &alt.ident;
        let ty = &alt.ty;
        quote! {
            Self::#ident(value) => <__V as ::tola_variant::VisitorMut<#ty>>::visit_mut(visitor, value),
        }
    });

    quote! {
        impl<__V: ?Sized, __O> ::tola_variant::Visit<__V> for #name
        where
            __V: #(#bounds)+*,
        {
            type Output = __O;

            #[inline]
            fn accept(&self, visitor: &mut __V) -> __O {
                match self {
                    #(#arms)*
                }
            }
        }

        impl<__V: ?Sized, __O> ::tola_variant::VisitMut<__V> for #name
        where
            __V: #(#bounds_mut)+*,
        {
            type Output = __O;

            #[inline]
            fn accept_mut(&mut self, visitor: &mut __V) -> __O {
                match self {
                    #(#arms_mut)*
                }
            }
        }
    }
}

// =============================================================================
// visit_with: one closure per alternative
// =============================================================================

fn expand_visit_with(model: &VariantModel) -> TokenStream2 {
    let name = &model.ident;
    let vis = &model.vis;

    let fn_params: Vec<_> = (0..model.alternatives.len())
        .map(|i| format_ident!("__F{}", i))
        .collect();
    let args: Vec<_> = model
        .alternatives
        .iter()
        .map(|alt| format_ident!("on_{}", to_snake_case(&alt.ident.to_string())))
        .collect();

    let params = fn_params.iter().zip(&args).map(|(param, arg)| quote! { #arg: #param });
    let bounds = fn_params.iter().zip(&model.alternatives).map(|(param, alt)| {
        let ty = &alt.ty;
        quote! { #param: ::core::ops::FnOnce(&#ty) -> __O }
    });
    let arms = model.alternatives.iter().zip(&args).map(|(alt, arg)| {
        let ident = &alt.ident;
        quote! { Self::#ident(value) => #arg(value), }
    });

    quote! {
        impl #name {
            /// Run the closure matching the active alternative.
            ///
            /// Closures are taken in declaration order, one per alternative.
            #[allow(clippy::too_many_arguments)]
            #vis fn visit_with<__O, #(#fn_params),*>(&self, #(#params),*) -> __O
            where
                #(#bounds),*
            {
                match self {
                    #(#arms)*
                }
            }
        }
    }
}
