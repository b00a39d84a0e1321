//! Alternative-set model
//!
//! Turns a `DeriveInput` into the list of (variant, payload type) pairs the
//! derive expands over, rejecting shapes that cannot form a closed set.

use quote::ToTokens;
use syn::{Data, DeriveInput, Fields, Ident, Type, Visibility};

/// One alternative: the enum variant and the type it carries.
pub struct AlternativeModel {
    pub ident: Ident,
    pub ty: Type,
}

/// A validated enum ready for expansion.
pub struct VariantModel {
    pub ident: Ident,
    pub vis: Visibility,
    pub alternatives: Vec<AlternativeModel>,
    pub no_default: bool,
}

impl VariantModel {
    pub fn from_derive(input: &DeriveInput) -> syn::Result<Self> {
        let data = match &input.data {
            Data::Enum(data) => data,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "#[derive(Variant)] only supports enums",
                ));
            }
        };

        if !input.generics.params.is_empty() {
            // Alternative<T> impls for two type parameters would overlap.
            return Err(syn::Error::new_spanned(
                &input.generics,
                "#[derive(Variant)] does not support generic enums",
            ));
        }

        if data.variants.is_empty() {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "a variant needs at least one alternative",
            ));
        }

        let no_default = parse_attrs(input)?;

        let mut errors: Option<syn::Error> = None;
        let mut push_error = |err: syn::Error| {
            if let Some(existing) = errors.as_mut() {
                existing.combine(err);
            } else {
                errors = Some(err);
            }
        };

        let mut alternatives = Vec::with_capacity(data.variants.len());
        for variant in &data.variants {
            match &variant.fields {
                Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                    alternatives.push(AlternativeModel {
                        ident: variant.ident.clone(),
                        ty: fields.unnamed[0].ty.clone(),
                    });
                }
                _ => push_error(syn::Error::new_spanned(
                    variant,
                    "each variant must carry exactly one unnamed field; \
                     use `Monostate` for an empty alternative",
                )),
            }
        }

        let mut seen: Vec<String> = Vec::new();
        for alt in &alternatives {
            let key = alt.ty.to_token_stream().to_string();
            if seen.contains(&key) {
                push_error(syn::Error::new_spanned(
                    &alt.ty,
                    format!("alternative type `{}` appears more than once", key),
                ));
            } else {
                seen.push(key);
            }
        }

        match errors {
            Some(err) => Err(err),
            None => Ok(VariantModel {
                ident: input.ident.clone(),
                vis: input.vis.clone(),
                alternatives,
                no_default,
            }),
        }
    }
}

/// Parse `#[variant(...)]`. Returns `no_default`.
fn parse_attrs(input: &DeriveInput) -> syn::Result<bool> {
    let mut no_default = false;
    for attr in &input.attrs {
        if !attr.path().is_ident("variant") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("no_default") {
                no_default = true;
                Ok(())
            } else {
                Err(meta.error("unsupported variant attribute, expected `no_default`"))
            }
        })?;
    }
    Ok(no_default)
}
