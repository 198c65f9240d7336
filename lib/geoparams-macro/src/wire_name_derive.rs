//! `WireName` derive macro implementation.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse2};

/// Enum-level options parsed from `#[wire(...)]` attributes.
#[derive(Debug, Clone, Copy, Default)]
struct WireEnumOptions {
    /// Fallback rule for variants without an explicit `rename`.
    rename_all: RenameRule,
}

/// Case conversion rules for `rename_all`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
enum RenameRule {
    /// `lowercase`
    LowerCase,
    /// `UPPERCASE`
    UpperCase,
    /// `snake_case`
    #[default]
    SnakeCase,
    /// `SCREAMING_SNAKE_CASE`
    ScreamingSnakeCase,
    /// `kebab-case`
    KebabCase,
}

impl RenameRule {
    /// Parse a rename rule from a string.
    fn parse(s: &str) -> Option<Self> {
        match s {
            "lowercase" => Some(Self::LowerCase),
            "UPPERCASE" => Some(Self::UpperCase),
            "snake_case" => Some(Self::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Some(Self::ScreamingSnakeCase),
            "kebab-case" => Some(Self::KebabCase),
            _ => None,
        }
    }

    /// Apply the rename rule to a variant name.
    fn apply(self, name: &str) -> String {
        match self {
            Self::LowerCase => name.to_lowercase(),
            Self::UpperCase => name.to_uppercase(),
            Self::SnakeCase => to_snake_case(name),
            Self::ScreamingSnakeCase => to_snake_case(name).to_uppercase(),
            Self::KebabCase => to_snake_case(name).replace('_', "-"),
        }
    }
}

/// Convert a `PascalCase` identifier to `snake_case`.
///
/// An underscore already present in the identifier is kept as the boundary.
fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Variant options parsed from `#[wire(...)]` attributes.
#[derive(Debug, Clone, Default)]
struct WireVariantOptions {
    /// Explicit wire token.
    rename: Option<String>,
}

/// Expand the `#[derive(WireName)]` macro.
pub fn expand_wire_name_derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "WireName derive does not support generic enums",
        ));
    }

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input,
            "WireName derive only supports enums",
        ));
    };

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input,
            "WireName derive needs at least one variant",
        ));
    }

    let enum_options = parse_wire_enum_options(&input.attrs)?;

    let mut idents = Vec::new();
    let mut tokens = Vec::new();
    let mut seen = HashSet::new();

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "WireName derive only supports fieldless variants",
            ));
        }

        let options = parse_wire_variant_options(&variant.attrs)?;

        // Explicit rename > rename_all rule applied to the variant name
        let token = options
            .rename
            .unwrap_or_else(|| enum_options.rename_all.apply(&variant.ident.to_string()));

        if !seen.insert(token.clone()) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("duplicate wire name \"{token}\""),
            ));
        }

        idents.push(&variant.ident);
        tokens.push(token);
    }

    Ok(quote! {
        impl ::geoparams::WireName for #name {
            const WIRE_NAMES: &'static [&'static str] = &[#(#tokens),*];

            fn wire_name(&self) -> &'static str {
                match self {
                    #(Self::#idents => #tokens,)*
                }
            }

            fn from_wire_name(token: &str) -> ::std::option::Option<Self> {
                match token {
                    #(#tokens => ::std::option::Option::Some(Self::#idents),)*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(<Self as ::geoparams::WireName>::wire_name(self))
            }
        }

        impl ::geoparams::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::geoparams::serde::Serializer,
            {
                serializer.serialize_str(<Self as ::geoparams::WireName>::wire_name(self))
            }
        }

        impl<'de> ::geoparams::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::geoparams::serde::Deserializer<'de>,
            {
                let token = <::std::string::String as ::geoparams::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                <Self as ::geoparams::WireName>::from_wire_name(&token).ok_or_else(|| {
                    <D::Error as ::geoparams::serde::de::Error>::unknown_variant(
                        &token,
                        <Self as ::geoparams::WireName>::WIRE_NAMES,
                    )
                })
            }
        }
    })
}

/// Parse enum-level options from `#[wire(...)]` attributes.
fn parse_wire_enum_options(attrs: &[syn::Attribute]) -> syn::Result<WireEnumOptions> {
    let mut options = WireEnumOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("wire") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let value: syn::LitStr = meta.value()?.parse()?;
                let rule = RenameRule::parse(&value.value()).ok_or_else(|| {
                    syn::Error::new_spanned(
                        &value,
                        format!(
                            "unknown rename_all value: \"{}\". Expected one of: \
                             lowercase, UPPERCASE, snake_case, SCREAMING_SNAKE_CASE, kebab-case",
                            value.value()
                        ),
                    )
                })?;
                options.rename_all = rule;
                Ok(())
            } else {
                Err(meta.error("unsupported wire attribute, expected `rename_all`"))
            }
        })?;
    }

    Ok(options)
}

/// Parse variant options from `#[wire(...)]` attributes.
fn parse_wire_variant_options(attrs: &[syn::Attribute]) -> syn::Result<WireVariantOptions> {
    let mut options = WireVariantOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("wire") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: syn::LitStr = meta.value()?.parse()?;
                options.rename = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported wire attribute, expected `rename`"))
            }
        })?;
    }

    Ok(options)
}
