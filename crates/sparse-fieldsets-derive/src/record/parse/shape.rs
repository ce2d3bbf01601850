// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field shape inferred from the Rust type of a nested field.
//!
//! | Type | Shape |
//! |------|-------|
//! | `Vec<T>`, `VecDeque<T>`, `[T; N]`, `[T]` | `List(shape of T)` |
//! | `HashMap<K, T>`, `BTreeMap<K, T>`, `IndexMap<K, T>` | `Map(shape of T)` |
//! | `Option<T>`, `Box<T>`, `Arc<T>`, `&T` | shape of `T` |
//! | anything else | `Record` |

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, PathArguments, Type};

/// Compile-time mirror of the runtime `FieldShape`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeDef {
    /// Serialized whole.
    Scalar,
    /// A record.
    Record,
    /// Sequence of the inner shape.
    List(Box<ShapeDef>),
    /// String-keyed mapping to the inner shape.
    Map(Box<ShapeDef>)
}

impl ShapeDef {
    /// Infer the shape of a field holding records.
    pub fn from_type(ty: &Type) -> Self {
        match ty {
            Type::Array(array) => Self::List(Box::new(Self::from_type(&array.elem))),
            Type::Slice(slice) => Self::List(Box::new(Self::from_type(&slice.elem))),
            Type::Reference(reference) => Self::from_type(&reference.elem),
            Type::Paren(paren) => Self::from_type(&paren.elem),
            Type::Group(group) => Self::from_type(&group.elem),
            Type::Path(path) => {
                let Some(segment) = path.path.segments.last() else {
                    return Self::Record;
                };
                let args = type_args(&segment.arguments);
                match (segment.ident.to_string().as_str(), args.as_slice()) {
                    ("Option" | "Box" | "Arc", [inner]) => Self::from_type(inner),
                    ("Vec" | "VecDeque", [inner, ..]) => Self::List(Box::new(Self::from_type(inner))),
                    ("HashMap" | "BTreeMap" | "IndexMap", [_, value, ..]) => {
                        Self::Map(Box::new(Self::from_type(value)))
                    }
                    _ => Self::Record
                }
            }
            _ => Self::Record
        }
    }

    /// Expression building the runtime `FieldShape`.
    pub fn to_tokens(&self) -> TokenStream {
        match self {
            Self::Scalar => quote! { ::sparse_fieldsets::FieldShape::Scalar },
            Self::Record => quote! { ::sparse_fieldsets::FieldShape::Record },
            Self::List(inner) => {
                let inner = inner.to_tokens();
                quote! { ::sparse_fieldsets::FieldShape::list(#inner) }
            }
            Self::Map(inner) => {
                let inner = inner.to_tokens();
                quote! { ::sparse_fieldsets::FieldShape::map(#inner) }
            }
        }
    }
}

fn type_args(arguments: &PathArguments) -> Vec<&Type> {
    match arguments {
        PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None
            })
            .collect(),
        _ => Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn plain_type_is_record() {
        let ty: Type = parse_quote!(Customer);
        assert_eq!(ShapeDef::from_type(&ty), ShapeDef::Record);
    }

    #[test]
    fn wrappers_are_transparent() {
        let ty: Type = parse_quote!(Option<Box<Customer>>);
        assert_eq!(ShapeDef::from_type(&ty), ShapeDef::Record);
    }

    #[test]
    fn sequences_become_lists() {
        let ty: Type = parse_quote!(Vec<Vec<Line>>);
        assert_eq!(
            ShapeDef::from_type(&ty),
            ShapeDef::List(Box::new(ShapeDef::List(Box::new(ShapeDef::Record))))
        );
        let ty: Type = parse_quote!([Line; 3]);
        assert_eq!(ShapeDef::from_type(&ty), ShapeDef::List(Box::new(ShapeDef::Record)));
    }

    #[test]
    fn maps_use_the_value_type() {
        let ty: Type = parse_quote!(std::collections::HashMap<String, Vec<Line>>);
        assert_eq!(
            ShapeDef::from_type(&ty),
            ShapeDef::Map(Box::new(ShapeDef::List(Box::new(ShapeDef::Record))))
        );
    }

    #[test]
    fn tokens_name_the_runtime_shape() {
        let tokens = ShapeDef::List(Box::new(ShapeDef::Record)).to_tokens().to_string();
        assert!(tokens.contains("FieldShape :: list"));
        assert!(tokens.contains("FieldShape :: Record"));
    }
}
