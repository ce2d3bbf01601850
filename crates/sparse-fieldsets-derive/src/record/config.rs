// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Fieldset configuration generation.
//!
//! The configuration is built once, on first use, into a `LazyLock`
//! static local to `fieldset_config`:
//!
//! ```rust,ignore
//! fn fieldset_config(&self) -> Option<&FieldsetConfig> {
//!     static CONFIG: LazyLock<FieldsetConfig> = LazyLock::new(|| {
//!         FieldsetConfig::new()
//!             .with_fieldset("default", ["id"])
//!             .with_expansion("customer", MethodExpansion::new("load_customer"))
//!     });
//!     Some(&CONFIG)
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{ConfigEntry, ExpansionDef, RecordDef};

/// Generate `fieldset_config`, or nothing for unconfigured records.
pub fn generate(record: &RecordDef) -> TokenStream {
    let Some(entries) = &record.config else {
        return TokenStream::new();
    };

    let builders = entries.iter().map(|entry| match entry {
        ConfigEntry::Fieldset(fieldset) => {
            let name = &fieldset.name;
            let members = &fieldset.members;
            quote! {
                .with_fieldset(#name, {
                    let members: &[&str] = &[#(#members),*];
                    members.iter().copied()
                })
            }
        }
        ConfigEntry::Expansion(expansion) => {
            let name = &expansion.name;
            let expansion = method_expansion(expansion);
            quote! { .with_expansion(#name, #expansion) }
        }
    });

    quote! {
        fn fieldset_config(&self) -> ::core::option::Option<&::sparse_fieldsets::FieldsetConfig> {
            static CONFIG: ::std::sync::LazyLock<::sparse_fieldsets::FieldsetConfig> =
                ::std::sync::LazyLock::new(|| {
                    ::sparse_fieldsets::FieldsetConfig::new()
                        #(#builders)*
                });
            ::core::option::Option::Some(&CONFIG)
        }
    }
}

fn method_expansion(expansion: &ExpansionDef) -> TokenStream {
    let method = expansion.method_name();
    let merge_upwards = expansion.merge_upwards;
    let response = expansion
        .response
        .as_ref()
        .map(|shape| quote! { .with_response_shape(#shape) });

    quote! {
        ::sparse_fieldsets::MethodExpansion::new(#method)
            .with_merge_upwards(#merge_upwards)
            #response
    }
}

#[cfg(test)]
mod tests {
    use syn::DeriveInput;

    use super::*;

    fn parse(input: DeriveInput) -> RecordDef {
        RecordDef::from_derive_input(&input).unwrap()
    }

    #[test]
    fn unconfigured_record_generates_nothing() {
        let record = parse(syn::parse_quote! {
            pub struct Customer {
                pub id: i64,
            }
        });
        assert!(generate(&record).is_empty());
    }

    #[test]
    fn empty_config_still_generates() {
        let record = parse(syn::parse_quote! {
            #[fieldsets()]
            pub struct Customer {
                pub id: i64,
            }
        });
        let tokens = generate(&record).to_string();
        assert!(tokens.contains("FieldsetConfig :: new ()"));
        assert!(!tokens.contains("with_fieldset"));
    }

    #[test]
    fn builds_entries_in_order() {
        let record = parse(syn::parse_quote! {
            #[fieldsets(default = ["id"])]
            #[expansion(name = "customer", method = "load_customer", merge_upwards, response = "Customer")]
            pub struct Order {
                pub id: i64,
            }
        });
        let tokens = generate(&record).to_string();
        let fieldset = tokens.find("with_fieldset (\"default\"").unwrap();
        let expansion = tokens.find("with_expansion (\"customer\"").unwrap();
        assert!(fieldset < expansion);
        assert!(tokens.contains("MethodExpansion :: new (\"load_customer\")"));
        assert!(tokens.contains("with_merge_upwards (true)"));
        assert!(tokens.contains("with_response_shape (\"Customer\")"));
    }
}
