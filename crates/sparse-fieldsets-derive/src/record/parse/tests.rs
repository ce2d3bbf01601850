// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tests for record parsing.
//!
//! Tests use `syn::parse_quote!` to build struct definitions with
//! attributes, then check the parsed [`RecordDef`].

use syn::DeriveInput;

use super::{ConfigEntry, RecordDef, ShapeDef};

#[test]
fn record_without_config() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Customer {
            pub id: i64,
            pub name: String,
        }
    };
    let record = RecordDef::from_derive_input(&input).unwrap();
    assert_eq!(record.name, "Customer");
    assert_eq!(record.fields.len(), 2);
    assert!(record.config.is_none());
    assert!(record.is_set.is_none());
}

#[test]
fn empty_fieldsets_attribute_configures() {
    let input: DeriveInput = syn::parse_quote! {
        #[fieldsets()]
        pub struct Customer {
            pub id: i64,
        }
    };
    let record = RecordDef::from_derive_input(&input).unwrap();
    assert!(record.config.as_ref().is_some_and(Vec::is_empty));
}

#[test]
fn config_entries_keep_declaration_order() {
    let input: DeriveInput = syn::parse_quote! {
        #[fieldsets(default = ["id"])]
        #[expansion(name = "customer", method = "load_customer")]
        #[fieldsets(detail = ["id", "customer"])]
        pub struct Order {
            pub id: i64,
        }
    };
    let record = RecordDef::from_derive_input(&input).unwrap();
    let entries = record.config.as_ref().unwrap();
    assert_eq!(entries.len(), 3);
    assert!(matches!(&entries[0], ConfigEntry::Fieldset(f) if f.name == "default"));
    assert!(matches!(&entries[1], ConfigEntry::Expansion(e) if e.name == "customer"));
    assert!(matches!(&entries[2], ConfigEntry::Fieldset(f) if f.name == "detail"));
    assert_eq!(record.expansions().count(), 1);
}

#[test]
fn record_attributes() {
    let input: DeriveInput = syn::parse_quote! {
        #[record(name = "SalesOrder", rename_all = "camelCase", is_set = "was_set")]
        pub struct Order {
            pub order_id: i64,
            #[field(rename = "total")]
            pub grand_total: i64,
        }
    };
    let record = RecordDef::from_derive_input(&input).unwrap();
    assert_eq!(record.name, "SalesOrder");
    assert_eq!(record.fields[0].name, "orderId");
    assert_eq!(record.fields[1].name, "total");
    assert_eq!(record.is_set.as_ref().unwrap(), "was_set");
}

#[test]
fn field_options() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Order {
            pub id: i64,
            #[field(nested)]
            pub lines: Vec<Line>,
            #[field(skip)]
            pub cache: Option<String>,
            #[field(default)]
            pub note: String,
        }
    };
    let record = RecordDef::from_derive_input(&input).unwrap();
    let names: Vec<_> = record.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["id", "lines", "note"]);
    assert_eq!(record.fields[0].shape, ShapeDef::Scalar);
    assert_eq!(record.fields[1].shape, ShapeDef::List(Box::new(ShapeDef::Record)));
    assert!(record.has_defaulted_fields());
    assert_eq!(record.nested_fields().count(), 1);
    assert_eq!(record.scalar_fields().count(), 2);
}

#[test]
fn raw_identifiers_lose_prefix() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Event {
            pub r#type: String,
        }
    };
    let record = RecordDef::from_derive_input(&input).unwrap();
    assert_eq!(record.fields[0].name, "type");
}

#[test]
fn rejects_unknown_field_option() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Order {
            #[field(lazy)]
            pub id: i64,
        }
    };
    assert!(RecordDef::from_derive_input(&input).is_err());
}

#[test]
fn rejects_duplicate_external_names() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Order {
            pub id: i64,
            #[field(rename = "id")]
            pub legacy_id: i64,
        }
    };
    assert!(RecordDef::from_derive_input(&input).is_err());
}

#[test]
fn rejects_tuple_struct() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Order(i64);
    };
    assert!(RecordDef::from_derive_input(&input).is_err());
}

#[test]
fn rejects_enum() {
    let input: DeriveInput = syn::parse_quote! {
        pub enum Order { A, B }
    };
    assert!(RecordDef::from_derive_input(&input).is_err());
}

#[test]
fn rejects_unknown_rename_rule() {
    let input: DeriveInput = syn::parse_quote! {
        #[record(rename_all = "UPPER")]
        pub struct Order {
            pub id: i64,
        }
    };
    assert!(RecordDef::from_derive_input(&input).is_err());
}
