// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Nested records behind every supported container.

use std::{collections::HashMap, sync::Arc};

use sparse_fieldsets::{FieldShape, Record};

#[derive(Record)]
#[fieldsets(default = ["street"])]
pub struct Address {
    pub street: String,
    pub city: String,
}

#[derive(Record)]
pub struct Customer {
    pub name: String,

    #[field(nested)]
    pub home: Address,

    #[field(nested)]
    pub billing: Option<Box<Address>>,

    #[field(nested)]
    pub shared: Arc<Address>,

    #[field(nested)]
    pub history: Vec<Address>,

    #[field(nested)]
    pub pinned: [Address; 2],

    #[field(nested)]
    pub by_label: HashMap<String, Vec<Address>>,
}

fn main() {
    let address = || Address {
        street: "Main".to_string(),
        city: "Springfield".to_string(),
    };
    let customer = Customer {
        name: "Ada".to_string(),
        home: address(),
        billing: None,
        shared: Arc::new(address()),
        history: vec![address()],
        pinned: [address(), address()],
        by_label: HashMap::new(),
    };

    assert_eq!(customer.field_shape("name"), Some(FieldShape::Scalar));
    assert_eq!(customer.field_shape("home"), Some(FieldShape::Record));
    assert_eq!(customer.field_shape("billing"), Some(FieldShape::Record));
    assert_eq!(customer.field_shape("shared"), Some(FieldShape::Record));
    assert_eq!(customer.field_shape("history"), Some(FieldShape::list(FieldShape::Record)));
    assert_eq!(customer.field_shape("pinned"), Some(FieldShape::list(FieldShape::Record)));
    assert_eq!(
        customer.field_shape("by_label"),
        Some(FieldShape::map(FieldShape::list(FieldShape::Record)))
    );
    assert!(customer.attr("home").is_some());
    assert!(customer.attr_value("home").is_none());
    assert!(customer.attr_value("name").is_some());
    assert!(customer.fieldset_config().is_none());
}
