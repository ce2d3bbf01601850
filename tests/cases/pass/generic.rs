// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generic records wrapping other records.

use sparse_fieldsets::{Record, RenderOptions, render_fieldset_model};

#[derive(Record)]
#[fieldsets(default = ["id"])]
pub struct Post {
    pub id: u64,
    pub body: String,
}

#[derive(Record)]
#[fieldsets(default = ["total"])]
pub struct Page<T: Record> {
    #[field(nested)]
    pub items: Vec<T>,

    pub total: u64,
}

fn main() {
    let page = Page {
        items: vec![Post {
            id: 1,
            body: "hi".to_string(),
        }],
        total: 1,
    };

    let body = futures::executor::block_on(render_fieldset_model(
        &page,
        ["items.body"],
        &RenderOptions::default(),
        None,
    ))
    .unwrap();
    assert_eq!(
        body,
        serde_json::json!({"items": [{"id": 1, "body": "hi"}], "total": 1})
    );
}
