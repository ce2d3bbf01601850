// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! External names, skipped fields and projection hooks.

use sparse_fieldsets::{ProjectionOptions, Record, RenderOptions, Renderer};

#[derive(Record)]
#[record(name = "account", rename_all = "kebab-case", is_set = "was_set")]
#[fieldsets(default = ["account-id", "display-name"])]
pub struct Account {
    pub account_id: u64,

    pub display_name: String,

    #[field(rename = "e_mail")]
    pub email: Option<String>,

    #[field(default)]
    pub login_count: u32,

    #[field(skip)]
    pub password_hash: String,

    pub r#type: String,
}

impl Account {
    fn was_set(&self, name: &str) -> bool {
        name != "e_mail" || self.email.is_some()
    }
}

fn main() {
    let account = Account {
        account_id: 1,
        display_name: "Ada".to_string(),
        email: None,
        login_count: 0,
        password_hash: "x".to_string(),
        r#type: "admin".to_string(),
    };

    assert_eq!(account.type_name(), "account");
    assert_eq!(
        account.declared_fields(),
        &["account-id", "display-name", "e_mail", "login-count", "type"]
    );
    assert!(!account.is_field_set("e_mail"));
    assert!(account.is_field_defaulted("login-count"));
    assert!(!account.password_hash.is_empty());

    let renderer = Renderer::new(RenderOptions::new().with_projection(
        ProjectionOptions::new()
            .with_omit_unset(true)
            .with_omit_defaulted(true),
    ));
    let body = futures::executor::block_on(
        renderer.render(&account, "e_mail,login-count,type"),
    )
    .unwrap();
    assert_eq!(
        body,
        serde_json::json!({"account-id": 1, "display-name": "Ada", "type": "admin"})
    );
}
