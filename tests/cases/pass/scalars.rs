// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Scalar fields of any `Serialize` type.

use chrono::{DateTime, TimeZone, Utc};
use sparse_fieldsets::{FieldShape, Record, RenderOptions, render_fieldset_model};
use uuid::Uuid;

#[derive(Record)]
#[fieldsets(default = ["id", "email"], audit = ["created_at", "tags"])]
pub struct User {
    pub id: Uuid,

    pub email: String,

    pub tags: Vec<String>,

    pub created_at: DateTime<Utc>,
}

fn main() {
    let user = User {
        id: Uuid::nil(),
        email: "john@example.com".to_string(),
        tags: vec!["admin".to_string()],
        created_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
    };

    assert_eq!(user.type_name(), "User");
    assert_eq!(user.declared_fields(), &["id", "email", "tags", "created_at"]);
    assert_eq!(user.field_shape("tags"), Some(FieldShape::Scalar));
    assert_eq!(user.field_shape("password"), None);
    assert!(user.fieldset_config().is_some());

    let body = futures::executor::block_on(render_fieldset_model(
        &user,
        "audit",
        &RenderOptions::default(),
        None,
    ))
    .unwrap();
    assert_eq!(body["id"], "00000000-0000-0000-0000-000000000000");
    assert_eq!(body["tags"], serde_json::json!(["admin"]));
    assert_eq!(body["created_at"], "2025-01-02T03:04:05Z");
}
