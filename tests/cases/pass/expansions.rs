// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Async and sync expansion methods.

use sparse_fieldsets::{
    Context, Error, Record, RenderOptions, downcast_context, render_fieldset_model,
};

pub struct Db {
    pub owner_name: String,
}

#[derive(Record)]
#[fieldsets()]
pub struct Owner {
    pub name: String,
}

#[derive(Record)]
#[fieldsets(default = ["id"])]
#[expansion(name = "owner", method = "load_owner", response = "Owner")]
#[expansion(name = "summary", sync)]
#[expansion(name = "meta", method = "load_meta", merge_upwards, sync)]
pub struct Ticket {
    pub id: i64,
    pub title: String,
}

impl Ticket {
    async fn load_owner(&self, context: &Context) -> Result<Option<Owner>, Error> {
        let db = downcast_context::<Db>(context)?;
        Ok(Some(Owner {
            name: db.owner_name.clone(),
        }))
    }

    fn summary(&self, _context: &Context) -> Result<String, Error> {
        Ok(format!("#{} {}", self.id, self.title))
    }

    fn load_meta(&self, _context: &Context) -> Result<serde_json::Value, Error> {
        Ok(serde_json::json!({"source": "tracker"}))
    }
}

fn main() {
    let ticket = Ticket {
        id: 4,
        title: "Broken".to_string(),
    };
    let config = ticket.fieldset_config().unwrap();
    assert!(config.expansion("owner").is_some());
    assert!(config.expansion("summary").is_some());
    assert!(config.expansion("title").is_none());

    let db = Db {
        owner_name: "Ada".to_string(),
    };
    let body = futures::executor::block_on(render_fieldset_model(
        &ticket,
        "owner.name,summary,meta",
        &RenderOptions::default(),
        Some(&db),
    ))
    .unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "id": 4,
            "owner": {"name": "Ada"},
            "summary": "#4 Broken",
            "source": "tracker"
        })
    );
}
