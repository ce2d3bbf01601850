// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # sparse-fieldsets
//!
//! One crate, all features. Re-exports:
//! - [`Record`](macro@Record) derive macro from `sparse-fieldsets-derive`
//! - All types from `sparse-fieldsets-core` ([`FieldRequest`],
//!   [`Renderer`], [`path_put`], ...)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sparse_fieldsets::{Context, Error, Record, RenderOptions, render_fieldset_model};
//!
//! #[derive(Record, Serialize)]
//! #[fieldsets(default = ["id", "status"])]
//! #[expansion(name = "customer", method = "load_customer")]
//! pub struct Order {
//!     pub id: i64,
//!     pub status: String,
//!     pub customer_id: i64,
//! }
//!
//! impl Order {
//!     async fn load_customer(&self, ctx: &Context) -> Result<Option<Customer>, Error> {
//!         let db = sparse_fieldsets::downcast_context::<Db>(ctx)?;
//!         Ok(db.customers.load(self.customer_id).await)
//!     }
//! }
//!
//! // {"id": 1, "status": "open", "customer": {"id": 7, "name": "Ada"}}
//! let body = render_fieldset_model(&order, "customer", &RenderOptions::default(), Some(&db)).await?;
//! ```

pub use sparse_fieldsets_core::*;
pub use sparse_fieldsets_derive::Record;
