// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and the resolution engine for sparse-fieldsets.
//!
//! Given a client request naming fields, fieldsets and expansions, this
//! crate decides which parts of a record graph to serialize and which
//! deferred computations to run, then splices everything into one JSON
//! tree.
//!
//! # Overview
//!
//! - [`Record`]: Structured record capability, usually derived
//! - [`FieldsetConfig`]: Named field groups and expansions of a type
//! - [`Expansion`] / [`MethodExpansion`]: Deferred, batchable computations
//! - [`resolve()`]: Request to inclusion [`Mask`] plus expansion instructions
//! - [`render_fieldset_model`] / [`Renderer`]: Breadth-first expansion
//!   engine
//! - [`path_put`]: Path-addressed deep merge on JSON trees
//! - [`prelude`]: Convenient re-exports
//!
//! # Usage
//!
//! Most users should use `sparse-fieldsets` directly, which re-exports this
//! crate together with `#[derive(Record)]`:
//!
//! ```rust,ignore
//! use sparse_fieldsets::prelude::*;
//!
//! let body = render_fieldset_model(&response, "id,items.detail", &RenderOptions::new(), Some(&loaders)).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod data;
pub mod error;
pub mod expansion;
pub mod mask;
pub mod path;
pub mod prelude;
pub mod project;
pub mod record;
pub mod render;
pub mod request;
pub mod resolve;

/// Re-export async_trait for custom expansions.
pub use async_trait::async_trait;
pub use config::{DEFAULT_FIELDSET, FieldsetConfig, FieldsetEntry, WILDCARD};
pub use data::{Data, View};
pub use error::{BoxError, Error, PathError, Result};
pub use expansion::{
    Context, ExpandFuture, Expanded, Expansion, IntoExpanded, MethodExpansion, downcast_context
};
pub use mask::Mask;
pub use path::{Path, Segment, path_put};
pub use project::{ProjectionOptions, project_data, project_record};
pub use record::{FieldShape, Record};
pub use render::{DEFAULT_MAX_DEPTH, RenderOptions, Renderer, render_fieldset_model};
pub use request::FieldRequest;
pub use resolve::{ExpansionInstruction, ExpansionSet, Resolution, resolve, resolve_record};
#[doc(hidden)]
pub use serde_json;
