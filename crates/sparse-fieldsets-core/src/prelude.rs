// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sparse_fieldsets_core::prelude::*;
//! ```

pub use crate::{
    Context, Error, Expanded, Expansion, FieldRequest, FieldsetConfig, IntoExpanded,
    MethodExpansion, Record, RenderOptions, Renderer, Result, async_trait, downcast_context,
    project::ProjectionOptions, render_fieldset_model
};
