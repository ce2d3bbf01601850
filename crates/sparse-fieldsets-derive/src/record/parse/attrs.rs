// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `name` | No | struct ident | Type name in error messages |
//! | `rename_all` | No | none | Case of external field names |
//! | `is_set` | No | none | Method reporting explicitly set fields |

use darling::FromDeriveInput;
use syn::{Generics, Ident};

use super::RenameRule;

/// Attributes parsed from `#[record(...)]`.
///
/// # Example
///
/// ```rust,ignore
/// #[record(name = "Order", rename_all = "camelCase", is_set = "was_set")]
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(record), supports(struct_named))]
pub struct RecordAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Type name override.
    #[darling(default)]
    pub name: Option<String>,

    /// Case rule for external field names.
    #[darling(default)]
    pub rename_all: Option<RenameRule>,

    /// `fn(&self, &str) -> bool` reporting explicitly set fields.
    #[darling(default)]
    pub is_set: Option<Ident>
}
