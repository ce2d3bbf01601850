// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Proc-macro implementation of `#[derive(Record)]`.
//!
//! Use the `sparse-fieldsets` crate, which re-exports the derive together
//! with the runtime it generates code against.

mod record;

use proc_macro::TokenStream;

/// Derive the structured record capability for a named-field struct.
///
/// # Generated Code
///
/// For a struct `Order` the macro implements:
///
/// - **`Data for Order`**: the struct is seen as a record
/// - **`Record for Order`**: field catalog, field shapes, value access,
///   fieldset configuration and expansion dispatch
/// - **`IntoExpanded for Order`**: expansion methods may return `Order`
///   directly
///
/// # Struct Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[record(name = "...")]` | Type name used in error messages |
/// | `#[record(rename_all = "camelCase")]` | Case of external field names: `camelCase`, `PascalCase`, `snake_case`, `kebab-case` |
/// | `#[record(is_set = "method")]` | `fn(&self, &str) -> bool` reporting explicitly set fields |
/// | `#[fieldsets(default = [...], name = [...])]` | Named member lists; repeatable |
/// | `#[expansion(name = "...", ...)]` | Method-based expansion; repeatable |
///
/// A struct without any `#[fieldsets]` or `#[expansion]` attribute has no
/// configuration and renders every field. An empty `#[fieldsets()]` makes
/// every field opt-in.
///
/// # Expansion Attributes
///
/// | Key | Default | Description |
/// |-----|---------|-------------|
/// | `name` | required | Fieldset name clients request |
/// | `method` | `name` | Method invoked on the record |
/// | `merge_upwards` | `false` | Splice the result into the parent |
/// | `response` | none | Declared result type, for documentation |
/// | `sync` | `false` | The method is not `async` |
///
/// Expansion methods take `&self` and `&Context` and return
/// `Result<T, E>` where `T: IntoExpanded` and `sparse_fieldsets::Error:
/// From<E>`.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[field(nested)]` | Field holds records, possibly inside `Option`, `Box`, `Arc`, `Vec`, `VecDeque` or string-keyed maps |
/// | `#[field(skip)]` | Not a declared field |
/// | `#[field(default)]` | Reported as defaulted when equal to `Default::default()` |
/// | `#[field(rename = "...")]` | External name |
///
/// # Example
///
/// ```rust,ignore
/// use sparse_fieldsets::{Context, Error, Record};
///
/// #[derive(Record, Serialize)]
/// #[fieldsets(default = ["id"], summary = ["id", "title"])]
/// #[expansion(name = "author", method = "load_author")]
/// pub struct Post {
///     pub id: i64,
///     pub title: String,
///     #[field(nested)]
///     pub comments: Vec<Comment>,
/// }
///
/// impl Post {
///     async fn load_author(&self, ctx: &Context) -> Result<Option<Author>, Error> {
///         let loaders = sparse_fieldsets::downcast_context::<Loaders>(ctx)?;
///         Ok(loaders.authors.load(self.id).await)
///     }
/// }
/// ```
#[proc_macro_derive(Record, attributes(record, fieldsets, expansion, field))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
