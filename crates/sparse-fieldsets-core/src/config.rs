// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-type fieldset configuration.
//!
//! A configuration maps fieldset names to either a member list or an
//! expansion:
//!
//! ```rust
//! use sparse_fieldsets_core::{FieldsetConfig, MethodExpansion};
//!
//! let config = FieldsetConfig::new()
//!     .with_default(["id"])
//!     .with_fieldset("summary", ["id", "name"])
//!     .with_expansion("detail", MethodExpansion::new("load_detail"));
//!
//! assert!(config.expansion("detail").is_some());
//! assert_eq!(config.members("summary").map(<[String]>::len), Some(2));
//! ```
//!
//! The `default` fieldset is always unioned into a request. A default of
//! `["*"]` makes every declared field and every expansion includable.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::{expansion::Expansion, request::FieldRequest};

/// Name of the fieldset unioned into every request.
pub const DEFAULT_FIELDSET: &str = "default";

/// Default member meaning "every field and every expansion".
pub const WILDCARD: &str = "*";

/// Value of a fieldset entry.
#[derive(Debug, Clone)]
pub enum FieldsetEntry {
    /// Group of field, fieldset or expansion names.
    Members(Vec<String>),
    /// Deferred computation attached under the entry name.
    Expansion(Arc<dyn Expansion>)
}

impl FieldsetEntry {
    /// Check if this entry is an expansion.
    pub const fn is_expansion(&self) -> bool {
        matches!(self, Self::Expansion(_))
    }
}

/// Fieldset configuration of a record type, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct FieldsetConfig {
    entries: IndexMap<String, FieldsetEntry>
}

impl FieldsetConfig {
    /// Empty configuration.
    ///
    /// An empty configuration is not the same as none: a record with an
    /// empty configuration renders only what is requested.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `default` fieldset.
    #[must_use]
    pub fn with_default<I, S>(self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.with_fieldset(DEFAULT_FIELDSET, members)
    }

    /// Add a named member list.
    #[must_use]
    pub fn with_fieldset<I, S>(self, name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.with_entry(
            name,
            FieldsetEntry::Members(members.into_iter().map(Into::into).collect())
        )
    }

    /// Add an expansion.
    #[must_use]
    pub fn with_expansion(self, name: impl Into<String>, expansion: impl Expansion + 'static) -> Self {
        self.with_entry(name, FieldsetEntry::Expansion(Arc::new(expansion)))
    }

    /// Add an entry, replacing any entry of the same name.
    #[must_use]
    pub fn with_entry(mut self, name: impl Into<String>, entry: FieldsetEntry) -> Self {
        self.entries.insert(name.into(), entry);
        self
    }

    /// Look up an entry.
    pub fn get(&self, name: &str) -> Option<&FieldsetEntry> {
        self.entries.get(name)
    }

    /// Look up an expansion entry.
    pub fn expansion(&self, name: &str) -> Option<&Arc<dyn Expansion>> {
        match self.entries.get(name)? {
            FieldsetEntry::Expansion(expansion) => Some(expansion),
            FieldsetEntry::Members(_) => None
        }
    }

    /// Look up a member-list entry.
    pub fn members(&self, name: &str) -> Option<&[String]> {
        match self.entries.get(name)? {
            FieldsetEntry::Members(members) => Some(members),
            FieldsetEntry::Expansion(_) => None
        }
    }

    /// Normalized members of the `default` fieldset.
    pub fn default_members(&self) -> Option<FieldRequest> {
        self.members(DEFAULT_FIELDSET).map(FieldRequest::from)
    }

    /// Check if the default fieldset contains the wildcard.
    pub fn is_wildcard_default(&self) -> bool {
        self.default_members()
            .is_some_and(|members| members.contains(WILDCARD))
    }

    /// Names of all expansion entries.
    pub fn expansion_names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.is_expansion())
            .map(|(name, _)| name.as_str())
    }

    /// Check if an entry of this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldsetEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}
