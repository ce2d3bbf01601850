// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Normalized field requests.
//!
//! Clients name fields and fieldsets as a comma-joined string, a list of
//! strings, or both (`["id,name", "items.detail"]`). [`FieldRequest`]
//! flattens every form into one set of dotted tokens.

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Deserializer, de};

/// Deduplicated set of requested field tokens.
///
/// # Example
///
/// ```rust
/// use sparse_fieldsets_core::FieldRequest;
///
/// let request = FieldRequest::from(["id, name", "items.detail", ""]);
/// let tokens: Vec<_> = request.iter().collect();
/// assert_eq!(tokens, ["id", "items.detail", "name"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRequest(BTreeSet<String>);

impl FieldRequest {
    /// Empty request.
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Add one raw element, splitting it on commas.
    pub fn push(&mut self, raw: &str) {
        self.0.extend(
            raw.split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_owned)
        );
    }

    /// Check if no token was requested.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if a token was requested verbatim.
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Tokens in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Union with another request.
    pub fn union(&mut self, other: &FieldRequest) {
        self.0.extend(other.0.iter().cloned());
    }
}

impl<S: AsRef<str>> Extend<S> for FieldRequest {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for raw in iter {
            self.push(raw.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for FieldRequest {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut request = Self::new();
        request.extend(iter);
        request
    }
}

impl From<&str> for FieldRequest {
    fn from(raw: &str) -> Self {
        std::iter::once(raw).collect()
    }
}

impl From<String> for FieldRequest {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<&String> for FieldRequest {
    fn from(raw: &String) -> Self {
        Self::from(raw.as_str())
    }
}

impl<S: AsRef<str>> From<Vec<S>> for FieldRequest {
    fn from(raw: Vec<S>) -> Self {
        raw.into_iter().collect()
    }
}

impl<S: AsRef<str>> From<&[S]> for FieldRequest {
    fn from(raw: &[S]) -> Self {
        raw.iter().collect()
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for FieldRequest {
    fn from(raw: [S; N]) -> Self {
        raw.into_iter().collect()
    }
}

impl<S: AsRef<str>> From<Option<S>> for FieldRequest {
    fn from(raw: Option<S>) -> Self {
        raw.into_iter().collect()
    }
}

impl From<&FieldRequest> for FieldRequest {
    fn from(request: &FieldRequest) -> Self {
        request.clone()
    }
}

impl<'a> IntoIterator for &'a FieldRequest {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FieldRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, token) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str(",")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for FieldRequest {
    /// Accepts `"a,b"`, `["a", "b,c"]` or `null`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RequestVisitor;

        impl<'de> de::Visitor<'de> for RequestVisitor {
            type Value = FieldRequest;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a comma-separated string or a sequence of strings")
            }

            fn visit_str<E: de::Error>(self, raw: &str) -> Result<Self::Value, E> {
                Ok(FieldRequest::from(raw))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(FieldRequest::new())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(FieldRequest::new())
            }

            fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut request = FieldRequest::new();
                while let Some(raw) = seq.next_element::<String>()? {
                    request.push(&raw);
                }
                Ok(request)
            }
        }

        deserializer.deserialize_any(RequestVisitor)
    }
}
