// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Output-tree paths and the path-addressed deep merge.
//!
//! [`path_put`] splices a value into a tree of JSON objects and arrays,
//! creating intermediate containers on the way down. It knows nothing about
//! fieldsets and is usable on its own.
//!
//! # Merge Rules
//!
//! | Container | Remaining path | Value | Effect |
//! |-----------|----------------|-------|--------|
//! | object | empty | object | shallow key overwrite |
//! | object | empty | other | no-op |
//! | object | last key | array onto array | element-wise merge, extras appended |
//! | object | last key | object onto object | shallow key overwrite |
//! | object | last key | other | assign |
//! | object | more keys | any | create the child, recurse |
//! | array | index | object | merge into the slot (`null` becomes `{}`) |
//! | array | index | other | assign |
//! | scalar | any | any | [`PathError::NotAContainer`] |
//!
//! Arrays grow with `null` padding and never shrink.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::PathError;

/// One step in an output-tree path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    /// Mapping key.
    Key(String),
    /// Sequence position.
    Index(usize)
}

impl Segment {
    /// Interpret this segment as a sequence index.
    ///
    /// Keys made only of ASCII digits are index-like.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Key(key) if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) => {
                key.parse().ok()
            }
            Self::Key(_) => None
        }
    }

    /// Check if this segment can address a sequence.
    pub fn is_index_like(&self) -> bool {
        self.as_index().is_some()
    }

    fn as_key(&self) -> String {
        match self {
            Self::Key(key) => key.clone(),
            Self::Index(index) => index.to_string()
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{}", index)
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Ordered sequence of segments addressing a node of the output tree.
///
/// The empty path addresses the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(Vec<Segment>);

impl Path {
    /// The root path.
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Parse a dot-joined path. The empty string is the root.
    ///
    /// ```rust
    /// use sparse_fieldsets_core::{Path, Segment};
    ///
    /// let path = Path::parse("items.0.detail");
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path.segments()[1].as_index(), Some(0));
    /// assert!(Path::parse("").is_root());
    /// ```
    pub fn parse(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::root();
        }
        Self(dotted.split('.').map(Segment::from).collect())
    }

    /// Segments from the root down.
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if this is the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path extended by one segment.
    #[must_use]
    pub fn child(&self, segment: impl Into<Segment>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// `prefix` followed by this path.
    #[must_use]
    pub fn rehome(&self, prefix: &Path) -> Self {
        let mut segments = Vec::with_capacity(prefix.len() + self.len());
        segments.extend_from_slice(&prefix.0);
        segments.extend_from_slice(&self.0);
        Self(segments)
    }

    /// Path without its last segment. The root has no parent.
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.0.split_last()?;
        Some(Self(init.to_vec()))
    }

    /// Last segment, if any.
    pub fn last(&self) -> Option<&Segment> {
        self.0.last()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl From<&str> for Path {
    fn from(dotted: &str) -> Self {
        Self::parse(dotted)
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

impl From<&[Segment]> for Path {
    fn from(segments: &[Segment]) -> Self {
        Self(segments.to_vec())
    }
}

impl<const N: usize> From<[Segment; N]> for Path {
    fn from(segments: [Segment; N]) -> Self {
        Self(segments.into())
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Runtime kind of a JSON value, for error messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping"
    }
}

/// Deep-merge `value` into `tree` at `path`.
///
/// A `null` tree is replaced by `value` outright.
///
/// # Errors
///
/// - [`PathError::InvalidIndex`] when a sequence is addressed with a
///   non-numeric segment
/// - [`PathError::NotAMapping`] when a mapping is merged into a non-mapping
///   sequence slot
/// - [`PathError::NotAContainer`] when the path descends through a scalar
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use sparse_fieldsets_core::path_put;
///
/// let mut tree = json!({});
/// path_put(&mut tree, "a.1", json!("v")).unwrap();
/// assert_eq!(tree, json!({"a": [null, "v"]}));
///
/// let mut tree = json!({"a": [{"x": 1}]});
/// path_put(&mut tree, "a.0", json!({"y": 2})).unwrap();
/// assert_eq!(tree, json!({"a": [{"x": 1, "y": 2}]}));
/// ```
pub fn path_put(tree: &mut Value, path: impl Into<Path>, value: Value) -> Result<(), PathError> {
    if tree.is_null() {
        *tree = value;
        return Ok(());
    }
    let path = path.into();
    put_at(tree, path.segments(), 0, value)
}

fn put_at(node: &mut Value, path: &[Segment], depth: usize, value: Value) -> Result<(), PathError> {
    match node {
        Value::Object(map) => put_in_map(map, path, depth, value),
        Value::Array(list) => put_in_list(list, path, depth, value),
        other => Err(PathError::NotAContainer {
            path:  dotted(&path[..depth]),
            found: kind_of(other)
        })
    }
}

fn put_in_map(
    map: &mut Map<String, Value>,
    path: &[Segment],
    depth: usize,
    value: Value
) -> Result<(), PathError> {
    let Some(segment) = path.get(depth) else {
        if let Value::Object(entries) = value {
            map.extend(entries);
        }
        return Ok(());
    };
    let key = segment.as_key();

    if depth + 1 == path.len() {
        match map.get_mut(&key) {
            Some(slot) => merge_slot(slot, value),
            None => {
                map.insert(key, value);
            }
        }
        return Ok(());
    }

    let slot = map.entry(key).or_insert(Value::Null);
    if slot.is_null() {
        *slot = empty_container_for(&path[depth + 1]);
    }
    put_at(slot, path, depth + 1, value)
}

fn put_in_list(
    list: &mut Vec<Value>,
    path: &[Segment],
    depth: usize,
    value: Value
) -> Result<(), PathError> {
    let index = path
        .get(depth)
        .and_then(Segment::as_index)
        .ok_or_else(|| PathError::InvalidIndex {
            path: dotted(&path[..(depth + 1).min(path.len())])
        })?;
    if list.len() <= index {
        list.resize(index + 1, Value::Null);
    }
    let slot = &mut list[index];

    if depth + 1 < path.len() {
        if slot.is_null() {
            *slot = empty_container_for(&path[depth + 1]);
        }
        return put_at(slot, path, depth + 1, value);
    }

    match value {
        Value::Object(entries) => {
            if slot.is_null() {
                *slot = Value::Object(Map::new());
            }
            match slot {
                Value::Object(existing) => {
                    existing.extend(entries);
                    Ok(())
                }
                other => Err(PathError::NotAMapping {
                    path:  dotted(&path[..=depth]),
                    found: kind_of(other)
                })
            }
        }
        other => {
            *slot = other;
            Ok(())
        }
    }
}

/// Final placement onto an existing mapping slot.
fn merge_slot(slot: &mut Value, value: Value) {
    match (slot, value) {
        (Value::Array(existing), Value::Array(incoming)) => {
            let mut incoming = incoming.into_iter();
            for current in existing.iter_mut() {
                let Some(next) = incoming.next() else { break };
                merge_element(current, next);
            }
            existing.extend(incoming);
        }
        (Value::Object(existing), Value::Object(incoming)) => existing.extend(incoming),
        (slot, value) => *slot = value
    }
}

fn merge_element(current: &mut Value, next: Value) {
    match (current, next) {
        (Value::Object(existing), Value::Object(incoming)) => existing.extend(incoming),
        (_, Value::Null) => {}
        (current, next) => *current = next
    }
}

fn empty_container_for(next: &Segment) -> Value {
    if next.is_index_like() {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

fn dotted(segments: &[Segment]) -> String {
    Path::from(segments).to_string()
}
