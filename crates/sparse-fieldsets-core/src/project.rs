// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mask-shaped serialization.
//!
//! Projection walks a value alongside its [`Mask`] and produces a plain
//! JSON tree. Records keep only selected fields, sequences keep only
//! selected positions, and mappings keep every key, narrowing those the
//! mask mentions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    data::{Data, View},
    error::{Error, Result},
    mask::Mask,
    path::Segment,
    record::Record
};

/// Field-omission flags handed to records during projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionOptions {
    /// Drop fields the record reports as never set.
    pub omit_unset:     bool,
    /// Drop fields holding their default value.
    pub omit_defaulted: bool,
    /// Drop fields serializing to `null`.
    pub omit_null:      bool
}

impl ProjectionOptions {
    /// Keep every selected field.
    pub const fn new() -> Self {
        Self {
            omit_unset:     false,
            omit_defaulted: false,
            omit_null:      false
        }
    }

    /// Set [`omit_unset`](Self::omit_unset).
    #[must_use]
    pub const fn with_omit_unset(mut self, omit: bool) -> Self {
        self.omit_unset = omit;
        self
    }

    /// Set [`omit_defaulted`](Self::omit_defaulted).
    #[must_use]
    pub const fn with_omit_defaulted(mut self, omit: bool) -> Self {
        self.omit_defaulted = omit;
        self
    }

    /// Set [`omit_null`](Self::omit_null).
    #[must_use]
    pub const fn with_omit_null(mut self, omit: bool) -> Self {
        self.omit_null = omit;
        self
    }
}

/// Serialize `data` keeping what `mask` selects.
///
/// # Errors
///
/// Returns [`Error::Serialize`] when a record field fails to serialize.
pub fn project_data(data: &dyn Data, mask: &Mask, options: &ProjectionOptions) -> Result<Value> {
    project_view(data.view(), mask, options)
}

pub(crate) fn project_view(view: View<'_>, mask: &Mask, options: &ProjectionOptions) -> Result<Value> {
    match view {
        View::Null => Ok(Value::Null),
        View::Leaf(value) => Ok(value),
        View::Record(record) => record.project(mask, options),
        View::List(items) => {
            let mut projected = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                if let Some(item_mask) = mask.get(&Segment::Index(index)) {
                    projected.push(project_data(item, item_mask, options)?);
                }
            }
            Ok(Value::Array(projected))
        }
        View::Map(entries) => {
            let mut projected = Map::new();
            for (key, item) in entries {
                let item_mask = mask.entry_or_all(&Segment::Key(key.to_string()));
                projected.insert(key.into_owned(), project_data(item, item_mask, options)?);
            }
            Ok(Value::Object(projected))
        }
    }
}

/// Serialize the fields of `record` selected by `mask`, in declaration
/// order.
///
/// This is the default body of [`Record::project`].
///
/// # Errors
///
/// Returns [`Error::Serialize`] when a scalar field fails to serialize.
pub fn project_record<R: Record + ?Sized>(
    record: &R,
    mask: &Mask,
    options: &ProjectionOptions
) -> Result<Value> {
    let mut projected = Map::new();

    for &name in record.declared_fields() {
        let Some(field_mask) = mask.get(&Segment::from(name)) else {
            continue;
        };
        if options.omit_unset && !record.is_field_set(name) {
            continue;
        }
        if options.omit_defaulted && record.is_field_defaulted(name) {
            continue;
        }

        let value = match record.attr(name) {
            Some(nested) => project_data(nested, field_mask, options)?,
            None => match record.attr_value(name) {
                Some(Ok(value)) => value,
                Some(Err(source)) => {
                    return Err(Error::Serialize {
                        record: record.type_name().to_owned(),
                        field: name.to_owned(),
                        source
                    });
                }
                None => continue
            }
        };

        if options.omit_null && value.is_null() {
            continue;
        }
        projected.insert(name.to_owned(), value);
    }

    Ok(Value::Object(projected))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;

    fn select(keys: &[&str]) -> Mask {
        let mut mask = Mask::empty();
        for key in keys {
            mask.insert(*key, Mask::All);
        }
        mask
    }

    #[test]
    fn all_keeps_the_whole_value() {
        let value = json!({"a": [1, {"b": 2}]});
        assert_eq!(project_data(&value, &Mask::All, &ProjectionOptions::new()).unwrap(), value);
    }

    #[test]
    fn list_keeps_selected_positions() {
        let mut mask = Mask::empty();
        mask.insert(0_usize, Mask::All);
        mask.insert(2_usize, Mask::All);
        let projected = project_data(&vec![1, 2, 3], &mask, &ProjectionOptions::new()).unwrap();
        assert_eq!(projected, json!([1, 3]));
    }

    #[test]
    fn empty_list_projects_to_empty_list() {
        let projected =
            project_data(&Vec::<i64>::new(), &Mask::empty(), &ProjectionOptions::new()).unwrap();
        assert_eq!(projected, json!([]));
    }

    #[test]
    fn map_keeps_every_key() {
        let mut map = BTreeMap::new();
        map.insert("x".to_owned(), json!({"a": 1, "b": 2}));
        map.insert("y".to_owned(), json!(3));
        let mut mask = Mask::empty();
        mask.insert("x", select(&["a"]));
        let projected = project_data(&map, &mask, &ProjectionOptions::new()).unwrap();
        assert_eq!(projected, json!({"x": {"a": 1, "b": 2}, "y": 3}));
    }

    #[test]
    fn options_builder() {
        let options = ProjectionOptions::new()
            .with_omit_null(true)
            .with_omit_defaulted(true);
        assert!(options.omit_null);
        assert!(options.omit_defaulted);
        assert!(!options.omit_unset);
    }
}
