// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The structured record capability.
//!
//! A [`Record`] enumerates its declared fields, describes their shapes and
//! hands out their values. `#[derive(Record)]` implements it for plain
//! structs; hand-written implementations only need the required methods.
//!
//! # Field Shapes
//!
//! | Rust type | Shape |
//! |-----------|-------|
//! | `String`, `i64`, `Uuid`, ... | [`FieldShape::Scalar`] |
//! | `Sub`, `Option<Sub>`, `Box<Sub>` | [`FieldShape::Record`] |
//! | `Vec<Sub>` | `List(Record)` |
//! | `HashMap<String, Vec<Sub>>` | `Map(List(Record))` |

use serde_json::Value;

use crate::{
    config::FieldsetConfig,
    data::Data,
    error::Result,
    expansion::{Context, ExpandFuture},
    mask::Mask,
    project::{ProjectionOptions, project_record}
};

/// Declared shape of a record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldShape {
    /// Plain value, included whole.
    Scalar,
    /// A nested record.
    Record,
    /// Sequence of the inner shape.
    List(Box<FieldShape>),
    /// String-keyed mapping to the inner shape.
    Map(Box<FieldShape>)
}

impl FieldShape {
    /// Sequence of `inner`.
    pub fn list(inner: FieldShape) -> Self {
        Self::List(Box::new(inner))
    }

    /// Mapping to `inner`.
    pub fn map(inner: FieldShape) -> Self {
        Self::Map(Box::new(inner))
    }

    /// Check if a record can be reached through this shape.
    pub fn contains_record(&self) -> bool {
        match self {
            Self::Scalar => false,
            Self::Record => true,
            Self::List(inner) | Self::Map(inner) => inner.contains_record()
        }
    }
}

/// A structured value with declared, named fields.
pub trait Record: Data {
    /// Type name used in error messages.
    fn type_name(&self) -> &'static str;

    /// Declared field names in declaration order.
    fn declared_fields(&self) -> &'static [&'static str];

    /// Shape of a declared field. `None` for unknown names.
    fn field_shape(&self, name: &str) -> Option<FieldShape>;

    /// Value of a field whose shape reaches a record.
    fn attr(&self, name: &str) -> Option<&dyn Data>;

    /// Serialized value of a scalar field.
    fn attr_value(&self, name: &str) -> Option<serde_json::Result<Value>>;

    /// Fieldset configuration of this type.
    ///
    /// `None` means every declared field is included.
    fn fieldset_config(&self) -> Option<&FieldsetConfig> {
        None
    }

    /// Whether a field was explicitly set, for
    /// [`ProjectionOptions::omit_unset`].
    fn is_field_set(&self, _name: &str) -> bool {
        true
    }

    /// Whether a field holds its default, for
    /// [`ProjectionOptions::omit_defaulted`].
    fn is_field_defaulted(&self, _name: &str) -> bool {
        false
    }

    /// Start the expansion method named `method`.
    ///
    /// Returns `None` when this record has no such method.
    fn invoke<'a>(&'a self, _method: &str, _context: &'a Context) -> Option<ExpandFuture<'a>> {
        None
    }

    /// Serialize the fields selected by `mask`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`](crate::Error::Serialize) when a scalar
    /// field fails to serialize.
    fn project(&self, mask: &Mask, options: &ProjectionOptions) -> Result<Value> {
        project_record(self, mask, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_shapes_reach_records() {
        assert!(FieldShape::Record.contains_record());
        assert!(FieldShape::map(FieldShape::list(FieldShape::Record)).contains_record());
        assert!(!FieldShape::list(FieldShape::Scalar).contains_record());
        assert!(!FieldShape::Scalar.contains_record());
    }
}
