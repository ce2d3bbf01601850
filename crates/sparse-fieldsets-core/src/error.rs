// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for fieldset resolution and rendering.
//!
//! Unknown field names and dangling fieldset aliases are never errors; they
//! are simply not satisfiable. Everything in this module aborts a render.

use thiserror::Error;

/// Boxed error raised from inside an expansion body.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure while rendering a record.
#[derive(Debug, Error)]
pub enum Error {
    /// An expansion produced nothing and missing expansions are fatal.
    #[error("expansion at `{path}` returned no value")]
    ExpansionNotFound {
        /// Dotted output path of the expansion.
        path: String
    },

    /// A `merge_fields_upwards=true` expansion produced something other than
    /// a record or a mapping.
    #[error(
        "expansion `{name}` on `{record}` has merge_fields_upwards=true but returned a {found}, \
         expected a record or a mapping"
    )]
    MergeUpwardsMismatch {
        /// Expansion name.
        name:   String,
        /// Type name of the record declaring the expansion.
        record: String,
        /// Runtime kind of the value returned.
        found:  &'static str
    },

    /// A method-based expansion names a method the record does not provide.
    #[error("`{record}` has no expansion method `{method}`")]
    NoSuchExpansionMethod {
        /// Method name configured on the expansion.
        method: String,
        /// Type name of the source record.
        record: String
    },

    /// The render context is not of the type an expansion expects.
    #[error("render context is not a `{expected}`")]
    ContextMismatch {
        /// Expected context type.
        expected: &'static str
    },

    /// An expansion body failed.
    #[error("expansion failed: {0}")]
    Expansion(#[source] BoxError),

    /// A scalar field could not be serialized.
    #[error("failed to serialize `{record}.{field}`: {source}")]
    Serialize {
        /// Record type name.
        record: String,
        /// Field name.
        field:  String,
        /// Underlying serializer error.
        #[source]
        source: serde_json::Error
    },

    /// Splicing into the output tree failed.
    #[error(transparent)]
    Path(#[from] PathError)
}

impl Error {
    /// Wrap an arbitrary error raised by an expansion.
    ///
    /// ```rust
    /// use sparse_fieldsets_core::Error;
    ///
    /// let err = Error::expansion("backend unavailable");
    /// assert!(err.is_expansion());
    /// ```
    pub fn expansion<E: Into<BoxError>>(err: E) -> Self {
        Self::Expansion(err.into())
    }

    /// Check if this is a missing expansion error.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ExpansionNotFound { .. })
    }

    /// Check if this is a merge-upwards contract violation.
    pub const fn is_merge_mismatch(&self) -> bool {
        matches!(self, Self::MergeUpwardsMismatch { .. })
    }

    /// Check if this error was raised by an expansion body.
    pub const fn is_expansion(&self) -> bool {
        matches!(self, Self::Expansion(_))
    }

    /// Check if this is a tree addressing error.
    pub const fn is_path(&self) -> bool {
        matches!(self, Self::Path(_))
    }
}

/// Addressing failure inside [`path_put`](crate::path_put).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A sequence was addressed with a segment that is not an index.
    #[error("invalid path `{path}`: sequence index expected")]
    InvalidIndex {
        /// Path up to and including the offending segment.
        path: String
    },

    /// A mapping was merged into a slot holding something else.
    #[error("cannot merge a mapping into {found} at `{path}`")]
    NotAMapping {
        /// Path of the slot.
        path:  String,
        /// Kind of value found in the slot.
        found: &'static str
    },

    /// The path descends through a scalar.
    #[error("cannot descend into {found} at `{path}`")]
    NotAContainer {
        /// Path of the scalar.
        path:  String,
        /// Kind of value found.
        found: &'static str
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn merge_mismatch_names_the_flag() {
        let err = Error::MergeUpwardsMismatch {
            name:   "zoom".into(),
            record: "ResponseModel".into(),
            found:  "scalar"
        };
        let message = err.to_string();
        assert!(message.contains("merge_fields_upwards"));
        assert!(message.contains("zoom"));
        assert!(message.contains("scalar"));
        assert!(err.is_merge_mismatch());
    }

    #[test]
    fn not_found_names_the_path() {
        let err = Error::ExpansionNotFound {
            path: "items.0.detail".into()
        };
        assert!(err.is_not_found());
        assert!(err.to_string().contains("items.0.detail"));
    }

    #[test]
    fn path_error_converts() {
        let err: Error = PathError::InvalidIndex {
            path: "aa.x".into()
        }
        .into();
        assert!(err.is_path());
        assert_eq!(err.to_string(), "invalid path `aa.x`: sequence index expected");
    }

    #[test]
    fn expansion_keeps_source() {
        let err = Error::expansion("boom");
        assert!(err.is_expansion());
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "expansion failed: boom");
    }
}
