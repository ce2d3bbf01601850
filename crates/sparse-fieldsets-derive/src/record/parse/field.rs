// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! # Syntax
//!
//! ```rust,ignore
//! #[field(nested)]              // holds records
//! #[field(skip)]                // not a declared field
//! #[field(default)]             // takes part in omit_defaulted
//! #[field(rename = "orderId")]  // external name
//! ```
//!
//! Keys combine freely: `#[field(nested, rename = "lines")]`.

use syn::{Attribute, Field, Ident, LitStr, Type};

use super::{RenameRule, ShapeDef};

/// Field definition with all parsed attributes.
#[derive(Debug)]
pub struct FieldDef {
    /// Rust field identifier.
    pub ident: Ident,

    /// Field type.
    pub ty: Type,

    /// External name used in requests and output.
    pub name: String,

    /// Field holds records.
    pub nested: bool,

    /// Field is not declared.
    pub skip: bool,

    /// Field takes part in `omit_defaulted`.
    pub default: bool,

    /// Declared shape. [`ShapeDef::Scalar`] unless `nested`.
    pub shape: ShapeDef
}

impl FieldDef {
    /// Parse a field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// - The field has no identifier
    /// - Unknown keys inside `#[field(...)]`
    pub fn from_field(field: &Field, rename_all: Option<RenameRule>) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Record fields must be named").with_span(field)
        })?;

        let mut nested = false;
        let mut skip = false;
        let mut default = false;
        let mut rename = None;

        for attr in &field.attrs {
            if attr.path().is_ident("field") {
                parse_field_attr(attr, &mut nested, &mut skip, &mut default, &mut rename)?;
            }
        }

        let rust_name = ident.to_string();
        let rust_name = rust_name.strip_prefix("r#").unwrap_or(&rust_name);
        let name = match (rename, rename_all) {
            (Some(rename), _) => rename,
            (None, Some(rule)) => rule.apply(rust_name),
            (None, None) => rust_name.to_owned()
        };

        let shape = if nested {
            ShapeDef::from_type(&field.ty)
        } else {
            ShapeDef::Scalar
        };

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            name,
            nested,
            skip,
            default,
            shape
        })
    }
}

fn parse_field_attr(
    attr: &Attribute,
    nested: &mut bool,
    skip: &mut bool,
    default: &mut bool,
    rename: &mut Option<String>
) -> darling::Result<()> {
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("nested") {
            *nested = true;
        } else if meta.path.is_ident("skip") {
            *skip = true;
        } else if meta.path.is_ident("default") {
            *default = true;
        } else if meta.path.is_ident("rename") {
            let value: LitStr = meta.value()?.parse()?;
            *rename = Some(value.value());
        } else {
            return Err(meta.error("unknown field option, expected: nested, skip, default, rename"));
        }
        Ok(())
    })
    .map_err(darling::Error::from)
}
