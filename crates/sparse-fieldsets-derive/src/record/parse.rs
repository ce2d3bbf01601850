// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parsing of `#[derive(Record)]` input.
//!
//! # Module Structure
//!
//! ```text
//! parse/
//! ├── attrs.rs      - RecordAttrs (darling, #[record(...)])
//! ├── rename.rs     - rename_all rules
//! ├── field.rs      - FieldDef (#[field(...)])
//! ├── shape.rs      - field shape inferred from the Rust type
//! ├── fieldsets.rs  - #[fieldsets(...)] member lists
//! └── expansion.rs  - #[expansion(...)] definitions
//! ```
//!
//! The result is a [`RecordDef`], which owns everything the generators
//! need.

mod attrs;
mod expansion;
mod field;
mod fieldsets;
mod rename;
mod shape;

#[cfg(test)]
mod tests;

pub use attrs::RecordAttrs;
use darling::FromDeriveInput;
pub use expansion::ExpansionDef;
pub use field::FieldDef;
pub use fieldsets::FieldsetDef;
pub use rename::RenameRule;
pub use shape::ShapeDef;
use syn::{DeriveInput, Generics, Ident};

/// One entry of the generated fieldset configuration, in declaration
/// order.
#[derive(Debug, Clone)]
pub enum ConfigEntry {
    /// Named member list from `#[fieldsets(...)]`.
    Fieldset(FieldsetDef),
    /// Method-based expansion from `#[expansion(...)]`.
    Expansion(ExpansionDef)
}

/// Complete parsed record definition.
#[derive(Debug)]
pub struct RecordDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics, carried over to every generated impl.
    pub generics: Generics,

    /// Type name reported in errors.
    pub name: String,

    /// Declared fields, skipped fields excluded.
    pub fields: Vec<FieldDef>,

    /// Method reporting explicitly set fields.
    pub is_set: Option<Ident>,

    /// Fieldset configuration. `None` when the struct carries no
    /// `#[fieldsets]` or `#[expansion]` attribute.
    pub config: Option<Vec<ConfigEntry>>
}

impl RecordDef {
    /// Parse a record definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Applied to an enum, union, tuple or unit struct
    /// - Unknown keys in `#[record]`, `#[field]` or `#[expansion]`
    /// - Malformed `#[fieldsets]` lists
    /// - Duplicate external field names
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = RecordAttrs::from_derive_input(input)?;
        let mut errors = darling::Error::accumulator();

        let named = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => &named.named,
                _ => {
                    return Err(darling::Error::custom("Record requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Record can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let mut fields = Vec::with_capacity(named.len());
        for field in named {
            if let Some(def) = errors.handle(FieldDef::from_field(field, attrs.rename_all)) {
                if !def.skip {
                    fields.push(def);
                }
            }
        }

        for (index, field) in fields.iter().enumerate() {
            if fields[..index].iter().any(|prior| prior.name == field.name) {
                errors.push(
                    darling::Error::custom(format!("duplicate field name `{}`", field.name))
                        .with_span(&field.ident)
                );
            }
        }

        let mut config: Option<Vec<ConfigEntry>> = None;
        for attr in &input.attrs {
            if attr.path().is_ident("fieldsets") {
                let entries = config.get_or_insert_with(Vec::new);
                if let Some(parsed) = errors.handle(fieldsets::parse_fieldsets_attr(attr)) {
                    entries.extend(parsed.into_iter().map(ConfigEntry::Fieldset));
                }
            } else if attr.path().is_ident("expansion") {
                let entries = config.get_or_insert_with(Vec::new);
                if let Some(parsed) = errors.handle(ExpansionDef::from_attr(attr)) {
                    entries.push(ConfigEntry::Expansion(parsed));
                }
            }
        }

        errors.finish()?;

        let name = attrs.name.unwrap_or_else(|| attrs.ident.to_string());

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            name,
            fields,
            is_set: attrs.is_set,
            config
        })
    }

    /// Expansion definitions, in declaration order.
    pub fn expansions(&self) -> impl Iterator<Item = &ExpansionDef> {
        self.config
            .iter()
            .flatten()
            .filter_map(|entry| match entry {
                ConfigEntry::Expansion(expansion) => Some(expansion),
                ConfigEntry::Fieldset(_) => None
            })
    }

    /// Check if any field takes part in `omit_defaulted`.
    pub fn has_defaulted_fields(&self) -> bool {
        self.fields.iter().any(|field| field.default)
    }

    /// Fields holding records.
    pub fn nested_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|field| field.nested)
    }

    /// Fields serialized whole.
    pub fn scalar_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|field| !field.nested)
    }
}
