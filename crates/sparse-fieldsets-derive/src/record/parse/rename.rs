// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `rename_all` rules for external field names.

use convert_case::{Case, Casing};
use darling::FromMeta;

/// Case applied to every field name without an explicit `rename`.
///
/// | Value | Example |
/// |-------|---------|
/// | `"camelCase"` | `created_at` → `createdAt` |
/// | `"PascalCase"` | `created_at` → `CreatedAt` |
/// | `"snake_case"` | `createdAt` → `created_at` |
/// | `"kebab-case"` | `created_at` → `created-at` |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// `camelCase`
    Camel,
    /// `PascalCase`
    Pascal,
    /// `snake_case`
    Snake,
    /// `kebab-case`
    Kebab
}

impl RenameRule {
    /// Apply the rule to a Rust field name.
    pub fn apply(self, name: &str) -> String {
        let case = match self {
            Self::Camel => Case::Camel,
            Self::Pascal => Case::Pascal,
            Self::Snake => Case::Snake,
            Self::Kebab => Case::Kebab
        };
        name.to_case(case)
    }
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "camelCase" => Ok(Self::Camel),
            "PascalCase" => Ok(Self::Pascal),
            "snake_case" => Ok(Self::Snake),
            "kebab-case" => Ok(Self::Kebab),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}
