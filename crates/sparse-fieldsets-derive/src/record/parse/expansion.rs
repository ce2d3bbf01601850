// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[expansion(...)]` parsing.
//!
//! # Syntax
//!
//! ```rust,ignore
//! #[expansion(name = "customer", method = "load_customer")]
//! #[expansion(name = "totals", merge_upwards, sync)]
//! #[expansion(name = "lines", response = "Vec<Line>")]
//! ```

use darling::FromMeta;
use syn::{Attribute, Ident};

/// A method-based expansion.
#[derive(Debug, Clone, FromMeta)]
pub struct ExpansionDef {
    /// Fieldset name clients request.
    pub name: String,

    /// Method invoked on the record. Defaults to `name`.
    #[darling(default)]
    pub method: Option<Ident>,

    /// Splice the result into the parent object.
    #[darling(default)]
    pub merge_upwards: bool,

    /// Declared result type, kept for documentation.
    #[darling(default)]
    pub response: Option<String>,

    /// The method is a plain `fn`.
    #[darling(default)]
    pub sync: bool
}

impl ExpansionDef {
    /// Parse an `#[expansion(...)]` attribute.
    ///
    /// # Errors
    ///
    /// - Missing `name`
    /// - Unknown keys
    /// - `method` omitted and `name` not a valid identifier
    pub fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        let def = Self::from_meta(&attr.meta).map_err(|err| err.with_span(attr))?;
        if def.method.is_none() && syn::parse_str::<Ident>(&def.name).is_err() {
            return Err(darling::Error::custom(format!(
                "expansion `{}` needs an explicit method = \"...\"",
                def.name
            ))
            .with_span(attr));
        }
        Ok(def)
    }

    /// Identifier of the invoked method.
    pub fn method_ident(&self) -> Ident {
        match &self.method {
            Some(method) => method.clone(),
            None => Ident::new(&self.name, proc_macro2::Span::call_site())
        }
    }

    /// Method name as registered in the configuration.
    pub fn method_name(&self) -> String {
        let method = self.method_ident().to_string();
        method.strip_prefix("r#").map(str::to_owned).unwrap_or(method)
    }
}
