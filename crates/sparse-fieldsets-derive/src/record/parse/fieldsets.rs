// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[fieldsets(...)]` parsing.
//!
//! # Syntax
//!
//! ```rust,ignore
//! #[fieldsets(default = ["id", "status"], summary = ["id", "total"])]
//! #[fieldsets(default = "*")]
//! #[fieldsets()]
//! ```
//!
//! Each key names a fieldset. Values are a bracketed list of member
//! tokens or a single string. Members are request tokens and may be
//! dotted (`"customer.name"`) or name other fieldsets.

use syn::{Attribute, LitStr, Meta, punctuated::Punctuated};

/// A named member list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldsetDef {
    /// Fieldset name.
    pub name: String,
    /// Member tokens.
    pub members: Vec<String>
}

/// Parse one `#[fieldsets(...)]` attribute.
///
/// A bare `#[fieldsets]` or an empty `#[fieldsets()]` yields no entries;
/// its presence alone makes the record configured.
///
/// # Errors
///
/// Returns an error for `#[fieldsets = ...]`, non-identifier keys and
/// values that are neither a string nor a list of strings.
pub fn parse_fieldsets_attr(attr: &Attribute) -> darling::Result<Vec<FieldsetDef>> {
    let list = match &attr.meta {
        Meta::Path(_) => return Ok(Vec::new()),
        Meta::List(list) => list,
        Meta::NameValue(_) => {
            return Err(darling::Error::custom(
                "fieldsets attribute must use parentheses: fieldsets(default = [\"...\"])"
            )
            .with_span(attr));
        }
    };

    let mut fieldsets = Vec::new();
    list.parse_nested_meta(|nested| {
        let ident = nested
            .path
            .get_ident()
            .ok_or_else(|| syn::Error::new_spanned(&nested.path, "expected fieldset name"))?;
        let name = ident.to_string();
        let name = name.strip_prefix("r#").unwrap_or(&name).to_owned();

        let _: syn::Token![=] = nested.input.parse()?;
        let members = if nested.input.peek(syn::token::Bracket) {
            let content;
            syn::bracketed!(content in nested.input);
            Punctuated::<LitStr, syn::Token![,]>::parse_terminated(&content)?
                .into_iter()
                .map(|member| member.value())
                .collect()
        } else {
            let member: LitStr = nested.input.parse()?;
            vec![member.value()]
        };

        fieldsets.push(FieldsetDef {
            name,
            members
        });
        Ok(())
    })?;

    Ok(fieldsets)
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn parses_lists_in_order() {
        let attr: Attribute = parse_quote!(#[fieldsets(default = ["id"], summary = ["id", "total",])]);
        let parsed = parse_fieldsets_attr(&attr).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].name, "default");
        assert_eq!(parsed[0].members, vec!["id"]);
        assert_eq!(parsed[1].name, "summary");
        assert_eq!(parsed[1].members, vec!["id", "total"]);
    }

    #[test]
    fn single_string_member() {
        let attr: Attribute = parse_quote!(#[fieldsets(default = "*")]);
        let parsed = parse_fieldsets_attr(&attr).unwrap();
        assert_eq!(parsed[0].members, vec!["*"]);
    }

    #[test]
    fn empty_lists_are_allowed() {
        let attr: Attribute = parse_quote!(#[fieldsets(default = [])]);
        assert!(parse_fieldsets_attr(&attr).unwrap()[0].members.is_empty());

        let attr: Attribute = parse_quote!(#[fieldsets()]);
        assert!(parse_fieldsets_attr(&attr).unwrap().is_empty());
    }

    #[test]
    fn rejects_name_value_form() {
        let attr: Attribute = parse_quote!(#[fieldsets = "id"]);
        assert!(parse_fieldsets_attr(&attr).is_err());
    }

    #[test]
    fn rejects_non_string_members() {
        let attr: Attribute = parse_quote!(#[fieldsets(default = [id])]);
        assert!(parse_fieldsets_attr(&attr).is_err());
    }
}
