// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(Record)]` orchestration.
//!
//! Parsing produces a [`RecordDef`]; each generator below turns one aspect
//! of it into tokens:
//!
//! | Module | Generates |
//! |--------|-----------|
//! | [`catalog`] | `Data`, field names, shapes and values |
//! | [`config`] | the `FieldsetConfig` static |
//! | [`dispatch`] | expansion method dispatch and `IntoExpanded` |

mod catalog;
mod config;
mod dispatch;
pub mod parse;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::RecordDef;

/// Main entry point for the Record derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match RecordDef::from_derive_input(&input) {
        Ok(record) => generate(&record),
        Err(err) => err.write_errors().into()
    }
}

fn generate(record: &RecordDef) -> TokenStream {
    let data_impl = catalog::generate_data(record);
    let catalog = catalog::generate(record);
    let config = config::generate(record);
    let dispatch = dispatch::generate(record);
    let into_expanded = dispatch::generate_into_expanded(record);

    let ident = &record.ident;
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();

    let expanded = quote! {
        #data_impl

        impl #impl_generics ::sparse_fieldsets::Record for #ident #ty_generics #where_clause {
            #catalog
            #config
            #dispatch
        }

        #into_expanded
    };

    expanded.into()
}
