// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Expansion dispatch generation.
//!
//! `invoke` maps a method name to a boxed future calling the method:
//!
//! ```rust,ignore
//! fn invoke<'a>(&'a self, method: &str, context: &'a Context) -> Option<ExpandFuture<'a>> {
//!     match method {
//!         "load_customer" => Some(Box::pin(async move {
//!             let value = self.load_customer(context).await?;
//!             Ok::<_, Error>(IntoExpanded::into_expanded(value))
//!         })),
//!         _ => None
//!     }
//! }
//! ```

use std::collections::BTreeSet;

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::RecordDef;

/// Generate `invoke`, or nothing for records without expansions.
pub fn generate(record: &RecordDef) -> TokenStream {
    let mut seen = BTreeSet::new();
    let arms: Vec<TokenStream> = record
        .expansions()
        .filter(|expansion| seen.insert(expansion.method_name()))
        .map(|expansion| {
            let name = expansion.method_name();
            let method = expansion.method_ident();
            let call = if expansion.sync {
                quote! { self.#method(context)? }
            } else {
                quote! { self.#method(context).await? }
            };
            quote! {
                #name => ::core::option::Option::Some(::std::boxed::Box::pin(async move {
                    let value = #call;
                    ::core::result::Result::Ok::<_, ::sparse_fieldsets::Error>(
                        ::sparse_fieldsets::IntoExpanded::into_expanded(value)
                    )
                })),
            }
        })
        .collect();

    if arms.is_empty() {
        return TokenStream::new();
    }

    quote! {
        fn invoke<'a>(
            &'a self,
            method: &str,
            context: &'a ::sparse_fieldsets::Context
        ) -> ::core::option::Option<::sparse_fieldsets::ExpandFuture<'a>> {
            match method {
                #(#arms)*
                _ => ::core::option::Option::None
            }
        }
    }
}

/// Generate `impl IntoExpanded`, so expansion methods can return the
/// record itself.
pub fn generate_into_expanded(record: &RecordDef) -> TokenStream {
    let ident = &record.ident;
    let mut generics = record.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(syn::parse_quote!(Self: 'static));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::sparse_fieldsets::IntoExpanded for #ident #ty_generics #where_clause {
            fn into_expanded(self) -> ::core::option::Option<::sparse_fieldsets::Expanded> {
                ::core::option::Option::Some(::sparse_fieldsets::Expanded::record(self))
            }
        }
    }
}
