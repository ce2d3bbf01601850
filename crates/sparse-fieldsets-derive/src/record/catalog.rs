// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field catalog generation.
//!
//! Generates the `Data` impl and the `Record` methods describing fields:
//!
//! | Method | Body |
//! |--------|------|
//! | `type_name` | record name literal |
//! | `declared_fields` | external names in declaration order |
//! | `field_shape` | match on name, shape from the field type |
//! | `attr` | borrowed nested fields |
//! | `attr_value` | `serde_json::to_value` of scalar fields |
//! | `is_field_defaulted` | `==` against `Default::default()` |
//! | `is_field_set` | the `is_set` method, when given |

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::RecordDef;

/// Generate `impl Data`, viewing the struct as a record.
pub fn generate_data(record: &RecordDef) -> TokenStream {
    let ident = &record.ident;
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();

    quote! {
        impl #impl_generics ::sparse_fieldsets::Data for #ident #ty_generics #where_clause {
            fn view(&self) -> ::sparse_fieldsets::View<'_> {
                ::sparse_fieldsets::View::Record(self)
            }
        }
    }
}

/// Generate the field-describing `Record` methods.
pub fn generate(record: &RecordDef) -> TokenStream {
    let type_name = &record.name;
    let names: Vec<&str> = record.fields.iter().map(|f| f.name.as_str()).collect();
    let shapes: Vec<TokenStream> = record.fields.iter().map(|f| f.shape.to_tokens()).collect();

    let nested_names = record.nested_fields().map(|f| f.name.as_str());
    let nested_idents = record.nested_fields().map(|f| &f.ident);

    let scalar_names = record.scalar_fields().map(|f| f.name.as_str());
    let scalar_idents = record.scalar_fields().map(|f| &f.ident);

    let defaulted = generate_defaulted(record);
    let is_set = generate_is_set(record);

    quote! {
        fn type_name(&self) -> &'static str {
            #type_name
        }

        fn declared_fields(&self) -> &'static [&'static str] {
            &[#(#names),*]
        }

        fn field_shape(&self, name: &str) -> ::core::option::Option<::sparse_fieldsets::FieldShape> {
            match name {
                #(#names => ::core::option::Option::Some(#shapes),)*
                _ => ::core::option::Option::None
            }
        }

        fn attr(&self, name: &str) -> ::core::option::Option<&dyn ::sparse_fieldsets::Data> {
            match name {
                #(#nested_names => ::core::option::Option::Some(
                    &self.#nested_idents as &dyn ::sparse_fieldsets::Data
                ),)*
                _ => ::core::option::Option::None
            }
        }

        fn attr_value(
            &self,
            name: &str
        ) -> ::core::option::Option<
            ::sparse_fieldsets::serde_json::Result<::sparse_fieldsets::serde_json::Value>
        > {
            match name {
                #(#scalar_names => ::core::option::Option::Some(
                    ::sparse_fieldsets::serde_json::to_value(&self.#scalar_idents)
                ),)*
                _ => ::core::option::Option::None
            }
        }

        #defaulted
        #is_set
    }
}

fn generate_defaulted(record: &RecordDef) -> TokenStream {
    if !record.has_defaulted_fields() {
        return TokenStream::new();
    }

    let fields = record.fields.iter().filter(|f| f.default);
    let names = fields.clone().map(|f| f.name.as_str());
    let idents = fields.clone().map(|f| &f.ident);
    let types = fields.map(|f| &f.ty);

    quote! {
        fn is_field_defaulted(&self, name: &str) -> bool {
            match name {
                #(#names => self.#idents == <#types as ::core::default::Default>::default(),)*
                _ => false
            }
        }
    }
}

fn generate_is_set(record: &RecordDef) -> TokenStream {
    let Some(method) = &record.is_set else {
        return TokenStream::new();
    };

    quote! {
        fn is_field_set(&self, name: &str) -> bool {
            self.#method(name)
        }
    }
}
