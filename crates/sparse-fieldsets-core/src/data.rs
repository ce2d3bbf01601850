// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime shape of values reachable from a record.
//!
//! The resolver and the projection walk values through [`Data::view`]:
//! absent values, leaves, records, sequences and string-keyed mappings.
//! Implementations are provided for the usual std containers, `IndexMap`
//! and `serde_json::Value`; records get theirs from `#[derive(Record)]`.

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap, VecDeque},
    sync::Arc
};

use indexmap::IndexMap;
use serde_json::Value;

use crate::record::Record;

/// One level of a value, as seen by the resolver.
pub enum View<'a> {
    /// Nothing to select from.
    Null,
    /// A plain value, already serialized.
    Leaf(Value),
    /// A structured record.
    Record(&'a dyn Record),
    /// An ordered sequence.
    List(Vec<&'a dyn Data>),
    /// A string-keyed mapping.
    Map(Vec<(Cow<'a, str>, &'a dyn Data)>)
}

impl View<'_> {
    /// Short name of the variant, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Leaf(_) => "scalar",
            Self::Record(_) => "record",
            Self::List(_) => "list",
            Self::Map(_) => "mapping"
        }
    }

    /// Check if the resolver can select inside this value.
    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::Record(_) | Self::List(_) | Self::Map(_))
    }
}

/// A value the resolver can walk.
pub trait Data: Send + Sync {
    /// Describe the outermost level of this value.
    fn view(&self) -> View<'_>;
}

macro_rules! leaf_data {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Data for $ty {
                fn view(&self) -> View<'_> {
                    View::Leaf(Value::from(self.clone()))
                }
            }
        )*
    };
}

leaf_data!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String
);

impl Data for str {
    fn view(&self) -> View<'_> {
        View::Leaf(Value::from(self))
    }
}

impl Data for char {
    fn view(&self) -> View<'_> {
        View::Leaf(Value::from(self.to_string()))
    }
}

impl Data for Value {
    fn view(&self) -> View<'_> {
        match self {
            Value::Null => View::Null,
            Value::Array(items) => View::List(items.iter().map(|item| item as &dyn Data).collect()),
            Value::Object(entries) => View::Map(
                entries
                    .iter()
                    .map(|(key, item)| (Cow::Borrowed(key.as_str()), item as &dyn Data))
                    .collect()
            ),
            leaf => View::Leaf(leaf.clone())
        }
    }
}

impl<T: Data> Data for Option<T> {
    fn view(&self) -> View<'_> {
        match self {
            Some(inner) => inner.view(),
            None => View::Null
        }
    }
}

impl<T: Data + ?Sized> Data for &T {
    fn view(&self) -> View<'_> {
        (**self).view()
    }
}

impl<T: Data + ?Sized> Data for Box<T> {
    fn view(&self) -> View<'_> {
        (**self).view()
    }
}

impl<T: Data + ?Sized> Data for Arc<T> {
    fn view(&self) -> View<'_> {
        (**self).view()
    }
}

impl<T: Data> Data for [T] {
    fn view(&self) -> View<'_> {
        View::List(self.iter().map(|item| item as &dyn Data).collect())
    }
}

impl<T: Data> Data for Vec<T> {
    fn view(&self) -> View<'_> {
        self.as_slice().view()
    }
}

impl<T: Data, const N: usize> Data for [T; N] {
    fn view(&self) -> View<'_> {
        self.as_slice().view()
    }
}

impl<T: Data> Data for VecDeque<T> {
    fn view(&self) -> View<'_> {
        View::List(self.iter().map(|item| item as &dyn Data).collect())
    }
}

macro_rules! map_data {
    ($($map:ident $(<$s:ident>)?),* $(,)?) => {
        $(
            impl<T: Data $(, $s: Send + Sync)?> Data for $map<String, T $(, $s)?> {
                fn view(&self) -> View<'_> {
                    View::Map(
                        self.iter()
                            .map(|(key, item)| (Cow::Borrowed(key.as_str()), item as &dyn Data))
                            .collect()
                    )
                }
            }
        )*
    };
}

map_data!(BTreeMap, HashMap<S>, IndexMap<S>);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn leaves_serialize_eagerly() {
        assert!(matches!(42_i64.view(), View::Leaf(v) if v == json!(42)));
        assert!(matches!("x".view(), View::Leaf(v) if v == json!("x")));
        assert!(matches!(None::<i64>.view(), View::Null));
    }

    #[test]
    fn containers_expose_children() {
        let list = vec![1, 2, 3];
        assert!(matches!(list.view(), View::List(items) if items.len() == 3));

        let mut map = BTreeMap::new();
        map.insert("a".to_owned(), vec![1]);
        match map.view() {
            View::Map(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].0, "a");
                assert_eq!(entries[0].1.view().kind(), "list");
            }
            other => panic!("unexpected view {}", other.kind())
        }
    }

    #[test]
    fn json_values_map_onto_views() {
        assert_eq!(json!(null).view().kind(), "null");
        assert_eq!(json!({"a": 1}).view().kind(), "mapping");
        assert_eq!(json!([1]).view().kind(), "list");
        assert_eq!(json!("s").view().kind(), "scalar");
        assert!(!json!(1).view().is_structured());
    }
}
