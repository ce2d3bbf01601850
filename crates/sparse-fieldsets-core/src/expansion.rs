// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Expansions: deferred computations attached to the output tree.
//!
//! An expansion is declared in a record's [`FieldsetConfig`] and runs only
//! when requested. [`MethodExpansion`] dispatches to a method of the source
//! record through [`Record::invoke`]; custom variants implement
//! [`Expansion`] directly.
//!
//! Expansions in one round run concurrently and are awaited together, so a
//! batching loader reached through the render [`Context`] sees every key of
//! the round before it has to fetch.
//!
//! [`FieldsetConfig`]: crate::FieldsetConfig

use std::{
    any::Any,
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    fmt
};

use async_trait::async_trait;
use futures::future::BoxFuture;
use indexmap::IndexMap;
use serde_json::Value;

use crate::{
    data::{Data, View},
    error::{Error, Result},
    record::Record
};

/// Caller-supplied context handed to every expansion.
pub type Context = dyn Any + Send + Sync;

/// Future returned by [`Record::invoke`].
pub type ExpandFuture<'a> = BoxFuture<'a, Result<Option<Expanded>>>;

/// Borrow the render context as a concrete type.
///
/// # Errors
///
/// Returns [`Error::ContextMismatch`] if the context is of another type.
pub fn downcast_context<T: Any>(context: &Context) -> Result<&T> {
    context.downcast_ref::<T>().ok_or(Error::ContextMismatch {
        expected: std::any::type_name::<T>()
    })
}

/// A named, possibly asynchronous computation producing extra output.
#[async_trait]
pub trait Expansion: Send + Sync + fmt::Debug {
    /// Splice the result into the parent of the expansion's slot.
    fn merge_upwards(&self) -> bool {
        false
    }

    /// Declared result type, for documentation.
    fn response_shape(&self) -> Option<&str> {
        None
    }

    /// Compute the expansion for `source`.
    ///
    /// `Ok(None)` means "not found".
    async fn expand(&self, source: &dyn Record, context: &Context) -> Result<Option<Expanded>>;
}

/// Expansion backed by a method of the source record.
///
/// The method is looked up when the expansion runs, not when it is
/// configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodExpansion {
    method:         Cow<'static, str>,
    merge_upwards:  bool,
    response_shape: Option<Cow<'static, str>>
}

impl MethodExpansion {
    /// Expansion calling `method` on the source record.
    pub fn new(method: impl Into<Cow<'static, str>>) -> Self {
        Self {
            method:         method.into(),
            merge_upwards:  false,
            response_shape: None
        }
    }

    /// Set whether the result is spliced into the parent.
    #[must_use]
    pub fn with_merge_upwards(mut self, merge_upwards: bool) -> Self {
        self.merge_upwards = merge_upwards;
        self
    }

    /// Declare the result type.
    #[must_use]
    pub fn with_response_shape(mut self, shape: impl Into<Cow<'static, str>>) -> Self {
        self.response_shape = Some(shape.into());
        self
    }

    /// Name of the method invoked.
    pub fn method(&self) -> &str {
        &self.method
    }
}

#[async_trait]
impl Expansion for MethodExpansion {
    fn merge_upwards(&self) -> bool {
        self.merge_upwards
    }

    fn response_shape(&self) -> Option<&str> {
        self.response_shape.as_deref()
    }

    async fn expand(&self, source: &dyn Record, context: &Context) -> Result<Option<Expanded>> {
        match source.invoke(&self.method, context) {
            Some(future) => future.await,
            None => Err(Error::NoSuchExpansionMethod {
                method: self.method.to_string(),
                record: source.type_name().to_owned()
            })
        }
    }
}

/// Result of an expansion.
pub enum Expanded {
    /// A record, projected with the requested subfields.
    Record(Box<dyn Record>),
    /// A plain value.
    Value(Value),
    /// A sequence of results.
    List(Vec<Expanded>),
    /// A mapping of results.
    Map(IndexMap<String, Expanded>)
}

impl Expanded {
    /// Wrap a record.
    pub fn record(record: impl Record + 'static) -> Self {
        Self::Record(Box::new(record))
    }

    /// Check if this result means "not found".
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }
}

impl fmt::Debug for Expanded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record(record) => f.debug_tuple("Record").field(&record.type_name()).finish(),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Map(entries) => f.debug_tuple("Map").field(entries).finish()
        }
    }
}

impl Data for Expanded {
    fn view(&self) -> View<'_> {
        match self {
            Self::Record(record) => View::Record(&**record),
            Self::Value(value) => value.view(),
            Self::List(items) => View::List(items.iter().map(|item| item as &dyn Data).collect()),
            Self::Map(entries) => View::Map(
                entries
                    .iter()
                    .map(|(key, item)| (Cow::Borrowed(key.as_str()), item as &dyn Data))
                    .collect()
            )
        }
    }
}

/// Conversion of expansion method return values.
///
/// `None` and `Value::Null` mean "not found". Missing elements inside
/// sequences and mappings become `null`.
pub trait IntoExpanded {
    /// Convert into an expansion result.
    fn into_expanded(self) -> Option<Expanded>;
}

fn or_null<T: IntoExpanded>(item: T) -> Expanded {
    item.into_expanded().unwrap_or(Expanded::Value(Value::Null))
}

impl IntoExpanded for Expanded {
    fn into_expanded(self) -> Option<Expanded> {
        Some(self)
    }
}

impl IntoExpanded for Value {
    fn into_expanded(self) -> Option<Expanded> {
        (!self.is_null()).then_some(Expanded::Value(self))
    }
}

impl IntoExpanded for Box<dyn Record> {
    fn into_expanded(self) -> Option<Expanded> {
        Some(Expanded::Record(self))
    }
}

impl<T: IntoExpanded> IntoExpanded for Option<T> {
    fn into_expanded(self) -> Option<Expanded> {
        self.and_then(IntoExpanded::into_expanded)
    }
}

impl<T: IntoExpanded> IntoExpanded for Vec<T> {
    fn into_expanded(self) -> Option<Expanded> {
        Some(Expanded::List(self.into_iter().map(or_null).collect()))
    }
}

macro_rules! map_into_expanded {
    ($($map:ident $(<$s:ident>)?),* $(,)?) => {
        $(
            impl<T: IntoExpanded $(, $s)?> IntoExpanded for $map<String, T $(, $s)?> {
                fn into_expanded(self) -> Option<Expanded> {
                    Some(Expanded::Map(
                        self.into_iter().map(|(key, item)| (key, or_null(item))).collect()
                    ))
                }
            }
        )*
    };
}

map_into_expanded!(BTreeMap, HashMap<S>, IndexMap<S>);

macro_rules! scalar_into_expanded {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoExpanded for $ty {
                fn into_expanded(self) -> Option<Expanded> {
                    Some(Expanded::Value(Value::from(self)))
                }
            }
        )*
    };
}

scalar_into_expanded!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String
);

impl IntoExpanded for &str {
    fn into_expanded(self) -> Option<Expanded> {
        Some(Expanded::Value(Value::from(self)))
    }
}
