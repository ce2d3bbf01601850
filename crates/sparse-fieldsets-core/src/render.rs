// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The expansion engine.
//!
//! Rendering resolves the request, projects the record, then resolves
//! expansions breadth-first:
//!
//! 1. every pending expansion of the round starts at once
//! 2. the round waits for all of them
//! 3. each result is resolved with its requested subfields, projected and
//!    spliced into the output with [`path_put`]
//! 4. expansions found inside results form the next round
//!
//! Rounds stop after [`RenderOptions::max_depth`]; whatever is still
//! pending is dropped.

use futures::future::{BoxFuture, try_join_all};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    data::{Data, View},
    error::{Error, Result},
    expansion::Context,
    path::{Path, path_put},
    project::{ProjectionOptions, project_data},
    record::Record,
    request::FieldRequest,
    resolve::{ExpansionSet, Resolution, resolve_record, resolve_view}
};

/// Default number of expansion rounds.
pub const DEFAULT_MAX_DEPTH: usize = 5;

const NO_CONTEXT: &Context = &();

/// Rendering options.
///
/// Deserializable with defaults for every missing key:
///
/// ```rust
/// use sparse_fieldsets_core::RenderOptions;
///
/// let options: RenderOptions = serde_json::from_str(r#"{"max_depth": 2}"#).unwrap();
/// assert_eq!(options.max_depth, 2);
/// assert!(!options.raise_on_missing_expansion);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Maximum number of expansion rounds.
    pub max_depth:                  usize,
    /// Fail when an expansion returns nothing instead of omitting it.
    pub raise_on_missing_expansion: bool,
    /// Field-omission flags.
    pub projection:                 ProjectionOptions
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOptions {
    /// Five rounds, missing expansions omitted, every field kept.
    pub const fn new() -> Self {
        Self {
            max_depth:                  DEFAULT_MAX_DEPTH,
            raise_on_missing_expansion: false,
            projection:                 ProjectionOptions::new()
        }
    }

    /// Set [`max_depth`](Self::max_depth).
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set [`raise_on_missing_expansion`](Self::raise_on_missing_expansion).
    #[must_use]
    pub const fn with_raise_on_missing_expansion(mut self, raise: bool) -> Self {
        self.raise_on_missing_expansion = raise;
        self
    }

    /// Set [`projection`](Self::projection).
    #[must_use]
    pub const fn with_projection(mut self, projection: ProjectionOptions) -> Self {
        self.projection = projection;
        self
    }
}

/// Renders records with a fixed set of options and context.
///
/// # Example
///
/// ```rust,ignore
/// let loaders = Loaders::new(pool);
/// let renderer = Renderer::new(RenderOptions::new().with_max_depth(3)).with_context(&loaders);
/// let body = renderer.render(&response, "id,items.detail").await?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'c> {
    options: RenderOptions,
    context: &'c Context
}

impl Renderer<'static> {
    /// Renderer without a context.
    pub const fn new(options: RenderOptions) -> Self {
        Self {
            options,
            context: NO_CONTEXT
        }
    }
}

impl Default for Renderer<'static> {
    fn default() -> Self {
        Self::new(RenderOptions::new())
    }
}

impl<'c> Renderer<'c> {
    /// Hand `context` to every expansion.
    pub fn with_context<'n>(self, context: &'n Context) -> Renderer<'n> {
        Renderer {
            options: self.options,
            context
        }
    }

    /// Options in use.
    pub const fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `record` with the requested fields and expansions.
    ///
    /// # Errors
    ///
    /// Any expansion error, a missing expansion when
    /// [`RenderOptions::raise_on_missing_expansion`] is set, a
    /// merge-upwards contract violation, or a tree addressing error. No
    /// partial output is returned.
    pub async fn render(&self, record: &dyn Record, fields: impl Into<FieldRequest>) -> Result<Value> {
        let request = fields.into();
        let Resolution { mask, expansions } = resolve_record(&request, record);
        let mut output = record.project(&mask, &self.options.projection)?;
        self.run_rounds(&mut output, expansions, 0).await?;
        Ok(output)
    }

    fn run_rounds<'s>(
        &'s self,
        output: &'s mut Value,
        pending: ExpansionSet<'s>,
        depth: usize
    ) -> BoxFuture<'s, Result<()>> {
        Box::pin(async move {
            if pending.is_empty() {
                return Ok(());
            }
            if depth >= self.options.max_depth {
                tracing::debug!(
                    dropped = pending.len(),
                    max_depth = self.options.max_depth,
                    "expansion depth limit reached"
                );
                return Ok(());
            }

            let pending: Vec<_> = pending.into_iter().collect();
            tracing::debug!(round = depth + 1, pending = pending.len(), "resolving expansion round");

            let results = try_join_all(pending.iter().map(|instruction| {
                instruction
                    .expansion
                    .expand(instruction.source, self.context)
            }))
            .await?;

            let mut next = ExpansionSet::new();
            for (instruction, result) in pending.iter().zip(&results) {
                let Some(result) = result.as_ref().filter(|result| !result.is_missing()) else {
                    if self.options.raise_on_missing_expansion {
                        return Err(Error::ExpansionNotFound {
                            path: instruction.path.to_string()
                        });
                    }
                    tracing::debug!(path = %instruction.path, "expansion returned nothing");
                    continue;
                };

                let merge_upwards = instruction.expansion.merge_upwards();
                let view = result.view();
                if merge_upwards && !matches!(view, View::Record(_) | View::Map(_)) {
                    return Err(Error::MergeUpwardsMismatch {
                        name:   instruction.name.clone(),
                        record: instruction.source.type_name().to_owned(),
                        found:  view.kind()
                    });
                }

                let Resolution { mask, expansions } =
                    resolve_view(&instruction.requested, view, &Path::root());
                let rendered = project_data(result, &mask, &self.options.projection)?;

                let target = if merge_upwards {
                    instruction.path.parent().unwrap_or_default()
                } else {
                    instruction.path.clone()
                };
                path_put(output, target, rendered)?;

                next.extend(
                    expansions
                        .into_iter()
                        .map(|nested| nested.rehome(&instruction.path))
                );
            }

            self.run_rounds(output, next, depth + 1).await
        })
    }
}

/// Render `record` with the requested fields and expansions.
///
/// This is the single entry point used by framework adapters.
///
/// # Errors
///
/// See [`Renderer::render`].
pub async fn render_fieldset_model(
    record: &dyn Record,
    fields: impl Into<FieldRequest>,
    options: &RenderOptions,
    context: Option<&Context>
) -> Result<Value> {
    Renderer {
        options: *options,
        context: context.unwrap_or(NO_CONTEXT)
    }
    .render(record, fields)
    .await
}
