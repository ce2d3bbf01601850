// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Fieldset resolution.
//!
//! [`resolve()`] walks a [`FieldRequest`] alongside a value and returns the
//! [`Mask`] to project it with, plus the expansions the request asks for.
//!
//! # Dispatch
//!
//! | Value | Behaviour |
//! |-------|-----------|
//! | absent, leaf | nothing selected |
//! | sequence | every element sees the same request |
//! | mapping | every entry sees the request with its first segment dropped |
//! | record | defaults, fields, expansions and aliases, see below |
//!
//! Sequence and mapping elements whose resolution selects nothing are kept
//! whole. Elements of a record-shaped field are not: an opt-in record inside
//! a field stays empty unless something is requested.
//!
//! # Records
//!
//! Without a configuration every declared field is included. A `default`
//! fieldset is unioned into the request; a `["*"]` default adds every field
//! and every expansion. Each token is split at its first dot:
//!
//! - record-shaped field: recurse with the tails
//! - plain field: include whole
//! - expansion: one instruction per name, subfields unioned
//! - member list: resolve the members against the same record and path
//! - anything else: ignored

use std::{borrow::Cow, collections::BTreeMap, fmt, sync::Arc};

use indexmap::{IndexMap, map::Entry};

use crate::{
    config::FieldsetEntry,
    data::{Data, View},
    expansion::Expansion,
    mask::Mask,
    path::Path,
    record::Record,
    request::FieldRequest
};

/// A pending expansion call.
///
/// Two instructions with the same path and name are the same unit of work.
pub struct ExpansionInstruction<'a> {
    /// Expansion to run.
    pub expansion: Arc<dyn Expansion>,
    /// Fieldset name the expansion is declared under.
    pub name:      String,
    /// Output path the result is spliced at.
    pub path:      Path,
    /// Fields requested inside the result.
    pub requested: FieldRequest,
    /// Record that declared the expansion.
    pub source:    &'a dyn Record
}

impl ExpansionInstruction<'_> {
    /// Prefix the output path, for instructions found inside an expansion
    /// result.
    #[must_use]
    pub fn rehome(mut self, prefix: &Path) -> Self {
        self.path = self.path.rehome(prefix);
        self
    }
}

impl fmt::Debug for ExpansionInstruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpansionInstruction")
            .field("name", &self.name)
            .field("path", &self.path.to_string())
            .field("requested", &self.requested)
            .field("source", &self.source.type_name())
            .finish()
    }
}

/// Instructions deduplicated by `(path, name)`, in discovery order.
#[derive(Debug, Default)]
pub struct ExpansionSet<'a> {
    entries: IndexMap<(Path, String), ExpansionInstruction<'a>>
}

impl<'a> ExpansionSet<'a> {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instruction. A duplicate unions its requested fields into the
    /// existing entry.
    pub fn insert(&mut self, instruction: ExpansionInstruction<'a>) {
        let key = (instruction.path.clone(), instruction.name.clone());
        match self.entries.entry(key) {
            Entry::Occupied(mut slot) => slot.get_mut().requested.union(&instruction.requested),
            Entry::Vacant(slot) => {
                slot.insert(instruction);
            }
        }
    }

    /// Number of distinct instructions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Instructions in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &ExpansionInstruction<'a>> {
        self.entries.values()
    }

    /// Check if an instruction with this path and name is pending.
    pub fn contains(&self, path: &Path, name: &str) -> bool {
        self.entries.contains_key(&(path.clone(), name.to_owned()))
    }
}

impl<'a> Extend<ExpansionInstruction<'a>> for ExpansionSet<'a> {
    fn extend<I: IntoIterator<Item = ExpansionInstruction<'a>>>(&mut self, iter: I) {
        for instruction in iter {
            self.insert(instruction);
        }
    }
}

impl<'a> IntoIterator for ExpansionSet<'a> {
    type Item = ExpansionInstruction<'a>;
    type IntoIter = indexmap::map::IntoValues<(Path, String), ExpansionInstruction<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

/// Output of the resolver.
#[derive(Debug, Default)]
pub struct Resolution<'a> {
    /// What to project.
    pub mask:       Mask,
    /// What to expand.
    pub expansions: ExpansionSet<'a>
}

impl Resolution<'_> {
    fn absorb(&mut self, other: Self) {
        self.mask.merge(other.mask);
        self.expansions.extend(other.expansions);
    }
}

/// Resolve `request` against any value.
pub fn resolve<'a>(request: &FieldRequest, data: &'a dyn Data) -> Resolution<'a> {
    resolve_view(request, data.view(), &Path::root())
}

/// Resolve `request` against a record.
///
/// # Example
///
/// ```rust,ignore
/// let Resolution { mask, expansions } = resolve_record(&"id,items.detail".into(), &response);
/// ```
pub fn resolve_record<'a>(request: &FieldRequest, record: &'a dyn Record) -> Resolution<'a> {
    resolve_in_record(request, record, &Path::root(), &mut Vec::new())
}

pub(crate) fn resolve_view<'a>(tokens: &FieldRequest, view: View<'a>, path: &Path) -> Resolution<'a> {
    match view {
        View::Null | View::Leaf(_) => Resolution::default(),
        View::Record(record) => resolve_in_record(tokens, record, path, &mut Vec::new()),
        View::List(items) => resolve_elements(tokens, items, path, Unselected::IncludeAll),
        View::Map(entries) => {
            let stripped: FieldRequest = tokens
                .iter()
                .map(|token| token.split_once('.').map_or(token, |(_, tail)| tail))
                .collect();
            resolve_entries(&stripped, entries, path, Unselected::IncludeAll)
        }
    }
}

/// What an element of a sequence or mapping projects to when its
/// resolution selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unselected {
    /// Everything. Elements of free-standing containers, such as expansion
    /// results.
    IncludeAll,
    /// Nothing. Elements of a record-shaped field follow their own fieldsets.
    Keep
}

/// Per-element resolution. Elements the resolver cannot select inside are
/// included whole.
fn resolve_element<'a>(
    tokens: &FieldRequest,
    item: &'a dyn Data,
    path: &Path,
    unselected: Unselected
) -> Resolution<'a> {
    let view = item.view();
    if !view.is_structured() {
        return Resolution {
            mask:       Mask::All,
            expansions: ExpansionSet::new()
        };
    }
    let mut resolution = resolve_view(tokens, view, path);
    if unselected == Unselected::IncludeAll && resolution.mask.is_empty() {
        resolution.mask = Mask::All;
    }
    resolution
}

fn resolve_elements<'a>(
    tokens: &FieldRequest,
    items: Vec<&'a dyn Data>,
    path: &Path,
    unselected: Unselected
) -> Resolution<'a> {
    let mut resolution = Resolution::default();
    for (index, item) in items.into_iter().enumerate() {
        let sub = resolve_element(tokens, item, &path.child(index), unselected);
        resolution.mask.insert(index, sub.mask);
        resolution.expansions.extend(sub.expansions);
    }
    resolution
}

fn resolve_entries<'a>(
    tokens: &FieldRequest,
    entries: Vec<(Cow<'a, str>, &'a dyn Data)>,
    path: &Path,
    unselected: Unselected
) -> Resolution<'a> {
    let mut resolution = Resolution::default();
    for (key, item) in entries {
        let key = key.into_owned();
        let sub = resolve_element(tokens, item, &path.child(key.as_str()), unselected);
        resolution.mask.insert(key, sub.mask);
        resolution.expansions.extend(sub.expansions);
    }
    resolution
}

/// Value of a record-shaped field. Mapping keys are data, so the tails pass
/// through them unchanged.
fn resolve_field<'a>(tails: &FieldRequest, value: &'a dyn Data, path: &Path) -> Resolution<'a> {
    match value.view() {
        View::List(items) => resolve_elements(tails, items, path, Unselected::Keep),
        View::Map(entries) => resolve_entries(tails, entries, path, Unselected::Keep),
        view => resolve_view(tails, view, path)
    }
}

fn resolve_in_record<'a>(
    tokens: &FieldRequest,
    record: &'a dyn Record,
    path: &Path,
    active_aliases: &mut Vec<String>
) -> Resolution<'a> {
    let config = record.fieldset_config();

    let mut effective = tokens.clone();
    match config {
        None => effective.extend(record.declared_fields()),
        Some(config) if config.is_wildcard_default() => {
            effective.extend(record.declared_fields());
            effective.extend(config.expansion_names());
        }
        Some(config) => {
            if let Some(defaults) = config.default_members() {
                effective.union(&defaults);
            }
        }
    }

    let mut groups: BTreeMap<&str, FieldRequest> = BTreeMap::new();
    for token in effective.iter() {
        let (head, tail) = token.split_once('.').unwrap_or((token, ""));
        let tails = groups.entry(head).or_default();
        if !tail.is_empty() {
            tails.push(tail);
        }
    }

    let mut resolution = Resolution::default();

    for (head, tails) in groups {
        match record.field_shape(head) {
            Some(shape) if shape.contains_record() => {
                let field_path = path.child(head);
                let sub = record
                    .attr(head)
                    .map(|value| resolve_field(&tails, value, &field_path))
                    .unwrap_or_default();
                resolution.mask.insert(head, sub.mask);
                resolution.expansions.extend(sub.expansions);
            }
            Some(_) => resolution.mask.insert(head, Mask::All),
            None => match config.and_then(|config| config.get(head)) {
                Some(FieldsetEntry::Expansion(expansion)) => {
                    resolution.expansions.insert(ExpansionInstruction {
                        expansion: Arc::clone(expansion),
                        name:      head.to_owned(),
                        path:      path.child(head),
                        requested: tails,
                        source:    record
                    });
                }
                Some(FieldsetEntry::Members(members)) => {
                    if active_aliases.iter().any(|alias| alias == head) {
                        tracing::trace!(record = record.type_name(), alias = head, "skipping alias cycle");
                        continue;
                    }
                    let members: FieldRequest = FieldRequest::from(members.as_slice())
                        .iter()
                        .filter(|member| {
                            let member_head = member.split_once('.').map_or(*member, |(head, _)| head);
                            let resolvable = record.field_shape(member_head).is_some()
                                || (member_head != head
                                    && config.is_some_and(|config| config.contains(member_head)));
                            if !resolvable {
                                tracing::trace!(
                                    record = record.type_name(),
                                    alias = head,
                                    member = *member,
                                    "pruning unresolvable alias member"
                                );
                            }
                            resolvable
                        })
                        .collect();

                    active_aliases.push(head.to_owned());
                    let sub = resolve_in_record(&members, record, path, active_aliases);
                    active_aliases.pop();
                    resolution.absorb(sub);
                }
                None => {
                    tracing::trace!(record = record.type_name(), field = head, "ignoring unknown field");
                }
            }
        }
    }

    resolution
}
