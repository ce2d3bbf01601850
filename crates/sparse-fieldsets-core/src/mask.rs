// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Inclusion masks.

use std::collections::{BTreeMap, btree_map::Entry};

use crate::path::Segment;

static ALL: Mask = Mask::All;

/// Tree describing which fields, keys and positions survive projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mask {
    /// Keep the whole value.
    All,
    /// Keep only the listed children, each narrowed by its own mask.
    Fields(BTreeMap<Segment, Mask>)
}

impl Default for Mask {
    fn default() -> Self {
        Self::empty()
    }
}

impl Mask {
    /// Mask selecting nothing.
    pub const fn empty() -> Self {
        Self::Fields(BTreeMap::new())
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Fields(children) if children.is_empty())
    }

    /// Check if everything is selected.
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Mask for a child, if the child is selected.
    ///
    /// Every child of [`Mask::All`] is itself selected in full.
    pub fn get(&self, segment: &Segment) -> Option<&Mask> {
        match self {
            Self::All => Some(&ALL),
            Self::Fields(children) => children.get(segment)
        }
    }

    /// Mask for a mapping entry. Entries the mask does not mention are kept
    /// whole.
    pub fn entry_or_all(&self, segment: &Segment) -> &Mask {
        self.get(segment).unwrap_or(&ALL)
    }

    /// Select a child, merging with any existing selection.
    pub fn insert(&mut self, segment: impl Into<Segment>, mask: Mask) {
        if let Self::Fields(children) = self {
            match children.entry(segment.into()) {
                Entry::Occupied(mut slot) => slot.get_mut().merge(mask),
                Entry::Vacant(slot) => {
                    slot.insert(mask);
                }
            }
        }
    }

    /// Deep union with another mask. [`Mask::All`] absorbs anything.
    pub fn merge(&mut self, other: Mask) {
        match (self, other) {
            (Self::All, _) => {}
            (this, Self::All) => *this = Self::All,
            (Self::Fields(children), Self::Fields(incoming)) => {
                for (segment, mask) in incoming {
                    match children.entry(segment) {
                        Entry::Occupied(mut slot) => {
                            slot.get_mut().merge(mask)
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(mask);
                        }
                    }
                }
            }
        }
    }

    /// Selected children in segment order. Empty for [`Mask::All`].
    pub fn children(&self) -> impl Iterator<Item = (&Segment, &Mask)> {
        match self {
            Self::All => None,
            Self::Fields(children) => Some(children.iter())
        }
        .into_iter()
        .flatten()
    }
}
