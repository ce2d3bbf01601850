// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared fixtures for rendering tests.

#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

/// Batching loader counting its fetches.
///
/// Every `load` issued before the current task yields lands in the same
/// batch, so expansions started together in one round share one fetch.
pub struct BatchLoader<V> {
    fetch:   fn(u64) -> V,
    pending: Mutex<Vec<u64>>,
    loaded:  Mutex<HashMap<u64, V>>,
    batches: Mutex<Vec<Vec<u64>>>
}

impl<V: Clone> BatchLoader<V> {
    pub fn new(fetch: fn(u64) -> V) -> Self {
        Self {
            fetch,
            pending: Mutex::new(Vec::new()),
            loaded: Mutex::new(HashMap::new()),
            batches: Mutex::new(Vec::new())
        }
    }

    pub async fn load(&self, key: u64) -> V {
        let cached = self.loaded.lock().unwrap().contains_key(&key);
        if !cached {
            self.pending.lock().unwrap().push(key);
        }

        tokio::task::yield_now().await;

        let mut batch = std::mem::take(&mut *self.pending.lock().unwrap());
        if !batch.is_empty() {
            batch.sort_unstable();
            batch.dedup();
            let mut loaded = self.loaded.lock().unwrap();
            for key in &batch {
                loaded.insert(*key, (self.fetch)(*key));
            }
            self.batches.lock().unwrap().push(batch);
        }

        self.loaded.lock().unwrap()[&key].clone()
    }

    /// Number of fetches issued.
    pub fn calls(&self) -> usize {
        self.batches.lock().unwrap().len()
    }

    /// Keys of every fetch, in order.
    pub fn batches(&self) -> Vec<Vec<u64>> {
        self.batches.lock().unwrap().clone()
    }
}
