// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage collaborator interfaces.
//!
//! The engine never owns a data handle. Callers pass an implementation of
//! these traits into each operation; [`memory`] provides in-process versions
//! for tests and single-node hosts.

pub mod memory;

pub use memory::{InMemoryCatalog, InMemoryGoalStore};

use crate::models::{Goal, ReferenceItem, ReferenceKind};

/// Lookup of foods and recipes by kind and id.
pub trait ReferenceCatalog {
    /// Returns `None` when the item was deleted or never existed.
    fn resolve_reference(&self, kind: ReferenceKind, id: &str) -> Option<ReferenceItem>;
}

impl<T: ReferenceCatalog + ?Sized> ReferenceCatalog for &T {
    fn resolve_reference(&self, kind: ReferenceKind, id: &str) -> Option<ReferenceItem> {
        (**self).resolve_reference(kind, id)
    }
}

/// Goal persistence.
///
/// Two progress updates for the same goal may race. Implementations must
/// make [`GoalStore::save_goal_if_version`] an atomic compare-and-swap on
/// [`Goal::version`] so that a stale read-modify-write is rejected instead of
/// silently overwriting a newer update.
pub trait GoalStore: Send + Sync {
    fn load_goal(&self, goal_id: &str) -> anyhow::Result<Option<Goal>>;

    /// Store a newly created goal. Fails if the id is already taken.
    fn insert_goal(&self, goal: &Goal) -> anyhow::Result<()>;

    /// Replace the stored goal if its version still equals
    /// `expected_version`.
    ///
    /// Returns `Ok(false)` when another writer got there first.
    fn save_goal_if_version(&self, goal: &Goal, expected_version: u64) -> anyhow::Result<bool>;
}
