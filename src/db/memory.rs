// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process implementations of the storage traits.

use crate::db::{GoalStore, ReferenceCatalog};
use crate::models::{Goal, ReferenceItem, ReferenceKind};
use anyhow::bail;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;

/// Food and recipe catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: HashMap<(ReferenceKind, String), ReferenceItem>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an item.
    pub fn insert(&mut self, item: ReferenceItem) {
        self.items
            .insert((item.kind(), item.id().to_string()), item);
    }

    /// Remove an item, as when a food is deleted upstream.
    pub fn remove(&mut self, kind: ReferenceKind, id: &str) -> Option<ReferenceItem> {
        self.items.remove(&(kind, id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<ReferenceItem> for InMemoryCatalog {
    fn from_iter<I: IntoIterator<Item = ReferenceItem>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for item in iter {
            catalog.insert(item);
        }
        catalog
    }
}

impl ReferenceCatalog for InMemoryCatalog {
    fn resolve_reference(&self, kind: ReferenceKind, id: &str) -> Option<ReferenceItem> {
        self.items.get(&(kind, id.to_string())).cloned()
    }
}

/// Goal store backed by a sharded concurrent map.
///
/// Version checks run while holding the shard write lock, which makes
/// `save_goal_if_version` atomic with respect to other writers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGoalStore {
    goals: Arc<DashMap<String, Goal>>,
}

impl InMemoryGoalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

impl GoalStore for InMemoryGoalStore {
    fn load_goal(&self, goal_id: &str) -> anyhow::Result<Option<Goal>> {
        Ok(self.goals.get(goal_id).map(|goal| goal.clone()))
    }

    fn insert_goal(&self, goal: &Goal) -> anyhow::Result<()> {
        match self.goals.entry(goal.id.clone()) {
            Entry::Occupied(_) => bail!("goal {} already exists", goal.id),
            Entry::Vacant(slot) => {
                slot.insert(goal.clone());
                Ok(())
            }
        }
    }

    fn save_goal_if_version(&self, goal: &Goal, expected_version: u64) -> anyhow::Result<bool> {
        let Some(mut stored) = self.goals.get_mut(&goal.id) else {
            bail!("goal {} does not exist", goal.id);
        };

        if stored.version != expected_version {
            tracing::debug!(
                goal_id = %goal.id,
                expected_version,
                stored_version = stored.version,
                "Goal version mismatch"
            );
            return Ok(false);
        }

        *stored = goal.clone();
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalStatus, GoalType, Macros};
    use chrono::NaiveDate;

    fn goal(id: &str, version: u64) -> Goal {
        Goal {
            id: id.to_string(),
            goal_type: GoalType::Weight,
            initial_value: 85.0,
            current_value: 85.0,
            target_value: 75.0,
            unit: "kg".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            target_date: None,
            status: GoalStatus::Active,
            progress: 0.0,
            history: vec![],
            version,
        }
    }

    #[test]
    fn test_catalog_resolves_by_kind_and_id() {
        let catalog: InMemoryCatalog = [
            ReferenceItem::food("1", Macros::new(165.0, 31.0, 0.0, 3.6), 100.0).unwrap(),
            ReferenceItem::recipe("1", Macros::new(300.0, 10.0, 40.0, 9.0), 1.0).unwrap(),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 2);
        let food = catalog.resolve_reference(ReferenceKind::Food, "1").unwrap();
        assert_eq!(food.macros().calories, 165.0);
        let recipe = catalog.resolve_reference(ReferenceKind::Recipe, "1").unwrap();
        assert_eq!(recipe.macros().calories, 300.0);
        assert!(catalog.resolve_reference(ReferenceKind::Food, "2").is_none());
    }

    #[test]
    fn test_insert_goal_rejects_duplicate() {
        let store = InMemoryGoalStore::new();
        store.insert_goal(&goal("g1", 0)).unwrap();
        assert!(store.insert_goal(&goal("g1", 0)).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_if_version() {
        let store = InMemoryGoalStore::new();
        store.insert_goal(&goal("g1", 0)).unwrap();

        let mut next = goal("g1", 1);
        next.current_value = 80.0;
        assert!(store.save_goal_if_version(&next, 0).unwrap());

        // Stale writer still believes version 0 is current
        let stale = goal("g1", 1);
        assert!(!store.save_goal_if_version(&stale, 0).unwrap());

        let stored = store.load_goal("g1").unwrap().unwrap();
        assert_eq!(stored.current_value, 80.0);
        assert_eq!(stored.version, 1);
    }

    #[test]
    fn test_save_missing_goal_errors() {
        let store = InMemoryGoalStore::new();
        assert!(store.save_goal_if_version(&goal("nope", 1), 0).is_err());
    }
}
