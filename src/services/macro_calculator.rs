// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ratio scaling of catalog macros to logged quantities.

use crate::db::ReferenceCatalog;
use crate::models::{LoggedEntry, MealSlot, NormalizedMacros, ReferenceItem, ReferenceKind};
use chrono::{DateTime, Utc};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A logged entry paired with its absolute macros.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NormalizedEntry {
    pub entry_id: String,
    pub reference_kind: ReferenceKind,
    pub reference_id: String,
    pub meal_slot: MealSlot,
    pub consumed_at: DateTime<Utc>,
    pub macros: NormalizedMacros,
}

impl NormalizedEntry {
    pub fn is_resolved(&self) -> bool {
        !self.macros.unresolved
    }
}

/// Converts logged quantities into absolute macros.
pub struct MacroCalculator;

impl MacroCalculator {
    /// Scale `item`'s macro profile to the quantity logged in `entry`.
    ///
    /// A missing item, or one that is not the record the entry points at,
    /// yields zero macros flagged `unresolved`.
    pub fn normalize(entry: &LoggedEntry, item: Option<&ReferenceItem>) -> NormalizedMacros {
        match item {
            Some(item) if item.matches(entry.reference_kind, &entry.reference_id) => {
                NormalizedMacros::resolved(item.macros().scaled(Self::ratio(entry, item)))
            }
            Some(item) => {
                tracing::warn!(
                    entry_id = %entry.id,
                    expected_kind = %entry.reference_kind,
                    expected_id = %entry.reference_id,
                    got_kind = %item.kind(),
                    got_id = %item.id(),
                    "Catalog returned a different item; treating entry as unresolved"
                );
                NormalizedMacros::unresolved()
            }
            None => {
                tracing::warn!(
                    entry_id = %entry.id,
                    kind = %entry.reference_kind,
                    reference_id = %entry.reference_id,
                    "Reference item not found"
                );
                NormalizedMacros::unresolved()
            }
        }
    }

    /// Resolve the entry's reference through `catalog`, then normalize.
    pub fn normalize_with_catalog<C: ReferenceCatalog + ?Sized>(
        entry: &LoggedEntry,
        catalog: &C,
    ) -> NormalizedMacros {
        let item = catalog.resolve_reference(entry.reference_kind, &entry.reference_id);
        Self::normalize(entry, item.as_ref())
    }

    /// Normalize every entry, keeping unresolved ones in the output.
    pub fn normalize_all<C: ReferenceCatalog + ?Sized>(
        entries: &[LoggedEntry],
        catalog: &C,
    ) -> Vec<NormalizedEntry> {
        entries
            .iter()
            .map(|entry| NormalizedEntry {
                entry_id: entry.id.clone(),
                reference_kind: entry.reference_kind,
                reference_id: entry.reference_id.clone(),
                meal_slot: entry.meal_slot,
                consumed_at: entry.consumed_at,
                macros: Self::normalize_with_catalog(entry, catalog),
            })
            .collect()
    }

    /// Macros for exactly one reference portion of `item` (ratio 1), as shown
    /// when recommending a food or recipe.
    pub fn per_serving(item: &ReferenceItem) -> NormalizedMacros {
        NormalizedMacros::resolved(*item.macros())
    }

    /// Logged quantity divided by the item's serving basis.
    ///
    /// Food quantities are grams over `serving_size` grams; recipe
    /// quantities are servings over `servings`.
    pub fn ratio(entry: &LoggedEntry, item: &ReferenceItem) -> f64 {
        entry.quantity.get() / item.serving_basis().get()
    }
}
