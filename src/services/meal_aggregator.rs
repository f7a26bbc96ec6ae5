// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Slot-level and day-level macro totals.
//!
//! Day totals are always the sum of the slot totals for that day. Entries
//! whose catalog item is gone still count toward `entry_count` so the
//! presentation layer can say "2 of 5 items not found" instead of quietly
//! reporting a low calorie day.

use crate::models::{Macros, MealSlot, NormalizedMacros};
use crate::services::macro_calculator::NormalizedEntry;
use crate::time_utils::local_day;
use chrono::{FixedOffset, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Totals for one meal slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MealTotals {
    pub macros: Macros,
    pub entry_count: u32,
    pub resolved_count: u32,
    pub unresolved_count: u32,
}

impl MealTotals {
    fn add(&mut self, macros: &NormalizedMacros) {
        self.macros += macros.macros;
        self.entry_count += 1;
        if macros.unresolved {
            self.unresolved_count += 1;
        } else {
            self.resolved_count += 1;
        }
    }

    fn merge(&mut self, other: &MealTotals) {
        self.macros += other.macros;
        self.entry_count += other.entry_count;
        self.resolved_count += other.resolved_count;
        self.unresolved_count += other.unresolved_count;
    }

    pub fn has_unresolved(&self) -> bool {
        self.unresolved_count > 0
    }
}

/// Totals for one day, with the per-slot breakdown they were summed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DayTotals {
    /// Calendar day, when the entries were grouped by day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub macros: Macros,
    pub entry_count: u32,
    pub resolved_count: u32,
    pub unresolved_count: u32,
    pub slots: BTreeMap<MealSlot, MealTotals>,
}

impl DayTotals {
    pub fn has_unresolved(&self) -> bool {
        self.unresolved_count > 0
    }

    /// Totals for one slot, zero when nothing was logged there.
    pub fn slot(&self, slot: MealSlot) -> MealTotals {
        self.slots.get(&slot).copied().unwrap_or_default()
    }
}

/// Groups normalized entries by meal slot and by day.
pub struct MealAggregator;

impl MealAggregator {
    /// Sum entries per meal slot. Slots with no entries are absent.
    pub fn aggregate_by_slot(entries: &[NormalizedEntry]) -> BTreeMap<MealSlot, MealTotals> {
        let mut slots: BTreeMap<MealSlot, MealTotals> = BTreeMap::new();
        for entry in entries {
            slots.entry(entry.meal_slot).or_default().add(&entry.macros);
        }
        slots
    }

    /// Day totals for entries already known to belong to a single day.
    pub fn aggregate_by_day(entries: &[NormalizedEntry]) -> DayTotals {
        let slots = Self::aggregate_by_slot(entries);

        let mut day = MealTotals::default();
        for totals in slots.values() {
            day.merge(totals);
        }

        DayTotals {
            date: None,
            macros: day.macros,
            entry_count: day.entry_count,
            resolved_count: day.resolved_count,
            unresolved_count: day.unresolved_count,
            slots,
        }
    }

    /// Sum every entry directly, ignoring slots.
    ///
    /// Agrees with [`MealAggregator::aggregate_by_day`] up to float rounding.
    pub fn direct_totals(entries: &[NormalizedEntry]) -> MealTotals {
        let mut totals = MealTotals::default();
        for entry in entries {
            totals.add(&entry.macros);
        }
        totals
    }

    /// Split entries into calendar days at `offset` and total each day.
    pub fn group_by_local_day(
        entries: &[NormalizedEntry],
        offset: FixedOffset,
    ) -> BTreeMap<NaiveDate, DayTotals> {
        let mut by_day: BTreeMap<NaiveDate, Vec<NormalizedEntry>> = BTreeMap::new();
        for entry in entries {
            by_day
                .entry(local_day(entry.consumed_at, offset))
                .or_default()
                .push(entry.clone());
        }

        by_day
            .into_iter()
            .map(|(date, day_entries)| {
                let mut totals = Self::aggregate_by_day(&day_entries);
                totals.date = Some(date);
                (date, totals)
            })
            .collect()
    }

    /// Sum of macros across several days.
    pub fn sum_days<'a, I>(days: I) -> Macros
    where
        I: IntoIterator<Item = &'a DayTotals>,
    {
        days.into_iter().map(|day| day.macros).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReferenceKind;
    use chrono::{TimeZone, Utc};

    fn normalized(id: &str, slot: MealSlot, macros: NormalizedMacros) -> NormalizedEntry {
        NormalizedEntry {
            entry_id: id.to_string(),
            reference_kind: ReferenceKind::Food,
            reference_id: "f".to_string(),
            meal_slot: slot,
            consumed_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            macros,
        }
    }

    #[test]
    fn test_aggregate_by_slot_counts_unresolved() {
        let entries = vec![
            normalized(
                "a",
                MealSlot::Lunch,
                NormalizedMacros::resolved(Macros::new(200.0, 20.0, 10.0, 5.0)),
            ),
            normalized("b", MealSlot::Lunch, NormalizedMacros::unresolved()),
            normalized(
                "c",
                MealSlot::Snack,
                NormalizedMacros::resolved(Macros::new(100.0, 1.0, 20.0, 1.0)),
            ),
        ];

        let slots = MealAggregator::aggregate_by_slot(&entries);

        let lunch = slots[&MealSlot::Lunch];
        assert_eq!(lunch.entry_count, 2);
        assert_eq!(lunch.resolved_count, 1);
        assert_eq!(lunch.unresolved_count, 1);
        assert_eq!(lunch.macros.calories, 200.0);
        assert!(!slots.contains_key(&MealSlot::Breakfast));
    }

    #[test]
    fn test_day_totals_sum_slots() {
        let entries = vec![
            normalized(
                "a",
                MealSlot::Breakfast,
                NormalizedMacros::resolved(Macros::new(300.0, 15.0, 40.0, 8.0)),
            ),
            normalized(
                "b",
                MealSlot::Dinner,
                NormalizedMacros::resolved(Macros::new(600.0, 45.0, 50.0, 20.0)),
            ),
        ];

        let day = MealAggregator::aggregate_by_day(&entries);
        assert_eq!(day.macros, Macros::new(900.0, 60.0, 90.0, 28.0));
        assert_eq!(day.entry_count, 2);
        assert_eq!(day.slot(MealSlot::Lunch), MealTotals::default());
        assert_eq!(day.macros, MealAggregator::direct_totals(&entries).macros);
    }

    #[test]
    fn test_empty_day() {
        let day = MealAggregator::aggregate_by_day(&[]);
        assert_eq!(day.macros, Macros::ZERO);
        assert_eq!(day.entry_count, 0);
        assert!(day.slots.is_empty());
    }
}
