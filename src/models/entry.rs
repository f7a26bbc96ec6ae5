// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Logged meal entries.

use crate::error::{EngineError, Result};
use crate::models::{PositiveAmount, ReferenceKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Meal slot an entry is logged under. Ordered as eaten during a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        MealSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownMealSlot(s.to_string()))
    }
}

/// One logged consumption of a catalog item.
///
/// `quantity` is grams when `reference_kind` is `Food` and a serving count
/// when it is `Recipe`. Entries are immutable; corrections are a delete
/// followed by a new entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LoggedEntry {
    pub id: String,
    pub reference_kind: ReferenceKind,
    pub reference_id: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub quantity: PositiveAmount,
    pub meal_slot: MealSlot,
    pub consumed_at: DateTime<Utc>,
}

impl LoggedEntry {
    /// Create an entry, rejecting a quantity that is not strictly positive.
    pub fn new(
        id: impl Into<String>,
        reference_kind: ReferenceKind,
        reference_id: impl Into<String>,
        quantity: f64,
        meal_slot: MealSlot,
        consumed_at: DateTime<Utc>,
    ) -> Result<Self> {
        let id = id.into();
        let quantity = PositiveAmount::new(quantity).ok_or_else(|| {
            EngineError::InvalidQuantity(format!(
                "entry {} has quantity {}; must be greater than zero",
                id, quantity
            ))
        })?;

        Ok(Self {
            id,
            reference_kind,
            reference_id: reference_id.into(),
            quantity,
            meal_slot,
            consumed_at,
        })
    }
}
