// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Macro values and the display precision policy.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Calories (kcal) plus protein, carbs and fat (grams).
///
/// Deserialization rejects negative or non-finite values, the same check
/// [`Macros::is_well_formed`] applies to constructed items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(try_from = "MacroValues")]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Macros {
    pub const ZERO: Macros = Macros {
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
    };

    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Multiply every macro by `ratio`.
    pub fn scaled(&self, ratio: f64) -> Self {
        Self {
            calories: self.calories * ratio,
            protein: self.protein * ratio,
            carbs: self.carbs * ratio,
            fat: self.fat * ratio,
        }
    }

    /// Apply the display precision policy to every macro.
    pub fn rounded(&self) -> Self {
        Self {
            calories: round_calories(self.calories),
            protein: round_macro_grams(self.protein),
            carbs: round_macro_grams(self.carbs),
            fat: round_macro_grams(self.fat),
        }
    }

    /// Whether all four values are finite and non-negative.
    pub fn is_well_formed(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Unchecked wire form of [`Macros`].
#[derive(Deserialize)]
struct MacroValues {
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
}

impl TryFrom<MacroValues> for Macros {
    type Error = String;

    fn try_from(raw: MacroValues) -> std::result::Result<Self, Self::Error> {
        let macros = Macros::new(raw.calories, raw.protein, raw.carbs, raw.fat);
        if macros.is_well_formed() {
            Ok(macros)
        } else {
            Err(format!(
                "macros must be finite and non-negative, got {:?}",
                macros
            ))
        }
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Macros) -> Macros {
        Macros {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for Macros {
    fn add_assign(&mut self, rhs: Macros) {
        *self = *self + rhs;
    }
}

impl Sum for Macros {
    fn sum<I: Iterator<Item = Macros>>(iter: I) -> Macros {
        iter.fold(Macros::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Macros> for Macros {
    fn sum<I: Iterator<Item = &'a Macros>>(iter: I) -> Macros {
        iter.copied().sum()
    }
}

/// Absolute macros for one logged entry.
///
/// `unresolved` marks an entry whose catalog item could not be found; its
/// macros are zero and must be shown as "item not found", not as real data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NormalizedMacros {
    #[serde(flatten)]
    pub macros: Macros,
    #[serde(default)]
    pub unresolved: bool,
}

impl NormalizedMacros {
    pub fn resolved(macros: Macros) -> Self {
        Self {
            macros,
            unresolved: false,
        }
    }

    pub fn unresolved() -> Self {
        Self {
            macros: Macros::ZERO,
            unresolved: true,
        }
    }

    /// Same entry with display rounding applied.
    pub fn rounded(&self) -> Self {
        Self {
            macros: self.macros.rounded(),
            unresolved: self.unresolved,
        }
    }
}

/// Round calories to the nearest whole kcal.
pub fn round_calories(kcal: f64) -> f64 {
    kcal.round()
}

/// Round a gram amount for display.
///
/// Amounts below 1g keep two decimals so small portions never read "0g";
/// everything else keeps one decimal.
pub fn round_macro_grams(grams: f64) -> f64 {
    let scale = if grams.abs() < 1.0 { 100.0 } else { 10.0 };
    (grams * scale).round() / scale
}

/// Format a gram amount with the same precision as [`round_macro_grams`].
pub fn format_grams(grams: f64) -> String {
    let rounded = round_macro_grams(grams);
    if rounded.abs() < 1.0 {
        format!("{:.2}g", rounded)
    } else {
        format!("{:.1}g", rounded)
    }
}
