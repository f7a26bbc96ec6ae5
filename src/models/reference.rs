// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Catalog items (foods and recipes) that logged entries point at.

use crate::error::{EngineError, Result};
use crate::models::Macros;
use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Which catalog a logged entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    Food,
    Recipe,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Food => f.write_str("food"),
            ReferenceKind::Recipe => f.write_str("recipe"),
        }
    }
}

/// A strictly positive, finite amount (grams or serving count).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PositiveAmount(f64);

impl PositiveAmount {
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for PositiveAmount {
    type Error = String;

    fn try_from(value: f64) -> std::result::Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("expected a positive amount, got {}", value))
    }
}

impl From<PositiveAmount> for f64 {
    fn from(amount: PositiveAmount) -> f64 {
        amount.0
    }
}

/// A food whose macro profile covers `serving_size` grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
pub struct Food {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub macros: Macros,
    /// Grams the macro profile covers
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub serving_size: PositiveAmount,
}

/// A recipe whose macro profile covers `servings` servings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
pub struct Recipe {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub macros: Macros,
    /// Number of servings the macro profile covers
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub servings: PositiveAmount,
}

/// A catalog item a logged entry can point at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReferenceItem {
    Food(Food),
    Recipe(Recipe),
}

impl ReferenceItem {
    /// Build a food item, rejecting a non-positive serving size.
    pub fn food(id: impl Into<String>, macros: Macros, serving_size_g: f64) -> Result<Self> {
        let serving_size = PositiveAmount::new(serving_size_g).ok_or_else(|| {
            EngineError::InvalidServing(format!(
                "serving size must be positive, got {}",
                serving_size_g
            ))
        })?;
        Self::check_macros(&macros)?;
        Ok(ReferenceItem::Food(Food {
            id: id.into(),
            name: None,
            macros,
            serving_size,
        }))
    }

    /// Build a recipe item, rejecting a non-positive serving count.
    pub fn recipe(id: impl Into<String>, macros: Macros, servings: f64) -> Result<Self> {
        let servings = PositiveAmount::new(servings).ok_or_else(|| {
            EngineError::InvalidServing(format!("servings must be positive, got {}", servings))
        })?;
        Self::check_macros(&macros)?;
        Ok(ReferenceItem::Recipe(Recipe {
            id: id.into(),
            name: None,
            macros,
            servings,
        }))
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = Some(name.into());
        match &mut self {
            ReferenceItem::Food(food) => food.name = name,
            ReferenceItem::Recipe(recipe) => recipe.name = name,
        }
        self
    }

    fn check_macros(macros: &Macros) -> Result<()> {
        if macros.is_well_formed() {
            Ok(())
        } else {
            Err(EngineError::InvalidServing(format!(
                "macros must be finite and non-negative, got {:?}",
                macros
            )))
        }
    }

    pub fn kind(&self) -> ReferenceKind {
        match self {
            ReferenceItem::Food(_) => ReferenceKind::Food,
            ReferenceItem::Recipe(_) => ReferenceKind::Recipe,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ReferenceItem::Food(food) => &food.id,
            ReferenceItem::Recipe(recipe) => &recipe.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            ReferenceItem::Food(food) => food.name.as_deref(),
            ReferenceItem::Recipe(recipe) => recipe.name.as_deref(),
        }
    }

    pub fn macros(&self) -> &Macros {
        match self {
            ReferenceItem::Food(food) => &food.macros,
            ReferenceItem::Recipe(recipe) => &recipe.macros,
        }
    }

    /// The amount a logged quantity is divided by: grams for a food,
    /// serving count for a recipe.
    pub fn serving_basis(&self) -> PositiveAmount {
        match self {
            ReferenceItem::Food(food) => food.serving_size,
            ReferenceItem::Recipe(recipe) => recipe.servings,
        }
    }

    /// Whether this item is the one named by `kind` and `id`.
    pub fn matches(&self, kind: ReferenceKind, id: &str) -> bool {
        self.kind() == kind && self.id() == id
    }
}
