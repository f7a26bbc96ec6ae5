// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Macrotrack: nutrition and goal-progress engine for a coaching platform
//!
//! This crate normalizes logged meals against a food/recipe catalog,
//! aggregates them per meal slot and per day, compares totals against
//! nutrition targets, and tracks athlete goals through progress updates.
//!
//! Storage is an external collaborator reached through the traits in [`db`].

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod time_utils;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
