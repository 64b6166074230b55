//! Domain model for the onboarding wheel.
//!
//! # Responsibility
//! - Define the category set, work context and per-spin result shapes.
//! - Keep host-facing snapshots plain data with serde wire names.
//!
//! # Invariants
//! - Category order is the wheel slice order.
//! - Outcomes are values; nothing in the model mutates shared state.

pub mod category;
pub mod outcome;
