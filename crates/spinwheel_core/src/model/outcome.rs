//! Spin outcome and wheel render state.
//!
//! # Responsibility
//! - Define the ephemeral per-spin result handed to the host.
//! - Define the read-only snapshot the host animates from.
//!
//! # Invariants
//! - `SpinOutcome::landed` is the drawn category, never re-derived from angles.
//! - `WheelState::default()` is the reset state: idle, unsnapped, zero rotation.

use crate::model::category::Category;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Stable identifier for one completed spin.
pub type SpinId = Uuid;

/// Result of one completed spin-plus-snap cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Unique per completed spin; lets hosts de-duplicate notifications.
    pub spin_id: SpinId,
    /// Category the user picked in the wizard (first lookup key).
    #[serde(rename = "chosen_category")]
    pub chosen: Category,
    /// Category drawn by the random source (second lookup key).
    #[serde(rename = "landed_category")]
    pub landed: Category,
    /// Advice text for `(chosen, landed)`.
    pub tip_text: String,
    /// Absolute rotation the wheel rests at after snapping.
    pub final_rotation_degrees: f64,
}

/// Easing curve the host should apply to the current transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Jump straight to the target angle.
    #[default]
    None,
    EaseOut,
    EaseInOut,
}

/// Animation hint toward `WheelState::rendered_rotation_degrees`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn instant() -> Self {
        Self::default()
    }
}

/// Snapshot of the wheel for the host view layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelState {
    /// True from spin start until the outcome is reported.
    pub is_spinning: bool,
    /// True while the snap correction animates.
    pub is_snapping: bool,
    /// Rotation driving the primary spin; non-decreasing until reset.
    pub cumulative_rotation_degrees: f64,
    /// Angle the host should currently animate toward.
    pub rendered_rotation_degrees: f64,
    pub transition: Transition,
}
