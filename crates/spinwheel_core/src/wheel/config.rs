//! Wheel tuning parameters.
//!
//! # Invariants
//! - `extra_turns >= 1`, so every spin advances by more than a full turn and
//!   the snap correction can never pull the rotation backwards.
//! - Both ratios sit in `[0, 0.5)` of one slice.

use crate::wheel::error::{WheelError, WheelResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_EXTRA_TURNS: u32 = 6;
pub const DEFAULT_SPIN_DURATION_MS: u64 = 15_000;
pub const DEFAULT_SNAP_DURATION_MS: u64 = 250;
pub const DEFAULT_SAFE_MARGIN_RATIO: f64 = 0.2;
pub const DEFAULT_ANGULAR_BIAS_RATIO: f64 = 0.002;

/// Tunables for spin animation and settling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Full turns added to every spin, for visual effect only.
    pub extra_turns: u32,
    /// Primary spin length; the host animates it with ease-out.
    pub spin_duration_ms: u64,
    /// Snap correction length; the host animates it with ease-in-out.
    pub snap_duration_ms: u64,
    /// Safe interior margin on each side of a slice, as a fraction of a slice.
    pub safe_margin_ratio: f64,
    /// Nudge keeping the target off slice boundaries, as a fraction of a slice.
    pub angular_bias_ratio: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            extra_turns: DEFAULT_EXTRA_TURNS,
            spin_duration_ms: DEFAULT_SPIN_DURATION_MS,
            snap_duration_ms: DEFAULT_SNAP_DURATION_MS,
            safe_margin_ratio: DEFAULT_SAFE_MARGIN_RATIO,
            angular_bias_ratio: DEFAULT_ANGULAR_BIAS_RATIO,
        }
    }
}

impl WheelConfig {
    /// Validates tunables before an engine is built from them.
    pub fn validate(&self) -> WheelResult<()> {
        if self.extra_turns == 0 {
            return Err(WheelError::InvalidConfig(
                "extra_turns must be at least 1".to_string(),
            ));
        }
        check_ratio("safe_margin_ratio", self.safe_margin_ratio)?;
        check_ratio("angular_bias_ratio", self.angular_bias_ratio)?;
        Ok(())
    }

    pub fn spin_duration(&self) -> Duration {
        Duration::from_millis(self.spin_duration_ms)
    }

    pub fn snap_duration(&self) -> Duration {
        Duration::from_millis(self.snap_duration_ms)
    }
}

fn check_ratio(field: &str, value: f64) -> WheelResult<()> {
    if value.is_finite() && (0.0..0.5).contains(&value) {
        return Ok(());
    }
    Err(WheelError::InvalidConfig(format!(
        "{field} must be within [0, 0.5), got {value}"
    )))
}
