//! Wheel angle math.
//!
//! # Responsibility
//! - Compute how far to rotate so the pointer lands on a drawn slice.
//! - Compute the snap correction that moves the rest angle into the slice's
//!   safe interior.
//!
//! # Invariants
//! - Angles are degrees; rotations are unbounded, slice-space angles are in
//!   `[0, 360)`.
//! - For any rest rotation, `settle(rest + spin_delta(rest, i)).nearest_index == i`.
//! - `spin_delta` is always greater than one full turn.
//! - `Settle::snap_delta` is wrapped into `(-180, 180]`.

use crate::wheel::config::WheelConfig;
use crate::wheel::error::{WheelError, WheelResult};

pub const FULL_TURN_DEGREES: f64 = 360.0;
const HALF_TURN_DEGREES: f64 = 180.0;

/// Slice layout derived from a slice count and wheel tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    slice_count: usize,
    slice_degrees: f64,
    margin_degrees: f64,
    bias_degrees: f64,
    extra_turns: u32,
}

/// Where a rotation comes to rest and how to correct it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settle {
    /// `cumulative mod 360`.
    pub final_rotation: f64,
    /// Slice-space angle under the pointer.
    pub normalized: f64,
    pub nearest_index: usize,
    pub slice_start: f64,
    pub slice_end: f64,
    pub slice_center: f64,
    /// Slice-space angle the snap moves the pointer to.
    pub snapped_angle: f64,
    /// Rotation to add on top of the cumulative rotation.
    pub snap_delta: f64,
}

impl WheelGeometry {
    /// Builds geometry for `slice_count` equal slices.
    ///
    /// # Errors
    /// - `ZeroSlices` when `slice_count == 0`.
    /// - `InvalidConfig` when `config` fails validation.
    pub fn new(slice_count: usize, config: &WheelConfig) -> WheelResult<Self> {
        if slice_count == 0 {
            return Err(WheelError::ZeroSlices);
        }
        config.validate()?;
        let slice_degrees = FULL_TURN_DEGREES / slice_count as f64;
        Ok(Self {
            slice_count,
            slice_degrees,
            margin_degrees: slice_degrees * config.safe_margin_ratio,
            bias_degrees: slice_degrees * config.angular_bias_ratio,
            extra_turns: config.extra_turns,
        })
    }

    pub fn slice_count(&self) -> usize {
        self.slice_count
    }

    pub fn slice_degrees(&self) -> f64 {
        self.slice_degrees
    }

    pub fn margin_degrees(&self) -> f64 {
        self.margin_degrees
    }

    /// Absolute wheel angle (mod 360) that puts slice `index` under the pointer.
    pub fn target_angle(&self, index: usize) -> f64 {
        let slice_center = index as f64 * self.slice_degrees + self.slice_degrees / 2.0;
        FULL_TURN_DEGREES - slice_center + self.bias_degrees
    }

    /// Rotation to add to `rest_rotation` so the spin stops on slice `index`.
    ///
    /// From a rest rotation of zero this is
    /// `360 * turns + (360 - (index * slice + slice / 2)) + bias`.
    pub fn spin_delta(&self, rest_rotation: f64, index: usize) -> WheelResult<f64> {
        self.check_index(index)?;
        let current = wrap_turn(rest_rotation);
        let alignment = wrap_turn(self.target_angle(index) - current);
        Ok(FULL_TURN_DEGREES * f64::from(self.extra_turns) + alignment)
    }

    /// Settles `cumulative_rotation` into the slice under the pointer.
    pub fn settle(&self, cumulative_rotation: f64) -> Settle {
        let final_rotation = wrap_turn(cumulative_rotation);
        let normalized = wrap_turn(FULL_TURN_DEGREES - final_rotation);
        let nearest_index =
            ((normalized / self.slice_degrees).floor() as usize).min(self.slice_count - 1);

        let slice_origin = nearest_index as f64 * self.slice_degrees;
        let slice_start = slice_origin + self.margin_degrees;
        let slice_end = slice_origin + self.slice_degrees - self.margin_degrees;
        let slice_center = slice_origin + self.slice_degrees / 2.0;

        let mut snapped_angle = slice_center;
        if normalized < slice_start {
            snapped_angle = slice_start;
        }
        if normalized > slice_end {
            snapped_angle = slice_end;
        }
        let snap_delta = wrap_signed((FULL_TURN_DEGREES - snapped_angle) - final_rotation);

        Settle {
            final_rotation,
            normalized,
            nearest_index,
            slice_start,
            slice_end,
            slice_center,
            snapped_angle,
            snap_delta,
        }
    }

    fn check_index(&self, index: usize) -> WheelResult<()> {
        if index < self.slice_count {
            return Ok(());
        }
        Err(WheelError::IndexOutOfRange {
            index,
            slice_count: self.slice_count,
        })
    }
}

/// Wraps an angle into `[0, 360)`.
pub fn wrap_turn(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= FULL_TURN_DEGREES {
        0.0
    } else {
        wrapped
    }
}

/// Wraps an angle into `(-180, 180]`.
pub fn wrap_signed(degrees: f64) -> f64 {
    let wrapped = wrap_turn(degrees);
    if wrapped > HALF_TURN_DEGREES {
        wrapped - FULL_TURN_DEGREES
    } else {
        wrapped
    }
}
