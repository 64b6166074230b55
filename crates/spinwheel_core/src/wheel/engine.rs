//! Spin lifecycle engine.
//!
//! # Responsibility
//! - Own `WheelState` and the current `SpinOutcome`.
//! - Run one spin as a strict continuation: spin phase, then snap phase, then
//!   outcome.
//! - Notify the registered `OutcomeSink` exactly once per completed spin.
//!
//! # Invariants
//! - At most one spin is in flight; `start_spin` while in flight changes nothing.
//! - The outcome is reported only after the snap phase has fully elapsed.
//! - The landed category is the drawn one; the settle check only guards it.
//! - `cumulative_rotation` never decreases between resets.
//! - Time only moves through `advance`; cancelling or dropping the engine
//!   leaves nothing pending.

use crate::model::category::Category;
use crate::model::outcome::{Easing, SpinOutcome, Transition, WheelState};
use crate::tips::catalog::tip_catalog;
use crate::tips::matrix::TipMatrix;
use crate::wheel::config::WheelConfig;
use crate::wheel::error::{WheelError, WheelResult};
use crate::wheel::geometry::WheelGeometry;
use crate::wheel::source::SliceSource;
use log::{debug, error, info, warn};
use std::time::Duration;
use uuid::Uuid;

/// Receives completed spin outcomes.
pub trait OutcomeSink {
    fn on_outcome(&mut self, outcome: &SpinOutcome);
}

impl<F> OutcomeSink for F
where
    F: FnMut(&SpinOutcome),
{
    fn on_outcome(&mut self, outcome: &SpinOutcome) {
        self(outcome)
    }
}

#[derive(Debug, Clone, Copy)]
struct InFlightSpin<'t> {
    chosen: Category,
    landed: Category,
    tips: &'t TipMatrix,
}

#[derive(Debug, Clone, Copy)]
enum SpinPhase<'t> {
    Idle,
    Spinning {
        spin: InFlightSpin<'t>,
        remaining: Duration,
    },
    Snapping {
        spin: InFlightSpin<'t>,
        remaining: Duration,
    },
}

/// Wheel spin engine for the built-in category set.
pub struct SpinEngine<'t, S: SliceSource> {
    config: WheelConfig,
    geometry: WheelGeometry,
    source: S,
    tips: &'t TipMatrix,
    cumulative_rotation: f64,
    snap_offset: f64,
    phase: SpinPhase<'t>,
    outcome: Option<SpinOutcome>,
    sink: Option<Box<dyn OutcomeSink + Send + 't>>,
}

impl<S: SliceSource> SpinEngine<'static, S> {
    /// Creates an engine over the process-wide general tip table.
    pub fn with_builtin_tips(config: WheelConfig, source: S) -> WheelResult<Self> {
        let catalog = tip_catalog()?;
        Self::new(config, source, catalog.general())
    }
}

impl<'t, S: SliceSource> SpinEngine<'t, S> {
    /// Creates an idle engine at zero rotation.
    ///
    /// # Errors
    /// - Returns `InvalidConfig` when `config` fails validation.
    pub fn new(config: WheelConfig, source: S, tips: &'t TipMatrix) -> WheelResult<Self> {
        let geometry = WheelGeometry::new(Category::COUNT, &config)?;
        Ok(Self {
            config,
            geometry,
            source,
            tips,
            cumulative_rotation: 0.0,
            snap_offset: 0.0,
            phase: SpinPhase::Idle,
            outcome: None,
            sink: None,
        })
    }

    /// Registers the listener for completed outcomes, replacing any previous one.
    pub fn set_outcome_sink(&mut self, sink: impl OutcomeSink + Send + 't) {
        self.sink = Some(Box::new(sink));
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn is_spinning(&self) -> bool {
        !matches!(self.phase, SpinPhase::Idle)
    }

    pub fn is_snapping(&self) -> bool {
        matches!(self.phase, SpinPhase::Snapping { .. })
    }

    /// Latest completed outcome; cleared by the next spin or `reset`.
    pub fn outcome(&self) -> Option<&SpinOutcome> {
        self.outcome.as_ref()
    }

    /// Angle the wheel is (or is animating) at, including any snap correction.
    pub fn rendered_rotation(&self) -> f64 {
        self.cumulative_rotation + self.snap_offset
    }

    /// Snapshot for the host view layer.
    pub fn state(&self) -> WheelState {
        let transition = match self.phase {
            SpinPhase::Idle => Transition::instant(),
            SpinPhase::Spinning { remaining, .. } => Transition {
                duration: remaining,
                easing: Easing::EaseOut,
            },
            SpinPhase::Snapping { remaining, .. } => Transition {
                duration: remaining,
                easing: Easing::EaseInOut,
            },
        };
        WheelState {
            is_spinning: self.is_spinning(),
            is_snapping: self.is_snapping(),
            cumulative_rotation_degrees: self.cumulative_rotation,
            rendered_rotation_degrees: self.rendered_rotation(),
            transition,
        }
    }

    /// Starts a spin for `chosen` using the engine's default tip table.
    pub fn start_spin(&mut self, chosen: Category) -> WheelResult<()> {
        let tips = self.tips;
        self.start_spin_with(chosen, tips)
    }

    /// Starts a spin for `chosen`, looking the tip up in `tips` when it lands.
    ///
    /// # Errors
    /// - `SpinInProgress` when a spin is in flight; no state changes.
    /// - `IndexOutOfRange` when the source misbehaves; no state changes.
    pub fn start_spin_with(&mut self, chosen: Category, tips: &'t TipMatrix) -> WheelResult<()> {
        if self.is_spinning() {
            warn!("event=spin_start module=wheel status=rejected reason=in_flight");
            return Err(WheelError::SpinInProgress);
        }

        let slice_count = self.geometry.slice_count();
        let drawn = self.source.draw(slice_count);
        let landed = Category::from_index(drawn).ok_or(WheelError::IndexOutOfRange {
            index: drawn,
            slice_count,
        })?;

        let rest = self.rendered_rotation();
        let delta = self.geometry.spin_delta(rest, drawn)?;
        self.cumulative_rotation = rest + delta;
        self.snap_offset = 0.0;
        self.outcome = None;
        self.phase = SpinPhase::Spinning {
            spin: InFlightSpin {
                chosen,
                landed,
                tips,
            },
            remaining: self.config.spin_duration(),
        };

        info!(
            "event=spin_start module=wheel status=ok chosen={} drawn_index={} delta_deg={:.3} table={}",
            chosen,
            drawn,
            delta,
            tips.name()
        );
        Ok(())
    }

    /// Moves the lifecycle forward by `elapsed`.
    ///
    /// Returns the outcome when this call completes the snap phase. A single
    /// call may cross both phases.
    ///
    /// # Errors
    /// - `SettleMismatch` when the settled slice differs from the drawn one;
    ///   the spin is aborted without an outcome.
    pub fn advance(&mut self, elapsed: Duration) -> WheelResult<Option<SpinOutcome>> {
        let mut budget = elapsed;
        loop {
            match self.phase {
                SpinPhase::Idle => return Ok(None),
                SpinPhase::Spinning { spin, remaining } => {
                    if budget < remaining {
                        self.phase = SpinPhase::Spinning {
                            spin,
                            remaining: remaining - budget,
                        };
                        return Ok(None);
                    }
                    budget -= remaining;
                    self.begin_snap(spin)?;
                }
                SpinPhase::Snapping { spin, remaining } => {
                    if budget < remaining {
                        self.phase = SpinPhase::Snapping {
                            spin,
                            remaining: remaining - budget,
                        };
                        return Ok(None);
                    }
                    return Ok(Some(self.finish(spin)));
                }
            }
        }
    }

    /// Drops any in-flight spin without reporting an outcome.
    ///
    /// Returns whether a spin was cancelled. Rotation is left where it is.
    pub fn cancel(&mut self) -> bool {
        if !self.is_spinning() {
            return false;
        }
        self.phase = SpinPhase::Idle;
        info!("event=spin_cancel module=wheel status=ok");
        true
    }

    /// Restarts the wheel: no outcome, idle, zero rotation.
    pub fn reset(&mut self) {
        self.cancel();
        self.cumulative_rotation = 0.0;
        self.snap_offset = 0.0;
        self.outcome = None;
        debug!("event=wheel_reset module=wheel status=ok");
    }

    fn begin_snap(&mut self, spin: InFlightSpin<'t>) -> WheelResult<()> {
        let settle = self.geometry.settle(self.cumulative_rotation);
        if settle.nearest_index != spin.landed.index() {
            self.phase = SpinPhase::Idle;
            error!(
                "event=spin_settle module=wheel status=error drawn_index={} settled_index={} normalized_deg={:.6}",
                spin.landed.index(),
                settle.nearest_index,
                settle.normalized
            );
            return Err(WheelError::SettleMismatch {
                drawn: spin.landed.index(),
                settled: settle.nearest_index,
                normalized_degrees: settle.normalized,
            });
        }

        self.snap_offset = settle.snap_delta;
        self.phase = SpinPhase::Snapping {
            spin,
            remaining: self.config.snap_duration(),
        };
        debug!(
            "event=spin_settle module=wheel status=ok normalized_deg={:.3} snapped_deg={:.3} snap_delta_deg={:.3}",
            settle.normalized, settle.snapped_angle, settle.snap_delta
        );
        Ok(())
    }

    fn finish(&mut self, spin: InFlightSpin<'t>) -> SpinOutcome {
        self.phase = SpinPhase::Idle;
        let outcome = SpinOutcome {
            spin_id: Uuid::new_v4(),
            chosen: spin.chosen,
            landed: spin.landed,
            tip_text: spin.tips.tip(spin.chosen, spin.landed).to_string(),
            final_rotation_degrees: self.rendered_rotation(),
        };
        self.outcome = Some(outcome.clone());
        if let Some(sink) = self.sink.as_mut() {
            sink.on_outcome(&outcome);
        }
        info!(
            "event=spin_complete module=wheel status=ok spin_id={} chosen={} landed={}",
            outcome.spin_id, outcome.chosen, outcome.landed
        );
        outcome
    }
}

impl<S: SliceSource> Drop for SpinEngine<'_, S> {
    fn drop(&mut self) {
        if self.cancel() {
            debug!("event=engine_drop module=wheel status=ok pending=cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SpinEngine;
    use crate::model::category::Category;
    use crate::model::outcome::SpinOutcome;
    use crate::tips::catalog::TipCatalog;
    use crate::wheel::config::WheelConfig;
    use crate::wheel::error::WheelError;
    use crate::wheel::geometry::WheelGeometry;
    use crate::wheel::source::FixedSliceSource;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn advance_crosses_both_phases_in_one_call() {
        let catalog = TipCatalog::builtin().expect("builtin catalog");
        let mut engine = SpinEngine::new(
            WheelConfig::default(),
            FixedSliceSource::always(3),
            catalog.general(),
        )
        .expect("engine");

        engine.start_spin(Category::Sleep).expect("spin starts");
        let outcome = engine
            .advance(Duration::from_secs(60))
            .expect("advance")
            .expect("outcome after long advance");
        assert_eq!(outcome.landed, Category::Focus);
        assert!(!engine.is_spinning());
    }

    #[test]
    fn out_of_range_source_leaves_state_untouched() {
        let catalog = TipCatalog::builtin().expect("builtin catalog");
        let mut engine = SpinEngine::new(
            WheelConfig::default(),
            FixedSliceSource::always(9),
            catalog.general(),
        )
        .expect("engine");

        let err = engine.start_spin(Category::Sleep).expect_err("index 9 is invalid");
        assert!(matches!(err, WheelError::IndexOutOfRange { index: 9, .. }));
        assert!(!engine.is_spinning());
        assert_eq!(engine.state().cumulative_rotation_degrees, 0.0);
    }

    #[test]
    fn cancel_drops_pending_spin_without_outcome() {
        let catalog = TipCatalog::builtin().expect("builtin catalog");
        let mut engine = SpinEngine::new(
            WheelConfig::default(),
            FixedSliceSource::always(1),
            catalog.general(),
        )
        .expect("engine");

        engine.start_spin(Category::Stress).expect("spin starts");
        assert!(engine.cancel());
        assert!(!engine.cancel());
        assert_eq!(engine.advance(Duration::from_secs(60)).expect("advance"), None);
        assert!(engine.outcome().is_none());
    }

    #[test]
    fn settle_mismatch_aborts_without_outcome() {
        let catalog = TipCatalog::builtin().expect("builtin catalog");
        let config = WheelConfig::default();
        let mut engine =
            SpinEngine::new(config, FixedSliceSource::always(2), catalog.general())
                .expect("engine");
        let notified = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&notified);
        engine.set_outcome_sink(move |_: &SpinOutcome| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        engine.start_spin(Category::Sleep).expect("spin starts");
        // Aimed at slice 2 of 6 (~150 deg); on a 12-slice layout that is slice 4.
        engine.geometry = WheelGeometry::new(12, &config).expect("twelve slice geometry");

        let err = engine
            .advance(Duration::from_secs(60))
            .expect_err("settled slice differs from drawn slice");
        assert!(matches!(
            err,
            WheelError::SettleMismatch {
                drawn: 2,
                settled: 4,
                ..
            }
        ));
        assert!(!engine.is_spinning());
        assert!(!engine.is_snapping());
        assert!(engine.outcome().is_none());
        assert_eq!(engine.advance(Duration::from_secs(60)).expect("idle advance"), None);
        assert_eq!(notified.load(Ordering::SeqCst), 0);
    }
}
