//! Onboarding use-case service.
//!
//! # Responsibility
//! - Own one wizard and one spin engine for a single onboarding session.
//! - Feed wizard answers into spins: chosen category and context tip table.
//!
//! # Invariants
//! - Spins start only on the spin step.
//! - Leaving the spin step cancels an in-flight spin.
//! - `restart` clears the outcome and zeroes rotation; wizard answers stay.

use crate::model::category::{Category, WorkContext};
use crate::model::outcome::{SpinOutcome, WheelState};
use crate::tips::catalog::TipCatalog;
use crate::wheel::config::WheelConfig;
use crate::wheel::engine::{OutcomeSink, SpinEngine};
use crate::wheel::error::WheelError;
use crate::wheel::source::SliceSource;
use crate::wizard::flow::{Identity, OnboardingWizard, WizardStep};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

pub type OnboardingResult<T> = Result<T, OnboardingError>;

/// Onboarding use-case errors.
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingError {
    NotOnSpinStep(WizardStep),
    Wheel(WheelError),
}

impl Display for OnboardingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOnSpinStep(step) => write!(
                f,
                "spin is only available on step {}; wizard is on step {}",
                WizardStep::Spin.number(),
                step.number()
            ),
            Self::Wheel(err) => write!(f, "{err}"),
        }
    }
}

impl Error for OnboardingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotOnSpinStep(_) => None,
            Self::Wheel(err) => Some(err),
        }
    }
}

impl From<WheelError> for OnboardingError {
    fn from(value: WheelError) -> Self {
        Self::Wheel(value)
    }
}

/// Wizard plus wheel for one onboarding session.
pub struct OnboardingService<'t, S: SliceSource> {
    wizard: OnboardingWizard,
    engine: SpinEngine<'t, S>,
    catalog: &'t TipCatalog,
}

impl<'t, S: SliceSource> OnboardingService<'t, S> {
    /// Creates a session on step 1 with an idle wheel.
    pub fn new(catalog: &'t TipCatalog, config: WheelConfig, source: S) -> OnboardingResult<Self> {
        let engine = SpinEngine::new(config, source, catalog.general())?;
        Ok(Self {
            wizard: OnboardingWizard::new(),
            engine,
            catalog,
        })
    }

    pub fn wizard(&self) -> &OnboardingWizard {
        &self.wizard
    }

    pub fn step(&self) -> WizardStep {
        self.wizard.step()
    }

    pub fn next_step(&mut self) -> WizardStep {
        self.wizard.next()
    }

    /// Moves back one step, cancelling any spin when leaving the wheel.
    pub fn back(&mut self) -> WizardStep {
        let leaving_spin = self.wizard.step() == WizardStep::Spin;
        let step = self.wizard.back();
        if leaving_spin {
            self.engine.cancel();
        }
        step
    }

    pub fn set_identity(&mut self, identity: Identity) {
        self.wizard.set_identity(identity);
    }

    pub fn choose_category(&mut self, category: Category) {
        self.wizard.choose_category(category);
    }

    pub fn choose_context(&mut self, context: WorkContext) -> WizardStep {
        self.wizard.choose_context(context)
    }

    pub fn skip_context(&mut self) -> WizardStep {
        self.wizard.skip_context()
    }

    /// Starts a spin with the wizard's category and context tip table.
    ///
    /// # Errors
    /// - `NotOnSpinStep` before the wizard reaches step 4.
    /// - `Wheel(SpinInProgress)` while a spin is in flight.
    pub fn spin(&mut self) -> OnboardingResult<()> {
        let step = self.wizard.step();
        if step != WizardStep::Spin {
            return Err(OnboardingError::NotOnSpinStep(step));
        }
        let tips = self.catalog.for_context(self.wizard.context());
        self.engine
            .start_spin_with(self.wizard.category(), tips)
            .map_err(OnboardingError::from)
    }

    pub fn advance(&mut self, elapsed: Duration) -> OnboardingResult<Option<SpinOutcome>> {
        Ok(self.engine.advance(elapsed)?)
    }

    pub fn wheel_state(&self) -> WheelState {
        self.engine.state()
    }

    pub fn outcome(&self) -> Option<&SpinOutcome> {
        self.engine.outcome()
    }

    pub fn set_outcome_sink(&mut self, sink: impl OutcomeSink + Send + 't) {
        self.engine.set_outcome_sink(sink);
    }

    /// Clears the result and zeroes the wheel.
    pub fn restart(&mut self) {
        self.engine.reset();
    }
}
