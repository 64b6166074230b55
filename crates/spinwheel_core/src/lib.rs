//! Core domain logic for the onboarding spin wheel.
//! This crate is the single source of truth for wheel and wizard invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod tips;
pub mod wheel;
pub mod wizard;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{Category, ParseLabelError, WorkContext};
pub use model::outcome::{Easing, SpinId, SpinOutcome, Transition, WheelState};
pub use service::onboarding_service::{OnboardingError, OnboardingResult, OnboardingService};
pub use tips::catalog::{tip_catalog, TipCatalog};
pub use tips::matrix::{TipMatrix, TipMatrixError};
pub use wheel::config::WheelConfig;
pub use wheel::engine::{OutcomeSink, SpinEngine};
pub use wheel::error::{WheelError, WheelResult};
pub use wheel::geometry::{Settle, WheelGeometry};
pub use wheel::source::{FixedSliceSource, RngSliceSource, SliceSource};
pub use wizard::flow::{Identity, OnboardingWizard, WizardStep};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
