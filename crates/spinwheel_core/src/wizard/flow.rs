//! Linear onboarding wizard.
//!
//! # Responsibility
//! - Track the current step and the answers collected so far.
//!
//! # Invariants
//! - The step number is always within `[1, 4]`; moves saturate at the ends.
//! - Answers are kept in memory only and never validated.

use crate::model::category::{Category, WorkContext};
use serde::{Deserialize, Serialize};

/// Wizard step, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Identity,
    ChooseCategory,
    ChooseContext,
    Spin,
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::Identity;

    pub fn number(self) -> u8 {
        match self {
            Self::Identity => 1,
            Self::ChooseCategory => 2,
            Self::ChooseContext => 3,
            Self::Spin => 4,
        }
    }

    /// Maps any integer onto a step, clamping to `[1, 4]`.
    pub fn clamped(number: i64) -> Self {
        match number {
            i64::MIN..=1 => Self::Identity,
            2 => Self::ChooseCategory,
            3 => Self::ChooseContext,
            _ => Self::Spin,
        }
    }

    pub fn next(self) -> Self {
        Self::clamped(i64::from(self.number()) + 1)
    }

    pub fn previous(self) -> Self {
        Self::clamped(i64::from(self.number()) - 1)
    }
}

/// Identity answers from step 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub full_name: String,
    pub email: String,
    pub mobile: Option<String>,
}

/// Wizard state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingWizard {
    step: WizardStep,
    identity: Identity,
    category: Category,
    context: Option<WorkContext>,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::FIRST,
            identity: Identity::default(),
            category: Category::default(),
            context: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn context(&self) -> Option<WorkContext> {
        self.context
    }

    pub fn next(&mut self) -> WizardStep {
        self.step = self.step.next();
        self.step
    }

    pub fn back(&mut self) -> WizardStep {
        self.step = self.step.previous();
        self.step
    }

    pub fn go_to(&mut self, number: i64) -> WizardStep {
        self.step = WizardStep::clamped(number);
        self.step
    }

    pub fn set_identity(&mut self, identity: Identity) {
        self.identity = identity;
    }

    pub fn choose_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Records the work context and jumps to the spin step.
    pub fn choose_context(&mut self, context: WorkContext) -> WizardStep {
        self.context = Some(context);
        self.step = WizardStep::Spin;
        self.step
    }

    /// Leaves the context unanswered and jumps to the spin step.
    pub fn skip_context(&mut self) -> WizardStep {
        self.step = WizardStep::Spin;
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::{OnboardingWizard, WizardStep};
    use crate::model::category::Category;

    #[test]
    fn clamped_saturates_at_both_ends() {
        assert_eq!(WizardStep::clamped(-3), WizardStep::Identity);
        assert_eq!(WizardStep::clamped(0), WizardStep::Identity);
        assert_eq!(WizardStep::clamped(3), WizardStep::ChooseContext);
        assert_eq!(WizardStep::clamped(99), WizardStep::Spin);
        assert_eq!(WizardStep::Spin.next(), WizardStep::Spin);
        assert_eq!(WizardStep::Identity.previous(), WizardStep::Identity);
    }

    #[test]
    fn go_to_clamps_and_keeps_answers() {
        let mut wizard = OnboardingWizard::new();
        wizard.choose_category(Category::Nutrition);
        assert_eq!(wizard.go_to(7), WizardStep::Spin);
        assert_eq!(wizard.go_to(-1), WizardStep::Identity);
        assert_eq!(wizard.go_to(2), WizardStep::ChooseCategory);
        assert_eq!(wizard.category(), Category::Nutrition);
        assert_eq!(wizard.context(), None);
    }
}
