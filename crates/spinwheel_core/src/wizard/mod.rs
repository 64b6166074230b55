//! Onboarding wizard steps and collected answers.

pub mod flow;
