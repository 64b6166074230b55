//! Core use-case services.
//!
//! # Responsibility
//! - Compose wizard and wheel into the session API host layers call.
//! - Keep FFI/CLI layers free of lifecycle rules.

pub mod onboarding_service;
