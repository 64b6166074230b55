//! Wheel spin engine.
//!
//! # Responsibility
//! - Turn a random slice draw into spin and snap rotations.
//! - Sequence the spin lifecycle and report outcomes.
//!
//! # Invariants
//! - Geometry is pure; only `engine` holds mutable state.
//! - Randomness enters only through `SliceSource`.

pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod source;
