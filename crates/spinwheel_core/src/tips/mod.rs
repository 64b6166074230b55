//! Static tip tables and their lookup.
//!
//! Tables are compiled in, validated once, and shared read-only.

pub mod catalog;
mod data;
pub mod matrix;
