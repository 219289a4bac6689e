//! # chroma-tests
//!
//! Reference parity and behaviour testing for oxchroma.
//!
//! This crate provides:
//! - Seeded RGB test patterns
//! - `palette` reference conversions (CIE Lab, HSL)
//! - Parity statistics: per-channel differences and CIEDE2000
//! - JSON fixtures for color strings and presets
//!
//! The tests themselves live in `tests/`.

pub mod fixtures;
pub mod parity;
pub mod patterns;
pub mod reference;

pub use parity::{ChannelStats, DeltaEStats, ParityResult, ParityTest};
pub use patterns::{TestPattern, generate_pattern};
