//! Common types shared by the builders.
//!
//! This module provides:
//! 1. **Units:** Tick type, cycle rounding, and current scaling.
//! 2. **Errors:** The configuration errors raised during translation.

/// Error types for specification assembly.
pub mod error;

/// Tick, cycle, and current unit conversions.
pub mod units;

pub use error::SpecError;
pub use units::{AMPS_TO_MILLIAMPS, TICKS_PER_NS, Tick, sum_to_cycles, to_cycles};
