//! DRAM power specification library.
//!
//! This crate translates raw DRAM device parameters into the normalized
//! specification a DRAM power model consumes:
//! 1. **Config:** Device geometry, absolute timings in ticks, IDD currents and voltages.
//! 2. **Spec:** The architecture, timing and power fragments and their aggregate.
//! 3. **Build:** Pure builders that convert units, derive dependent fields and validate.
//! 4. **Rank:** Per-rank ownership of an external power model built from the assembled specification.
//!
//! Translation is a pure function of the configuration; it performs no I/O
//! and keeps no state between calls.

/// Builders that assemble a specification from a configuration.
pub mod build;
/// Units, conversions and error types.
pub mod common;
/// Device configuration (defaults and serde structures).
pub mod config;
/// Per-rank power model ownership.
pub mod rank;
/// Output specification types.
pub mod spec;

/// Entry point; assembles a [`MemorySpecification`] from a [`DeviceConfig`].
pub use crate::build::{data_rate, memory_spec};
/// Errors raised during translation.
pub use crate::common::SpecError;
/// Raw device parameters.
pub use crate::config::DeviceConfig;
/// Per-rank power model wrapper and the trait models implement.
pub use crate::rank::{PowerModel, RankPower};
/// Assembled specification.
pub use crate::spec::MemorySpecification;
