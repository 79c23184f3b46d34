//! Normalized memory specification consumed by a DRAM power model.
//!
//! The specification is split the way the power model expects it:
//! 1. **Architecture:** Bank, rank and bus geometry plus supply-domain flags.
//! 2. **Timing:** Every power-relevant interval in clock cycles.
//! 3. **Power:** IDD currents in milliamps and supply voltages.

/// Architecture fragment.
pub mod arch;

/// Power fragment.
pub mod power;

/// Timing fragment.
pub mod timing;

use serde::Serialize;

pub use arch::ArchitectureSpec;
pub use power::PowerSpec;
pub use timing::TimingSpec;

/// Complete description of one rank, handed by value to a power model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySpecification {
    /// Architecture parameters.
    pub mem_arch_spec: ArchitectureSpec,
    /// Timing parameters in clock cycles.
    pub mem_timing_spec: TimingSpec,
    /// Currents and voltages.
    pub mem_power_spec: PowerSpec,
}
