//! Error definitions for specification assembly.
//!
//! Every failure here is a configuration error: the device parameters
//! describe something the power model cannot represent. They are detected
//! eagerly while the specification is built and are never clamped or
//! replaced by defaults.

use thiserror::Error;

use super::units::Tick;

/// Errors raised while translating a device configuration.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The clock period is zero, so no cycle count or frequency can be derived.
    #[error("clock period tCK is zero; cannot derive cycle counts or clock frequency")]
    ZeroClockPeriod,

    /// The burst window rounds to zero clock cycles, leaving the data rate undefined.
    #[error("maximum burst duration {t_burst_max} ticks spans zero clock cycles")]
    ZeroBurstWindow {
        /// The offending `tBURST_MAX` value in ticks.
        t_burst_max: Tick,
    },

    /// The derived number of beats per clock is not single, double, quad or octal rate.
    #[error(
        "got unexpected data rate {rate} (burst length {burst_length} over {burst_cycles} cycles), should be 1 or 2 or 4 or 8"
    )]
    UnsupportedDataRate {
        /// Beats per clock computed from the burst geometry.
        rate: u64,
        /// Configured burst length in beats.
        burst_length: u32,
        /// Burst window in clock cycles.
        burst_cycles: u64,
    },

    /// The row cycle `ceil((tRAS + tRP) / tCK)` does not fit in a 64-bit cycle count.
    #[error("row cycle time tRAS {t_ras} + tRP {t_rp} ticks overflows the cycle count at tCK {t_ck}")]
    RowCycleOverflow {
        /// Row active time in ticks.
        t_ras: Tick,
        /// Row precharge time in ticks.
        t_rp: Tick,
        /// Clock period in ticks.
        t_ck: Tick,
    },

    /// The configuration document could not be parsed.
    #[error("invalid device configuration: {0}")]
    Config(#[from] serde_json::Error),
}
