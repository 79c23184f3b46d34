//! Specification assembly.
//!
//! This module turns a [`DeviceConfig`] into a [`MemorySpecification`]. It provides:
//! 1. **Builders:** One pure function per fragment (architecture, timing, power).
//! 2. **Assembly:** [`memory_spec`], the entry point that validates and composes them.
//! 3. **Data rate:** [`data_rate`], which infers beats per clock from the burst geometry.
//!
//! The builders share no state and may run in any order.

/// Architecture builder.
pub mod arch;

/// Power builder.
pub mod power;

/// Timing builder.
pub mod timing;

use tracing::{debug, warn};

use crate::common::{SpecError, to_cycles};
use crate::config::DeviceConfig;
use crate::spec::MemorySpecification;

pub use arch::architecture_spec;
pub use power::power_spec;
pub use timing::timing_spec;

/// Data rates the power model supports: single, double, quad and octal.
pub const SUPPORTED_DATA_RATES: [u8; 4] = [1, 2, 4, 8];

/// Infers the number of data beats per clock from the burst geometry.
///
/// The rate is `burst_length / ceil(t_burst_max / t_ck)` using integer
/// division.
///
/// # Errors
///
/// * [`SpecError::ZeroClockPeriod`] if `t_ck` is zero.
/// * [`SpecError::ZeroBurstWindow`] if the burst window is zero cycles.
/// * [`SpecError::UnsupportedDataRate`] if the rate is not 1, 2, 4 or 8.
pub fn data_rate(config: &DeviceConfig) -> Result<u8, SpecError> {
    if config.t_ck == 0 {
        return Err(SpecError::ZeroClockPeriod);
    }
    let burst_cycles = to_cycles(config.t_burst_max, config.t_ck);
    if burst_cycles == 0 {
        return Err(SpecError::ZeroBurstWindow {
            t_burst_max: config.t_burst_max,
        });
    }

    let rate = u64::from(config.burst_length) / burst_cycles;
    SUPPORTED_DATA_RATES
        .iter()
        .copied()
        .find(|&supported| u64::from(supported) == rate)
        .ok_or(SpecError::UnsupportedDataRate {
            rate,
            burst_length: config.burst_length,
            burst_cycles,
        })
}

/// Assembles the full specification for one rank.
///
/// The burst geometry is validated first, so an unsupported data rate fails
/// the build before any fragment is produced.
///
/// # Errors
///
/// Propagates [`data_rate`] and [`timing_spec`] failures.
///
/// # Examples
///
/// ```
/// use memspec_core::build::memory_spec;
/// use memspec_core::config::DeviceConfig;
///
/// let spec = memory_spec(&DeviceConfig::default()).unwrap();
/// assert_eq!(spec.mem_arch_spec.nbr_of_ranks, 1);
/// assert_eq!(spec.mem_timing_spec.wl, spec.mem_timing_spec.rl - 1);
/// ```
pub fn memory_spec(config: &DeviceConfig) -> Result<MemorySpecification, SpecError> {
    let rate = data_rate(config)?;
    if rate != config.beats_per_clock {
        warn!(
            derived = rate,
            configured = config.beats_per_clock,
            "burst geometry disagrees with configured beats per clock"
        );
    }

    let spec = MemorySpecification {
        mem_arch_spec: architecture_spec(config),
        mem_timing_spec: timing_spec(config)?,
        mem_power_spec: power_spec(config),
    };
    debug!(
        data_rate = rate,
        rl = spec.mem_timing_spec.rl,
        rc = spec.mem_timing_spec.rc,
        clk_mhz = spec.mem_timing_spec.clk_mhz,
        two_voltage_domains = spec.mem_arch_spec.two_voltage_domains,
        "assembled memory specification"
    );
    Ok(spec)
}
