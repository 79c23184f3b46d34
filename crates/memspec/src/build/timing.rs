//! Timing builder.
//!
//! Converts absolute intervals to clock cycles. Every conversion rounds up
//! so that no requirement is shortened by a fractional cycle.

use tracing::trace;

use crate::common::units::ticks_to_ns;
use crate::common::{SpecError, sum_to_cycles, to_cycles};
use crate::config::DeviceConfig;
use crate::spec::TimingSpec;

/// Write data is launched one cycle ahead of read data in this device family.
pub const WRITE_LATENCY_OFFSET: u64 = 1;

/// Data strobe skew is ignored for now.
pub const DQSCK_CYCLES: u64 = 0;

/// Builds the timing fragment from the raw device parameters.
///
/// # Errors
///
/// * [`SpecError::ZeroClockPeriod`] if `t_ck` is zero. The check runs before
///   any division, so no infinite or NaN frequency is ever produced.
/// * [`SpecError::RowCycleOverflow`] if the row cycle does not fit in a `u64`.
pub fn timing_spec(config: &DeviceConfig) -> Result<TimingSpec, SpecError> {
    let t_ck = config.t_ck;
    if t_ck == 0 {
        return Err(SpecError::ZeroClockPeriod);
    }

    // Ceiling of the sum, not the sum of ceilings.
    let rc = sum_to_cycles(config.t_ras, config.t_rp, t_ck).ok_or(SpecError::RowCycleOverflow {
        t_ras: config.t_ras,
        t_rp: config.t_rp,
        t_ck,
    })?;
    let rl = to_cycles(config.t_cl, t_ck);
    let wl = rl.saturating_sub(WRITE_LATENCY_OFFSET);

    let clk_period = ticks_to_ns(t_ck);
    let clk_mhz = (1.0 / clk_period) * 1000.0;

    let spec = TimingSpec {
        rc,
        rcd: to_cycles(config.t_rcd, t_ck),
        rl,
        rp: to_cycles(config.t_rp, t_ck),
        rfc: to_cycles(config.t_rfc, t_ck),
        st: to_cycles(config.t_st, t_ck),
        ras: to_cycles(config.t_ras, t_ck),
        wl,
        dqsck: DQSCK_CYCLES,
        rtp: to_cycles(config.t_rtp, t_ck),
        wr: to_cycles(config.t_wr, t_ck),
        xp: to_cycles(config.t_xp, t_ck),
        xpdll: to_cycles(config.t_xpdll, t_ck),
        xs: to_cycles(config.t_xs, t_ck),
        xsdll: to_cycles(config.t_xsdll, t_ck),
        clk_period,
        clk_mhz,
    };
    trace!(?spec, "timing spec");
    Ok(spec)
}
