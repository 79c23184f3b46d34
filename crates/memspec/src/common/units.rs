//! Time and current unit conversions.
//!
//! Simulation time is measured in integer ticks of one picosecond. The power
//! model works in whole clock cycles, nanoseconds and milliamps.

/// Simulation time in ticks (1 tick = 1 ps).
pub type Tick = u64;

/// Ticks per nanosecond.
pub const TICKS_PER_NS: Tick = 1000;

/// Scale factor from the configuration's current unit (A) to the power model's (mA).
pub const AMPS_TO_MILLIAMPS: f64 = 1000.0;

/// Converts an absolute interval into whole clock cycles, rounding up.
///
/// A timing requirement must never be under-satisfied by a fractional
/// cycle, so the result is `ceil(t / t_ck)`. The caller guarantees
/// `t_ck != 0`.
#[inline]
pub const fn to_cycles(t: Tick, t_ck: Tick) -> u64 {
    t.div_ceil(t_ck)
}

/// Converts the sum of two intervals into whole clock cycles, rounding once.
///
/// The sum is formed in 128 bits, so large tick values cannot wrap. Returns
/// `None` if the cycle count does not fit in a `u64`. The caller guarantees
/// `t_ck != 0`.
#[inline]
pub fn sum_to_cycles(a: Tick, b: Tick, t_ck: Tick) -> Option<u64> {
    let sum = u128::from(a) + u128::from(b);
    u64::try_from(sum.div_ceil(u128::from(t_ck))).ok()
}

/// Converts ticks to nanoseconds.
#[inline]
pub const fn ticks_to_ns(t: Tick) -> f64 {
    t as f64 / TICKS_PER_NS as f64
}
