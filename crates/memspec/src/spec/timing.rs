//! Timing portion of the memory specification.
//!
//! All intervals are whole clock cycles. Intervals that only matter to
//! command scheduling are not part of the power model and do not appear here.

use serde::Serialize;

/// Timing parameters in clock cycles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct TimingSpec {
    /// Row cycle time, `ceil((tRAS + tRP) / tCK)`.
    pub rc: u64,
    /// Row to column delay.
    pub rcd: u64,
    /// Read latency.
    pub rl: u64,
    /// Row precharge time.
    pub rp: u64,
    /// Refresh cycle time.
    pub rfc: u64,
    /// Store time.
    pub st: u64,
    /// Row active time.
    pub ras: u64,
    /// Write latency, one cycle less than the read latency.
    pub wl: u64,
    /// Data strobe to clock skew; not modeled and always zero.
    pub dqsck: u64,
    /// Read to precharge delay.
    pub rtp: u64,
    /// Write recovery time.
    pub wr: u64,
    /// Power-down exit latency.
    pub xp: u64,
    /// Power-down exit latency with DLL off.
    pub xpdll: u64,
    /// Self-refresh exit latency.
    pub xs: u64,
    /// Self-refresh exit latency with DLL relock.
    pub xsdll: u64,
    /// Clock period in nanoseconds.
    #[serde(rename = "clkPeriod")]
    pub clk_period: f64,
    /// Clock frequency in MHz.
    #[serde(rename = "clkMhz")]
    pub clk_mhz: f64,
}
