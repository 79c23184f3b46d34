//! Power portion of the memory specification.

use serde::Serialize;

/// Supply currents in milliamps and voltages in volts.
///
/// Fields come in pairs: `iddX` is drawn from VDD and `iddX2` from VDD2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerSpec {
    /// IDD0 (one bank activate-precharge) drawn from VDD, mA.
    pub idd0: f64,
    /// IDD0 drawn from VDD2, mA.
    pub idd02: f64,
    /// IDD2P0 (precharge power-down, slow exit) drawn from VDD, mA.
    pub idd2p0: f64,
    /// IDD2P0 drawn from VDD2, mA.
    pub idd2p02: f64,
    /// IDD2P1 (precharge power-down, fast exit) drawn from VDD, mA.
    pub idd2p1: f64,
    /// IDD2P1 drawn from VDD2, mA.
    pub idd2p12: f64,
    /// IDD2N (precharge standby) drawn from VDD, mA.
    pub idd2n: f64,
    /// IDD2N drawn from VDD2, mA.
    pub idd2n2: f64,
    /// IDD3P0 (active power-down, slow exit) drawn from VDD, mA.
    pub idd3p0: f64,
    /// IDD3P0 drawn from VDD2, mA.
    pub idd3p02: f64,
    /// IDD3P1 (active power-down, fast exit) drawn from VDD, mA.
    pub idd3p1: f64,
    /// IDD3P1 drawn from VDD2, mA.
    pub idd3p12: f64,
    /// IDD3N (active standby) drawn from VDD, mA.
    pub idd3n: f64,
    /// IDD3N drawn from VDD2, mA.
    pub idd3n2: f64,
    /// IDD4R (burst read) drawn from VDD, mA.
    pub idd4r: f64,
    /// IDD4R drawn from VDD2, mA.
    pub idd4r2: f64,
    /// IDD4W (burst write) drawn from VDD, mA.
    pub idd4w: f64,
    /// IDD4W drawn from VDD2, mA.
    pub idd4w2: f64,
    /// IDD5 (all-bank refresh) drawn from VDD, mA.
    pub idd5: f64,
    /// IDD5 drawn from VDD2, mA.
    pub idd52: f64,
    /// IDD5B (per-bank refresh) drawn from VDD, mA.
    pub idd5b: f64,
    /// IDD5B drawn from VDD2, mA.
    pub idd5b2: f64,
    /// IDD6 (self refresh) drawn from VDD, mA.
    pub idd6: f64,
    /// IDD6 drawn from VDD2, mA.
    pub idd62: f64,
    /// Primary supply voltage, V.
    pub vdd: f64,
    /// Secondary supply voltage, V.
    pub vdd2: f64,
}

impl PowerSpec {
    /// Returns the 24 currents in field order.
    pub const fn currents(&self) -> [f64; 24] {
        [
            self.idd0,
            self.idd02,
            self.idd2p0,
            self.idd2p02,
            self.idd2p1,
            self.idd2p12,
            self.idd2n,
            self.idd2n2,
            self.idd3p0,
            self.idd3p02,
            self.idd3p1,
            self.idd3p12,
            self.idd3n,
            self.idd3n2,
            self.idd4r,
            self.idd4r2,
            self.idd4w,
            self.idd4w2,
            self.idd5,
            self.idd52,
            self.idd5b,
            self.idd5b2,
            self.idd6,
            self.idd62,
        ]
    }
}
