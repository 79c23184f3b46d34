//! Device configuration for the specification builders.
//!
//! This module defines the raw device parameters that are translated into a
//! [`MemorySpecification`](crate::spec::MemorySpecification). It provides:
//! 1. **Defaults:** A DDR4-2400 x8 device, used for any field a document omits.
//! 2. **Structures:** The flat device record and its two current tables.
//!
//! Timing values are absolute intervals in ticks (1 tick = 1 ps). Currents
//! are in amps and voltages in volts, as they appear in a datasheet.

use serde::Deserialize;

use crate::common::{SpecError, Tick};

/// Default device parameters (DDR4-2400, 8 Gbit, x8).
mod defaults {
    use crate::common::Tick;

    /// Beats per burst.
    pub const BURST_LENGTH: u32 = 8;

    /// Banks in one rank.
    pub const BANKS_PER_RANK: u32 = 16;

    /// Bank groups in one rank.
    pub const BANK_GROUPS_PER_RANK: u32 = 4;

    /// Ranks sharing the channel.
    pub const RANKS_PER_CHANNEL: u32 = 2;

    /// Device data bus width in bits.
    pub const DEVICE_BUS_WIDTH: u32 = 8;

    /// Data beats per clock (double data rate).
    pub const BEATS_PER_CLOCK: u8 = 2;

    /// Clock period (0.833 ns, 1200 MHz).
    pub const T_CK: Tick = 833;

    /// Longest burst duration (4 clocks of 0.833 ns).
    pub const T_BURST_MAX: Tick = 3_332;

    /// Row active time.
    pub const T_RAS: Tick = 32_000;

    /// Row precharge time.
    pub const T_RP: Tick = 14_160;

    /// Row to column delay.
    pub const T_RCD: Tick = 14_160;

    /// CAS latency.
    pub const T_CL: Tick = 14_160;

    /// Refresh cycle time.
    pub const T_RFC: Tick = 350_000;

    /// Store time; zero for devices without a store phase.
    pub const T_ST: Tick = 0;

    /// Read to precharge delay.
    pub const T_RTP: Tick = 7_500;

    /// Write recovery time.
    pub const T_WR: Tick = 15_000;

    /// Power-down exit latency.
    pub const T_XP: Tick = 6_000;

    /// Power-down exit latency with DLL off.
    pub const T_XPDLL: Tick = 24_000;

    /// Self-refresh exit latency.
    pub const T_XS: Tick = 340_000;

    /// Self-refresh exit latency with DLL relock (768 clocks).
    pub const T_XSDLL: Tick = 639_744;

    /// Primary supply voltage.
    pub const VDD: f64 = 1.2;

    /// Secondary (wordline pump) supply voltage.
    pub const VDD2: f64 = 2.5;
}

/// Operating currents for one supply rail, in amps.
///
/// Each field is a JEDEC IDD measurement condition. A device has one table
/// per voltage domain; the secondary table is all zero for single-domain
/// devices.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CurrentTable {
    /// One bank activate-precharge.
    pub idd0: f64,
    /// Precharge power-down, slow exit.
    pub idd2p0: f64,
    /// Precharge power-down, fast exit.
    pub idd2p1: f64,
    /// Precharge standby.
    pub idd2n: f64,
    /// Active power-down, slow exit.
    pub idd3p0: f64,
    /// Active power-down, fast exit.
    pub idd3p1: f64,
    /// Active standby.
    pub idd3n: f64,
    /// Burst read.
    pub idd4r: f64,
    /// Burst write.
    pub idd4w: f64,
    /// All-bank refresh.
    pub idd5: f64,
    /// Per-bank refresh.
    pub idd5b: f64,
    /// Self refresh.
    pub idd6: f64,
}

impl CurrentTable {
    /// Primary-rail currents of the default DDR4-2400 x8 device.
    fn default_vdd() -> Self {
        Self {
            idd0: 0.048,
            idd2p0: 0.0,
            idd2p1: 0.025,
            idd2n: 0.034,
            idd3p0: 0.0,
            idd3p1: 0.037,
            idd3n: 0.043,
            idd4r: 0.135,
            idd4w: 0.123,
            idd5: 0.250,
            idd5b: 0.0,
            idd6: 0.030,
        }
    }

    /// Secondary-rail currents of the default DDR4-2400 x8 device.
    fn default_vdd2() -> Self {
        Self {
            idd0: 0.003,
            idd3n: 0.003,
            idd6: 0.003,
            ..Self::default()
        }
    }

    /// Returns this table with every current multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            idd0: self.idd0 * factor,
            idd2p0: self.idd2p0 * factor,
            idd2p1: self.idd2p1 * factor,
            idd2n: self.idd2n * factor,
            idd3p0: self.idd3p0 * factor,
            idd3p1: self.idd3p1 * factor,
            idd3n: self.idd3n * factor,
            idd4r: self.idd4r * factor,
            idd4w: self.idd4w * factor,
            idd5: self.idd5 * factor,
            idd5b: self.idd5b * factor,
            idd6: self.idd6 * factor,
        }
    }
}

/// Raw parameters of one memory device.
///
/// This is the input to every builder. It is owned by the surrounding device
/// model and treated as read-only; range checks beyond the ones needed to
/// derive cycle counts belong to whoever loads it.
///
/// # Examples
///
/// ```
/// use memspec_core::config::DeviceConfig;
///
/// let json = r#"{
///     "burst_length": 8,
///     "device_bus_width": 16,
///     "t_ck": 1250,
///     "t_burst_max": 5000,
///     "vdd2": 0.0,
///     "idd": { "idd0": 0.055, "idd4r": 0.150 }
/// }"#;
///
/// let config = DeviceConfig::from_json(json).unwrap();
/// assert_eq!(config.device_bus_width, 16);
/// assert_eq!(config.t_ck, 1250);
/// assert_eq!(config.idd.idd4r, 0.150);
/// assert_eq!(config.idd.idd3n, 0.0);
/// assert_eq!(config.banks_per_rank, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeviceConfig {
    /// Beats per burst
    #[serde(default = "DeviceConfig::default_burst_length")]
    pub burst_length: u32,

    /// Banks per rank
    #[serde(default = "DeviceConfig::default_banks_per_rank")]
    pub banks_per_rank: u32,

    /// Bank groups per rank
    #[serde(default = "DeviceConfig::default_bank_groups_per_rank")]
    pub bank_groups_per_rank: u32,

    /// Ranks per channel (system level; the power model covers one rank)
    #[serde(default = "DeviceConfig::default_ranks_per_channel")]
    pub ranks_per_channel: u32,

    /// Device data bus width in bits
    #[serde(default = "DeviceConfig::default_device_bus_width")]
    pub device_bus_width: u32,

    /// Whether the device has a DLL
    #[serde(default = "DeviceConfig::default_dll")]
    pub dll: bool,

    /// Data beats per clock cycle
    #[serde(default = "DeviceConfig::default_beats_per_clock")]
    pub beats_per_clock: u8,

    /// Clock period
    #[serde(default = "DeviceConfig::default_t_ck")]
    pub t_ck: Tick,

    /// Longest burst duration, used to infer the data rate
    #[serde(default = "DeviceConfig::default_t_burst_max")]
    pub t_burst_max: Tick,

    /// Row active time
    #[serde(default = "DeviceConfig::default_t_ras")]
    pub t_ras: Tick,

    /// Row precharge time
    #[serde(default = "DeviceConfig::default_t_rp")]
    pub t_rp: Tick,

    /// Row to column delay
    #[serde(default = "DeviceConfig::default_t_rcd")]
    pub t_rcd: Tick,

    /// CAS latency
    #[serde(default = "DeviceConfig::default_t_cl")]
    pub t_cl: Tick,

    /// Refresh cycle time
    #[serde(default = "DeviceConfig::default_t_rfc")]
    pub t_rfc: Tick,

    /// Store time
    #[serde(default = "DeviceConfig::default_t_st")]
    pub t_st: Tick,

    /// Read to precharge delay
    #[serde(default = "DeviceConfig::default_t_rtp")]
    pub t_rtp: Tick,

    /// Write recovery time
    #[serde(default = "DeviceConfig::default_t_wr")]
    pub t_wr: Tick,

    /// Power-down exit latency
    #[serde(default = "DeviceConfig::default_t_xp")]
    pub t_xp: Tick,

    /// Power-down exit latency with DLL off
    #[serde(default = "DeviceConfig::default_t_xpdll")]
    pub t_xpdll: Tick,

    /// Self-refresh exit latency
    #[serde(default = "DeviceConfig::default_t_xs")]
    pub t_xs: Tick,

    /// Self-refresh exit latency with DLL relock
    #[serde(default = "DeviceConfig::default_t_xsdll")]
    pub t_xsdll: Tick,

    /// Currents drawn from VDD
    #[serde(default = "CurrentTable::default_vdd")]
    pub idd: CurrentTable,

    /// Currents drawn from VDD2
    #[serde(default = "CurrentTable::default_vdd2")]
    pub idd2: CurrentTable,

    /// Primary supply voltage
    #[serde(default = "DeviceConfig::default_vdd")]
    pub vdd: f64,

    /// Secondary supply voltage; zero for single-domain devices
    #[serde(default = "DeviceConfig::default_vdd2")]
    pub vdd2: f64,
}

impl DeviceConfig {
    /// Parses a device configuration from a JSON document.
    ///
    /// Fields missing from the document take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Config`] if the document is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    fn default_burst_length() -> u32 {
        defaults::BURST_LENGTH
    }

    fn default_banks_per_rank() -> u32 {
        defaults::BANKS_PER_RANK
    }

    fn default_bank_groups_per_rank() -> u32 {
        defaults::BANK_GROUPS_PER_RANK
    }

    fn default_ranks_per_channel() -> u32 {
        defaults::RANKS_PER_CHANNEL
    }

    fn default_device_bus_width() -> u32 {
        defaults::DEVICE_BUS_WIDTH
    }

    fn default_dll() -> bool {
        true
    }

    fn default_beats_per_clock() -> u8 {
        defaults::BEATS_PER_CLOCK
    }

    fn default_t_ck() -> Tick {
        defaults::T_CK
    }

    fn default_t_burst_max() -> Tick {
        defaults::T_BURST_MAX
    }

    fn default_t_ras() -> Tick {
        defaults::T_RAS
    }

    fn default_t_rp() -> Tick {
        defaults::T_RP
    }

    fn default_t_rcd() -> Tick {
        defaults::T_RCD
    }

    fn default_t_cl() -> Tick {
        defaults::T_CL
    }

    fn default_t_rfc() -> Tick {
        defaults::T_RFC
    }

    fn default_t_st() -> Tick {
        defaults::T_ST
    }

    fn default_t_rtp() -> Tick {
        defaults::T_RTP
    }

    fn default_t_wr() -> Tick {
        defaults::T_WR
    }

    fn default_t_xp() -> Tick {
        defaults::T_XP
    }

    fn default_t_xpdll() -> Tick {
        defaults::T_XPDLL
    }

    fn default_t_xs() -> Tick {
        defaults::T_XS
    }

    fn default_t_xsdll() -> Tick {
        defaults::T_XSDLL
    }

    fn default_vdd() -> f64 {
        defaults::VDD
    }

    fn default_vdd2() -> f64 {
        defaults::VDD2
    }
}

impl Default for DeviceConfig {
    /// Creates the default DDR4-2400 x8 device.
    fn default() -> Self {
        Self {
            burst_length: defaults::BURST_LENGTH,
            banks_per_rank: defaults::BANKS_PER_RANK,
            bank_groups_per_rank: defaults::BANK_GROUPS_PER_RANK,
            ranks_per_channel: defaults::RANKS_PER_CHANNEL,
            device_bus_width: defaults::DEVICE_BUS_WIDTH,
            dll: true,
            beats_per_clock: defaults::BEATS_PER_CLOCK,
            t_ck: defaults::T_CK,
            t_burst_max: defaults::T_BURST_MAX,
            t_ras: defaults::T_RAS,
            t_rp: defaults::T_RP,
            t_rcd: defaults::T_RCD,
            t_cl: defaults::T_CL,
            t_rfc: defaults::T_RFC,
            t_st: defaults::T_ST,
            t_rtp: defaults::T_RTP,
            t_wr: defaults::T_WR,
            t_xp: defaults::T_XP,
            t_xpdll: defaults::T_XPDLL,
            t_xs: defaults::T_XS,
            t_xsdll: defaults::T_XSDLL,
            idd: CurrentTable::default_vdd(),
            idd2: CurrentTable::default_vdd2(),
            vdd: defaults::VDD,
            vdd2: defaults::VDD2,
        }
    }
}
