//! Architecture portion of the memory specification.

use serde::Serialize;

/// Structural description of one rank of devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureSpec {
    /// Beats per burst.
    pub burst_length: u32,
    /// Banks in the rank.
    pub nbr_of_banks: u32,
    /// Ranks covered by this specification; always one.
    pub nbr_of_ranks: u32,
    /// Data beats per clock cycle.
    pub data_rate: u8,
    /// Reserved; not consumed by the power model and always zero.
    pub nbr_of_columns: u32,
    /// Reserved; not consumed by the power model and always zero.
    pub nbr_of_rows: u32,
    /// Device data bus width in bits.
    pub width: u32,
    /// Bank groups in the rank.
    pub nbr_of_bank_groups: u32,
    /// Whether the device has a DLL.
    pub dll: bool,
    /// Whether the device draws from two supply rails.
    pub two_voltage_domains: bool,
    /// Whether on-die termination power is modeled.
    pub termination: bool,
}
