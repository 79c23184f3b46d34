//! Architecture builder.

use tracing::trace;

use crate::config::DeviceConfig;
use crate::spec::ArchitectureSpec;

/// One specification describes exactly one rank; aggregation across ranks
/// is done by whoever owns one power model per rank.
pub const RANKS_PER_SPEC: u32 = 1;

/// Column count reported to the power model, which does not use it.
pub const RESERVED_COLUMNS: u32 = 0;

/// Row count reported to the power model, which does not use it.
pub const RESERVED_ROWS: u32 = 0;

/// Termination power stays off until the termination model is firmed up.
pub const TERMINATION_ENABLED: bool = false;

/// Returns true if the device draws from a second supply rail.
pub fn has_two_vdd(config: &DeviceConfig) -> bool {
    config.vdd2 != 0.0
}

/// Builds the architecture fragment from the raw device parameters.
pub fn architecture_spec(config: &DeviceConfig) -> ArchitectureSpec {
    let spec = ArchitectureSpec {
        burst_length: config.burst_length,
        nbr_of_banks: config.banks_per_rank,
        nbr_of_ranks: RANKS_PER_SPEC,
        data_rate: config.beats_per_clock,
        nbr_of_columns: RESERVED_COLUMNS,
        nbr_of_rows: RESERVED_ROWS,
        width: config.device_bus_width,
        nbr_of_bank_groups: config.bank_groups_per_rank,
        dll: config.dll,
        two_voltage_domains: has_two_vdd(config),
        termination: TERMINATION_ENABLED,
    };
    trace!(?spec, "architecture spec");
    spec
}
