//! Power builder.

use tracing::trace;

use crate::common::AMPS_TO_MILLIAMPS;
use crate::config::DeviceConfig;
use crate::spec::PowerSpec;

/// Builds the power fragment, scaling every current from amps to milliamps.
///
/// Voltages are passed through unchanged.
pub fn power_spec(config: &DeviceConfig) -> PowerSpec {
    let vdd = config.idd.scaled(AMPS_TO_MILLIAMPS);
    let vdd2 = config.idd2.scaled(AMPS_TO_MILLIAMPS);

    let spec = PowerSpec {
        idd0: vdd.idd0,
        idd02: vdd2.idd0,
        idd2p0: vdd.idd2p0,
        idd2p02: vdd2.idd2p0,
        idd2p1: vdd.idd2p1,
        idd2p12: vdd2.idd2p1,
        idd2n: vdd.idd2n,
        idd2n2: vdd2.idd2n,
        idd3p0: vdd.idd3p0,
        idd3p02: vdd2.idd3p0,
        idd3p1: vdd.idd3p1,
        idd3p12: vdd2.idd3p1,
        idd3n: vdd.idd3n,
        idd3n2: vdd2.idd3n,
        idd4r: vdd.idd4r,
        idd4r2: vdd2.idd4r,
        idd4w: vdd.idd4w,
        idd4w2: vdd2.idd4w,
        idd5: vdd.idd5,
        idd52: vdd2.idd5,
        idd5b: vdd.idd5b,
        idd5b2: vdd2.idd5b,
        idd6: vdd.idd6,
        idd62: vdd2.idd6,
        vdd: config.vdd,
        vdd2: config.vdd2,
    };
    trace!(?spec, "power spec");
    spec
}
