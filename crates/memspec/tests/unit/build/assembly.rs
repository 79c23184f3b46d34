//! # Assembly Tests
//!
//! Verifies data-rate inference, eager validation and the composed
//! specification.

use memspec_core::build::{
    architecture_spec, data_rate, memory_spec, power_spec, timing_spec,
};
use memspec_core::common::SpecError;
use memspec_core::config::DeviceConfig;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::fixtures::{dual_rail_x8, init_tracing, valid_config};

fn burst(burst_length: u32, t_burst_max: u64, t_ck: u64) -> DeviceConfig {
    DeviceConfig {
        burst_length,
        t_burst_max,
        t_ck,
        ..DeviceConfig::default()
    }
}

#[rstest]
#[case::single(burst(1, 1_000, 1_000), 1)]
#[case::double(burst(8, 3_332, 833), 2)]
#[case::double_rounded(burst(8, 3_001, 1_000), 2)]
#[case::quad(burst(16, 4_000, 1_000), 4)]
#[case::octal(burst(16, 2_000, 1_000), 8)]
#[case::truncated(burst(8, 5_000, 1_000), 1)]
fn supported_data_rates(#[case] config: DeviceConfig, #[case] expected: u8) {
    assert_eq!(data_rate(&config).unwrap(), expected);
}

#[rstest]
#[case::triple(burst(6, 2_000, 1_000), 3)]
#[case::triple_from_twelve(burst(12, 4_000, 1_000), 3)]
#[case::zero(burst(8, 9_000, 1_000), 0)]
#[case::sixteen(burst(16, 1_000, 1_000), 16)]
#[case::wider_than_u8(burst(264, 1_000, 1_000), 264)]
fn unsupported_data_rates(#[case] config: DeviceConfig, #[case] expected: u64) {
    match data_rate(&config) {
        Err(SpecError::UnsupportedDataRate { rate, .. }) => assert_eq!(rate, expected),
        other => panic!("expected unsupported data rate, got {other:?}"),
    }
}

#[test]
fn data_rate_rejects_zero_clock() {
    assert!(matches!(
        data_rate(&burst(8, 3_332, 0)),
        Err(SpecError::ZeroClockPeriod)
    ));
}

#[test]
fn data_rate_rejects_empty_burst_window() {
    assert!(matches!(
        data_rate(&burst(8, 0, 833)),
        Err(SpecError::ZeroBurstWindow { t_burst_max: 0 })
    ));
}

#[test]
fn build_fails_on_unsupported_data_rate() {
    init_tracing();
    let err = memory_spec(&burst(6, 2_000, 1_000)).unwrap_err();
    assert!(matches!(
        err,
        SpecError::UnsupportedDataRate {
            rate: 3,
            burst_length: 6,
            burst_cycles: 2,
        }
    ));
}

#[test]
fn build_fails_on_zero_clock() {
    let config = DeviceConfig {
        t_ck: 0,
        ..DeviceConfig::default()
    };
    assert!(matches!(
        memory_spec(&config),
        Err(SpecError::ZeroClockPeriod)
    ));
}

#[test]
fn huge_row_timings_assemble_without_panicking() {
    let config = DeviceConfig::from_json(r#"{ "t_ras": 18446744073709551615, "t_rp": 1000 }"#)
        .unwrap();
    let result = std::panic::catch_unwind(|| memory_spec(&config));
    let spec = result.expect("assembly must not panic").unwrap();
    assert_eq!(spec.mem_timing_spec.rc, 22_144_950_868_798_983);
}

#[test]
fn end_to_end_dual_rail_device() {
    init_tracing();
    let spec = memory_spec(&dual_rail_x8()).unwrap();
    let arch = spec.mem_arch_spec;
    assert_eq!(arch.nbr_of_ranks, 1);
    assert!(arch.two_voltage_domains);
    assert!(!arch.termination);
    assert_eq!(arch.nbr_of_columns, 0);
    assert_eq!(arch.nbr_of_rows, 0);
    assert_eq!(arch.burst_length, 8);
    assert_eq!(arch.width, 8);
    assert_eq!(arch.nbr_of_banks, 16);
    assert_eq!(arch.nbr_of_bank_groups, 4);
    assert!(arch.dll);
    assert_eq!(spec.mem_power_spec.vdd, 1.2);
    assert_eq!(spec.mem_power_spec.vdd2, 1.2);
}

#[test]
fn mismatched_beats_per_clock_still_builds() {
    init_tracing();
    let config = DeviceConfig {
        beats_per_clock: 4,
        ..DeviceConfig::default()
    };
    assert_eq!(data_rate(&config).unwrap(), 2);
    let spec = memory_spec(&config).unwrap();
    assert_eq!(spec.mem_arch_spec.data_rate, 4);
}

#[test]
fn assembly_matches_individual_builders() {
    let config = DeviceConfig::default();
    let spec = memory_spec(&config).unwrap();
    assert_eq!(spec.mem_arch_spec, architecture_spec(&config));
    assert_eq!(spec.mem_timing_spec, timing_spec(&config).unwrap());
    assert_eq!(spec.mem_power_spec, power_spec(&config));
}

#[test]
fn assembly_is_deterministic() {
    let config = dual_rail_x8();
    assert_eq!(memory_spec(&config).unwrap(), memory_spec(&config).unwrap());
}

#[test]
fn assembly_is_reentrant_across_threads() {
    let configs = [DeviceConfig::default(), dual_rail_x8()];
    let expected: Vec<_> = configs.iter().map(|c| memory_spec(c).unwrap()).collect();
    std::thread::scope(|s| {
        let handles: Vec<_> = configs
            .iter()
            .map(|c| s.spawn(move || memory_spec(c).unwrap()))
            .collect();
        for (handle, want) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), want);
        }
    });
}

proptest! {
    #[test]
    fn valid_configs_assemble(config in valid_config()) {
        let spec = memory_spec(&config).unwrap();
        prop_assert_eq!(spec.mem_arch_spec.nbr_of_ranks, 1);
        prop_assert_eq!(spec.mem_timing_spec.wl, spec.mem_timing_spec.rl.saturating_sub(1));
        prop_assert_eq!(u32::from(spec.mem_arch_spec.data_rate), config.burst_length);
    }
}
