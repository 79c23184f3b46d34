//! # Rank Power Tests
//!
//! Verifies that the per-rank wrapper hands the assembled specification to
//! the power model and refuses to build one from an invalid configuration.

use memspec_core::build::memory_spec;
use memspec_core::common::SpecError;
use memspec_core::config::DeviceConfig;
use memspec_core::rank::RankPower;
use pretty_assertions::assert_eq;

use crate::common::fixtures::dual_rail_x8;
use crate::common::mocks::MockPowerModel;

#[test]
fn model_receives_assembled_spec() {
    let config = dual_rail_x8();
    let rank = RankPower::<MockPowerModel>::new(&config, true).unwrap();
    assert_eq!(rank.model().spec, memory_spec(&config).unwrap());
    assert!(rank.model().include_io);
}

#[test]
fn include_io_is_forwarded() {
    let rank = RankPower::<MockPowerModel>::new(&DeviceConfig::default(), false).unwrap();
    assert!(!rank.model().include_io);
}

#[test]
fn model_is_mutable_through_wrapper() {
    let mut rank = RankPower::<MockPowerModel>::new(&DeviceConfig::default(), false).unwrap();
    rank.model_mut().issue("ACT");
    rank.model_mut().issue("RD");
    let model = rank.into_model();
    assert_eq!(model.commands, vec!["ACT", "RD"]);
}

#[test]
fn invalid_config_builds_no_model() {
    let config = DeviceConfig {
        t_ck: 0,
        ..DeviceConfig::default()
    };
    let result = RankPower::<MockPowerModel>::new(&config, true);
    assert!(matches!(result, Err(SpecError::ZeroClockPeriod)));
}
