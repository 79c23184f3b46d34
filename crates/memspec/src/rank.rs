//! Per-rank ownership of a power model.
//!
//! A power model is built once per rank from the assembled specification and
//! lives as long as the rank does. The model itself is external; this module
//! only defines the seam it plugs into.

use crate::build::memory_spec;
use crate::common::SpecError;
use crate::config::DeviceConfig;
use crate::spec::MemorySpecification;

/// A DRAM power model that can be built from a memory specification.
pub trait PowerModel {
    /// Creates the model, taking ownership of the specification.
    ///
    /// # Arguments
    ///
    /// * `spec` - The assembled specification for one rank.
    /// * `include_io` - Whether I/O and termination power is included.
    fn from_spec(spec: MemorySpecification, include_io: bool) -> Self;
}

/// Power model instance for a single rank.
#[derive(Debug)]
pub struct RankPower<M> {
    model: M,
}

impl<M: PowerModel> RankPower<M> {
    /// Assembles the specification for `config` and builds the power model from it.
    ///
    /// # Errors
    ///
    /// Returns the [`SpecError`] raised while assembling the specification;
    /// the model is not constructed in that case.
    pub fn new(config: &DeviceConfig, include_io: bool) -> Result<Self, SpecError> {
        let spec = memory_spec(config)?;
        Ok(Self {
            model: M::from_spec(spec, include_io),
        })
    }

    /// Returns the power model.
    pub const fn model(&self) -> &M {
        &self.model
    }

    /// Returns the power model mutably, for feeding it commands.
    pub const fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consumes the wrapper and returns the power model.
    pub fn into_model(self) -> M {
        self.model
    }
}
