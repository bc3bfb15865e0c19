//! BS 7671 protective-device compliance engine
//!
//! Pure, deterministic queries over the maximum earth-fault-loop
//! impedance (Zs) tables of BS 7671:2018 Chapter 41. Two symmetric
//! operations: forward lookup (device selection to its Zs limits) and
//! reverse compliance search (measured Zs to every device it satisfies,
//! ranked by safety margin), plus a shorthand parser for breaker
//! designations like "B32".
//!
//! Reference data is immutable and compiled in; every query allocates
//! only its own result structures, so all operations are safe to call
//! concurrently without locking.

pub mod derivation;
pub mod designation;
pub mod error;
pub mod matching;

mod tables;

pub use derivation::{available_ratings, citation, test_threshold, TEST_FACTOR};
pub use designation::parse_quick_designation;
pub use error::EngineError;
pub use matching::{assess, find_compliant_devices, lookup_threshold, resolve_selection};

use shared_types::{
    ComplianceAssessment, ComplianceCandidate, DeviceSelection, DisconnectionTime, ThresholdResult,
};

/// ComplianceEngine entry point
pub struct ComplianceEngine;

impl ComplianceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Forward lookup: device selection to its Zs limits and citation
    pub fn lookup_threshold(
        &self,
        selection: &DeviceSelection,
        time: DisconnectionTime,
    ) -> Result<ThresholdResult, EngineError> {
        matching::lookup_threshold(selection, time)
    }

    /// Reverse search: measured Zs to ranked candidates, compliant and
    /// marginal views from one scan
    pub fn assess(
        &self,
        measured_zs: f64,
        time: DisconnectionTime,
    ) -> Result<ComplianceAssessment, EngineError> {
        matching::assess(measured_zs, time)
    }

    /// Devices whose 80 % test threshold the measurement satisfies
    pub fn find_compliant_devices(
        &self,
        measured_zs: f64,
        time: DisconnectionTime,
    ) -> Result<Vec<ComplianceCandidate>, EngineError> {
        matching::find_compliant_devices(measured_zs, time)
    }

    /// Rated currents available for a selection's family and sub-type
    pub fn available_ratings(
        &self,
        selection: &DeviceSelection,
        time: DisconnectionTime,
    ) -> Result<Vec<u32>, EngineError> {
        derivation::available_ratings(selection, time)
    }

    /// Parse shorthand like "B32" into a circuit-breaker selection
    pub fn parse_quick_designation(&self, code: &str) -> Option<DeviceSelection> {
        designation::parse_quick_designation(code)
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}
