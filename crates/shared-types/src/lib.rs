pub mod types;

pub use types::{
    ComplianceAssessment, ComplianceCandidate, CurveType, DeviceFamily, DeviceSelection,
    DisconnectionTime, FuseStandard, ProtectiveDevice, ThresholdResult,
};
