//! Core vocabulary for BS 7671 protective-device compliance
//!
//! Value objects exchanged between the compliance engine and its
//! presentation layers. Everything here is immutable and serializable;
//! table data and query logic live in the `compliance-engine` crate.

use serde::{Deserialize, Serialize};

/// Protective device families covered by BS 7671 Chapter 41
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DeviceFamily {
    /// MCBs and RCBOs to BS EN 60898 / BS EN 61009
    CircuitBreaker,
    /// Cartridge and semi-enclosed fuses
    Fuse,
    /// Residual current devices to BS EN 61008 / BS EN 61009
    Rcd,
}

impl DeviceFamily {
    /// Human-readable family name
    pub fn name(&self) -> &'static str {
        match self {
            DeviceFamily::CircuitBreaker => "Circuit breaker (MCB/RCBO)",
            DeviceFamily::Fuse => "Fuse",
            DeviceFamily::Rcd => "RCD",
        }
    }
}

impl std::fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Circuit-breaker tripping curves per BS EN 60898
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CurveType {
    B,
    C,
    D,
}

impl CurveType {
    /// Human label, e.g. "Type B"
    pub fn label(&self) -> &'static str {
        match self {
            CurveType::B => "Type B",
            CurveType::C => "Type C",
            CurveType::D => "Type D",
        }
    }

    /// Multiple of rated current at which instantaneous disconnection
    /// is guaranteed (upper limit of the tripping band)
    pub fn trip_multiplier(&self) -> u32 {
        match self {
            CurveType::B => 5,
            CurveType::C => 10,
            CurveType::D => 20,
        }
    }

    /// All curves, in tabulated order
    pub fn all() -> [CurveType; 3] {
        [CurveType::B, CurveType::C, CurveType::D]
    }
}

impl std::fmt::Display for CurveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Fuse sub-standards with tabulated maximum Zs values
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FuseStandard {
    /// BS 88-2 gG bolted/clip-in cartridge fuses
    Bs88_2,
    /// BS 88-3 fuse system C (formerly BS 1361)
    Bs88_3,
    /// BS 3036 semi-enclosed (rewirable) fuses
    Bs3036,
    /// BS 1362 plug-top cartridge fuses
    Bs1362,
}

impl FuseStandard {
    /// Human label, e.g. "BS 88-2 (gG)"
    pub fn label(&self) -> &'static str {
        match self {
            FuseStandard::Bs88_2 => "BS 88-2 (gG)",
            FuseStandard::Bs88_3 => "BS 88-3 (fuse system C)",
            FuseStandard::Bs3036 => "BS 3036 (semi-enclosed)",
            FuseStandard::Bs1362 => "BS 1362 (plug-top)",
        }
    }

    /// All fuse standards, in tabulated order
    pub fn all() -> [FuseStandard; 4] {
        [
            FuseStandard::Bs88_2,
            FuseStandard::Bs88_3,
            FuseStandard::Bs3036,
            FuseStandard::Bs1362,
        ]
    }
}

impl std::fmt::Display for FuseStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Maximum disconnection times for which BS 7671 tabulates Zs limits
///
/// 0.4 s applies to final circuits up to 63 A in TN systems; 5 s applies
/// to distribution circuits. Regulation 411.3.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisconnectionTime {
    /// 0.4 second disconnection (final circuits)
    Ms400,
    /// 5 second disconnection (distribution circuits)
    S5,
}

impl DisconnectionTime {
    /// Human label, e.g. "0.4 s"
    pub fn label(&self) -> &'static str {
        match self {
            DisconnectionTime::Ms400 => "0.4 s",
            DisconnectionTime::S5 => "5 s",
        }
    }

    /// Disconnection time in seconds
    pub fn seconds(&self) -> f64 {
        match self {
            DisconnectionTime::Ms400 => 0.4,
            DisconnectionTime::S5 => 5.0,
        }
    }
}

impl std::fmt::Display for DisconnectionTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A device selection as submitted by a form or parsed from shorthand
///
/// Per-family required fields are validated by the engine when the
/// selection is resolved; a missing field is a caller error, distinct
/// from a well-formed device absent from the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSelection {
    pub family: DeviceFamily,
    pub curve: Option<CurveType>,
    pub fuse_standard: Option<FuseStandard>,
    /// Rated current: amperes for breakers and fuses, milliamperes for RCDs
    pub rating: Option<u32>,
}

impl DeviceSelection {
    pub fn breaker(curve: CurveType, rating: u32) -> Self {
        Self {
            family: DeviceFamily::CircuitBreaker,
            curve: Some(curve),
            fuse_standard: None,
            rating: Some(rating),
        }
    }

    pub fn fuse(standard: FuseStandard, rating: u32) -> Self {
        Self {
            family: DeviceFamily::Fuse,
            curve: None,
            fuse_standard: Some(standard),
            rating: Some(rating),
        }
    }

    pub fn rcd(residual_ma: u32) -> Self {
        Self {
            family: DeviceFamily::Rcd,
            curve: None,
            fuse_standard: None,
            rating: Some(residual_ma),
        }
    }
}

/// A fully-resolved protective device
///
/// Every variant carries all the fields its family needs, so a value of
/// this type always addresses exactly one table cell per disconnection
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtectiveDevice {
    CircuitBreaker { curve: CurveType, rating: u32 },
    Fuse { standard: FuseStandard, rating: u32 },
    Rcd { residual_ma: u32 },
}

impl ProtectiveDevice {
    pub fn family(&self) -> DeviceFamily {
        match self {
            ProtectiveDevice::CircuitBreaker { .. } => DeviceFamily::CircuitBreaker,
            ProtectiveDevice::Fuse { .. } => DeviceFamily::Fuse,
            ProtectiveDevice::Rcd { .. } => DeviceFamily::Rcd,
        }
    }

    /// Rated current: amperes for breakers and fuses, milliamperes for RCDs
    pub fn rating(&self) -> u32 {
        match self {
            ProtectiveDevice::CircuitBreaker { rating, .. } => *rating,
            ProtectiveDevice::Fuse { rating, .. } => *rating,
            ProtectiveDevice::Rcd { residual_ma } => *residual_ma,
        }
    }

    /// Human description, e.g. "32 A Type B MCB" or "30 mA RCD"
    pub fn description(&self) -> String {
        match self {
            ProtectiveDevice::CircuitBreaker { curve, rating } => {
                format!("{} A {} MCB", rating, curve.label())
            }
            ProtectiveDevice::Fuse { standard, rating } => {
                format!("{} A {} fuse", rating, standard.label())
            }
            ProtectiveDevice::Rcd { residual_ma } => format!("{} mA RCD", residual_ma),
        }
    }
}

impl std::fmt::Display for ProtectiveDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl From<ProtectiveDevice> for DeviceSelection {
    fn from(device: ProtectiveDevice) -> Self {
        match device {
            ProtectiveDevice::CircuitBreaker { curve, rating } => {
                DeviceSelection::breaker(curve, rating)
            }
            ProtectiveDevice::Fuse { standard, rating } => DeviceSelection::fuse(standard, rating),
            ProtectiveDevice::Rcd { residual_ma } => DeviceSelection::rcd(residual_ma),
        }
    }
}

/// Result of a forward threshold lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdResult {
    pub device: ProtectiveDevice,
    /// Maximum tabulated Zs in ohms (100 % value)
    pub max_impedance: f64,
    /// 80 % of the tabulated value, the on-site measurement limit
    pub test_threshold: f64,
    /// BS 7671 table the value is drawn from, e.g. "BS 7671:2018 Table 41.3"
    pub citation: String,
}

/// One device matched against a measured Zs value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceCandidate {
    pub device: ProtectiveDevice,
    /// Maximum tabulated Zs in ohms (100 % value)
    pub max_impedance: f64,
    /// 80 % of the tabulated value, the on-site measurement limit
    pub test_threshold: f64,
    /// Headroom between the test threshold and the measured value, in
    /// ohms. Negative when the device passes only at the 100 % value.
    pub margin: f64,
    /// Measured value is within the 80 % test threshold
    pub passes_at_80: bool,
    /// Measured value is within the 100 % tabulated value
    pub passes_at_100: bool,
    /// BS 7671 table the tabulated value is drawn from
    pub citation: String,
}

/// Full outcome of a reverse compliance search
///
/// `compliant` holds every device whose 80 % test threshold the
/// measurement satisfies, tightest margin first. `marginal` holds
/// devices that would satisfy only the 100 % tabulated value, so a
/// caller can present the relaxed view without a second query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceAssessment {
    pub measured_zs: f64,
    pub time: DisconnectionTime,
    pub compliant: Vec<ComplianceCandidate>,
    pub marginal: Vec<ComplianceCandidate>,
}

impl ComplianceAssessment {
    /// No device passes even at the 100 % tabulated value
    pub fn is_empty(&self) -> bool {
        self.compliant.is_empty() && self.marginal.is_empty()
    }

    /// Nothing passes the 80 % test threshold, but at least one device
    /// would still satisfy its tabulated value
    pub fn only_marginal(&self) -> bool {
        self.compliant.is_empty() && !self.marginal.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_labels_and_multipliers() {
        assert_eq!(CurveType::B.label(), "Type B");
        assert_eq!(CurveType::B.trip_multiplier(), 5);
        assert_eq!(CurveType::C.trip_multiplier(), 10);
        assert_eq!(CurveType::D.trip_multiplier(), 20);
    }

    #[test]
    fn test_device_descriptions() {
        let mcb = ProtectiveDevice::CircuitBreaker {
            curve: CurveType::B,
            rating: 32,
        };
        assert_eq!(mcb.description(), "32 A Type B MCB");
        assert_eq!(mcb.family(), DeviceFamily::CircuitBreaker);
        assert_eq!(mcb.rating(), 32);

        let fuse = ProtectiveDevice::Fuse {
            standard: FuseStandard::Bs88_2,
            rating: 20,
        };
        assert_eq!(fuse.description(), "20 A BS 88-2 (gG) fuse");

        let rcd = ProtectiveDevice::Rcd { residual_ma: 30 };
        assert_eq!(rcd.description(), "30 mA RCD");
        assert_eq!(rcd.rating(), 30);
    }

    #[test]
    fn test_selection_constructors() {
        let sel = DeviceSelection::breaker(CurveType::C, 16);
        assert_eq!(sel.family, DeviceFamily::CircuitBreaker);
        assert_eq!(sel.curve, Some(CurveType::C));
        assert_eq!(sel.rating, Some(16));
        assert_eq!(sel.fuse_standard, None);

        let sel = DeviceSelection::rcd(100);
        assert_eq!(sel.family, DeviceFamily::Rcd);
        assert_eq!(sel.rating, Some(100));
    }

    #[test]
    fn test_disconnection_time_labels() {
        assert_eq!(DisconnectionTime::Ms400.label(), "0.4 s");
        assert_eq!(DisconnectionTime::S5.label(), "5 s");
        assert!((DisconnectionTime::Ms400.seconds() - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_family_ordering_for_tie_breaks() {
        // Candidate tie-breaks sort breakers before fuses before RCDs
        assert!(DeviceFamily::CircuitBreaker < DeviceFamily::Fuse);
        assert!(DeviceFamily::Fuse < DeviceFamily::Rcd);
    }

    #[test]
    fn test_candidate_serde_round_trip() {
        let candidate = ComplianceCandidate {
            device: ProtectiveDevice::CircuitBreaker {
                curve: CurveType::B,
                rating: 32,
            },
            max_impedance: 1.37,
            test_threshold: 1.096,
            margin: 0.096,
            passes_at_80: true,
            passes_at_100: true,
            citation: "BS 7671:2018 Table 41.3".to_string(),
        };

        let json = serde_json::to_string(&candidate).unwrap();
        let back: ComplianceCandidate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, candidate);
    }
}
