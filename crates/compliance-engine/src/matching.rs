//! Forward threshold lookup and reverse compliance search
//!
//! Both operations are deterministic and side-effect-free: the same
//! query against the same tables always produces the same result, and
//! every query allocates only its own result structures.

use tracing::debug;

use shared_types::{
    ComplianceAssessment, ComplianceCandidate, DeviceFamily, DeviceSelection, DisconnectionTime,
    ProtectiveDevice, ThresholdResult,
};

use crate::derivation::{citation, test_threshold};
use crate::error::EngineError;
use crate::tables;

/// Validate a selection's per-family required fields
///
/// A missing field is a caller error (`IncompleteDescriptor`), distinct
/// from a resolved device that has no table entry (`UnknownDevice`).
pub fn resolve_selection(selection: &DeviceSelection) -> Result<ProtectiveDevice, EngineError> {
    match selection.family {
        DeviceFamily::CircuitBreaker => {
            let curve = selection
                .curve
                .ok_or(EngineError::IncompleteDescriptor("curve"))?;
            let rating = selection
                .rating
                .ok_or(EngineError::IncompleteDescriptor("rating"))?;
            Ok(ProtectiveDevice::CircuitBreaker { curve, rating })
        }
        DeviceFamily::Fuse => {
            let standard = selection
                .fuse_standard
                .ok_or(EngineError::IncompleteDescriptor("fuse standard"))?;
            let rating = selection
                .rating
                .ok_or(EngineError::IncompleteDescriptor("rating"))?;
            Ok(ProtectiveDevice::Fuse { standard, rating })
        }
        DeviceFamily::Rcd => {
            let residual_ma = selection
                .rating
                .ok_or(EngineError::IncompleteDescriptor("residual rating"))?;
            Ok(ProtectiveDevice::Rcd { residual_ma })
        }
    }
}

/// Forward lookup: device selection to its Zs limits and citation
pub fn lookup_threshold(
    selection: &DeviceSelection,
    time: DisconnectionTime,
) -> Result<ThresholdResult, EngineError> {
    let device = resolve_selection(selection)?;
    let max_impedance = tables::max_impedance(device, time)
        .ok_or_else(|| EngineError::UnknownDevice(format!("{} at {}", device, time)))?;

    Ok(ThresholdResult {
        device,
        max_impedance,
        test_threshold: test_threshold(max_impedance),
        citation: citation(device, time).to_string(),
    })
}

/// Reverse compliance search: measured Zs to ranked candidate devices
///
/// One scan over every tabulated entry for the disconnection time.
/// Devices whose 80 % test threshold the measurement satisfies land in
/// `compliant`; devices satisfying only the 100 % tabulated value land
/// in `marginal`. Both lists ascend by margin, tightest fit first, so
/// the least conservative option leads. Zero matches is a valid empty
/// assessment, not an error.
pub fn assess(
    measured_zs: f64,
    time: DisconnectionTime,
) -> Result<ComplianceAssessment, EngineError> {
    if !measured_zs.is_finite() || measured_zs <= 0.0 {
        return Err(EngineError::InvalidMeasurement(measured_zs));
    }

    let mut compliant = Vec::new();
    let mut marginal = Vec::new();

    for (device, max_impedance) in tables::entries(time) {
        if measured_zs > max_impedance {
            continue;
        }
        let threshold = test_threshold(max_impedance);
        let passes_at_80 = measured_zs <= threshold;
        let candidate = ComplianceCandidate {
            device,
            max_impedance,
            test_threshold: threshold,
            margin: threshold - measured_zs,
            passes_at_80,
            passes_at_100: true,
            citation: citation(device, time).to_string(),
        };
        if passes_at_80 {
            compliant.push(candidate);
        } else {
            marginal.push(candidate);
        }
    }

    sort_by_margin(&mut compliant);
    sort_by_margin(&mut marginal);

    debug!(
        measured_zs,
        time = %time,
        compliant = compliant.len(),
        marginal = marginal.len(),
        "compliance scan complete"
    );

    Ok(ComplianceAssessment {
        measured_zs,
        time,
        compliant,
        marginal,
    })
}

/// Devices whose 80 % test threshold the measurement satisfies,
/// tightest margin first
pub fn find_compliant_devices(
    measured_zs: f64,
    time: DisconnectionTime,
) -> Result<Vec<ComplianceCandidate>, EngineError> {
    Ok(assess(measured_zs, time)?.compliant)
}

/// Ascending margin; ties break by family then rating for determinism
fn sort_by_margin(candidates: &mut [ComplianceCandidate]) {
    candidates.sort_by(|a, b| {
        a.margin
            .partial_cmp(&b.margin)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.device.family().cmp(&b.device.family()))
            .then_with(|| a.device.rating().cmp(&b.device.rating()))
    });
}
