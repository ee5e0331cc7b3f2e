//! # Diagnostic export of a finished analysis
//!
//! Serializes a verdict together with the parameter set that produced it
//! into a self-contained JSON report, stamped with an `EXO-` analysis id
//! and a UTC timestamp. This is the only consumer of the parameter set
//! after a session ends; it never feeds anything back into a submission.

use hifitime::Epoch;
use serde_json::json;

use crate::analysis::Verdict;
use crate::parameters::ParameterSet;
use crate::zeto_errors::ZetoError;

/// Export a report stamped with the current wall-clock time.
///
/// Return
/// ----------
/// * Pretty-printed JSON with `result`, catalog-ordered `parameters`,
///   `timestamp`, and `analysis_id` fields.
/// * [`ZetoError::ClockError`] if the system clock cannot be read.
pub fn export_report(verdict: &Verdict, parameters: &ParameterSet) -> Result<String, ZetoError> {
    let epoch = Epoch::now().map_err(|err| ZetoError::ClockError(err.to_string()))?;
    export_report_at(verdict, parameters, epoch)
}

/// Export a report stamped with an explicit epoch.
///
/// Arguments
/// -----------------
/// * `verdict`: The analysis outcome to record.
/// * `parameters`: The parameter set that was classified.
/// * `epoch`: Report timestamp; the analysis id is derived from its Unix
///   millisecond count (`EXO-{millis}`).
pub fn export_report_at(
    verdict: &Verdict,
    parameters: &ParameterSet,
    epoch: Epoch,
) -> Result<String, ZetoError> {
    let analysis_id = format!("EXO-{}", epoch.to_unix_milliseconds().round() as i64);

    let report = json!({
        "result": verdict,
        "parameters": parameters,
        "timestamp": epoch.to_string(),
        "analysis_id": analysis_id,
    });

    Ok(serde_json::to_string_pretty(&report)?)
}
