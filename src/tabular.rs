//! # Tabular import of a full parameter set
//!
//! Overview
//! -----------------
//! This module maps a delimited text payload (an uploaded or pasted CSV)
//! onto a complete [`ParameterSet`] in one step, bypassing the guided
//! dialogue entirely:
//!
//! * Row 0 is the **header row**; tokens are matched case-insensitively
//!   against the synonym table below.
//! * Row 1 is the **only data row consumed**. The importer is deliberately
//!   a single-record path; extra rows are ignored rather than batched.
//! * Both the long-form field ids (`orbital_period`, `stellar_temp`, ...)
//!   and the canonical keys themselves (`orbper`, `teff`, ...) are accepted
//!   as headers.
//!
//! Validation scope
//! -----------------
//! The importer enforces numeric *parseability* and *completeness* only.
//! Per-field range checks are the dialogue path's concern; callers that
//! need them after an import opt in via
//! [`ParameterSet::validate_ranges`](crate::parameters::ParameterSet::validate_ranges).
//!
//! Errors
//! -----------------
//! * [`ZetoError::MalformedPayload`] — fewer than two usable lines.
//! * [`ZetoError::IncompleteMapping`] — parsed, but one or more canonical
//!   keys never received a value (unknown header, empty cell, or a cell
//!   that does not parse as a float).

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::catalog::{self, CanonicalKey};
use crate::parameters::ParameterSet;
use crate::zeto_errors::ZetoError;

/// Header token (lower-case) → canonical key.
///
/// Every canonical key maps to itself; every long-form field id maps to its
/// key. Built once from the catalog so the two can never drift apart.
static HEADER_SYNONYMS: Lazy<HashMap<&'static str, CanonicalKey>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for field in catalog::list() {
        table.insert(field.key, field.key);
        table.insert(field.id, field.key);
    }
    table
});

/// Resolve one lower-cased header token to a canonical key, if recognized.
pub fn resolve_header(token: &str) -> Option<CanonicalKey> {
    HEADER_SYNONYMS.get(token).copied()
}

/// Map a raw tabular payload onto a complete [`ParameterSet`].
///
/// Arguments
/// -----------------
/// * `text`: The whole payload as text; the caller is agnostic to how it
///   was obtained (file upload, paste, ...).
///
/// Return
/// ----------
/// * The completed [`ParameterSet`] on success.
/// * [`ZetoError::MalformedPayload`] if fewer than two non-empty lines remain
///   after trimming.
/// * [`ZetoError::IncompleteMapping`] with the sorted missing canonical keys
///   if the data row does not cover the whole catalog.
///
/// See also
/// ------------
/// * [`resolve_header`] – Header synonym resolution used per token.
/// * [`crate::dialogue::DialogueSession`] – The turn-by-turn alternative path.
pub fn map_payload(text: &str) -> Result<ParameterSet, ZetoError> {
    let usable_lines = text.lines().map(str::trim).filter(|l| !l.is_empty()).count();
    if usable_lines < 2 {
        return Err(ZetoError::MalformedPayload);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|token| token.to_lowercase())
        .collect();

    // Only the first data row is consumed.
    let record = match reader.records().next() {
        Some(row) => row?,
        None => return Err(ZetoError::MalformedPayload),
    };

    let mut set = ParameterSet::new();
    for (index, token) in headers.iter().enumerate() {
        let Some(value_token) = record.get(index).filter(|v| !v.is_empty()) else {
            continue;
        };
        let Some(key) = resolve_header(token) else {
            continue;
        };
        // Last occurrence of a duplicated header wins.
        if let Ok(value) = value_token.parse::<f64>() {
            set.insert(key, value);
        }
    }

    let missing = set.missing_keys();
    if !missing.is_empty() {
        warn!(?missing, "tabular payload incomplete");
        return Err(ZetoError::IncompleteMapping(missing));
    }

    debug!(fields = set.len(), "tabular payload mapped");
    Ok(set)
}
