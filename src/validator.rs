//! # Per-field input validation
//!
//! A single pure function decides whether one raw textual submission is an
//! acceptable value for one catalog field. Same inputs, same verdict: no
//! clock, no environment, no allocation beyond the returned reason.
//!
//! Parsing uses Rust's locale-independent `f64` grammar on the trimmed
//! input. The range check is inclusive on both boundaries, so `min` and
//! `max` themselves are accepted.

use std::fmt;

use crate::catalog::FieldDef;

/// Why a submission was turned down.
///
/// The `Display` rendering is the sentence shown to the user, so the
/// sequencer can embed it directly in its error message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RejectReason {
    NotANumber,
    OutOfRange { min: f64, max: f64 },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NotANumber => write!(f, "Please enter a valid number."),
            RejectReason::OutOfRange { min, max } => {
                write!(f, "Value must be between {min} and {max}.")
            }
        }
    }
}

/// Outcome of validating one raw submission against one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validation {
    Accepted(f64),
    Rejected(RejectReason),
}

impl Validation {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Validation::Accepted(_))
    }
}

/// Validate `raw` against `field`.
///
/// Arguments
/// -----------------
/// * `raw`: The user's textual submission, taken verbatim from the input.
/// * `field`: The catalog field currently being asked.
///
/// Return
/// ----------
/// * [`Validation::Accepted`] carrying the parsed value when `raw` is a
///   finite number within the field's inclusive `[min, max]`.
/// * [`Validation::Rejected`] with the reason otherwise: a parse failure or
///   non-finite value rejects as [`RejectReason::NotANumber`], a finite value
///   outside the bounds as [`RejectReason::OutOfRange`].
pub fn validate(raw: &str, field: &FieldDef) -> Validation {
    let Ok(value) = raw.trim().parse::<f64>() else {
        return Validation::Rejected(RejectReason::NotANumber);
    };

    if !value.is_finite() {
        return Validation::Rejected(RejectReason::NotANumber);
    }

    if value < field.min || value > field.max {
        return Validation::Rejected(RejectReason::OutOfRange {
            min: field.min,
            max: field.max,
        });
    }

    Validation::Accepted(value)
}
