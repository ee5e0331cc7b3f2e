use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZetoError {
    #[error("Malformed tabular payload: expected a header row and at least one data row")]
    MalformedPayload,

    #[error("Tabular payload is missing required fields: {}", .0.join(", "))]
    IncompleteMapping(Vec<&'static str>),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("HTTP error while contacting the analysis service: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Analysis service returned status {0}")]
    AnalysisStatus(reqwest::StatusCode),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Value {value} for '{key}' is outside [{min}, {max}]")]
    OutOfRange {
        key: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("System clock unavailable: {0}")]
    ClockError(String),
}

impl PartialEq for ZetoError {
    fn eq(&self, other: &Self) -> bool {
        use ZetoError::*;
        match (self, other) {
            (MalformedPayload, MalformedPayload) => true,
            (IncompleteMapping(a), IncompleteMapping(b)) => a == b,

            // Wrapped foreign errors are not comparable: equality on variant only
            (CsvError(_), CsvError(_)) => true,
            (HttpError(_), HttpError(_)) => true,
            (JsonError(_), JsonError(_)) => true,

            (AnalysisStatus(a), AnalysisStatus(b)) => a == b,
            (
                OutOfRange {
                    key: ka,
                    value: va,
                    min: mina,
                    max: maxa,
                },
                OutOfRange {
                    key: kb,
                    value: vb,
                    min: minb,
                    max: maxb,
                },
            ) => ka == kb && va == vb && mina == minb && maxa == maxb,
            (ClockError(a), ClockError(b)) => a == b,

            _ => false,
        }
    }
}
