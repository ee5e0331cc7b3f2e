//! # Submission gate to the analysis service
//!
//! Overview
//! -----------------
//! Once a parameter set is complete — through the guided dialogue or the
//! tabular importer — it is posted to the external classification service,
//! which answers with a [`Verdict`]. This module owns that single
//! suspending operation:
//!
//! * [`AnalysisClient`] wraps a persistent [`reqwest::Client`] configured
//!   with a **bounded overall timeout**, so a stalled collaborator resolves
//!   to an error instead of hanging the session.
//! * [`submit_session`] drives the dialogue hand-off: it takes the
//!   completed set from the session (guaranteed once), performs the call,
//!   and moves the session to `Failed` when the collaborator fails.
//!
//! Failures are never retried automatically; the caller decides whether to
//! start a new session.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::dialogue::DialogueSession;
use crate::parameters::ParameterSet;
use crate::zeto_errors::ZetoError;

/// Default bound on one classification round-trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Categorical outcome of a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Confirmed,
    Candidate,
    FalsePositive,
}

/// Classification answer from the analysis service.
///
/// # Fields
///
/// * `outcome` - Categorical result, serialized as the service's `type` tag
/// * `confidence` - Confidence score in percent, `[0, 100]`
/// * `title` - Short headline for the result card
/// * `description` - Longer descriptive text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(rename = "type")]
    pub outcome: Outcome,
    pub confidence: f64,
    pub title: String,
    pub description: String,
}

/// Persistent handle on the analysis service endpoint.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    /// Client with the [`DEFAULT_TIMEOUT`] bound.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ZetoError> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Client with an explicit round-trip bound.
    ///
    /// Arguments
    /// -----------------
    /// * `endpoint`: URL of the classification endpoint.
    /// * `timeout`: Overall bound covering connection, send and body read.
    ///
    /// Return
    /// ----------
    /// * A ready client, or [`ZetoError::HttpError`] if the underlying HTTP
    ///   client cannot be constructed.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ZetoError> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(AnalysisClient {
            http_client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post a complete parameter set and decode the service's verdict.
    ///
    /// Arguments
    /// -----------------
    /// * `parameters`: The parameter set to classify. Completeness is the
    ///   caller's invariant; the wire payload is the flat canonical-key JSON
    ///   object.
    ///
    /// Return
    /// ----------
    /// * The decoded [`Verdict`] on success.
    /// * [`ZetoError::AnalysisStatus`] when the service answers with a
    ///   non-success status.
    /// * [`ZetoError::HttpError`] for transport failures, timeouts, and
    ///   undecodable bodies.
    pub async fn classify(&self, parameters: &ParameterSet) -> Result<Verdict, ZetoError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(parameters)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "analysis service refused the submission");
            return Err(ZetoError::AnalysisStatus(status));
        }

        let verdict: Verdict = response.json().await?;
        info!(
            outcome = ?verdict.outcome,
            confidence = verdict.confidence,
            "analysis verdict received"
        );
        Ok(verdict)
    }
}

/// Drive the dialogue hand-off through the gate.
///
/// Arguments
/// -----------------
/// * `client`: The analysis service handle.
/// * `session`: The dialogue session to finalize.
///
/// Return
/// ----------
/// * `None` when the session has nothing to hand off — it is not complete
///   yet, or it already handed its set off. This makes repeated invocation
///   after completion a strict no-op.
/// * `Some(Ok(verdict))` on success; the session stays `Complete`.
/// * `Some(Err(err))` on collaborator failure; the session moves to
///   `Failed` and is not retried. Its parameter set remains readable for
///   diagnostic export.
///
/// See also
/// ------------
/// * [`DialogueSession::take_completed`] – The exactly-once hand-off.
/// * [`crate::export::export_report`] – Diagnostic export after the verdict.
pub async fn submit_session(
    client: &AnalysisClient,
    session: &mut DialogueSession,
) -> Option<Result<Verdict, ZetoError>> {
    let parameters = session.take_completed()?;

    match client.classify(&parameters).await {
        Ok(verdict) => Some(Ok(verdict)),
        Err(err) => {
            warn!(%err, "submission failed, session marked as failed");
            session.fail();
            Some(Err(err))
        }
    }
}
