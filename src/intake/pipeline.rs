use serde_json::Value;

use crate::error::AppError;
use crate::models::{IntakeResponse, UserSubmission};
use crate::state::AppState;

use super::fields;

/// Validate, assign an id, write once, and build the success response.
///
/// Nothing is written when validation fails. The write is an unconditional
/// insert, so identical payloads produce distinct records.
pub async fn run(state: &AppState, raw: &Value) -> Result<IntakeResponse, AppError> {
    let request = fields::validate(raw).inspect_err(|e| {
        tracing::warn!("Rejected submission: {e}");
    })?;

    let record = UserSubmission::from_request(request);

    state.store.put(&record).await.inspect_err(|e| {
        tracing::error!(user_id = %record.user_id, "Failed to store submission: {e}");
    })?;

    tracing::info!(
        user_id = %record.user_id,
        table = %state.config.table_name,
        "Submission saved"
    );

    IntakeResponse::saved(&record.student_name)
        .map_err(|e| AppError::Internal(format!("Failed to encode response body: {e}")))
}
