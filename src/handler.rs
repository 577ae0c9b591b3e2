use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::Instrument;

use crate::intake::pipeline;
use crate::models::IntakeResponse;
use crate::state::AppState;

/// Lambda entry point. The event payload is the submission itself.
///
/// Failures are returned as-is and reported by the runtime as invocation
/// errors; no error body is produced here.
pub async fn handle(state: &AppState, event: LambdaEvent<Value>) -> Result<IntakeResponse, Error> {
    let LambdaEvent { payload, context } = event;
    let span = tracing::info_span!("invocation", request_id = %context.request_id);

    let response = pipeline::run(state, &payload).instrument(span).await?;
    Ok(response)
}
