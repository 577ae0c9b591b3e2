use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::intake::parser::BodyError;
use crate::intake::{parser, pipeline};
use crate::models::{IntakeResponse, CORS_HEADERS};
use crate::state::SharedState;

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, Response> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    let raw = parser::parse_body(content_type, &body).map_err(|e| {
        let status = match e {
            BodyError::Malformed(_) => StatusCode::BAD_REQUEST,
            BodyError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        };
        (status, Json(json!({"error": e.to_string()}))).into_response()
    })?;

    let result = pipeline::run(&state, &raw)
        .await
        .map_err(IntoResponse::into_response)?;

    Ok(to_http(result))
}

pub async fn submit_options() -> Response {
    (CORS_HEADERS, StatusCode::NO_CONTENT).into_response()
}

/// Replay a Lambda-shaped response over HTTP.
fn to_http(resp: IntakeResponse) -> Response {
    let status =
        StatusCode::from_u16(resp.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut headers = HeaderMap::new();
    for (name, value) in &resp.headers {
        match (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => tracing::warn!("Dropping invalid response header {name}"),
        }
    }

    (status, headers, resp.body).into_response()
}
