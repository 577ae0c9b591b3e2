pub mod config;
pub mod error;
pub mod state;
pub mod db;
pub mod models;
pub mod intake;
pub mod handler;
pub mod routes;

use std::sync::Arc;

use aws_config::BehaviorVersion;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::{Config, StoreBackend};
use crate::db::{DynamoSubmissionStore, MemorySubmissionStore, SubmissionStore};
use crate::state::SharedState;

/// Pick the storage backend named by the configuration.
pub async fn build_store(config: &Config) -> Arc<dyn SubmissionStore> {
    match config.store {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; submissions are not persisted");
            Arc::new(MemorySubmissionStore::new())
        }
        StoreBackend::DynamoDb => {
            let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
            let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
            if let Some(ref endpoint) = config.dynamodb_endpoint {
                tracing::info!("DynamoDB endpoint override: {endpoint}");
                builder = builder.endpoint_url(endpoint);
            }
            let client = aws_sdk_dynamodb::Client::from_conf(builder.build());
            Arc::new(DynamoSubmissionStore::new(client, config.table_name.clone()))
        }
    }
}

/// Local HTTP surface serving the same intake pipeline as the Lambda handler.
pub fn build_app(state: SharedState) -> Router {
    Router::new()
        .merge(routes::intake_routes())
        .route("/health", axum::routing::get(health))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
