pub mod intake;

use axum::routing::post;
use axum::Router;

use crate::state::SharedState;

pub fn intake_routes() -> Router<SharedState> {
    Router::new().route(
        "/submissions",
        post(intake::submit).options(intake::submit_options),
    )
}
