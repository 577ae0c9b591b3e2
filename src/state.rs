use std::sync::Arc;

use crate::config::Config;
use crate::db::SubmissionStore;

pub type SharedState = Arc<AppState>;

/// Built once at startup and shared read-only by every invocation.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn SubmissionStore>,
}
