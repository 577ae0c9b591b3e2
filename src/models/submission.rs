use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored when the caller omits `additional_info`.
pub const ADDITIONAL_INFO_DEFAULT: &str = "N/A";

/// Validated intake payload. Built by `intake::fields::validate`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmissionRequest {
    pub student_name: String,
    pub parent_name: String,
    pub email: String,
    pub course_name: String,
    pub additional_info: Option<String>,
}

/// One row of the submissions table, keyed by `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSubmission {
    pub user_id: Uuid,
    pub student_name: String,
    pub parent_name: String,
    pub email: String,
    pub course_name: String,
    pub additional_info: String,
}

impl UserSubmission {
    /// Assign a fresh v4 id to a validated request.
    pub fn from_request(request: SubmissionRequest) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            student_name: request.student_name,
            parent_name: request.parent_name,
            email: request.email,
            course_name: request.course_name,
            additional_info: request
                .additional_info
                .unwrap_or_else(|| ADDITIONAL_INFO_DEFAULT.to_string()),
        }
    }
}
