use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::models::SubmissionRequest;

/// Turn a raw event into a typed request.
/// Required fields must be present strings; `additional_info` may be absent or null.
pub fn validate(raw: &Value) -> Result<SubmissionRequest, ValidationError> {
    let obj = raw.as_object().ok_or(ValidationError::NotAnObject)?;

    Ok(SubmissionRequest {
        student_name: required(obj, "student_name")?,
        parent_name: required(obj, "parent_name")?,
        email: required(obj, "email")?,
        course_name: required(obj, "course_name")?,
        additional_info: optional(obj, "additional_info")?,
    })
}

fn required(obj: &Map<String, Value>, name: &'static str) -> Result<String, ValidationError> {
    match obj.get(name) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(name)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::InvalidField(name)),
    }
}

fn optional(
    obj: &Map<String, Value>,
    name: &'static str,
) -> Result<Option<String>, ValidationError> {
    match obj.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::InvalidField(name)),
    }
}
