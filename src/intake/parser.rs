use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum BodyError {
    Malformed(String),
    UnsupportedMediaType(String),
}

impl std::fmt::Display for BodyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyError::Malformed(msg) => write!(f, "Unable to parse body: {msg}"),
            BodyError::UnsupportedMediaType(ct) => write!(f, "Unsupported content type: {ct}"),
        }
    }
}

impl std::error::Error for BodyError {}

/// Parse a local-server request body based on Content-Type.
/// A missing Content-Type is read as JSON.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, BodyError> {
    let ct = content_type.unwrap_or("application/json");

    if ct.contains("application/json") {
        serde_json::from_slice(body).map_err(|e| BodyError::Malformed(format!("Invalid JSON: {e}")))
    } else if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)
    } else {
        Err(BodyError::UnsupportedMediaType(ct.to_string()))
    }
}

fn parse_form_urlencoded(body: &[u8]) -> Result<Value, BodyError> {
    std::str::from_utf8(body).map_err(|e| BodyError::Malformed(format!("Invalid UTF-8: {e}")))?;

    let map: Map<String, Value> = form_urlencoded::parse(body)
        .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
        .collect();
    Ok(Value::Object(map))
}
