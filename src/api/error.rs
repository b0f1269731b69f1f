use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("backend returned {status}{}", suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    #[error("could not decode backend response: {0}")]
    Decode(String),
}

fn suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl ApiError {
    /// Build a status error from a non-2xx response body.
    ///
    /// The backend reports failures as `{"detail": "..."}`, or as
    /// `{"detail": [{"msg": "..."}, ...]}` for request validation errors.
    pub fn from_body(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("detail").cloned())
            .and_then(|detail| match detail {
                Value::String(s) if !s.trim().is_empty() => Some(s),
                Value::Array(items) => {
                    let msgs: Vec<String> = items
                        .iter()
                        .filter_map(|i| i.get("msg").and_then(Value::as_str))
                        .map(str::to_string)
                        .collect();
                    (!msgs.is_empty()).then(|| msgs.join("; "))
                }
                _ => None,
            });
        ApiError::Status { status, detail }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Message suitable for an inline form banner.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_kept() {
        let err = ApiError::from_body(400, r#"{"detail":"Invalid OTP code"}"#);
        assert_eq!(err.user_message("fallback"), "Invalid OTP code");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn validation_array_is_joined() {
        let body = r#"{"detail":[{"loc":["body","email"],"msg":"field required"},{"msg":"bad phone"}]}"#;
        let err = ApiError::from_body(422, body);
        assert_eq!(err.user_message("fallback"), "field required; bad phone");
    }

    #[test]
    fn non_json_body_uses_fallback() {
        let err = ApiError::from_body(500, "<html>oops</html>");
        assert_eq!(err.user_message("Login failed"), "Login failed");
        assert_eq!(err.to_string(), "backend returned 500");
    }

    #[test]
    fn network_errors_use_fallback() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.user_message("try again"), "try again");
        assert!(!err.is_not_found());
    }
}
