use reqwest::StatusCode;
use thiserror::Error;

const FALLBACK_STATUS: u16 = 500;
const FALLBACK_STATUS_TEXT: &str = "Internal Server Error";

/// Unified error for failed admin API calls.
///
/// Every transport-level failure (connection error, timeout, non-2xx status,
/// undecodable body) is normalized into this one kind at the scope boundary
/// and surfaced to the caller exactly once — there is no retry. Callers
/// interpret the status themselves, e.g. a 404 on delete means
/// already-absent.
#[derive(Debug, Clone, Error)]
#[error("{}", render(.status, .status_text, .path, .detail))]
pub struct ClientError {
    /// HTTP status code; 500 when the failure produced no response.
    pub status: u16,

    /// HTTP status text; "Internal Server Error" when unavailable.
    pub status_text: String,

    /// The path suffix the scope was called with, never the resolved URL.
    pub path: String,

    /// Message from the underlying failure, when one exists.
    pub detail: Option<String>,
}

/// Detail message when one exists, otherwise the normalized HTTP line.
fn render(status: &u16, status_text: &str, path: &str, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("HTTP [{status}]: [{status_text}] for [{path}]"),
    }
}

impl ClientError {
    /// Non-2xx response from the gateway.
    pub(crate) fn from_status(status: StatusCode, path: &str) -> Self {
        Self {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or(FALLBACK_STATUS_TEXT)
                .to_string(),
            path: path.to_string(),
            detail: None,
        }
    }

    /// Failure below the HTTP layer (connect, timeout, body decode).
    pub(crate) fn from_transport(err: &reqwest::Error, path: &str) -> Self {
        let status = err.status();
        Self {
            status: status.map(|s| s.as_u16()).unwrap_or(FALLBACK_STATUS),
            status_text: status
                .and_then(|s| s.canonical_reason())
                .unwrap_or(FALLBACK_STATUS_TEXT)
                .to_string(),
            path: path.to_string(),
            detail: Some(err.to_string()),
        }
    }

    /// True for 404 responses, the already-absent case on get/delete.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_detail() {
        let err = ClientError::from_status(StatusCode::NOT_FOUND, "/missing");
        assert_eq!(err.to_string(), "HTTP [404]: [Not Found] for [/missing]");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_display_prefers_detail() {
        let err = ClientError {
            status: 500,
            status_text: "Internal Server Error".into(),
            path: "/r1".into(),
            detail: Some("connection refused".into()),
        };
        assert_eq!(err.to_string(), "connection refused");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_status_text_from_code() {
        let err = ClientError::from_status(StatusCode::UNAUTHORIZED, "/x");
        assert_eq!(err.status, 401);
        assert_eq!(err.status_text, "Unauthorized");
    }
}
