use serde::{Deserialize, Serialize};

/// Fixed error string returned to clients when the store lookups fail.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Body of `GET /api/hello`.
///
/// `error` is only present on the degraded (HTTP 500) response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GreetingResponse {
    pub messages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GreetingResponse {
    pub fn ok(messages: Vec<String>) -> Self {
        Self { messages, error: None }
    }

    pub fn degraded(messages: Vec<String>) -> Self {
        Self {
            messages,
            error: Some(INTERNAL_SERVER_ERROR.to_owned()),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}
