use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
    /// Always `true`, distinguishing error bodies from confirmations
    pub error: bool,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: true,
        }
    }
}

/// A confirmation message for requests that do not return a resource
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Route listing served at the API root for endpoint discovery
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SitemapDto {
    /// Registered routes as `METHOD /path` strings
    pub routes: Vec<String>,
}
