//! Plain-message response body.

use serde::Serialize;

/// Response for operations that acknowledge with a sentence, such as
/// deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
