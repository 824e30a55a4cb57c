//! Response bodies of the legal chat backend.
//!
//! The backend signals failure either through the HTTP status or through an
//! `error` field inside an otherwise successful body. The `into_result`
//! helpers fold both body shapes into a `Result`.

use serde::{Deserialize, Serialize};

/// `GET /start_conversation`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StartConversationResponse {
    pub conversation_id: String,
}

/// `POST /upload` and `POST /upload_text`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UploadResponse {
    /// A non-empty `message` means success, even next to an `error` field.
    pub fn into_result(self) -> Result<String, String> {
        match (self.message, self.error) {
            (Some(msg), _) if !msg.trim().is_empty() => Ok(msg),
            (_, Some(err)) if !err.trim().is_empty() => Err(err),
            _ => Err("Upload was not acknowledged by the server".into()),
        }
    }
}

/// `GET /chat`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ChatResponse {
    /// A non-blank `error` wins over `response`; a blank one is ignored.
    pub fn into_result(self) -> Result<String, String> {
        match (self.response, self.error) {
            (_, Some(err)) if !err.trim().is_empty() => Err(err),
            (Some(answer), _) => Ok(answer),
            (None, _) => Err("Server returned neither a response nor an error".into()),
        }
    }
}
