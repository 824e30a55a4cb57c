//! Paths of the legal chat backend, relative to the configured API base.

use super::aggregate::ConversationId;

pub const START_CONVERSATION: &str = "/start_conversation";
pub const UPLOAD_FILES: &str = "/upload";
pub const UPLOAD_TEXT: &str = "/upload_text";
pub const CHAT: &str = "/chat";

/// Multipart field carrying each uploaded file (repeated per file)
pub const FILES_FIELD: &str = "files";
/// Multipart field carrying a pasted text blob
pub const TEXT_FIELD: &str = "text";

pub fn start_conversation_path() -> String {
    START_CONVERSATION.to_string()
}

pub fn upload_files_path(id: &ConversationId) -> String {
    format!(
        "{}?conversation_id={}",
        UPLOAD_FILES,
        urlencoding::encode(id.value())
    )
}

pub fn upload_text_path(id: &ConversationId) -> String {
    format!(
        "{}?conversation_id={}",
        UPLOAD_TEXT,
        urlencoding::encode(id.value())
    )
}

pub fn chat_path(id: &ConversationId, query: &str) -> String {
    format!(
        "{}?conversation_id={}&query={}",
        CHAT,
        urlencoding::encode(id.value()),
        urlencoding::encode(query)
    )
}
