use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("no active conversation")]
    NoConversation,
    #[error("input is empty")]
    EmptyInput,
    #[error("a query is already awaiting a response")]
    QueryInFlight,
    #[error("an upload is already in progress")]
    UploadInFlight,
    #[error("no files selected")]
    NothingStaged,
    #[error("network error: {0}")]
    Transport(String),
    #[error("server error: {0}")]
    Backend(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error(transparent)]
    Transcript(#[from] TranscriptError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TranscriptError {
    #[error("a placeholder is already outstanding")]
    PlaceholderOutstanding,
    #[error("no placeholder to resolve")]
    NoPlaceholder,
}

impl ChatError {
    /// Text shown in the notification banner
    pub fn user_message(&self) -> String {
        match self {
            ChatError::NoConversation => "Please start a conversation first!".into(),
            ChatError::EmptyInput => "Please enter some text first.".into(),
            ChatError::QueryInFlight => "Please wait for the current answer.".into(),
            ChatError::UploadInFlight => "An upload is already in progress.".into(),
            ChatError::NothingStaged => "Please choose at least one PDF file.".into(),
            ChatError::Transport(_) | ChatError::Decode(_) | ChatError::Transcript(_) => {
                "Request failed. Please try again.".into()
            }
            ChatError::Backend(msg) => format!("Server error: {}", msg),
        }
    }

    /// Rejections that are dropped without a banner: nothing to send, or the
    /// same action is already running. Everything else is reported.
    pub fn is_silent(&self) -> bool {
        matches!(
            self,
            ChatError::EmptyInput | ChatError::QueryInFlight | ChatError::UploadInFlight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_session_message() {
        assert_eq!(
            ChatError::NoConversation.user_message(),
            "Please start a conversation first!"
        );
        assert!(!ChatError::NoConversation.is_silent());
    }

    #[test]
    fn busy_or_empty_rejections_are_silent() {
        assert!(ChatError::EmptyInput.is_silent());
        assert!(ChatError::QueryInFlight.is_silent());
        assert!(ChatError::UploadInFlight.is_silent());
        assert!(!ChatError::NothingStaged.is_silent());
        assert!(!ChatError::Transport("refused".into()).is_silent());
    }

    #[test]
    fn backend_error_text_is_surfaced() {
        let err = ChatError::Backend("File a.docx is not a PDF.".into());
        assert!(!err.is_silent());
        assert_eq!(err.user_message(), "Server error: File a.docx is not a PDF.");
    }
}
