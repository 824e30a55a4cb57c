//! Local chat transcript.
//!
//! Append-only, except that the last assistant message may be a placeholder
//! shown while a query is in flight. At most one placeholder is outstanding
//! and it is always the last message.

use super::error::TranscriptError;
use contracts::domain::a001_legal_chat::aggregate::ChatMessage;

pub const PLACEHOLDER_TEXT: &str = "🤔 Thinking...";

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    placeholder_pending: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) -> Result<(), TranscriptError> {
        if self.placeholder_pending {
            return Err(TranscriptError::PlaceholderOutstanding);
        }
        self.messages.push(ChatMessage::user(content));
        Ok(())
    }

    pub fn append_placeholder(&mut self) -> Result<(), TranscriptError> {
        if self.placeholder_pending {
            return Err(TranscriptError::PlaceholderOutstanding);
        }
        self.messages.push(ChatMessage::assistant(PLACEHOLDER_TEXT));
        self.placeholder_pending = true;
        Ok(())
    }

    /// Replace the outstanding placeholder in place
    pub fn resolve_last(&mut self, content: impl Into<String>) -> Result<(), TranscriptError> {
        if !self.placeholder_pending {
            return Err(TranscriptError::NoPlaceholder);
        }
        let last = self
            .messages
            .last_mut()
            .ok_or(TranscriptError::NoPlaceholder)?;
        *last = ChatMessage::assistant(content);
        self.placeholder_pending = false;
        Ok(())
    }

    pub fn has_placeholder(&self) -> bool {
        self.placeholder_pending
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.placeholder_pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_replaces_in_place() {
        let mut t = Transcript::new();
        t.push_user("What is consideration?").unwrap();
        t.append_placeholder().unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.last().unwrap().content, PLACEHOLDER_TEXT);

        t.resolve_last("Something of value exchanged.").unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(
            t.last().unwrap(),
            &ChatMessage::assistant("Something of value exchanged.")
        );
        assert!(!t.has_placeholder());
    }

    #[test]
    fn only_one_placeholder() {
        let mut t = Transcript::new();
        t.append_placeholder().unwrap();
        assert_eq!(
            t.append_placeholder(),
            Err(TranscriptError::PlaceholderOutstanding)
        );
        assert_eq!(
            t.push_user("again"),
            Err(TranscriptError::PlaceholderOutstanding)
        );
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn resolve_without_placeholder_fails() {
        let mut t = Transcript::new();
        t.push_user("hi").unwrap();
        assert_eq!(t.resolve_last("x"), Err(TranscriptError::NoPlaceholder));
        assert_eq!(t.last().unwrap(), &ChatMessage::user("hi"));
    }

    #[test]
    fn resolved_message_gets_new_render_key() {
        let mut t = Transcript::new();
        t.append_placeholder().unwrap();
        let placeholder_id = t.last().unwrap().id;
        t.resolve_last("done").unwrap();
        assert_ne!(t.last().unwrap().id, placeholder_id);
    }

    #[test]
    fn clear_drops_placeholder() {
        let mut t = Transcript::new();
        t.push_user("q").unwrap();
        t.append_placeholder().unwrap();
        t.clear();
        assert!(t.is_empty());
        assert!(!t.has_placeholder());
        assert!(t.append_placeholder().is_ok());
    }
}
