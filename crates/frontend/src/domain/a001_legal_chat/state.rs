//! ChatState - the whole client-side state of one legal chat session.
//!
//! Everything here is only meaningful for the current conversation id:
//! starting a new conversation clears the transcript, the uploaded-file
//! list and the staged selection in one step and bumps `epoch`. Requests
//! carry the epoch they were started under, and their completions are
//! dropped if a new conversation has started since.
//!
//! Query lifecycle: `Idle -> AwaitingResponse -> Idle`. Each exit performs
//! exactly one transcript mutation (the placeholder is resolved).

use super::error::ChatError;
use super::transcript::Transcript;
use contracts::domain::a001_legal_chat::aggregate::ConversationId;

pub const APOLOGY_TEXT: &str = "Sorry, an error occurred. Please try again.";
/// Display name recorded for a pasted text blob
pub const TEXT_UPLOAD_NAME: &str = "user_input.txt";
pub const PDF_MIME: &str = "application/pdf";

/// A file picked by the user but not yet uploaded.
pub trait SelectedFile: Clone {
    fn file_name(&self) -> String;
    fn mime_type(&self) -> String;

    /// Only PDFs are accepted by the `/upload` endpoint
    fn is_pdf(&self) -> bool {
        self.mime_type().eq_ignore_ascii_case(PDF_MIME)
            || self.file_name().to_ascii_lowercase().ends_with(".pdf")
    }
}

impl SelectedFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryPhase {
    #[default]
    Idle,
    AwaitingResponse,
}

/// A chat query that has been admitted and is waiting for the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub conversation: ConversationId,
    pub epoch: u64,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket {
    pub conversation: ConversationId,
    pub epoch: u64,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct FileBatch<F> {
    pub conversation: ConversationId,
    pub epoch: u64,
    pub files: Vec<F>,
}

impl<F: SelectedFile> FileBatch<F> {
    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(|f| f.file_name()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageOutcome {
    pub accepted: usize,
    /// Names of files that were not PDFs
    pub rejected: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ChatState<F> {
    conversation: Option<ConversationId>,
    epoch: u64,
    transcript: Transcript,
    uploaded_files: Vec<String>,
    pending: Vec<F>,
    query_phase: QueryPhase,
    text_upload_in_flight: bool,
    file_upload_in_flight: bool,
}

impl<F> Default for ChatState<F> {
    fn default() -> Self {
        Self {
            conversation: None,
            epoch: 0,
            transcript: Transcript::new(),
            uploaded_files: Vec::new(),
            pending: Vec::new(),
            query_phase: QueryPhase::Idle,
            text_upload_in_flight: false,
            file_upload_in_flight: false,
        }
    }
}

impl<F: SelectedFile> ChatState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    pub fn conversation(&self) -> Option<&ConversationId> {
        self.conversation.as_ref()
    }

    pub fn has_conversation(&self) -> bool {
        self.conversation.is_some()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn uploaded_files(&self) -> &[String] {
        &self.uploaded_files
    }

    pub fn pending(&self) -> &[F] {
        &self.pending
    }

    pub fn query_phase(&self) -> QueryPhase {
        self.query_phase
    }

    pub fn is_awaiting(&self) -> bool {
        self.query_phase == QueryPhase::AwaitingResponse
    }

    pub fn is_uploading_text(&self) -> bool {
        self.text_upload_in_flight
    }

    pub fn is_uploading_files(&self) -> bool {
        self.file_upload_in_flight
    }

    fn require_conversation(&self) -> Result<ConversationId, ChatError> {
        self.conversation.clone().ok_or(ChatError::NoConversation)
    }

    fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch && self.conversation.is_some()
    }

    // ---------------------------------------------------------------
    // Conversation lifecycle
    // ---------------------------------------------------------------

    /// Replace the active conversation and reset everything scoped to it
    pub fn start_conversation(&mut self, id: ConversationId) {
        self.conversation = Some(id);
        self.epoch += 1;
        self.transcript.clear();
        self.uploaded_files.clear();
        self.pending.clear();
        self.query_phase = QueryPhase::Idle;
        self.text_upload_in_flight = false;
        self.file_upload_in_flight = false;
    }

    // ---------------------------------------------------------------
    // Chat query
    // ---------------------------------------------------------------

    /// Admit a query: append the user message and the placeholder.
    pub fn begin_query(&mut self, input: &str) -> Result<PendingQuery, ChatError> {
        let conversation = self.require_conversation()?;
        let query = input.trim();
        if query.is_empty() {
            return Err(ChatError::EmptyInput);
        }
        if self.is_awaiting() {
            return Err(ChatError::QueryInFlight);
        }

        self.transcript.push_user(query)?;
        self.transcript.append_placeholder()?;
        self.query_phase = QueryPhase::AwaitingResponse;

        Ok(PendingQuery {
            conversation,
            epoch: self.epoch,
            query: query.to_string(),
        })
    }

    /// Resolve the placeholder with the answer, or with [`APOLOGY_TEXT`] on
    /// any failure. Returns `false` if the query belonged to a replaced
    /// conversation and was ignored.
    pub fn finish_query(
        &mut self,
        pending: &PendingQuery,
        outcome: Result<String, ChatError>,
    ) -> bool {
        if !self.is_current(pending.epoch) || !self.is_awaiting() {
            return false;
        }
        let content = outcome.unwrap_or_else(|_| APOLOGY_TEXT.to_string());
        let resolved = self.transcript.resolve_last(content).is_ok();
        self.query_phase = QueryPhase::Idle;
        resolved
    }

    // ---------------------------------------------------------------
    // Text ingestion
    // ---------------------------------------------------------------

    pub fn begin_text_upload(&mut self, text: &str) -> Result<UploadTicket, ChatError> {
        let conversation = self.require_conversation()?;
        if text.trim().is_empty() {
            return Err(ChatError::EmptyInput);
        }
        if self.text_upload_in_flight {
            return Err(ChatError::UploadInFlight);
        }
        self.text_upload_in_flight = true;
        Ok(UploadTicket {
            conversation,
            epoch: self.epoch,
            text: text.to_string(),
        })
    }

    /// Returns `true` when the upload succeeded for the current conversation.
    pub fn finish_text_upload(
        &mut self,
        ticket: &UploadTicket,
        outcome: Result<(), ChatError>,
    ) -> bool {
        if !self.is_current(ticket.epoch) {
            return false;
        }
        self.text_upload_in_flight = false;
        match outcome {
            Ok(()) => {
                self.uploaded_files.push(TEXT_UPLOAD_NAME.to_string());
                true
            }
            Err(_) => false,
        }
    }

    // ---------------------------------------------------------------
    // File ingestion (stage, then submit)
    // ---------------------------------------------------------------

    /// Stage picked files; non-PDF files are reported and skipped.
    pub fn stage_files(&mut self, files: Vec<F>) -> Result<StageOutcome, ChatError> {
        self.require_conversation()?;
        let mut outcome = StageOutcome::default();
        for file in files {
            if file.is_pdf() {
                self.pending.push(file);
                outcome.accepted += 1;
            } else {
                outcome.rejected.push(file.file_name());
            }
        }
        Ok(outcome)
    }

    /// Drop one staged file. Not allowed while the selection is uploading.
    pub fn unstage(&mut self, index: usize) -> Option<F> {
        if self.file_upload_in_flight || index >= self.pending.len() {
            return None;
        }
        Some(self.pending.remove(index))
    }

    pub fn begin_file_upload(&mut self) -> Result<FileBatch<F>, ChatError> {
        let conversation = self.require_conversation()?;
        if self.pending.is_empty() {
            return Err(ChatError::NothingStaged);
        }
        if self.file_upload_in_flight {
            return Err(ChatError::UploadInFlight);
        }
        self.file_upload_in_flight = true;
        Ok(FileBatch {
            conversation,
            epoch: self.epoch,
            files: self.pending.clone(),
        })
    }

    /// On success record the batch names and drop the batch from the
    /// selection; files staged during the upload stay staged. On failure the
    /// selection is kept so the user can retry.
    pub fn finish_file_upload(
        &mut self,
        batch: &FileBatch<F>,
        outcome: Result<(), ChatError>,
    ) -> bool {
        if !self.is_current(batch.epoch) {
            return false;
        }
        self.file_upload_in_flight = false;
        match outcome {
            Ok(()) => {
                self.uploaded_files.extend(batch.names());
                let uploaded = batch.files.len().min(self.pending.len());
                self.pending.drain(..uploaded);
                true
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_legal_chat::transcript::PLACEHOLDER_TEXT;
    use contracts::domain::a001_legal_chat::aggregate::{ChatMessage, ChatRole};

    #[derive(Debug, Clone, PartialEq)]
    struct FakeFile {
        name: &'static str,
        mime: &'static str,
    }

    impl SelectedFile for FakeFile {
        fn file_name(&self) -> String {
            self.name.to_string()
        }

        fn mime_type(&self) -> String {
            self.mime.to_string()
        }
    }

    fn pdf(name: &'static str) -> FakeFile {
        FakeFile {
            name,
            mime: PDF_MIME,
        }
    }

    fn id(s: &str) -> ConversationId {
        ConversationId::new(s).unwrap()
    }

    fn active(s: &str) -> ChatState<FakeFile> {
        let mut state = ChatState::new();
        state.start_conversation(id(s));
        state
    }

    #[test]
    fn new_conversation_resets_everything() {
        let mut state = active("abc123");
        let q = state.begin_query("What is consideration?").unwrap();
        state.finish_query(&q, Ok("An exchange of value.".into()));
        state.stage_files(vec![pdf("contract.pdf")]).unwrap();
        let t = state.begin_text_upload("clause 4").unwrap();
        state.finish_text_upload(&t, Ok(()));

        state.start_conversation(id("def456"));

        assert_eq!(state.conversation(), Some(&id("def456")));
        assert!(state.transcript().is_empty());
        assert!(state.uploaded_files().is_empty());
        assert!(state.pending().is_empty());
        assert_eq!(state.query_phase(), QueryPhase::Idle);
    }

    #[test]
    fn query_without_session_is_rejected() {
        let mut state: ChatState<FakeFile> = ChatState::new();
        assert_eq!(
            state.begin_query("What is a tort?"),
            Err(ChatError::NoConversation)
        );
        assert!(state.transcript().is_empty());
        assert!(!state.is_awaiting());
    }

    #[test]
    fn blank_query_is_ignored() {
        let mut state = active("abc123");
        assert_eq!(state.begin_query("   \n"), Err(ChatError::EmptyInput));
        assert!(state.transcript().is_empty());
    }

    #[test]
    fn query_appends_user_and_placeholder() {
        let mut state = active("abc123");
        let pending = state
            .begin_query("  What is consideration in contract law?  ")
            .unwrap();

        assert_eq!(pending.query, "What is consideration in contract law?");
        assert_eq!(pending.conversation, id("abc123"));
        assert!(state.is_awaiting());
        assert_eq!(
            state.transcript().messages(),
            &[
                ChatMessage::user("What is consideration in contract law?"),
                ChatMessage::assistant(PLACEHOLDER_TEXT),
            ]
        );
    }

    #[test]
    fn success_replaces_placeholder() {
        let mut state = active("abc123");
        let pending = state.begin_query("What is consideration?").unwrap();
        let len_with_placeholder = state.transcript().len();

        assert!(state.finish_query(&pending, Ok("Bargained-for exchange.".into())));

        assert_eq!(state.transcript().len(), len_with_placeholder);
        let last = state.transcript().last().unwrap();
        assert_eq!(last.role, ChatRole::Assistant);
        assert_eq!(last.content, "Bargained-for exchange.");
        assert_eq!(state.query_phase(), QueryPhase::Idle);
    }

    #[test]
    fn failure_resolves_to_apology() {
        for err in [
            ChatError::Transport("connection refused".into()),
            ChatError::Backend("collection missing".into()),
            ChatError::Backend(String::new()),
        ] {
            let mut state = active("abc123");
            let pending = state.begin_query("q").unwrap();
            assert!(state.finish_query(&pending, Err(err)));
            assert_eq!(
                state.transcript().last().unwrap(),
                &ChatMessage::assistant(APOLOGY_TEXT)
            );
            assert_eq!(state.transcript().len(), 2);
            assert!(!state.is_awaiting());
        }
    }

    #[test]
    fn second_query_while_awaiting_is_rejected() {
        let mut state = active("abc123");
        let first = state.begin_query("first").unwrap();
        assert_eq!(state.begin_query("second"), Err(ChatError::QueryInFlight));
        assert_eq!(state.transcript().len(), 2);

        state.finish_query(&first, Ok("answer".into()));
        assert!(state.begin_query("second").is_ok());
        assert_eq!(state.transcript().len(), 4);
    }

    #[test]
    fn stale_answer_is_dropped_after_new_conversation() {
        let mut state = active("abc123");
        let stale = state.begin_query("old question").unwrap();
        state.start_conversation(id("def456"));

        assert!(!state.finish_query(&stale, Ok("old answer".into())));
        assert!(state.transcript().is_empty());

        let fresh = state.begin_query("new question").unwrap();
        assert!(!state.finish_query(&stale, Ok("old answer".into())));
        assert!(state.finish_query(&fresh, Ok("new answer".into())));
        assert_eq!(state.transcript().last().unwrap().content, "new answer");
    }

    #[test]
    fn upload_without_session_leaves_state_untouched() {
        let mut state: ChatState<FakeFile> = ChatState::new();
        assert_eq!(
            state.stage_files(vec![pdf("contract.pdf")]),
            Err(ChatError::NoConversation)
        );
        assert_eq!(
            state.begin_file_upload().map(|b| b.files.len()),
            Err(ChatError::NoConversation)
        );
        assert_eq!(
            state.begin_text_upload("some text"),
            Err(ChatError::NoConversation)
        );
        assert!(state.uploaded_files().is_empty());
        assert!(state.pending().is_empty());
    }

    #[test]
    fn text_upload_records_fixed_name() {
        let mut state = active("abc123");
        let ticket = state.begin_text_upload("The lessee shall...").unwrap();
        assert!(state.is_uploading_text());
        assert_eq!(
            state.begin_text_upload("again"),
            Err(ChatError::UploadInFlight)
        );

        assert!(state.finish_text_upload(&ticket, Ok(())));
        assert_eq!(state.uploaded_files(), &[TEXT_UPLOAD_NAME.to_string()]);

        let again = state.begin_text_upload("The lessee shall...").unwrap();
        state.finish_text_upload(&again, Ok(()));
        assert_eq!(state.uploaded_files().len(), 2);
    }

    #[test]
    fn failed_text_upload_changes_nothing() {
        let mut state = active("abc123");
        let ticket = state.begin_text_upload("text").unwrap();
        assert!(!state.finish_text_upload(&ticket, Err(ChatError::Backend("x".into()))));
        assert!(state.uploaded_files().is_empty());
        assert!(!state.is_uploading_text());
    }

    #[test]
    fn staging_filters_non_pdf() {
        let mut state = active("abc123");
        let outcome = state
            .stage_files(vec![
                pdf("contract.pdf"),
                FakeFile {
                    name: "NDA.PDF",
                    mime: "",
                },
                FakeFile {
                    name: "notes.docx",
                    mime: "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                },
            ])
            .unwrap();
        assert_eq!(outcome.accepted, 2);
        assert_eq!(outcome.rejected, vec!["notes.docx".to_string()]);
        assert_eq!(state.pending().len(), 2);
    }

    #[test]
    fn file_upload_success_moves_names() {
        let mut state = active("abc123");
        state
            .stage_files(vec![pdf("contract.pdf"), pdf("lease.pdf")])
            .unwrap();
        let batch = state.begin_file_upload().unwrap();
        assert!(state.is_uploading_files());
        assert_eq!(state.unstage(0), None);

        state.stage_files(vec![pdf("late.pdf")]).unwrap();
        assert!(state.finish_file_upload(&batch, Ok(())));

        assert_eq!(
            state.uploaded_files(),
            &["contract.pdf".to_string(), "lease.pdf".to_string()]
        );
        assert_eq!(state.pending(), &[pdf("late.pdf")]);
    }

    #[test]
    fn file_upload_failure_keeps_selection() {
        let mut state = active("abc123");
        state.stage_files(vec![pdf("contract.pdf")]).unwrap();
        let batch = state.begin_file_upload().unwrap();
        assert!(!state.finish_file_upload(&batch, Err(ChatError::Transport("down".into()))));
        assert!(state.uploaded_files().is_empty());
        assert_eq!(state.pending().len(), 1);
        assert!(!state.is_uploading_files());
    }

    #[test]
    fn empty_selection_cannot_be_submitted() {
        let mut state = active("abc123");
        assert_eq!(
            state.begin_file_upload().map(|b| b.files.len()),
            Err(ChatError::NothingStaged)
        );
    }

    #[test]
    fn uploads_and_query_run_independently() {
        let mut state = active("abc123");
        state.stage_files(vec![pdf("contract.pdf")]).unwrap();
        let batch = state.begin_file_upload().unwrap();
        let ticket = state.begin_text_upload("text").unwrap();
        let query = state.begin_query("question").unwrap();

        assert!(state.finish_query(&query, Ok("answer".into())));
        assert!(state.finish_text_upload(&ticket, Ok(())));
        assert!(state.finish_file_upload(&batch, Ok(())));
        assert_eq!(state.uploaded_files().len(), 2);
    }

    #[test]
    fn unstage_removes_single_file() {
        let mut state = active("abc123");
        state.stage_files(vec![pdf("a.pdf"), pdf("b.pdf")]).unwrap();
        assert_eq!(state.unstage(0), Some(pdf("a.pdf")));
        assert_eq!(state.unstage(5), None);
        assert_eq!(state.pending(), &[pdf("b.pdf")]);
    }
}
