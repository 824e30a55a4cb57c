//! Legal chat: a single conversation with the legal retrieval backend.
//!
//! Structure:
//! - error.rs: ChatError taxonomy
//! - transcript.rs: message list with the placeholder protocol
//! - state.rs: ChatState record and the query/upload lifecycles
//! - ui/chat: model (HTTP), view model (signals), views

pub mod error;
pub mod state;
pub mod transcript;
pub mod ui;
