//! Legal Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: LegalChatVm with RwSignals
//! - view.rs: Main component LegalChatPage
//! - upload_panel.rs: text/PDF ingestion panel
//! - message_bubble.rs: one transcript entry

mod message_bubble;
mod model;
mod upload_panel;
mod view;
mod view_model;

pub use message_bubble::MessageBubble;
pub use upload_panel::UploadPanel;
pub use view::LegalChatPage;
pub use view_model::LegalChatVm;
