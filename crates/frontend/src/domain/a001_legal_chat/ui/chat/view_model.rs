//! Legal Chat - View Model
//!
//! Owns the reactive wrapper around [`ChatState`] and drives every network
//! operation. Nothing thrown by a request escapes this layer: failures are
//! logged and turned into a notification.

use super::model;
use crate::domain::a001_legal_chat::error::ChatError;
use crate::domain::a001_legal_chat::state::ChatState;
use crate::shared::notification::{NotificationLevel, NotificationService};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct LegalChatVm {
    /// `web_sys::File` is not `Send`, hence local storage
    pub state: RwSignal<ChatState<File>, LocalStorage>,
    pub input: RwSignal<String>,
    pub text_input: RwSignal<String>,
    pub is_starting: RwSignal<bool>,
    notify: NotificationService,
}

impl LegalChatVm {
    pub fn new(notify: NotificationService) -> Self {
        Self {
            state: RwSignal::new_local(ChatState::new()),
            input: RwSignal::new(String::new()),
            text_input: RwSignal::new(String::new()),
            is_starting: RwSignal::new(false),
            notify,
        }
    }

    // Derived flags for the view

    pub fn has_conversation(&self) -> bool {
        self.state.with(|s| s.has_conversation())
    }

    pub fn is_awaiting(&self) -> bool {
        self.state.with(|s| s.is_awaiting())
    }

    pub fn is_uploading_text(&self) -> bool {
        self.state.with(|s| s.is_uploading_text())
    }

    pub fn is_uploading_files(&self) -> bool {
        self.state.with(|s| s.is_uploading_files())
    }

    fn reject(&self, err: ChatError) {
        if err.is_silent() {
            log::debug!("action ignored: {}", err);
        } else {
            self.notify.error(err.user_message());
        }
    }

    pub fn start_conversation(&self) {
        if self.is_starting.get_untracked() {
            return;
        }
        self.is_starting.set(true);

        let vm = *self;
        spawn_local(async move {
            match model::start_conversation().await {
                Ok(id) => {
                    log::info!("started conversation {}", id);
                    vm.state.update(|s| s.start_conversation(id.clone()));
                    vm.input.set(String::new());
                    vm.text_input.set(String::new());
                    vm.notify
                        .success(format!("New conversation started with ID: {}", id));
                }
                Err(e) => {
                    // Prior conversation, if any, stays usable
                    log::error!("Error starting conversation: {}", e);
                    vm.notify.error("Failed to start a new conversation.");
                }
            }
            vm.is_starting.set(false);
        });
    }

    pub fn send(&self) {
        let input = self.input.get_untracked();
        let Some(admitted) = self.state.try_update(|s| s.begin_query(&input)) else {
            return;
        };
        let pending = match admitted {
            Ok(pending) => pending,
            Err(e) => return self.reject(e),
        };
        self.input.set(String::new());

        let vm = *self;
        spawn_local(async move {
            let outcome = model::send_chat(&pending.conversation, &pending.query).await;
            let failure = outcome.as_ref().err().map(|e| {
                log::error!("Error fetching response: {}", e);
                e.user_message()
            });
            let applied = vm
                .state
                .try_update(|s| s.finish_query(&pending, outcome))
                .unwrap_or(false);
            if !applied {
                log::debug!("dropped answer for replaced conversation {}", pending.conversation);
            }
            if let (Some(NotificationLevel::Error), Some(message)) =
                (completion_notice(applied, failure.is_none()), failure)
            {
                vm.notify.error(message);
            }
        });
    }

    pub fn submit_text(&self) {
        let text = self.text_input.get_untracked();
        let Some(admitted) = self.state.try_update(|s| s.begin_text_upload(&text)) else {
            return;
        };
        let ticket = match admitted {
            Ok(ticket) => ticket,
            Err(e) => return self.reject(e),
        };

        let vm = *self;
        spawn_local(async move {
            let outcome = model::upload_text(&ticket.conversation, &ticket.text).await;
            let succeeded = outcome.is_ok();
            match &outcome {
                Ok(message) => log::info!("text upload: {}", message),
                Err(e) => log::error!("Text upload failed: {}", e),
            }
            let applied = vm
                .state
                .try_update(|s| s.finish_text_upload(&ticket, outcome.map(|_| ())))
                .unwrap_or(false);

            match completion_notice(applied, succeeded) {
                Some(NotificationLevel::Success) => {
                    vm.text_input.set(String::new());
                    vm.notify.success("Text upload successful!");
                }
                Some(NotificationLevel::Error) => {
                    vm.notify.error("Text upload failed. Please try again.");
                }
                None => log::debug!("dropped text upload for {}", ticket.conversation),
            }
        });
    }

    pub fn stage_files(&self, files: Vec<File>) {
        if files.is_empty() {
            return;
        }
        let Some(staged) = self.state.try_update(|s| s.stage_files(files)) else {
            return;
        };
        match staged {
            Ok(outcome) => {
                log::debug!(
                    "staged {} file(s), rejected {}",
                    outcome.accepted,
                    outcome.rejected.len()
                );
                if !outcome.rejected.is_empty() {
                    self.notify.error(format!(
                        "Only PDF files are accepted: {}",
                        outcome.rejected.join(", ")
                    ));
                }
            }
            Err(e) => self.reject(e),
        }
    }

    pub fn unstage(&self, index: usize) {
        self.state.update(|s| {
            s.unstage(index);
        });
    }

    pub fn submit_files(&self) {
        let Some(admitted) = self.state.try_update(|s| s.begin_file_upload()) else {
            return;
        };
        let batch = match admitted {
            Ok(batch) => batch,
            Err(e) => return self.reject(e),
        };

        let vm = *self;
        spawn_local(async move {
            let outcome = model::upload_files(&batch.conversation, &batch.files).await;
            let succeeded = outcome.is_ok();
            match &outcome {
                Ok(message) => log::info!("PDF upload: {}", message),
                Err(e) => log::error!("PDF upload failed: {}", e),
            }
            let applied = vm
                .state
                .try_update(|s| s.finish_file_upload(&batch, outcome.map(|_| ())))
                .unwrap_or(false);

            match completion_notice(applied, succeeded) {
                Some(NotificationLevel::Success) => vm.notify.success("PDF upload successful!"),
                Some(NotificationLevel::Error) => {
                    vm.notify.error("PDF upload failed. Please try again.");
                }
                None => log::debug!("dropped PDF upload for {}", batch.conversation),
            }
        });
    }
}

/// Banner for a finished request. Completions of a replaced conversation
/// (`applied == false`) stay silent, whatever their outcome.
fn completion_notice(applied: bool, succeeded: bool) -> Option<NotificationLevel> {
    match (applied, succeeded) {
        (false, _) => None,
        (true, true) => Some(NotificationLevel::Success),
        (true, false) => Some(NotificationLevel::Error),
    }
}
