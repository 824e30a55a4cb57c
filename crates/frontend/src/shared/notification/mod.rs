//! Transient notification banner.
//!
//! At most one banner is visible. Showing a new one replaces the previous
//! one, and every banner hides itself after `notification_ttl_ms` unless the
//! user closes it first.

use crate::shared::config::config;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
}

/// Pure banner bookkeeping; the reactive wrapper is [`NotificationService`].
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is shown and return the id of the new banner
    pub fn show(&mut self, message: impl Into<String>, level: NotificationLevel) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notification {
            id,
            message: message.into(),
            level,
        });
        id
    }

    /// Hide banner `id` if it is still the one shown.
    ///
    /// A timer started for a banner that has since been replaced must not
    /// hide its successor.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match &self.current {
            Some(n) if n.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss_current(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    center: RwSignal<NotificationCenter>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            center: RwSignal::new(NotificationCenter::new()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, NotificationLevel::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, NotificationLevel::Error);
    }

    pub fn show(&self, message: impl Into<String>, level: NotificationLevel) {
        let mut id = 0;
        self.center.update(|c| id = c.show(message, level));

        let center = self.center;
        let ttl = config().notification_ttl_ms;
        spawn_local(async move {
            TimeoutFuture::new(ttl).await;
            // The view may already be gone (page unload); try_update tolerates it.
            center.try_update(|c| c.dismiss(id));
        });
    }

    pub fn dismiss(&self) {
        self.center.update(|c| c.dismiss_current());
    }

    pub fn current(&self) -> Option<Notification> {
        self.center.with(|c| c.current().cloned())
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided")
}

/// Renders the current banner pinned to the bottom centre of the page.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        {move || {
            service.current().map(|n| {
                let intent = match n.level {
                    NotificationLevel::Success => MessageBarIntent::Success,
                    NotificationLevel::Error => MessageBarIntent::Error,
                };
                view! {
                    <div
                        class="notification-host"
                        style="position: fixed; left: 50%; bottom: 24px; transform: translateX(-50%); z-index: 1000; min-width: 320px; max-width: 80vw;"
                        role="status"
                    >
                        <MessageBar intent=intent>
                            <div style="display: flex; align-items: center; gap: 12px; width: 100%;">
                                <span style="flex: 1;">{n.message.clone()}</span>
                                <Button
                                    appearance=ButtonAppearance::Transparent
                                    size=ButtonSize::Small
                                    on_click=move |_| service.dismiss()
                                >
                                    {icon("close")}
                                </Button>
                            </div>
                        </MessageBar>
                    </div>
                }
            })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_replaces_previous() {
        let mut center = NotificationCenter::new();
        center.show("first", NotificationLevel::Success);
        center.show("second", NotificationLevel::Error);
        let current = center.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.level, NotificationLevel::Error);
    }

    #[test]
    fn stale_timer_does_not_hide_successor() {
        let mut center = NotificationCenter::new();
        let first = center.show("first", NotificationLevel::Success);
        let second = center.show("second", NotificationLevel::Success);

        assert!(!center.dismiss(first));
        assert_eq!(center.current().unwrap().id, second);

        assert!(center.dismiss(second));
        assert!(center.current().is_none());
    }

    #[test]
    fn explicit_dismiss_clears() {
        let mut center = NotificationCenter::new();
        center.show("PDF upload successful!", NotificationLevel::Success);
        center.dismiss_current();
        assert!(center.current().is_none());
    }
}
