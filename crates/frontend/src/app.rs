use crate::domain::a001_legal_chat::ui::chat::LegalChatPage;
use crate::shared::notification::{NotificationHost, NotificationService};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Single banner shared by every part of the page
    provide_context(NotificationService::new());

    let theme = RwSignal::new(Theme::dark());

    view! {
        <ConfigProvider theme=theme>
            <LegalChatPage />
            <NotificationHost />
        </ConfigProvider>
    }
}
