use crate::shared::icons::icon;
use crate::shared::markdown::render_markdown;
use contracts::domain::a001_legal_chat::aggregate::ChatMessage;
use leptos::prelude::*;

/// One transcript entry. Assistant answers are markdown, user text is shown
/// verbatim.
#[component]
#[allow(non_snake_case)]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.is_user();

    let avatar = move |name: &'static str, background: &'static str| {
        view! {
            <div style=format!(
                "flex: none; width: 36px; height: 36px; border-radius: 50%; display: flex; align-items: center; justify-content: center; margin-top: 4px; color: white; background: {};",
                background,
            )>
                {icon(name)}
            </div>
        }
    };

    let body = if is_user {
        view! { <div style="white-space: pre-wrap;">{message.content.clone()}</div> }.into_any()
    } else {
        view! { <div class="markdown-body" inner_html=render_markdown(&message.content)></div> }
            .into_any()
    };

    view! {
        <div style=if is_user {
            "display: flex; align-items: flex-start; gap: 12px; justify-content: flex-end;"
        } else {
            "display: flex; align-items: flex-start; gap: 12px; justify-content: flex-start;"
        }>
            {(!is_user).then(|| avatar("bot", "var(--colorBrandBackground)"))}
            <div style=if is_user {
                "max-width: 70%; background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px;"
            } else {
                "max-width: 70%; background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px;"
            }>
                {body}
            </div>
            {is_user.then(|| avatar("person", "var(--colorPaletteGreenBackground3)"))}
        </div>
    }
}
