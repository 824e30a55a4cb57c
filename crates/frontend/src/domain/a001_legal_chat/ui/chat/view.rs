//! Legal Chat - View Component

use super::message_bubble::MessageBubble;
use super::upload_panel::UploadPanel;
use super::view_model::LegalChatVm;
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn LegalChatPage() -> impl IntoView {
    let vm = LegalChatVm::new(use_notifications());
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the latest message in view, including a resolved placeholder
    Effect::new(move |_| {
        let _last = vm
            .state
            .with(|s| s.transcript().last().map(|m| m.id));
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let query_disabled = Signal::derive(move || vm.is_awaiting() || !vm.has_conversation());

    view! {
        <div style="position: fixed; inset: 0; display: flex; flex-direction: column; gap: 16px; padding: 32px; box-sizing: border-box; overflow: hidden; background: var(--colorNeutralBackground3); color: var(--colorNeutralForeground1);">
            <h1 style="margin: 0; text-align: center; font-size: 28px; font-weight: bold; color: var(--colorBrandForeground1);">
                "💬 Legal Chatbot"
            </h1>

            <Button
                appearance=ButtonAppearance::Primary
                disabled=vm.is_starting
                on_click=move |_| vm.start_conversation()
            >
                {move || {
                    if vm.is_starting.get() {
                        view! { <Spinner size=SpinnerSize::Tiny /> }.into_any()
                    } else {
                        icon("chat-plus")
                    }
                }}
                " Start New Conversation"
            </Button>

            <div style="flex: 1; min-height: 0; display: flex; gap: 24px;">
                <UploadPanel vm=vm />

                // Transcript
                <div
                    node_ref=messages_container_ref
                    style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 16px; padding: 24px; background: var(--colorNeutralBackground2); border-radius: 12px;"
                >
                    <Show when=move || !vm.has_conversation()>
                        <div style="margin: auto; color: var(--colorNeutralForeground4);">
                            "Start a new conversation to ask a legal question."
                        </div>
                    </Show>
                    <For
                        each=move || vm.state.with(|s| s.transcript().messages().to_vec())
                        key=|msg| msg.id
                        let:msg
                    >
                        <MessageBubble message=msg />
                    </For>
                </div>
            </div>

            // Query input
            <Flex align=FlexAlign::End style="gap: 12px;">
                <div style="flex: 1;">
                    <Textarea
                        value=vm.input
                        placeholder="Ask a legal question... (Enter to send, Shift+Enter for a new line)"
                        attr:style="width: 100%; min-height: 48px; max-height: 200px; resize: vertical;"
                        disabled=query_disabled
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                vm.send();
                            }
                        }
                    />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=query_disabled
                    on_click=move |_| vm.send()
                >
                    {move || {
                        if vm.is_awaiting() {
                            view! { <Spinner size=SpinnerSize::Tiny /> }.into_any()
                        } else {
                            icon("send")
                        }
                    }}
                    {move || if vm.is_awaiting() { " Thinking..." } else { " Send" }}
                </Button>
            </Flex>
        </div>
    }
}
