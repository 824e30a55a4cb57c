//! Left panel: text ingestion, PDF staging/submit and the uploaded-file list.

use super::view_model::LegalChatVm;
use crate::domain::a001_legal_chat::state::SelectedFile;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;
use web_sys::HtmlInputElement;

const FILE_INPUT_ID: &str = "legal-chat-pdf-input";

fn open_file_picker() {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(input) = document
        .get_element_by_id(FILE_INPUT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        input.click();
    }
}

#[component]
#[allow(non_snake_case)]
pub fn UploadPanel(vm: LegalChatVm) -> impl IntoView {
    let text_disabled = Signal::derive(move || !vm.has_conversation() || vm.is_uploading_text());
    let files_disabled =
        Signal::derive(move || !vm.has_conversation() || vm.is_uploading_files());
    let submit_disabled = Signal::derive(move || {
        files_disabled.get() || vm.state.with(|s| s.pending().is_empty())
    });

    view! {
        <div style="width: 25%; min-width: 240px; display: flex; flex-direction: column; gap: 16px; padding: 16px; overflow-y: auto; background: var(--colorNeutralBackground2); border-radius: 12px;">
            <h3 style="margin: 0; color: var(--colorBrandForeground1);">"Input & Uploaded Files"</h3>

            // Text ingestion
            <Flex align=FlexAlign::Center style="gap: 8px;">
                <div style="flex: 1;">
                    <Input
                        value=vm.text_input
                        placeholder="Enter text here..."
                        disabled=text_disabled
                        attr:style="width: 100%;"
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                vm.submit_text();
                            }
                        }
                    />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=text_disabled
                    on_click=move |_| vm.submit_text()
                >
                    {move || {
                        if vm.is_uploading_text() {
                            view! { <Spinner size=SpinnerSize::Tiny /> }.into_any()
                        } else {
                            icon("send")
                        }
                    }}
                </Button>
            </Flex>

            // PDF staging
            <input
                type="file"
                accept=".pdf,application/pdf"
                multiple=true
                style="display: none;"
                id=FILE_INPUT_ID
                on:change=move |ev| {
                    let input = event_target::<HtmlInputElement>(&ev);
                    if let Some(list) = input.files() {
                        let files = (0..list.length()).filter_map(|i| list.get(i)).collect();
                        vm.stage_files(files);
                    }
                    // Allow picking the same file again
                    input.set_value("");
                }
            />
            <Flex style="gap: 8px; flex-wrap: wrap;">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=files_disabled
                    on_click=move |_| open_file_picker()
                >
                    {icon("upload")}
                    " Choose PDF"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=submit_disabled
                    on_click=move |_| vm.submit_files()
                >
                    {move || {
                        if vm.is_uploading_files() {
                            view! { <Spinner size=SpinnerSize::Tiny /> }.into_any()
                        } else {
                            icon("send")
                        }
                    }}
                    " Upload"
                </Button>
            </Flex>

            // Staged selection
            {move || {
                let staged: Vec<(usize, String)> = vm
                    .state
                    .with(|s| s.pending().iter().map(|f| f.file_name()).enumerate().collect());
                (!staged.is_empty()).then(|| {
                    view! {
                        <div style="display: flex; flex-direction: column; gap: 6px;">
                            <span style="font-size: 12px; color: var(--colorNeutralForeground3);">
                                "Selected, not uploaded yet:"
                            </span>
                            {staged
                                .into_iter()
                                .map(|(index, name)| {
                                    view! {
                                        <div style="padding: 6px 12px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 6px; display: flex; align-items: center; gap: 8px;">
                                            {icon("document")}
                                            <span style="flex: 1; font-size: 14px; overflow: hidden; text-overflow: ellipsis;">{name}</span>
                                            <button
                                                style="background: none; border: none; cursor: pointer; padding: 2px; color: var(--colorNeutralForeground3);"
                                                disabled=move || vm.is_uploading_files()
                                                on:click=move |_| vm.unstage(index)
                                            >
                                                {icon("close")}
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
            }}

            // Uploaded files
            {move || {
                let uploaded = vm.state.with(|s| s.uploaded_files().to_vec());
                if uploaded.is_empty() {
                    view! {
                        <span style="color: var(--colorNeutralForeground4);">"No files uploaded yet."</span>
                    }
                        .into_any()
                } else {
                    view! {
                        <ul style="list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 8px;">
                            {uploaded
                                .into_iter()
                                .map(|name| {
                                    view! {
                                        <li style="color: var(--colorNeutralForeground2);">{name}</li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
