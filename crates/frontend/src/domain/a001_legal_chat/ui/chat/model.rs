//! Legal Chat - Model (API functions)
//!
//! Every failure mode (transport, HTTP status, undecodable body, `error`
//! field in the body) comes back as a [`ChatError`]. Requests have no
//! timeout and are never retried.

use crate::domain::a001_legal_chat::error::ChatError;
use crate::shared::api_utils::api_url;
use contracts::domain::a001_legal_chat::aggregate::ConversationId;
use contracts::domain::a001_legal_chat::dto::{
    ChatResponse, StartConversationResponse, UploadResponse,
};
use contracts::domain::a001_legal_chat::endpoints;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::FormData;

fn transport(e: gloo_net::Error) -> ChatError {
    ChatError::Transport(e.to_string())
}

fn js_error(e: wasm_bindgen::JsValue) -> ChatError {
    ChatError::Transport(format!("{e:?}"))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ChatError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ChatError::Decode(format!("Failed to read response: {}", e)))?;

    if status != 200 {
        // FastAPI-style bodies may still explain the failure
        let detail = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .or_else(|| v.get("detail"))
                    .and_then(|d| d.as_str().map(str::to_string))
            });
        return Err(ChatError::Backend(
            detail.unwrap_or_else(|| format!("HTTP {}", status)),
        ));
    }

    serde_json::from_str::<T>(&text)
        .map_err(|e| ChatError::Decode(format!("Failed to parse response: {}", e)))
}

/// Начать новый разговор
pub async fn start_conversation() -> Result<ConversationId, ChatError> {
    let url = api_url(&endpoints::start_conversation_path());
    let response = Request::get(&url).send().await.map_err(transport)?;
    let data: StartConversationResponse = read_json(response).await?;
    ConversationId::new(data.conversation_id).map_err(ChatError::Decode)
}

/// Задать вопрос в рамках разговора
pub async fn send_chat(id: &ConversationId, query: &str) -> Result<String, ChatError> {
    let url = api_url(&endpoints::chat_path(id, query));
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(transport)?;
    let data: ChatResponse = read_json(response).await?;
    data.into_result().map_err(ChatError::Backend)
}

/// Загрузить вставленный текст
pub async fn upload_text(id: &ConversationId, text: &str) -> Result<String, ChatError> {
    let form_data = FormData::new().map_err(js_error)?;
    form_data
        .append_with_str(endpoints::TEXT_FIELD, text)
        .map_err(js_error)?;

    let url = api_url(&endpoints::upload_text_path(id));
    post_form(&url, form_data).await
}

/// Загрузить пачку PDF-файлов одним multipart-запросом
pub async fn upload_files(
    id: &ConversationId,
    files: &[web_sys::File],
) -> Result<String, ChatError> {
    let form_data = FormData::new().map_err(js_error)?;
    for file in files {
        form_data
            .append_with_blob_and_filename(endpoints::FILES_FIELD, file, &file.name())
            .map_err(js_error)?;
    }

    let url = api_url(&endpoints::upload_files_path(id));
    post_form(&url, form_data).await
}

async fn post_form(url: &str, form_data: FormData) -> Result<String, ChatError> {
    // The browser sets the multipart boundary itself; no Content-Type header.
    let response = Request::post(url)
        .body(form_data)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    let data: UploadResponse = read_json(response).await?;
    data.into_result().map_err(ChatError::Backend)
}
