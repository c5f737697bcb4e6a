// SPDX-License-Identifier: MPL-2.0
//! Chat backend port and its HTTP adapter.
//!
//! The [`ChatBackend`] trait describes the four backend operations the widget
//! needs. [`HttpChatClient`] implements it over `reqwest`. Callers wrap the
//! returned futures in Iced `Task`s, so nothing here blocks the UI.

use super::types::{
    ChatHistory, ChatReply, ChatRequest, CompanyNameResponse, ErrorBody, HistoryResponse,
    SessionResponse,
};
use crate::i18n::I18n;
use serde::de::DeserializeOwned;
use std::future::Future;
use thiserror::Error;

/// User agent sent with every backend request.
const USER_AGENT: &str = concat!("FloatChat/", env!("CARGO_PKG_VERSION"));

/// Failure of a single backend request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("backend returned HTTP {code}")]
    Status { code: u16, message: Option<String> },

    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ChatError {
    /// Message supplied by the backend in its error body, if any.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ChatError::Status {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }

    /// Text shown to the user: the backend's own message when it sent one,
    /// otherwise the localized fallback for `operation`.
    #[must_use]
    pub fn user_message(&self, operation: ChatOperation, i18n: &I18n) -> String {
        self.backend_message()
            .map(str::to_string)
            .unwrap_or_else(|| i18n.tr(operation.i18n_key()))
    }
}

/// Backend request kinds, used to pick log labels and fallback error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatOperation {
    CompanyName,
    InitSession,
    SendMessage,
    History,
}

impl ChatOperation {
    /// i18n key of the fallback error text.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ChatOperation::CompanyName => "chat-error-company-name",
            ChatOperation::InitSession => "chat-error-init-session",
            ChatOperation::SendMessage => "chat-error-send",
            ChatOperation::History => "chat-error-history",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ChatOperation::CompanyName => "getCompanyName",
            ChatOperation::InitSession => "initSession",
            ChatOperation::SendMessage => "chat",
            ChatOperation::History => "getChatHistory",
        }
    }
}

pub type ChatResult<T> = std::result::Result<T, ChatError>;

/// Remote chat service.
///
/// Implementations are cheap to clone so a copy can move into each request
/// future.
pub trait ChatBackend: Clone + Send + Sync + 'static {
    /// Company name for the panel title, `None` if the backend has none.
    fn company_name(&self)
        -> impl Future<Output = ChatResult<Option<String>>> + Send + 'static;

    /// Starts a new session and returns its identifier.
    fn init_session(&self) -> impl Future<Output = ChatResult<String>> + Send + 'static;

    /// Sends a user message, continuing `session_id` when given.
    fn send_message(
        &self,
        message: String,
        session_id: Option<String>,
    ) -> impl Future<Output = ChatResult<ChatReply>> + Send + 'static;

    /// Fetches the transcript of an existing session.
    fn history(
        &self,
        session_id: String,
    ) -> impl Future<Output = ChatResult<ChatHistory>> + Send + 'static;
}

/// [`ChatBackend`] over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpChatClient {
    /// Builds a client rooted at `base_url` (a trailing slash is ignored).
    pub fn new(base_url: &str) -> ChatResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: ChatOperation,
        request: reqwest::RequestBuilder,
    ) -> ChatResult<T> {
        log::debug!("Sending {} request", operation.as_str());

        let response = request.send().await.map_err(|e| {
            log::warn!("{} request failed: {e}", operation.as_str());
            ChatError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(response).await;
            log::warn!(
                "{} returned {status}{}",
                operation.as_str(),
                message
                    .as_deref()
                    .map(|m| format!(": {m}"))
                    .unwrap_or_default()
            );
            return Err(ChatError::Status {
                code: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(|e| {
            log::warn!("{} response could not be decoded: {e}", operation.as_str());
            ChatError::Decode(e.to_string())
        })
    }
}

/// Extracts the backend's error message from a failed response body.
async fn error_message(response: reqwest::Response) -> Option<String> {
    let bytes = response.bytes().await.ok()?;
    serde_json::from_slice::<ErrorBody>(&bytes)
        .ok()
        .and_then(ErrorBody::into_message)
}

impl ChatBackend for HttpChatClient {
    fn company_name(&self) -> impl Future<Output = ChatResult<Option<String>>> + Send + 'static
    {
        let client = self.clone();
        async move {
            let request = client.client.get(client.url("getCompanyName"));
            let response: CompanyNameResponse =
                client.execute(ChatOperation::CompanyName, request).await?;
            Ok(response.into_name())
        }
    }

    fn init_session(&self) -> impl Future<Output = ChatResult<String>> + Send + 'static {
        let client = self.clone();
        async move {
            let request = client.client.post(client.url("initSession"));
            let response: SessionResponse =
                client.execute(ChatOperation::InitSession, request).await?;
            Ok(response.session_id)
        }
    }

    fn send_message(
        &self,
        message: String,
        session_id: Option<String>,
    ) -> impl Future<Output = ChatResult<ChatReply>> + Send + 'static {
        let client = self.clone();
        async move {
            let body = ChatRequest {
                message: &message,
                session_id: session_id.as_deref(),
            };
            let request = client.client.post(client.url("chat")).json(&body);
            client.execute(ChatOperation::SendMessage, request).await
        }
    }

    fn history(
        &self,
        session_id: String,
    ) -> impl Future<Output = ChatResult<ChatHistory>> + Send + 'static {
        let client = self.clone();
        async move {
            let request = client
                .client
                .get(client.url(&format!("getChatHistory/{session_id}")));
            let response: HistoryResponse = client.execute(ChatOperation::History, request).await?;
            Ok(ChatHistory::from(response))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = HttpChatClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("chat"), "http://localhost:8080/chat");
        assert_eq!(
            client.url("/getChatHistory/abc"),
            "http://localhost:8080/getChatHistory/abc"
        );
    }

    #[test]
    fn backend_message_comes_from_status_errors_only() {
        let err = ChatError::Status {
            code: 500,
            message: Some("Model unavailable".into()),
        };
        assert_eq!(err.backend_message(), Some("Model unavailable"));
        assert!(ChatError::Transport("refused".into())
            .backend_message()
            .is_none());
        assert!(ChatError::Status {
            code: 502,
            message: None
        }
        .backend_message()
        .is_none());
    }

    #[test]
    fn user_message_prefers_backend_text() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let err = ChatError::Status {
            code: 500,
            message: Some("Model unavailable".into()),
        };
        assert_eq!(
            err.user_message(ChatOperation::SendMessage, &i18n),
            "Model unavailable"
        );
    }

    #[test]
    fn user_message_falls_back_per_operation() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let err = ChatError::Transport("connection refused".into());
        assert_eq!(
            err.user_message(ChatOperation::SendMessage, &i18n),
            "Failed to send message"
        );
        assert_eq!(
            err.user_message(ChatOperation::History, &i18n),
            "Failed to fetch chat history"
        );
        assert_eq!(
            err.user_message(ChatOperation::InitSession, &i18n),
            "Failed to initialize session"
        );
        assert_eq!(
            err.user_message(ChatOperation::CompanyName, &i18n),
            "Failed to fetch company name"
        );
    }

    #[test]
    fn error_display_is_descriptive() {
        let err = ChatError::Status {
            code: 404,
            message: None,
        };
        assert_eq!(err.to_string(), "backend returned HTTP 404");
        assert_eq!(
            ChatError::Decode("missing field".into()).to_string(),
            "invalid response: missing field"
        );
    }
}
