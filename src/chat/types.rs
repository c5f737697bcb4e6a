// SPDX-License-Identifier: MPL-2.0
//! Chat domain types and the backend's JSON wire format.

use serde::{Deserialize, Serialize};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Maps a backend sender label. Anything other than `user` is the bot.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == "user" {
            Sender::User
        } else {
            Sender::Bot
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// Conversation restored from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatHistory {
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
}

// ==========================================================================
// Wire format
// ==========================================================================

/// `GET /getCompanyName`
#[derive(Debug, Deserialize)]
pub struct CompanyNameResponse {
    pub result: CompanyNameResult,
}

/// The backend answers either `{ "company_name": "..." }` or a bare string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CompanyNameResult {
    Object { company_name: Option<String> },
    Plain(String),
}

impl CompanyNameResponse {
    /// Company name, if the backend reported a non-blank one.
    #[must_use]
    pub fn into_name(self) -> Option<String> {
        let name = match self.result {
            CompanyNameResult::Object { company_name } => company_name?,
            CompanyNameResult::Plain(name) => name,
        };
        let trimmed = name.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// `POST /initSession`
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
}

/// `POST /chat` body.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<&'a str>,
}

/// `POST /chat` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    pub session_id: String,
    pub result: String,
}

/// `GET /getChatHistory/{session_id}`
#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    pub result: HistoryResult,
}

#[derive(Debug, Deserialize)]
pub struct HistoryResult {
    pub session_id: String,
    #[serde(default)]
    pub messages: Vec<WireMessage>,
}

#[derive(Debug, Deserialize)]
pub struct WireMessage {
    pub sender: String,
    pub text: String,
}

impl From<HistoryResponse> for ChatHistory {
    fn from(response: HistoryResponse) -> Self {
        Self {
            session_id: response.result.session_id,
            messages: response
                .result
                .messages
                .into_iter()
                .map(|msg| ChatMessage {
                    sender: Sender::from_label(&msg.sender),
                    text: msg.text,
                })
                .collect(),
        }
    }
}

/// Error payload. Handlers may report `message` or FastAPI-style `detail`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human-readable message carried by the body, if any.
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        self.message
            .or_else(|| match self.detail {
                Some(serde_json::Value::String(detail)) => Some(detail),
                _ => None,
            })
            .filter(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_name_accepts_object_form() {
        let response: CompanyNameResponse = serde_json::from_str(
            r#"{"status":"success","result":{"company_name":"Acme"}}"#,
        )
        .unwrap();
        assert_eq!(response.into_name().as_deref(), Some("Acme"));
    }

    #[test]
    fn company_name_accepts_plain_string() {
        let response: CompanyNameResponse =
            serde_json::from_str(r#"{"result":"  Initech "}"#).unwrap();
        assert_eq!(response.into_name().as_deref(), Some("Initech"));
    }

    #[test]
    fn blank_company_name_is_none() {
        let response: CompanyNameResponse =
            serde_json::from_str(r#"{"result":{"company_name":""}}"#).unwrap();
        assert!(response.into_name().is_none());

        let response: CompanyNameResponse =
            serde_json::from_str(r#"{"result":{}}"#).unwrap();
        assert!(response.into_name().is_none());
    }

    #[test]
    fn chat_request_omits_missing_session() {
        let body = serde_json::to_string(&ChatRequest {
            message: "hi",
            session_id: None,
        })
        .unwrap();
        assert_eq!(body, r#"{"message":"hi"}"#);

        let body = serde_json::to_string(&ChatRequest {
            message: "hi",
            session_id: Some("s1"),
        })
        .unwrap();
        assert_eq!(body, r#"{"message":"hi","session_id":"s1"}"#);
    }

    #[test]
    fn history_maps_unknown_senders_to_bot() {
        let response: HistoryResponse = serde_json::from_str(
            r#"{"status":"success","result":{"session_id":"s1","messages":[
                {"sender":"user","text":"hello"},
                {"sender":"assistant","text":"hi there"},
                {"sender":"system","text":"note"}
            ]}}"#,
        )
        .unwrap();

        let history = ChatHistory::from(response);
        assert_eq!(history.session_id, "s1");
        assert_eq!(
            history.messages,
            vec![
                ChatMessage::user("hello"),
                ChatMessage::bot("hi there"),
                ChatMessage::bot("note"),
            ]
        );
    }

    #[test]
    fn error_body_prefers_message_over_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"quota exceeded","detail":"x"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("quota exceeded"));

        let body: ErrorBody = serde_json::from_str(r#"{"detail":"Failed"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Failed"));

        let body: ErrorBody = serde_json::from_str(r#"{"detail":[{"loc":["body"]}]}"#).unwrap();
        assert!(body.into_message().is_none());
    }
}
