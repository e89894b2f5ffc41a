use serde::{Deserialize, Serialize};

/// Body of `POST /chatbot`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatRequest {
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatResponse {
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSender {
    You,
    Bot,
}

impl ChatSender {
    pub fn label(&self) -> &'static str {
        match self {
            ChatSender::You => "You",
            ChatSender::Bot => "Bot",
        }
    }
}

/// One line of the transcript. Append-only, page-lifetime only.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: ChatSender::You,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: ChatSender::Bot,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_labels() {
        assert_eq!(ChatMessage::user("hello").sender.label(), "You");
        assert_eq!(ChatMessage::bot("Hi").sender.label(), "Bot");
    }

    #[test]
    fn request_shape() {
        let body = ChatRequest {
            query: "mileage?".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"query":"mileage?"}"#
        );
    }
}
