use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// Bot message shown when the request cannot reach the server at all.
pub const NETWORK_ERROR_TEXT: &str = "Network error. Please try again.";

/// Bot message shown when the server reports an error without a usable body.
pub const SERVER_ERROR_FALLBACK: &str = "Error communicating with server.";

/// Placeholder shown when a successful response carries no `reply` field.
pub const NO_REPLY_PLACEHOLDER: &str = "(no reply)";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Successful response body. A missing or null `reply` is tolerated and
/// rendered as [`NO_REPLY_PLACEHOLDER`].
#[derive(Debug, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    error: Option<String>,
}

/// Failure modes of a single chat round trip.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The call itself failed (connection refused, DNS, unparsable success
    /// body). No distinction between causes is surfaced to the user.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status. `message` is the
    /// body's `error` field when present, otherwise the generic fallback.
    #[error("server returned {status}: {message}")]
    Server {
        status: StatusCode,
        message: String,
    },
}

/// Client for the `/api/chat` wire contract.
///
/// Owns its HTTP client and endpoint for the lifetime of the session; one
/// call issues exactly one JSON POST with no retry, timeout, or cancellation.
pub struct ChatClient {
    client: Client,
    endpoint: String,
}

impl ChatClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one message and returns the typed outcome.
    ///
    /// The caller is expected to collapse the outcome into a transcript
    /// message via [`bot_text`]; no error escapes as a displayed panic.
    pub async fn send(&self, message: &str) -> Result<ChatReply, ChatError> {
        let url = format!("{}/api/chat", self.endpoint.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest { message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Best effort: extract the server's own error text, else fall
            // back to the generic message.
            let message = response
                .json::<ApiError>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string());
            return Err(ChatError::Server { status, message });
        }

        Ok(response.json::<ChatReply>().await?)
    }
}

/// Collapses the three mutually exclusive outcomes of a send into the text
/// appended to the transcript as a bot message.
///
/// Total over its input, so the session re-prompts on every path.
pub fn bot_text(outcome: Result<ChatReply, ChatError>) -> String {
    match outcome {
        Ok(reply) => reply
            .reply
            .unwrap_or_else(|| NO_REPLY_PLACEHOLDER.to_string()),
        Err(ChatError::Server { message, .. }) => message,
        Err(ChatError::Transport(_)) => NETWORK_ERROR_TEXT.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_text_reply_present() {
        let outcome = Ok(ChatReply {
            reply: Some("Hi there".to_string()),
        });
        assert_eq!(bot_text(outcome), "Hi there");
    }

    #[test]
    fn test_bot_text_reply_missing() {
        let outcome = Ok(ChatReply { reply: None });
        assert_eq!(bot_text(outcome), NO_REPLY_PLACEHOLDER);
    }

    #[test]
    fn test_bot_text_server_error_message() {
        let outcome = Err(ChatError::Server {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: "Rate limited".to_string(),
        });
        assert_eq!(bot_text(outcome), "Rate limited");
    }

    #[test]
    fn test_bot_text_transport_failure() {
        // An invalid URL produces a reqwest error without touching the network.
        let err = Client::new().post("http://[invalid").build().unwrap_err();
        assert_eq!(bot_text(Err(ChatError::Transport(err))), NETWORK_ERROR_TEXT);
    }

    #[test]
    fn test_reply_deserializes_without_field() {
        let reply: ChatReply = serde_json::from_str("{}").unwrap();
        assert!(reply.reply.is_none());

        let reply: ChatReply = serde_json::from_str(r#"{"reply":null}"#).unwrap();
        assert!(reply.reply.is_none());
    }

    #[test]
    fn test_endpoint_trailing_slash_tolerated() {
        let client = ChatClient::new("http://localhost:3000/".to_string());
        assert_eq!(client.endpoint(), "http://localhost:3000/");
        // URL construction strips the trailing slash; exercised end to end
        // in tests/chat_contract.rs.
    }
}
