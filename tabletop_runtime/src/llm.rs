use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

/// LLM request payload
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub system: String,
    pub user: String,
    pub model: String,
    pub temperature: f32,
}

/// LLM client trait
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: LlmRequest) -> Result<String, LlmError>;
}

#[async_trait]
impl<T: LlmClient + ?Sized> LlmClient for Arc<T> {
    async fn complete(&self, request: LlmRequest) -> Result<String, LlmError> {
        (**self).complete(request).await
    }
}

/// LLM errors
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("http error: {0}")]
    Http(String),
    #[error("response error: {0}")]
    Response(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Mock LLM client for tests and offline runs.
///
/// Scripted responses are served in order; once the script runs out the
/// fixed `response` is repeated, and without one every call fails.
pub struct MockLlmClient {
    script: Mutex<VecDeque<String>>,
    response: Option<String>,
    requests: Mutex<Vec<LlmRequest>>,
}

impl MockLlmClient {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            response: Some(response.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn scripted<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: Mutex::new(responses.into_iter().map(Into::into).collect()),
            response: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self::scripted(Vec::<String>::new())
    }

    /// Every request seen so far, oldest first.
    pub fn requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: LlmRequest) -> Result<String, LlmError> {
        if let Ok(mut seen) = self.requests.lock() {
            seen.push(request);
        }
        let next = self
            .script
            .lock()
            .map_err(|e| LlmError::Http(e.to_string()))?
            .pop_front();
        next.or_else(|| self.response.clone())
            .ok_or_else(|| LlmError::Http("mock client has no response".to_string()))
    }
}

/// Slice from the first `{` to the last `}`; models often wrap JSON in
/// prose or code fences.
pub fn extract_json(text: &str) -> Option<String> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(text[start..=end].to_string())
}

pub fn truncate_for_log(input: &str, max_chars: usize) -> String {
    let char_count = input.chars().count();
    if char_count <= max_chars {
        return input.to_string();
    }
    let mut preview: String = input.chars().take(max_chars).collect();
    preview.push_str(&format!("... [truncated, total_chars={}]", char_count));
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> LlmRequest {
        LlmRequest {
            system: "sys".into(),
            user: "hello".into(),
            model: "m".into(),
            temperature: 0.7,
        }
    }

    #[test]
    fn test_extract_json_from_fenced_output() {
        let text = "Here you go:\n```json\n{\"a\": {\"b\": 1}}\n```";
        assert_eq!(extract_json(text).unwrap(), "{\"a\": {\"b\": 1}}");
        assert!(extract_json("no json here").is_none());
        assert!(extract_json("} backwards {").is_none());
    }

    #[test]
    fn test_truncate_for_log() {
        assert_eq!(truncate_for_log("short", 10), "short");
        let out = truncate_for_log("abcdef", 3);
        assert_eq!(out, "abc... [truncated, total_chars=6]");
    }

    #[tokio::test]
    async fn test_mock_script_then_fixed_response() {
        let client = MockLlmClient::scripted(["one", "two"]);
        assert_eq!(client.complete(request()).await.unwrap(), "one");
        assert_eq!(client.complete(request()).await.unwrap(), "two");
        assert!(client.complete(request()).await.is_err());
        assert_eq!(client.requests().len(), 3);

        let fixed = MockLlmClient::new("{}");
        assert_eq!(fixed.complete(request()).await.unwrap(), "{}");
        assert_eq!(fixed.complete(request()).await.unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_arc_dyn_client_delegates() {
        let client: Arc<dyn LlmClient> = Arc::new(MockLlmClient::new("ok"));
        assert_eq!(client.complete(request()).await.unwrap(), "ok");
    }
}
