//! Client for Google's Gemini `generateContent` API.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::llm::{LlmClient, LlmError, LlmRequest};

#[derive(Debug, Clone)]
pub struct GeminiClientConfig {
    pub api_key: String,
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeminiClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 30,
        }
    }
}

pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiClientConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiClientConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(http_error)?;
        Ok(Self { client, config })
    }

    /// No key in the URL; it goes in the `x-goog-api-key` header.
    fn build_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            model
        )
    }

    fn build_headers(&self) -> Result<HeaderMap, LlmError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key = HeaderValue::from_str(&self.config.api_key)
            .map_err(|_| LlmError::Http("API key is not a valid header value".to_string()))?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);
        Ok(headers)
    }
}

const API_KEY_HEADER: &str = "x-goog-api-key";

fn http_error(e: reqwest::Error) -> LlmError {
    LlmError::Http(e.without_url().to_string())
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiSystemInstruction>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiSystemInstruction {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContentResponse,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

fn request_body(request: LlmRequest) -> GeminiRequest {
    GeminiRequest {
        contents: vec![GeminiContent {
            role: "user".to_string(),
            parts: vec![GeminiPart { text: request.user }],
        }],
        system_instruction: if request.system.is_empty() {
            None
        } else {
            Some(GeminiSystemInstruction {
                parts: vec![GeminiPart {
                    text: request.system,
                }],
            })
        },
        generation_config: GeminiGenerationConfig {
            temperature: request.temperature,
        },
    }
}

fn parse_response(text: &str) -> Result<String, LlmError> {
    let parsed: GeminiResponse =
        serde_json::from_str(text).map_err(|e| LlmError::Serialization(e.to_string()))?;

    if let Some(error) = parsed.error {
        return Err(LlmError::Response(format!("Gemini API error: {}", error.message)));
    }

    parsed
        .candidates
        .and_then(|c| c.into_iter().next())
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| LlmError::Response("No content in response".to_string()))
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, request: LlmRequest) -> Result<String, LlmError> {
        let url = self.build_url(&request.model);
        let headers = self.build_headers()?;

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(&request_body(request))
            .send()
            .await
            .map_err(http_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(LlmError::Response(format!("HTTP {}: {}", status, text)));
        }

        let text = response.text().await.map_err(http_error)?;
        parse_response(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = GeminiClient::new(GeminiClientConfig {
            api_key: "test-key".to_string(),
            endpoint: "https://example.test/v1beta/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            client.build_url("gemini-2.0-flash-exp"),
            "https://example.test/v1beta/models/gemini-2.0-flash-exp:generateContent"
        );
    }

    #[test]
    fn test_api_key_sent_as_sensitive_header() {
        let client = GeminiClient::new(GeminiClientConfig {
            api_key: "test-key".to_string(),
            ..Default::default()
        })
        .unwrap();
        let headers = client.build_headers().unwrap();
        let key = headers.get(API_KEY_HEADER).unwrap();
        assert_eq!(key.to_str().unwrap(), "test-key");
        assert!(key.is_sensitive());
        assert!(!client.build_url("m").contains("test-key"));
    }

    #[tokio::test]
    async fn test_failed_request_does_not_expose_api_key() {
        let client = GeminiClient::new(GeminiClientConfig {
            api_key: "SUPERSECRETKEY".to_string(),
            endpoint: "http://127.0.0.1:1/v1beta".to_string(),
            timeout_secs: 5,
        })
        .unwrap();
        let err = client
            .complete(LlmRequest {
                system: String::new(),
                user: "hi".into(),
                model: "gemini-2.0-flash-exp".into(),
                temperature: 0.0,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Http(_)));
        assert!(!err.to_string().contains("SUPERSECRETKEY"), "{err}");
    }

    #[test]
    fn test_request_body_shape() {
        let body = request_body(LlmRequest {
            system: "be brief".into(),
            user: "hi".into(),
            model: "m".into(),
            temperature: 0.5,
        });
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "be brief");
        assert_eq!(json["generationConfig"]["temperature"], 0.5);
    }

    #[test]
    fn test_empty_system_prompt_is_omitted() {
        let body = request_body(LlmRequest {
            system: String::new(),
            user: "hi".into(),
            model: "m".into(),
            temperature: 0.0,
        });
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("systemInstruction").is_none());
    }

    #[test]
    fn test_parse_response() {
        let ok = r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":1}"}]}}]}"#;
        assert_eq!(parse_response(ok).unwrap(), "{\"a\":1}");

        let err = r#"{"error":{"message":"quota exceeded","code":429}}"#;
        assert!(matches!(parse_response(err), Err(LlmError::Response(m)) if m.contains("quota")));

        assert!(matches!(parse_response(r#"{"candidates":[]}"#), Err(LlmError::Response(_))));
        assert!(matches!(parse_response("not json"), Err(LlmError::Serialization(_))));
    }
}
