//! HTTP generator backed by a Messages-style chat completion endpoint.

use async_trait::async_trait;
use intake_core::OutputSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::{GenerationError, Generator, GeneratorConfig, Instruction};

const MESSAGES_PATH: &str = "/v1/messages";
const API_VERSION: &str = "2023-06-01";

const SYSTEM_PROMPT: &str = "\
You produce structured data for a website backend.

Respond ONLY with a JSON object. No markdown fences, no explanation, just raw JSON \
conforming to this JSON Schema:
";

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: String,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    #[serde(default)]
    input_tokens: u32,
    #[serde(default)]
    output_tokens: u32,
}

/// Generator that posts the instruction to a hosted model and parses its JSON reply.
pub struct HttpGenerator {
    client: reqwest::Client,
    config: GeneratorConfig,
}

impl HttpGenerator {
    /// Build a generator; the request timeout comes from `config.timeout`.
    pub fn new(mut config: GeneratorConfig) -> Result<Self, GenerationError> {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!("{}{MESSAGES_PATH}", self.config.base_url)
    }
}

#[async_trait]
impl Generator for HttpGenerator {
    async fn generate(
        &self,
        instruction: &Instruction,
        schema: &OutputSchema,
    ) -> Result<Value, GenerationError> {
        let url = self.endpoint();
        let body = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            system: format!("{SYSTEM_PROMPT}{}", schema.to_pretty_json()),
            messages: [Message {
                role: "user",
                content: &instruction.text,
            }],
        };

        info!(url = %url, template = instruction.name, model = %self.config.model, "requesting generation");
        let mut req = self
            .client
            .post(&url)
            .header("anthropic-version", API_VERSION)
            .json(&body);
        if let Some(key) = &self.config.api_key {
            req = req.header("x-api-key", key);
        }

        let resp = req.send().await.map_err(classify)?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GenerationError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: MessagesResponse = resp.json().await.map_err(classify)?;
        if let Some(usage) = &parsed.usage {
            debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "generation complete"
            );
        }

        let text = parsed
            .content
            .iter()
            .filter(|block| block.block_type == "text")
            .find_map(|block| block.text.as_deref())
            .filter(|text| !text.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        Ok(serde_json::from_str(strip_fences(text))?)
    }
}

fn classify(e: reqwest::Error) -> GenerationError {
    if e.is_timeout() {
        GenerationError::Timeout
    } else {
        GenerationError::Http(e)
    }
}

/// Remove a surrounding ```json fence if the model added one anyway.
fn strip_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_core::schema::lead_result_schema;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(server: &MockServer) -> GeneratorConfig {
        GeneratorConfig {
            base_url: format!("{}/", server.uri()),
            api_key: Some("test-key".into()),
            model: "test-model".into(),
            timeout: Duration::from_secs(5),
            ..GeneratorConfig::default()
        }
    }

    fn instruction() -> Instruction {
        Instruction {
            name: "test",
            text: "Generate a lead".into(),
        }
    }

    fn reply(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": text}],
            "usage": {"input_tokens": 12, "output_tokens": 34}
        }))
    }

    #[tokio::test]
    async fn parses_json_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "test-key"))
            .and(header("anthropic-version", API_VERSION))
            .and(body_partial_json(json!({
                "model": "test-model",
                "messages": [{"role": "user", "content": "Generate a lead"}]
            })))
            .respond_with(reply(
                r#"{"leadId": "LEAD-1A2B3C4D", "confirmationMessage": "Thanks"}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let generator = HttpGenerator::new(config(&server)).unwrap();
        let value = generator
            .generate(&instruction(), &lead_result_schema())
            .await
            .unwrap();
        assert_eq!(value["leadId"], "LEAD-1A2B3C4D");
    }

    #[tokio::test]
    async fn tolerates_markdown_fence() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply(
                "```json\n{\"leadId\": \"LEAD-1A2B3C4D\", \"confirmationMessage\": \"Hi\"}\n```",
            ))
            .mount(&server)
            .await;

        let generator = HttpGenerator::new(config(&server)).unwrap();
        let value = generator
            .generate(&instruction(), &lead_result_schema())
            .await
            .unwrap();
        assert_eq!(value["confirmationMessage"], "Hi");
    }

    #[tokio::test]
    async fn server_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(529).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let generator = HttpGenerator::new(config(&server)).unwrap();
        let err = generator
            .generate(&instruction(), &lead_result_schema())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Server { status: 529, ref body } if body == "overloaded"));
    }

    #[tokio::test]
    async fn empty_content_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": []})))
            .mount(&server)
            .await;

        let generator = HttpGenerator::new(config(&server)).unwrap();
        let err = generator
            .generate(&instruction(), &lead_result_schema())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse));
    }

    #[tokio::test]
    async fn prose_reply_is_a_json_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply("Sure! Here is your lead ID: LEAD-1A2B3C4D"))
            .mount(&server)
            .await;

        let generator = HttpGenerator::new(config(&server)).unwrap();
        let err = generator
            .generate(&instruction(), &lead_result_schema())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Json(_)));
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply("{}").set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let mut cfg = config(&server);
        cfg.timeout = Duration::from_millis(50);
        let generator = HttpGenerator::new(cfg).unwrap();
        let err = generator
            .generate(&instruction(), &lead_result_schema())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Timeout));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let generator = HttpGenerator::new(GeneratorConfig {
            base_url: "http://localhost:8080/".into(),
            ..GeneratorConfig::default()
        })
        .unwrap();
        assert_eq!(generator.endpoint(), "http://localhost:8080/v1/messages");
    }

    #[test]
    fn strip_fences_variants() {
        assert_eq!(strip_fences("  {\"a\":1} "), "{\"a\":1}");
        assert_eq!(strip_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }
}
