use std::time::Duration;

/// Connection and sampling settings for a hosted generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Base URL without trailing slash, e.g. `https://api.anthropic.com`.
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Upper bound on one generation request, enforced by the HTTP client.
    pub timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.anthropic.com".to_string(),
            api_key: None,
            model: "claude-sonnet-4-5-20250929".to_string(),
            max_tokens: 1024,
            temperature: 0.0,
            timeout: Duration::from_secs(30),
        }
    }
}

impl GeneratorConfig {
    /// True if there is enough configuration to call a hosted generator.
    pub fn is_usable(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}
