use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // API key for the Gemini generateContent endpoint
    pub gemini_api_key: String,

    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    // Overridable so tests and proxies can point the client elsewhere
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,

    // Upper bound on a single inference call, in seconds
    #[serde(default = "default_inference_timeout_secs")]
    pub inference_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            gemini_api_key: String::new(), // Must be provided via environment
            gemini_model: default_gemini_model(),
            gemini_base_url: default_gemini_base_url(),
            inference_timeout_secs: default_inference_timeout_secs(),
        }
    }
}

fn default_port() -> u16 {
    10000
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_inference_timeout_secs() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_applied() {
        let config: Config = envy::from_iter(vars(&[("GEMINI_API_KEY", "secret")])).unwrap();

        assert_eq!(config.port, 10000);
        assert_eq!(config.gemini_api_key, "secret");
        assert_eq!(config.gemini_model, "gemini-2.5-flash");
        assert_eq!(
            config.gemini_base_url,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(config.inference_timeout_secs, 60);
    }

    #[test]
    fn test_port_override() {
        let config: Config = envy::from_iter(vars(&[
            ("GEMINI_API_KEY", "secret"),
            ("PORT", "8080"),
            ("GEMINI_MODEL", "gemini-2.5-pro"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.gemini_model, "gemini-2.5-pro");
    }

    #[test]
    fn test_api_key_required() {
        let result: Result<Config, _> = envy::from_iter(vars(&[("PORT", "8080")]));
        assert!(result.is_err());
    }
}
