use std::env;

/// Where the client expects to find the sentiment service. Every field has a
/// default so the app runs with no `.env` at all.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub service_host: String,
    pub service_port: u16,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            service_host: env::var("SENTIMENT_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            service_port: env::var("SENTIMENT_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(8000),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.service_host, self.service_port)
    }

    pub fn analyze_url(&self) -> String {
        format!("{}/analyze", self.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::ClientConfig;

    #[test]
    fn test_urls_from_fields() {
        let cfg = ClientConfig {
            service_host: "127.0.0.1".to_string(),
            service_port: 8000,
        };
        assert_eq!(cfg.base_url(), "http://127.0.0.1:8000");
        assert_eq!(cfg.analyze_url(), "http://127.0.0.1:8000/analyze");
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("SENTIMENT_HOST", "10.0.0.5");
        std::env::set_var("SENTIMENT_PORT", "9100");
        let cfg = ClientConfig::from_env();
        assert_eq!(cfg.service_host, "10.0.0.5");
        assert_eq!(cfg.service_port, 9100);
        std::env::remove_var("SENTIMENT_HOST");
        std::env::remove_var("SENTIMENT_PORT");
    }
}
