use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::config::ClientConfig;

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Please enter a comment to analyze")]
    EmptyInput,
    #[error("Sentiment service returned HTTP {0}")]
    Status(StatusCode),
    #[error("Could not reach the sentiment service. Make sure it is running on {endpoint}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// HTTP client for the sentiment service. One request per call, no retry and
/// no timeout beyond the reqwest default; cancellation is not supported.
pub struct SentimentService {
    client: reqwest::Client,
    analyze_url: String,
    base_url: String,
}

impl SentimentService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            analyze_url: config.analyze_url(),
            base_url: config.base_url(),
        }
    }

    /// Send the text for classification and return the label.
    pub async fn analyze(&self, text: &str) -> Result<String, AnalyzeError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AnalyzeError::EmptyInput);
        }

        log::info!("[SENTIMENT] POST {} ({} chars)", self.analyze_url, trimmed.len());
        let response = self
            .client
            .post(&self.analyze_url)
            .json(&AnalyzeRequest { text: trimmed })
            .send()
            .await
            .map_err(|e| AnalyzeError::Transport {
                endpoint: self.base_url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("[SENTIMENT] request failed: HTTP {}", status);
            return Err(AnalyzeError::Status(status));
        }

        let body = response.text().await.map_err(|e| AnalyzeError::Transport {
            endpoint: self.base_url.clone(),
            source: e,
        })?;
        let label = decode_label(&body);
        log::info!("[SENTIMENT] label: {}", label);
        Ok(label)
    }
}

/// The service answers with a JSON-encoded string (`"positive"`). Decode it as
/// such; if the body turns out to be a bare token instead, fall back to
/// stripping literal double quotes.
fn decode_label(body: &str) -> String {
    let trimmed = body.trim();
    match serde_json::from_str::<String>(trimmed) {
        Ok(label) => label,
        Err(_) => trimmed.replace('"', ""),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_label, AnalyzeError, SentimentService};
    use crate::config::ClientConfig;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn service_for_port(port: u16) -> SentimentService {
        SentimentService::new(&ClientConfig {
            service_host: "127.0.0.1".to_string(),
            service_port: port,
        })
    }

    /// Serve exactly one canned HTTP response on an ephemeral port.
    async fn one_shot_responder(status_line: &'static str, body: &'static str) -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
        });
        port
    }

    #[test]
    fn test_decode_label_json_string() {
        assert_eq!(decode_label("\"positive\""), "positive");
        assert_eq!(decode_label("  \"negative\"\n"), "negative");
    }

    #[test]
    fn test_decode_label_bare_token() {
        assert_eq!(decode_label("neutral"), "neutral");
        assert_eq!(decode_label("\"unterminated"), "unterminated");
    }

    #[tokio::test]
    async fn test_analyze_success_strips_quotes() {
        let port = one_shot_responder("HTTP/1.1 200 OK", "\"positive\"").await;
        let service = service_for_port(port);
        let label = service.analyze("I love this new feature!").await.unwrap();
        assert_eq!(label, "positive");
    }

    #[tokio::test]
    async fn test_analyze_non_2xx_is_status_error() {
        let port = one_shot_responder("HTTP/1.1 500 Internal Server Error", "{}").await;
        let service = service_for_port(port);
        let err = service.analyze("this is really frustrating").await.unwrap_err();
        assert!(matches!(err, AnalyzeError::Status(s) if s.as_u16() == 500));
    }

    #[tokio::test]
    async fn test_analyze_connection_refused_mentions_endpoint() {
        // Grab a free port, then drop the listener so nothing answers on it.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let service = service_for_port(port);
        let err = service.analyze("anyone there?").await.unwrap_err();
        assert!(matches!(err, AnalyzeError::Transport { .. }));
        assert!(err.to_string().contains(&format!("http://127.0.0.1:{}", port)));
    }

    #[tokio::test]
    async fn test_analyze_empty_input_never_touches_network() {
        // Unreachable port: a network attempt would surface as Transport.
        let service = service_for_port(1);
        let err = service.analyze("   \n\t ").await.unwrap_err();
        assert!(matches!(err, AnalyzeError::EmptyInput));
    }
}
