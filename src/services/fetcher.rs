use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Failure to obtain playlist text
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid playlist URL: {0}")]
    InvalidUrl(String),
    #[error("unreadable import request: {0}")]
    Request(String),
    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },
    #[error("playlist too large: {size_mb:.1}MB (limit {limit_mb}MB)")]
    TooLarge { size_mb: f64, limit_mb: usize },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

fn bytes_to_mb(len: u64) -> f64 {
    len as f64 / 1024.0 / 1024.0
}

/// Fetches playlist text over HTTP, one attempt per call
pub struct PlaylistFetcher {
    client: Client,
    max_m3u_size_mb: usize,
}

impl PlaylistFetcher {
    pub fn new(user_agent: &str, timeout_ms: u64, max_m3u_size_mb: usize) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_millis(timeout_ms))
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            max_m3u_size_mb,
        })
    }

    fn max_bytes(&self) -> u64 {
        (self.max_m3u_size_mb as u64) * 1024 * 1024
    }

    fn too_large(&self, len: u64) -> SourceError {
        SourceError::TooLarge {
            size_mb: bytes_to_mb(len),
            limit_mb: self.max_m3u_size_mb,
        }
    }

    /// Download the playlist body as text.
    ///
    /// The size limit applies to the declared Content-Length and to the bytes
    /// actually read. Invalid UTF-8 is replaced, not rejected.
    pub async fn fetch(&self, url: &str) -> Result<String, SourceError> {
        let url = validate_url(url)?;

        tracing::info!("Fetching playlist: {}", url);
        let mut resp = self.client.get(url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Error").to_string(),
            });
        }

        let max_bytes = self.max_bytes();
        if let Some(len) = resp.content_length() {
            if len > max_bytes {
                return Err(self.too_large(len));
            }
            tracing::debug!("Playlist size: {:.2} MB", bytes_to_mb(len));
        }

        let mut body = Vec::new();
        while let Some(chunk) = resp.chunk().await? {
            let read = (body.len() + chunk.len()) as u64;
            if read > max_bytes {
                return Err(self.too_large(read));
            }
            body.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Accept only absolute http(s) URLs
pub fn validate_url(raw: &str) -> Result<Url, SourceError> {
    let parsed = Url::parse(raw.trim()).map_err(|e| SourceError::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(SourceError::InvalidUrl(format!("unsupported scheme {}", other))),
    }
}
