use std::env;

use crate::models::DEFAULT_PLAYLIST_NAME;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub app_env: String,

    // Import
    pub fetch_timeout_ms: u64,
    pub max_m3u_size_mb: usize,

    // Xtream credentials
    pub xtream_host: String,
    pub xtream_port: u16,

    // Session
    pub playlist_name: String,

    // Misc
    pub user_agent: String,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            // Server
            port: env_or("PORT", 3001),
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),

            // Import
            fetch_timeout_ms: env_or("FETCH_TIMEOUT_MS", 30_000), // 30 seconds
            max_m3u_size_mb: env_or("MAX_M3U_SIZE_MB", 50),

            // Xtream credentials
            xtream_host: env::var("XTREAM_HOST").unwrap_or_else(|_| "localhost".to_string()),
            xtream_port: env_or("XTREAM_PORT", 8080),

            // Session
            playlist_name: env::var("PLAYLIST_NAME")
                .unwrap_or_else(|_| DEFAULT_PLAYLIST_NAME.to_string()),

            // Misc - Use VLC user agent to avoid IPTV server blocks
            user_agent: env::var("USER_AGENT")
                .unwrap_or_else(|_| "VLC/3.0.20 LibVLC/3.0.20".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back() {
        assert_eq!(env_or("PLAYLIST_EDITOR_TEST_UNSET_KEY", 42u16), 42);
    }

    #[test]
    fn test_env_or_ignores_garbage() {
        env::set_var("PLAYLIST_EDITOR_TEST_BAD_PORT", "not-a-number");
        assert_eq!(env_or("PLAYLIST_EDITOR_TEST_BAD_PORT", 8080u16), 8080);
    }
}
