//! Xtream-style types
//!
//! Only the shape of the credentials and of the converted channel list is
//! modeled; nothing here talks to an Xtream server.

use serde::{Deserialize, Serialize};

use crate::models::Channel;

/// Credentials handed out for the current playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XtreamCredentials {
    /// Host name clients connect to (no scheme)
    pub host: String,
    pub username: String,
    pub password: String,
    pub port: u16,
}

impl XtreamCredentials {
    /// Base of every live stream URL
    pub fn live_base_url(&self) -> String {
        format!(
            "http://{}:{}/live/{}/{}",
            self.host, self.port, self.username, self.password
        )
    }

    /// Build playback URL for a live stream
    pub fn live_url(&self, stream_id: usize) -> String {
        format!("{}/{}", self.live_base_url(), stream_id)
    }
}

/// Channel re-addressed under the Xtream live layout
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XtreamChannel {
    #[serde(flatten)]
    pub channel: Channel,
    pub stream_id: usize,
}

/// Converted channel list response
#[derive(Debug, Serialize)]
pub struct XtreamChannelsResponse {
    pub credentials: XtreamCredentials,
    pub channels: Vec<XtreamChannel>,
    pub total: usize,
}
