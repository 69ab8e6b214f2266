use serde::{Deserialize, Serialize};

/// Group assigned when an `#EXTINF` line carries an empty group-title
pub const DEFAULT_GROUP: &str = "Uncategorized";

/// Label used for a fresh editing session
pub const DEFAULT_PLAYLIST_NAME: &str = "My Playlist";

/// Single playlist entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub group: String,
    pub url: String,
}

impl Channel {
    /// Logo only when it is present and non-empty
    pub fn logo_url(&self) -> Option<&str> {
        self.logo.as_deref().filter(|logo| !logo.is_empty())
    }
}

/// Channel as submitted by the edit form.
///
/// An empty `id` marks a channel that has not been saved yet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelDraft {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub url: String,
}

impl ChannelDraft {
    /// Names of required fields that are blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.group.trim().is_empty() {
            missing.push("group");
        }
        if self.url.trim().is_empty() {
            missing.push("url");
        }
        missing
    }

    /// Materialize the draft under the given id.
    /// A blank logo field is dropped.
    pub fn into_channel(self, id: String) -> Channel {
        Channel {
            id,
            name: self.name,
            logo: self.logo.filter(|logo| !logo.trim().is_empty()),
            group: self.group,
            url: self.url,
        }
    }
}

/// Named ordered sequence of channels.
///
/// Edits consume the playlist and hand back the updated one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub name: String,
    pub channels: Vec<Channel>,
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYLIST_NAME)
    }
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            channels: Vec::new(),
        }
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.channels.iter().position(|ch| ch.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Swap the whole channel list, keeping the name
    pub fn with_channels(self, channels: Vec<Channel>) -> Self {
        Self { channels, ..self }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_appended(mut self, channel: Channel) -> Self {
        self.channels.push(channel);
        self
    }

    /// Replace the channel sharing `channel.id`, in place.
    /// Unknown ids leave the playlist untouched.
    pub fn with_replaced(mut self, channel: Channel) -> Self {
        if let Some(slot) = self.channels.iter_mut().find(|ch| ch.id == channel.id) {
            *slot = channel;
        }
        self
    }

    pub fn without(mut self, id: &str) -> Self {
        self.channels.retain(|ch| ch.id != id);
        self
    }
}

/// Playlist summary returned after an import
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub success: bool,
    pub name: String,
    pub total: usize,
    pub channels: Vec<Channel>,
}

/// Request to import a playlist from a URL
#[derive(Debug, Deserialize)]
pub struct ImportUrlRequest {
    pub url: String,
}

/// Request to relabel the playlist
#[derive(Debug, Deserialize)]
pub struct RenameRequest {
    pub name: String,
}

/// Channel list response
#[derive(Debug, Serialize)]
pub struct ChannelsResponse {
    pub channels: Vec<Channel>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(id: &str, name: &str) -> Channel {
        Channel {
            id: id.to_string(),
            name: name.to_string(),
            logo: None,
            group: "News".to_string(),
            url: format!("http://example.com/{}", id),
        }
    }

    fn sample() -> Playlist {
        Playlist::default().with_channels(vec![channel("a", "A"), channel("b", "B"), channel("c", "C")])
    }

    #[test]
    fn test_default_playlist_name() {
        let playlist = Playlist::default();
        assert_eq!(playlist.name, "My Playlist");
        assert!(playlist.channels.is_empty());
    }

    #[test]
    fn test_replace_keeps_order() {
        let playlist = sample().with_replaced(channel("b", "B2"));
        let names: Vec<_> = playlist.channels.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B2", "C"]);
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let before = sample();
        let after = before.clone().with_replaced(channel("zzz", "Z"));
        assert_eq!(before, after);
    }

    #[test]
    fn test_append_and_remove() {
        let playlist = sample().with_appended(channel("d", "D")).without("a");
        let ids: Vec<_> = playlist.channels.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "d"]);
        assert!(!playlist.contains("a"));
        assert_eq!(playlist.position("d"), Some(2));
    }

    #[test]
    fn test_with_channels_keeps_name() {
        let playlist = Playlist::new("Sports").with_channels(vec![channel("x", "X")]);
        assert_eq!(playlist.name, "Sports");
        assert_eq!(playlist.channels.len(), 1);
    }

    #[test]
    fn test_draft_missing_fields() {
        let draft = ChannelDraft {
            name: "CNN".to_string(),
            group: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.missing_fields(), vec!["group", "url"]);
    }

    #[test]
    fn test_draft_drops_blank_logo() {
        let draft = ChannelDraft {
            name: "CNN".to_string(),
            group: "News".to_string(),
            url: "http://example.com/cnn".to_string(),
            logo: Some(" ".to_string()),
            ..Default::default()
        };
        let ch = draft.into_channel("id-1".to_string());
        assert_eq!(ch.id, "id-1");
        assert_eq!(ch.logo, None);
    }

    #[test]
    fn test_channel_json_shape() {
        let json = serde_json::to_value(channel("a", "A")).unwrap();
        assert!(json.get("logo").is_none());
        assert_eq!(json["group"], "News");
    }
}
