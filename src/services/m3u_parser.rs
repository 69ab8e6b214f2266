use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

use crate::models::{Channel, DEFAULT_GROUP};

const EXTINF_PREFIX: &str = "#EXTINF:";
const EXTLOGO_PREFIX: &str = "#EXTLOGO:";

lazy_static! {
    /// group-title="..." followed, after the last comma, by the display name
    static ref EXTINF_REGEX: Regex = Regex::new(r#"group-title="([^"]*)".*,(.*)$"#).unwrap();
}

/// Source of channel identifiers
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 identifiers
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Channel being assembled from metadata lines until its URL shows up
#[derive(Debug, Default)]
struct PendingChannel {
    name: Option<String>,
    group: Option<String>,
    logo: Option<String>,
}

impl PendingChannel {
    fn finish(self, id: String, url: &str) -> Channel {
        Channel {
            id,
            name: self.name.unwrap_or_default(),
            logo: self.logo,
            group: self.group.unwrap_or_default(),
            url: url.to_string(),
        }
    }
}

/// Parse an EXTINF line into (group, name)
/// Format: #EXTINF:-1 tvg-id="..." group-title="...",Name
fn parse_extinf(line: &str) -> Option<(String, String)> {
    let caps = EXTINF_REGEX.captures(line)?;

    let group = caps
        .get(1)
        .map(|m| m.as_str())
        .filter(|g| !g.is_empty())
        .unwrap_or(DEFAULT_GROUP)
        .to_string();
    let name = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default().to_string();

    Some((group, name))
}

/// Parse M3U text with freshly generated UUIDs
pub fn parse_m3u(content: &str) -> Vec<Channel> {
    parse_m3u_with_ids(content, &mut UuidIds)
}

/// Parse M3U text into channels, in source order.
///
/// Never fails: lines that do not fit are skipped, and metadata with no
/// following URL line is dropped.
pub fn parse_m3u_with_ids<I: IdSource + ?Sized>(content: &str, ids: &mut I) -> Vec<Channel> {
    let mut channels = Vec::new();
    let mut pending = PendingChannel::default();

    for raw in content.split('\n') {
        let line = raw.trim();

        if line.starts_with(EXTINF_PREFIX) {
            if let Some((group, name)) = parse_extinf(line) {
                pending.group = Some(group);
                pending.name = Some(name);
            }
        } else if let Some(logo) = line.strip_prefix(EXTLOGO_PREFIX) {
            pending.logo = Some(logo.trim().to_string());
        } else if !line.is_empty() && !line.starts_with('#') {
            let finished = std::mem::take(&mut pending);
            channels.push(finished.finish(ids.next_id(), line));
        }
    }

    if pending.name.is_some() || pending.logo.is_some() {
        tracing::debug!("Dropping trailing metadata without a stream URL");
    }

    channels
}
