use std::fmt::Write;

use crate::models::Playlist;

pub const M3U_HEADER: &str = "#EXTM3U";

/// Duration written on every EXTINF line (live / unknown)
const LIVE_DURATION: i32 = -1;

/// Serialize a playlist to M3U text.
///
/// Group and name are written verbatim: a `"` in the group or a `,` in the
/// name will not read back the same way. The playlist name is not written.
pub fn write_m3u(playlist: &Playlist) -> String {
    let mut content = String::with_capacity(16 + playlist.channels.len() * 128);
    content.push_str(M3U_HEADER);
    content.push('\n');

    for channel in &playlist.channels {
        // Writing into a String cannot fail
        let _ = writeln!(
            content,
            "#EXTINF:{} group-title=\"{}\",{}",
            LIVE_DURATION, channel.group, channel.name
        );
        if let Some(logo) = channel.logo_url() {
            let _ = writeln!(content, "#EXTLOGO:{}", logo);
        }
        content.push_str(&channel.url);
        content.push('\n');
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Channel;
    use crate::services::m3u_parser::parse_m3u;

    fn channel(name: &str, group: &str, logo: Option<&str>, url: &str) -> Channel {
        Channel {
            id: format!("id-{}", name),
            name: name.to_string(),
            logo: logo.map(str::to_string),
            group: group.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_empty_playlist() {
        assert_eq!(write_m3u(&Playlist::default()), "#EXTM3U\n");
    }

    #[test]
    fn test_write_channels() {
        let playlist = Playlist::new("Ignored").with_channels(vec![
            channel("CNN HD", "News", Some("http://img/cnn.png"), "http://example.com/cnn"),
            channel("Local", "Uncategorized", None, "http://example.com/local"),
            channel("Blank Logo", "Misc", Some(""), "http://example.com/blank"),
        ]);

        let expected = "#EXTM3U\n\
            #EXTINF:-1 group-title=\"News\",CNN HD\n\
            #EXTLOGO:http://img/cnn.png\n\
            http://example.com/cnn\n\
            #EXTINF:-1 group-title=\"Uncategorized\",Local\n\
            http://example.com/local\n\
            #EXTINF:-1 group-title=\"Misc\",Blank Logo\n\
            http://example.com/blank\n";
        assert_eq!(write_m3u(&playlist), expected);
    }

    #[test]
    fn test_playlist_name_not_written() {
        let text = write_m3u(&Playlist::new("Secret Name"));
        assert!(!text.contains("Secret Name"));
    }

    #[test]
    fn test_round_trip_plain_fields() {
        let playlist = Playlist::default().with_channels(vec![
            channel("CNN HD", "News", Some("http://img/cnn.png"), "http://example.com/cnn"),
            channel("Sport 1", "Sports", None, "http://example.com/sport1?token=abc"),
        ]);

        let parsed = parse_m3u(&write_m3u(&playlist));

        assert_eq!(parsed.len(), playlist.channels.len());
        for (original, reread) in playlist.channels.iter().zip(&parsed) {
            assert_eq!(reread.name, original.name);
            assert_eq!(reread.group, original.group);
            assert_eq!(reread.logo, original.logo);
            assert_eq!(reread.url, original.url);
            assert_ne!(reread.id, original.id);
        }
    }

    #[test]
    fn test_comma_in_name_is_not_preserved() {
        let playlist = Playlist::default().with_channels(vec![channel(
            "Heat, 1995",
            "Movies",
            None,
            "http://example.com/heat",
        )]);

        let parsed = parse_m3u(&write_m3u(&playlist));
        assert_eq!(parsed[0].name, "1995");
    }
}
