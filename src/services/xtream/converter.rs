//! Credential generation and channel conversion

use rand::Rng;

use super::types::{XtreamChannel, XtreamCredentials};
use crate::models::Channel;

/// Length of generated usernames and passwords
pub const CREDENTIAL_LENGTH: usize = 10;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn random_string<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Generate a random username/password pair for `host:port`
pub fn generate_credentials(host: &str, port: u16) -> XtreamCredentials {
    generate_credentials_with(&mut rand::rng(), host, port)
}

fn generate_credentials_with<R: Rng>(rng: &mut R, host: &str, port: u16) -> XtreamCredentials {
    XtreamCredentials {
        host: host.to_string(),
        username: random_string(rng, CREDENTIAL_LENGTH),
        password: random_string(rng, CREDENTIAL_LENGTH),
        port,
    }
}

/// Rewrite channel URLs onto the live layout. Stream ids are 1-based
/// positions in the playlist.
pub fn convert_channels(channels: &[Channel], credentials: &XtreamCredentials) -> Vec<XtreamChannel> {
    channels
        .iter()
        .enumerate()
        .map(|(index, channel)| {
            let stream_id = index + 1;
            XtreamChannel {
                channel: Channel {
                    url: credentials.live_url(stream_id),
                    ..channel.clone()
                },
                stream_id,
            }
        })
        .collect()
}
