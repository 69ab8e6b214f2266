//! Xtream-style credentials
//!
//! The editor hands out a random username/password pair whenever a playlist
//! is loaded and can re-address the channels under the Xtream live layout:
//! ```text
//! http://host:port/live/<username>/<password>/<stream_id>
//! ```
//! No Xtream server is contacted; the records are kept in memory only.

pub mod converter;
pub mod types;

// Re-exports for convenience
pub use converter::{convert_channels, generate_credentials};
pub use types::{XtreamChannel, XtreamChannelsResponse, XtreamCredentials};
