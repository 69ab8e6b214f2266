use lazy_static::lazy_static;
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

lazy_static! {
    /// Playlist imports by source ("url" / "file") and outcome ("ok" / "error")
    pub static ref IMPORTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "playlist_imports_total",
        "Playlist import attempts",
        &["source", "outcome"]
    )
    .unwrap();

    pub static ref CHANNELS_PARSED_TOTAL: IntCounter = register_int_counter!(
        "playlist_channels_parsed_total",
        "Channels produced by the M3U parser"
    )
    .unwrap();

    pub static ref EXPORTS_TOTAL: IntCounter =
        register_int_counter!("playlist_exports_total", "M3U exports served").unwrap();
}

pub fn record_import(source: &str, ok: bool, channels: usize) {
    let outcome = if ok { "ok" } else { "error" };
    IMPORTS_TOTAL.with_label_values(&[source, outcome]).inc();
    CHANNELS_PARSED_TOTAL.inc_by(channels as u64);
}
