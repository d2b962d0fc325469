//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod feed_server;

use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use tempfile::TempDir;
use trendseed::api::{ApiError, FeedSource};
use trendseed::config::ApiConfig;
use trendseed::model::FeedItem;
use tracing_subscriber::fmt::MakeWriter;

pub fn item(id: u64) -> FeedItem {
    FeedItem {
        id,
        name: format!("Seed {}", id),
        image_url: format!("https://img.example/{}.jpg", id),
        like_count: id * 10,
        comment_count: id,
        saved: false,
    }
}

pub fn items(ids: &[u64]) -> Vec<FeedItem> {
    ids.iter().copied().map(item).collect()
}

pub fn timeout_error() -> ApiError {
    ApiError::Timeout {
        url: "https://api.example/trend-seeds".to_string(),
        seconds: 30,
    }
}

/// Feed source that replays queued results in order.
///
/// Once the queue is empty every call returns an empty feed.
#[derive(Default)]
pub struct ScriptedSource {
    results: Mutex<VecDeque<Result<Vec<FeedItem>, ApiError>>>,
    calls: Mutex<usize>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_ok(self, items: Vec<FeedItem>) -> Self {
        self.results.lock().push_back(Ok(items));
        self
    }

    pub fn then_err(self, err: ApiError) -> Self {
        self.results.lock().push_back(Err(err));
        self
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

impl FeedSource for ScriptedSource {
    async fn fetch_feed(&self) -> Result<Vec<FeedItem>, ApiError> {
        *self.calls.lock() += 1;
        let next = self.results.lock().pop_front();
        next.unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// API config pointed at `base_url` with a short timeout.
pub fn api_config(base_url: &str, timeout_seconds: u32) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        feed_path: "/trend-seeds".to_string(),
        timeout_seconds,
        connect_timeout_seconds: 1,
    }
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Log sink that keeps everything written to it.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Route this thread's tracing output into a fresh `LogCapture`.
pub fn capture_logs() -> (LogCapture, tracing::subscriber::DefaultGuard) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (capture, guard)
}
