use std::fmt;

use async_trait::async_trait;

use super::types::QuakeIndex;

/// Errors that can occur while fetching the feed.
/// The variant only changes the wording shown on the error line; every
/// variant is recovered by rendering zero rows for the cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedError {
    /// The request did not complete within the client timeout.
    Timeout(String),
    /// The feed answered with a non-success status.
    Http { status: u16, reason: String },
    /// DNS failure, refused connection, reset.
    Connection(String),
    /// Any other request failure (bad URL, redirect loop, body read error).
    Request(String),
    /// The body was not the expected GeoJSON document.
    Decode(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Timeout(msg) => write!(f, "Timeout: {msg}"),
            FeedError::Http { status, reason } => write!(f, "HTTP Error: {status} {reason}"),
            FeedError::Connection(msg) => write!(f, "Connection Error: {msg}"),
            FeedError::Request(msg) => write!(f, "Request Exception: {msg}"),
            FeedError::Decode(msg) => write!(f, "Decode Error: {msg}"),
        }
    }
}

impl std::error::Error for FeedError {}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FeedError::Timeout(e.to_string())
        } else if e.is_connect() {
            FeedError::Connection(e.to_string())
        } else if e.is_decode() {
            FeedError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            FeedError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            }
        } else {
            FeedError::Request(e.to_string())
        }
    }
}

/// Minimum-intensity filter sent with every request.
///
/// `-1` is the upstream sentinel for "all quakes", so `MmiFilter(Some(-1))`
/// and `MmiFilter(None)` are the same filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MmiFilter(pub Option<i8>);

impl MmiFilter {
    pub const SENTINEL: i8 = -1;
    /// Highest intensity on the scale the feed accepts.
    pub const MAX: i8 = 8;

    /// The active threshold, if any.
    pub fn threshold(self) -> Option<i8> {
        self.0.filter(|&mmi| mmi != Self::SENTINEL)
    }

    /// The value encoded into the `MMI` query parameter.
    pub fn query_value(self) -> i8 {
        self.threshold().unwrap_or(Self::SENTINEL)
    }
}

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Returns the name of the feed.
    fn name(&self) -> &str;

    /// Retrieves the latest quakes, keyed by public identifier in feed order.
    async fn fetch(&self, filter: MmiFilter) -> Result<QuakeIndex, FeedError>;
}
