//! HTTP client for the OTC price feed.
//!
//! Wraps `reqwest` with the fixed request timeout, user agent, and optional
//! outbound proxy the rate-sync job needs, and deserializes the provider's
//! JSON quote envelope. A provider-level failure (`code != 0`) is a normal
//! parsed envelope, not a client error; callers surface it through
//! [`QuoteEnvelope::best_price`].

mod client;
mod error;
mod types;

pub use client::{QuoteClient, REQUEST_TIMEOUT_SECS};
pub use error::FeedError;
pub use types::{QuoteEnvelope, QuoteOption, TradeSide};
