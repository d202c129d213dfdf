use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("provider rejected the quote request (code {code}): {message}")]
    Provider { code: i32, message: String },

    #[error("provider reported success but flagged no best-option quote")]
    MissingBestOption,

    #[error("invalid proxy URL \"{proxy}\": {reason}")]
    InvalidProxy { proxy: String, reason: String },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
