use std::time::Duration;

use paygate_core::FiatCurrency;
use reqwest::{Client, Url};

use crate::error::FeedError;
use crate::types::{QuoteEnvelope, TradeSide};

const DEFAULT_BASE_URL: &str = "https://www.okx.com";
const QUOTE_PATH: &str = "v3/c2c/otc-ticker/quotedPrice";

// The provider rejects obviously non-browser clients; keep a browser-like UA.
const USER_AGENT: &str = "Paygate/1.0 Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/104.0.0.0 Safari/537.36";

/// Fixed per-request timeout. A constant of the job, not configuration.
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// Client for the provider's OTC quoted-price endpoint.
///
/// Built once at startup and shared across sync cycles so connections are
/// reused. Use [`QuoteClient::new`] for production or
/// [`QuoteClient::with_base_url`] to point at a mock server in tests.
pub struct QuoteClient {
    client: Client,
    quote_url: Url,
}

impl QuoteClient {
    /// Creates a client pointed at the production provider, optionally
    /// routing all requests through `web_proxy`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidProxy`] if the proxy URL is not usable, or
    /// [`FeedError::Transport`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(web_proxy: Option<&str>) -> Result<Self, FeedError> {
        Self::with_base_url(web_proxy, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// As [`QuoteClient::new`], plus [`FeedError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(web_proxy: Option<&str>, base_url: &str) -> Result<Self, FeedError> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT);

        if let Some(proxy) = web_proxy {
            let proxy = reqwest::Proxy::all(proxy).map_err(|e| FeedError::InvalidProxy {
                proxy: proxy.to_owned(),
                reason: e.to_string(),
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        // Normalise: ensure the base URL ends with exactly one slash so the
        // join writes the endpoint path under the root rather than replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let quote_url = Url::parse(&normalised)
            .and_then(|base| base.join(QUOTE_PATH))
            .map_err(|e| FeedError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, quote_url })
    }

    /// Fetches one quote envelope for the given (side, fiat, asset) triple.
    ///
    /// A parsed envelope with a non-zero `code` is `Ok` — provider-level
    /// failure is data the caller inspects via [`QuoteEnvelope::best_price`].
    ///
    /// # Errors
    ///
    /// - [`FeedError::Transport`] on network failure, timeout, or a non-2xx
    ///   HTTP status.
    /// - [`FeedError::Decode`] if the body is not a valid envelope.
    pub async fn quoted_price(
        &self,
        side: TradeSide,
        asset_ticker: &str,
        fiat: FiatCurrency,
    ) -> Result<QuoteEnvelope, FeedError> {
        let response = self
            .client
            .get(self.quote_url.clone())
            .query(&[
                ("side", side.as_str()),
                ("quoteCurrency", fiat.as_str()),
                ("baseCurrency", asset_ticker),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        serde_json::from_str::<QuoteEnvelope>(&body).map_err(|e| FeedError::Decode {
            context: format!("quoted price for {asset_ticker}/{fiat}"),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
