use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::FeedError;

/// Which side of the OTC book to quote. The rate-sync job always asks for
/// `Buy`; `Sell` exists because the provider accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        }
    }
}

/// One payment-channel-specific quote inside a provider response.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteOption {
    #[serde(rename = "bestOption")]
    pub best_option: bool,
    #[serde(default)]
    pub payment: String,
    pub price: Decimal,
}

/// The provider's response envelope.
///
/// `code == 0` is provider-defined success; any other value is a provider
/// error whose cause is spread across `msg` / `error_message` / `detail_msg`
/// depending on the failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteEnvelope {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub data: Vec<QuoteOption>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default, rename = "detailMsg")]
    pub detail_msg: Option<String>,
}

impl QuoteEnvelope {
    /// The price of the provider-flagged best-option quote.
    ///
    /// # Errors
    ///
    /// - [`FeedError::Provider`] if the envelope carries a non-zero `code`.
    /// - [`FeedError::MissingBestOption`] if the envelope reports success but
    ///   flags no entry — the caller never guesses which quote to use.
    pub fn best_price(&self) -> Result<Decimal, FeedError> {
        if self.code != 0 {
            return Err(FeedError::Provider {
                code: self.code,
                message: self.provider_message(),
            });
        }
        self.data
            .iter()
            .find(|quote| quote.best_option)
            .map(|quote| quote.price)
            .ok_or(FeedError::MissingBestOption)
    }

    /// Human-readable failure reason: first non-empty of `msg`,
    /// `error_message`, `detail_msg`.
    #[must_use]
    pub fn provider_message(&self) -> String {
        [&self.msg, &self.error_message, &self.detail_msg]
            .into_iter()
            .flatten()
            .find(|m| !m.is_empty())
            .cloned()
            .unwrap_or_else(|| "no message".to_string())
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
