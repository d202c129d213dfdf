use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Crypto assets whose fiat price the rate-sync job maintains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    UsdtTrc20,
    Trx,
}

impl Asset {
    /// Every tracked asset, in persistence order.
    pub const ALL: [Asset; 2] = [Asset::UsdtTrc20, Asset::Trx];

    /// Ticker symbol the OTC provider expects as `baseCurrency`.
    ///
    /// The provider quotes USDT without caring which network it settles on,
    /// so both USDT variants would map to the same ticker.
    #[must_use]
    pub fn ticker(self) -> &'static str {
        match self {
            Asset::UsdtTrc20 => "USDT",
            Asset::Trx => "TRX",
        }
    }

    /// Key segment used in the rate store; keeps the network variant.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Asset::UsdtTrc20 => "USDT_TRC20",
            Asset::Trx => "TRX",
        }
    }
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fiat currencies rates are denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiatCurrency {
    Cny,
}

impl FiatCurrency {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FiatCurrency::Cny => "CNY",
        }
    }
}

impl std::fmt::Display for FiatCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the rate table: the price of one unit of `asset` in `fiat`.
///
/// A row exists only after at least one successful fetch, and is overwritten
/// (not versioned) by each later one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRate {
    pub asset: Asset,
    pub fiat: FiatCurrency,
    pub rate: Decimal,
    pub last_update_time: DateTime<Utc>,
}

/// Operator-pinned rates, snapshotted once at the start of each sync cycle.
///
/// Values are stored as configured; the `> 0` rule is applied by
/// [`RateOverrides::pinned`] so that a zero or negative override reads the
/// same as an absent one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateOverrides {
    pub usdt: Option<Decimal>,
    pub trx: Option<Decimal>,
}

impl RateOverrides {
    /// The pinned rate for `asset`, if the operator supplied a positive one.
    #[must_use]
    pub fn pinned(&self, asset: Asset) -> Option<Decimal> {
        let raw = match asset {
            Asset::UsdtTrc20 => self.usdt,
            Asset::Trx => self.trx,
        };
        raw.filter(|rate| *rate > Decimal::ZERO)
    }

    /// True when every tracked asset is pinned, in which case the sync cycle
    /// has nothing to fetch and is skipped outright.
    #[must_use]
    pub fn all_pinned(&self) -> bool {
        Asset::ALL.iter().all(|asset| self.pinned(*asset).is_some())
    }
}

#[cfg(test)]
#[path = "rates_test.rs"]
mod tests;
