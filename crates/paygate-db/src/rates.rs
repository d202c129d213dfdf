//! Read/write operations for the `token_rates` table.

use chrono::{DateTime, Utc};
use paygate_core::{Asset, FiatCurrency, TokenRate};
use rust_decimal::Decimal;
use sqlx::PgPool;

/// One stored rate, as read back from the table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct TokenRateRow {
    pub asset: String,
    pub fiat_currency: String,
    pub rate: Decimal,
    pub last_update_time: DateTime<Utc>,
}

/// Insert the rate, or overwrite `rate` and `last_update_time` if the
/// `(asset, fiat_currency)` key already exists.
///
/// Idempotent: applying the same value twice leaves the same stored state.
/// Concurrent writers to the same key resolve last-writer-wins.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn upsert_token_rate(pool: &PgPool, rate: &TokenRate) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO token_rates (asset, fiat_currency, rate, last_update_time) \
         VALUES ($1, $2, $3, $4) \
         ON CONFLICT (asset, fiat_currency) DO UPDATE SET \
             rate             = EXCLUDED.rate, \
             last_update_time = EXCLUDED.last_update_time",
    )
    .bind(rate.asset.as_str())
    .bind(rate.fiat.as_str())
    .bind(rate.rate)
    .bind(rate.last_update_time)
    .execute(pool)
    .await?;
    Ok(())
}

/// Fetch the stored rate for a pair, if one has ever been synced.
///
/// The sync job itself never reads; this is for the order-pricing
/// collaborators that consume the table.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn get_token_rate(
    pool: &PgPool,
    asset: Asset,
    fiat: FiatCurrency,
) -> Result<Option<TokenRateRow>, sqlx::Error> {
    sqlx::query_as::<_, TokenRateRow>(
        "SELECT asset, fiat_currency, rate, last_update_time \
         FROM token_rates WHERE asset = $1 AND fiat_currency = $2",
    )
    .bind(asset.as_str())
    .bind(fiat.as_str())
    .fetch_optional(pool)
    .await
}
