//! Live integration tests for paygate-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. The `migrations` path is relative to the crate root
//! (`crates/paygate-db/`), so `"../../migrations"` resolves to the workspace
//! migration directory.

use chrono::{Duration, Utc};
use paygate_core::{Asset, FiatCurrency, TokenRate};
use paygate_db::{get_token_rate, upsert_token_rate};
use rust_decimal::Decimal;

fn rate(asset: Asset, value: &str) -> TokenRate {
    TokenRate {
        asset,
        fiat: FiatCurrency::Cny,
        rate: value.parse().expect("test decimal should parse"),
        last_update_time: Utc::now(),
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn upsert_inserts_on_first_write(pool: sqlx::PgPool) {
    upsert_token_rate(&pool, &rate(Asset::UsdtTrc20, "6.45"))
        .await
        .expect("upsert should succeed");

    let row = get_token_rate(&pool, Asset::UsdtTrc20, FiatCurrency::Cny)
        .await
        .expect("read should succeed")
        .expect("row should exist after upsert");

    assert_eq!(row.asset, "USDT_TRC20");
    assert_eq!(row.fiat_currency, "CNY");
    assert_eq!(row.rate, "6.45".parse::<Decimal>().unwrap());
}

#[sqlx::test(migrations = "../../migrations")]
async fn upsert_overwrites_existing_key(pool: sqlx::PgPool) {
    upsert_token_rate(&pool, &rate(Asset::Trx, "0.80"))
        .await
        .expect("first upsert should succeed");
    upsert_token_rate(&pool, &rate(Asset::Trx, "0.85"))
        .await
        .expect("second upsert should succeed");

    let row = get_token_rate(&pool, Asset::Trx, FiatCurrency::Cny)
        .await
        .unwrap()
        .expect("row should exist");
    assert_eq!(row.rate, "0.85".parse::<Decimal>().unwrap());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM token_rates")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1, "overwrite must not create a second row");
}

#[sqlx::test(migrations = "../../migrations")]
async fn upsert_is_idempotent_for_same_value(pool: sqlx::PgPool) {
    let mut first = rate(Asset::UsdtTrc20, "6.45");
    upsert_token_rate(&pool, &first).await.unwrap();

    // Same value again, later timestamp: the stored state differs only in
    // last_update_time.
    first.last_update_time += Duration::seconds(5);
    upsert_token_rate(&pool, &first).await.unwrap();

    let row = get_token_rate(&pool, Asset::UsdtTrc20, FiatCurrency::Cny)
        .await
        .unwrap()
        .expect("row should exist");
    assert_eq!(row.rate, "6.45".parse::<Decimal>().unwrap());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM token_rates")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn upserting_one_asset_leaves_the_other_untouched(pool: sqlx::PgPool) {
    upsert_token_rate(&pool, &rate(Asset::UsdtTrc20, "6.45"))
        .await
        .unwrap();
    upsert_token_rate(&pool, &rate(Asset::Trx, "0.85")).await.unwrap();

    // A later cycle where only TRX succeeds.
    upsert_token_rate(&pool, &rate(Asset::Trx, "0.90")).await.unwrap();

    let usdt = get_token_rate(&pool, Asset::UsdtTrc20, FiatCurrency::Cny)
        .await
        .unwrap()
        .expect("USDT row should remain");
    assert_eq!(usdt.rate, "6.45".parse::<Decimal>().unwrap());

    let trx = get_token_rate(&pool, Asset::Trx, FiatCurrency::Cny)
        .await
        .unwrap()
        .expect("TRX row should exist");
    assert_eq!(trx.rate, "0.90".parse::<Decimal>().unwrap());
}

#[sqlx::test(migrations = "../../migrations")]
async fn missing_pair_reads_as_none(pool: sqlx::PgPool) {
    let row = get_token_rate(&pool, Asset::Trx, FiatCurrency::Cny)
        .await
        .expect("read should succeed");
    assert!(row.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn non_positive_rate_is_rejected_by_the_schema(pool: sqlx::PgPool) {
    let result = upsert_token_rate(&pool, &rate(Asset::UsdtTrc20, "0")).await;
    assert!(result.is_err(), "rate > 0 is a table invariant");
}
