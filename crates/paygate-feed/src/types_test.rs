use super::*;

fn parse(body: &str) -> QuoteEnvelope {
    serde_json::from_str(body).expect("test envelope should parse")
}

#[test]
fn trade_side_query_values() {
    assert_eq!(TradeSide::Buy.as_str(), "buy");
    assert_eq!(TradeSide::Sell.as_str(), "sell");
}

#[test]
fn best_price_picks_the_flagged_quote() {
    let envelope = parse(
        r#"{
            "code": 0,
            "data": [
                { "bestOption": false, "payment": "bank", "price": 6.50 },
                { "bestOption": true, "payment": "alipay", "price": 6.45 }
            ]
        }"#,
    );
    assert_eq!(envelope.best_price().unwrap(), "6.45".parse().unwrap());
}

#[test]
fn best_price_rejects_success_without_flagged_quote() {
    let envelope = parse(
        r#"{
            "code": 0,
            "data": [{ "bestOption": false, "payment": "bank", "price": 6.50 }]
        }"#,
    );
    let err = envelope.best_price().unwrap_err();
    assert!(matches!(err, FeedError::MissingBestOption), "got: {err:?}");
}

#[test]
fn best_price_rejects_empty_success() {
    let envelope = parse(r#"{ "code": 0, "data": [] }"#);
    assert!(matches!(
        envelope.best_price().unwrap_err(),
        FeedError::MissingBestOption
    ));
}

#[test]
fn best_price_surfaces_provider_error() {
    let envelope = parse(r#"{ "code": 1, "msg": "rate limited" }"#);
    let err = envelope.best_price().unwrap_err();
    match err {
        FeedError::Provider { code, message } => {
            assert_eq!(code, 1);
            assert_eq!(message, "rate limited");
        }
        other => panic!("expected Provider, got: {other:?}"),
    }
}

#[test]
fn provider_message_falls_back_through_fields() {
    let envelope = parse(r#"{ "code": 2, "error_message": "sanctioned pair" }"#);
    assert_eq!(envelope.provider_message(), "sanctioned pair");

    let envelope = parse(r#"{ "code": 2, "detailMsg": "try again later" }"#);
    assert_eq!(envelope.provider_message(), "try again later");

    let envelope = parse(r#"{ "code": 2, "msg": "", "detailMsg": "detail" }"#);
    assert_eq!(envelope.provider_message(), "detail");

    let envelope = parse(r#"{ "code": 2 }"#);
    assert_eq!(envelope.provider_message(), "no message");
}

#[test]
fn price_parses_from_json_string_too() {
    // Some provider deployments quote prices as strings.
    let envelope = parse(
        r#"{ "code": 0, "data": [{ "bestOption": true, "payment": "", "price": "7.21" }] }"#,
    );
    assert_eq!(envelope.best_price().unwrap(), "7.21".parse().unwrap());
}
