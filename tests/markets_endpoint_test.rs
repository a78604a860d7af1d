use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use strikeboard::api::{self, AppState};
use strikeboard::engine::FixedClock;
use strikeboard::{Amount, Config};
use tower::util::ServiceExt;

fn test_config() -> Config {
    Config {
        port: 0,
        unstake_cooldown_ms: 604_800_000,
        compounding_periods_per_year: 52,
        period_reward_pool: Amount::from_i64(70_000),
        default_page_size: 15,
    }
}

fn test_app(now_ms: i64) -> axum::Router {
    api::create_router(AppState::new(test_config(), Arc::new(FixedClock::at(now_ms))))
}

async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn batch_derives_phases_per_market() {
    let body = json!({
        "markets": [
            { "id": "0xmkt1", "biddingEnd": 1000, "maturity": 2000, "expiry": 3000 },
            { "id": "0xmkt2", "maturity": 2000, "expiry": 3000 },
            { "id": "0xmkt3", "maturity": 1200, "expiry": 3000 },
        ],
        "nowMs": 1500,
    });

    let (status, value) = post_json(test_app(0), "/v1/markets/phase", body).await;
    assert_eq!(status, StatusCode::OK);

    let results = value.as_array().unwrap();
    assert_eq!(results.len(), 3);

    assert_eq!(results[0]["id"], "0xmkt1");
    assert_eq!(results[0]["phase"], "trading");
    assert_eq!(results[0]["timeRemaining"], 500);
    assert_eq!(results[0]["nextTransitionAt"], 2000);

    assert_eq!(results[1]["phase"], "trading");
    assert_eq!(results[2]["phase"], "maturity");
}

#[tokio::test]
async fn malformed_market_gets_item_error_not_batch_failure() {
    let body = json!({
        "markets": [
            { "id": "good", "maturity": 2000, "expiry": 3000 },
            { "id": "bad", "maturity": 3000, "expiry": 2000 },
        ],
        "nowMs": 0,
    });

    let (status, value) = post_json(test_app(0), "/v1/markets/phase", body).await;
    assert_eq!(status, StatusCode::OK);

    let results = value.as_array().unwrap();
    assert_eq!(results[0]["phase"], "trading");
    assert!(results[0].get("error").is_none());

    assert!(results[1].get("phase").is_none());
    let message = results[1]["error"].as_str().unwrap();
    assert!(message.contains("timestamp order"), "got {}", message);
}

#[tokio::test]
async fn server_clock_is_used_when_now_is_not_pinned() {
    // FixedClock stands in for the server clock: 2500 lands in Maturity.
    let body = json!({
        "markets": [{ "maturity": 2000, "expiry": 3000 }],
    });

    let (status, value) = post_json(test_app(2_500), "/v1/markets/phase", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value[0]["phase"], "maturity");
    assert_eq!(value[0]["timeRemaining"], 500);
}

#[tokio::test]
async fn expired_market_is_terminal_on_the_wire() {
    let body = json!({
        "markets": [{ "maturity": 2000, "expiry": 3000 }],
        "nowMs": 9_000,
    });

    let (_, value) = post_json(test_app(0), "/v1/markets/phase", body).await;
    assert_eq!(value[0]["phase"], "expiry");
    assert_eq!(value[0]["timeRemaining"], 0);
    assert!(value[0].get("nextTransitionAt").is_none());
}
