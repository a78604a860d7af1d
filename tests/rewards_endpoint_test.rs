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

fn test_app() -> axum::Router {
    api::create_router(AppState::new(test_config(), Arc::new(FixedClock::at(0))))
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

fn reward(has_rights: bool, claimed: bool, paused: bool) -> Value {
    json!({
        "index": 12,
        "rawBalance": 150,
        "proof": ["0xaa", "0xbb"],
        "stakingBalance": 100,
        "snxBalance": 50,
        "totalBalance": 150,
        "previousPeriodBalance": 25,
        "hasClaimRights": has_rights,
        "claimed": claimed,
        "isClaimPaused": paused,
    })
}

#[tokio::test]
async fn eligible_reward_is_claimable_with_allocation() {
    let (status, value) = post_json(
        test_app(),
        "/v1/rewards/summary",
        json!({ "reward": reward(true, false, false) }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["claimable"], true);
    assert_eq!(value["status"], "eligible");
    assert_eq!(value["periodIndex"], 12);
    assert_eq!(value["allocation"]["stakingPortion"], 100.0);
    assert_eq!(value["allocation"]["externalTokenPortion"], 50.0);
    assert_eq!(value["allocation"]["total"], 150.0);
    assert_eq!(value["allocation"]["previousPeriodCarryOver"], 25.0);
}

#[tokio::test]
async fn each_gate_disables_the_claim() {
    for (body, expected_status) in [
        (reward(true, true, false), "alreadyClaimed"),
        (reward(true, false, true), "paused"),
        (reward(false, false, false), "noClaimRights"),
    ] {
        let (status, value) =
            post_json(test_app(), "/v1/rewards/summary", json!({ "reward": body })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["claimable"], false);
        assert_eq!(value["status"], expected_status);
    }
}

#[tokio::test]
async fn inconsistent_snapshot_is_a_422() {
    let mut bad = reward(true, false, false);
    bad["totalBalance"] = json!(149);

    let (status, value) =
        post_json(test_app(), "/v1/rewards/summary", json!({ "reward": bad })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(value["error"]
        .as_str()
        .unwrap()
        .contains("inconsistent reward snapshot"));
}

#[tokio::test]
async fn negative_balance_is_a_400() {
    let mut bad = reward(true, false, false);
    bad["snxBalance"] = json!(-1);

    let (status, value) =
        post_json(test_app(), "/v1/rewards/summary", json!({ "reward": bad })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"].as_str().unwrap().contains("snxBalance"));
}
