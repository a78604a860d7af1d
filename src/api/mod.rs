pub mod health;
pub mod leaderboard;
pub mod markets;
pub mod rewards;
pub mod staking;

use crate::config::Config;
use crate::domain::TimeMs;
use crate::engine::Clock;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }
}

/// Resolve the instant a request computes against: the caller's pinned
/// `nowMs` when present (reproducible responses), the server clock otherwise.
pub(crate) fn resolve_now(pinned: Option<i64>, clock: &dyn Clock) -> TimeMs {
    pinned.map(TimeMs::new).unwrap_or_else(|| clock.now())
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/markets/phase", post(markets::derive_phases))
        .route("/v1/staking/summary", post(staking::get_summary))
        .route("/v1/staking/transition", post(staking::apply_transition))
        .route("/v1/rewards/summary", post(rewards::get_summary))
        .route("/v1/leaderboard", post(leaderboard::get_leaderboard))
        .layer(cors)
        .with_state(state)
}
