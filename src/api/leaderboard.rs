use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;

use crate::api::AppState;
use crate::domain::{SortDirection, SortKey, TraderStat};
use crate::engine::{build_leaderboard, Leaderboard};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardQuery {
    pub sort_by: Option<String>,
    pub direction: Option<String>,
    pub search: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRequest {
    pub stats: Vec<TraderStat>,
    /// Resolved display names, keyed by wallet address (any casing).
    #[serde(default)]
    pub display_names: HashMap<String, String>,
}

/// Rank, filter, and paginate the submitted trader stats.
///
/// Defaults mirror the leaderboard table: volume, descending, first page,
/// fifteen rows. Ranks always reflect full-population standing; the search
/// filter and pagination are applied afterwards.
pub async fn get_leaderboard(
    Query(params): Query<LeaderboardQuery>,
    State(state): State<AppState>,
    Json(request): Json<LeaderboardRequest>,
) -> Result<Json<Leaderboard>, AppError> {
    let sort_key = match params.sort_by.as_deref() {
        None => SortKey::Volume,
        Some(raw) => SortKey::from_str(raw).map_err(|_| {
            AppError::BadRequest(
                "sortBy must be one of: trades, volume, netProfit, investment, gain".to_string(),
            )
        })?,
    };

    let direction = match params.direction.as_deref() {
        None => SortDirection::Descending,
        Some(raw) => SortDirection::from_str(raw).map_err(|_| {
            AppError::BadRequest("direction must be asc or desc".to_string())
        })?,
    };

    let page_size = params.page_size.unwrap_or(state.config.default_page_size);
    if page_size == 0 {
        return Err(AppError::BadRequest("pageSize must be positive".to_string()));
    }
    let page = params.page.unwrap_or(0);

    for stat in &request.stats {
        if stat.trades < 0 {
            return Err(AppError::BadRequest(format!(
                "trades must be non-negative for {}",
                stat.wallet_address
            )));
        }
        if stat.volume.is_negative() || stat.investment.is_negative() {
            return Err(AppError::BadRequest(format!(
                "volume and investment must be non-negative for {}",
                stat.wallet_address
            )));
        }
    }

    // Re-key the display names by normalized address so lookups and search
    // are casing-independent.
    let display_names: HashMap<String, String> = request
        .display_names
        .into_iter()
        .map(|(addr, name)| (addr.trim().to_ascii_lowercase(), name))
        .collect();

    let board = build_leaderboard(
        &request.stats,
        sort_key,
        direction,
        params.search.as_deref().unwrap_or(""),
        &display_names,
        page,
        page_size,
    );

    Ok(Json(board))
}
