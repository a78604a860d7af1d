use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::{resolve_now, AppState};
use crate::domain::MarketTimestamps;
use crate::engine::{derive_phase, PhaseView};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseBatchRequest {
    /// Pinned evaluation instant; omitted means the server clock.
    pub now_ms: Option<i64>,
    pub markets: Vec<MarketSnapshot>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    /// Caller-side correlation key (market address), echoed back untouched.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub timestamps: MarketTimestamps,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPhaseResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub view: Option<PhaseView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Batch phase derivation. Malformed markets get a per-item error so one bad
/// snapshot does not blank the whole market list.
pub async fn derive_phases(
    State(state): State<AppState>,
    Json(request): Json<PhaseBatchRequest>,
) -> Result<Json<Vec<MarketPhaseResult>>, AppError> {
    let now = resolve_now(request.now_ms, state.clock.as_ref());

    let results = request
        .markets
        .into_iter()
        .map(|snapshot| match derive_phase(now, &snapshot.timestamps) {
            Ok(view) => MarketPhaseResult {
                id: snapshot.id,
                view: Some(view),
                error: None,
            },
            Err(e) => {
                tracing::warn!(market = ?snapshot.id, error = %e, "rejected market snapshot");
                MarketPhaseResult {
                    id: snapshot.id,
                    view: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();

    Ok(Json(results))
}
