use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::domain::{ClaimStatus, EscrowReward, WeightedAllocation};
use crate::engine::{claim_eligibility, claim_status, weighted_allocation};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardSummaryRequest {
    pub reward: EscrowReward,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardSummaryResponse {
    /// Exactly `hasClaimRights && !claimed && !isClaimPaused`; this flag alone
    /// gates the claim button.
    pub claimable: bool,
    pub status: ClaimStatus,
    pub allocation: WeightedAllocation,
    pub period_index: u64,
}

/// Claim eligibility plus the period's allocation breakdown. An inconsistent
/// snapshot (portions not summing to the total) is a 422, never re-summed.
pub async fn get_summary(
    State(_state): State<AppState>,
    Json(request): Json<RewardSummaryRequest>,
) -> Result<Json<RewardSummaryResponse>, AppError> {
    let reward = &request.reward;

    for (label, amount) in [
        ("rawBalance", reward.raw_balance),
        ("stakingBalance", reward.staking_balance),
        ("snxBalance", reward.snx_balance),
        ("totalBalance", reward.total_balance),
        ("previousPeriodBalance", reward.previous_period_balance),
    ] {
        if amount.is_negative() {
            return Err(AppError::BadRequest(format!(
                "{} must be non-negative, got {}",
                label, amount
            )));
        }
    }

    let allocation = weighted_allocation(reward).map_err(|e| {
        tracing::warn!(period = reward.index, error = %e, "inconsistent reward snapshot");
        AppError::from(e)
    })?;

    Ok(Json(RewardSummaryResponse {
        claimable: claim_eligibility(reward),
        status: claim_status(reward),
        allocation,
        period_index: reward.index,
    }))
}
