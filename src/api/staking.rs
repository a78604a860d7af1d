use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::{resolve_now, AppState};
use crate::domain::{Amount, StakingPoolTotals, StakingPosition, StakingState, TimeMs};
use crate::engine::{
    apr_to_apy, classify_state, estimated_reward, finalize_unstake, period_apr, stake,
    staked_share, start_unstake,
};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingSummaryRequest {
    pub now_ms: Option<i64>,
    pub position: StakingPosition,
    pub totals: StakingPoolTotals,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingSummaryResponse {
    pub state: StakingState,
    /// Milliseconds until the pending unstake becomes withdrawable; absent
    /// unless a cooldown is running.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown_remaining_ms: Option<i64>,
    pub my_staked_share: Amount,
    pub estimated_period_reward: Amount,
    pub apr: f64,
    pub apy: f64,
    pub total_balance: Amount,
    pub effective_total_staked: Amount,
}

fn validate_non_negative(label: &str, amount: Amount) -> Result<(), AppError> {
    if amount.is_negative() {
        return Err(AppError::BadRequest(format!(
            "{} must be non-negative, got {}",
            label, amount
        )));
    }
    Ok(())
}

fn validate_position(position: &StakingPosition) -> Result<(), AppError> {
    validate_non_negative("stakedAmount", position.staked_amount)?;
    validate_non_negative("escrowedAmount", position.escrowed_amount)
}

fn validate_totals(totals: &StakingPoolTotals) -> Result<(), AppError> {
    validate_non_negative("totalStaked", totals.total_staked)?;
    validate_non_negative("totalEscrowed", totals.total_escrowed)?;
    validate_non_negative("totalEscrowExcluded", totals.total_escrow_excluded)
}

/// Everything a staking widget shows, derived in one shot from the position
/// and pool snapshot the caller already holds.
pub async fn get_summary(
    State(state): State<AppState>,
    Json(request): Json<StakingSummaryRequest>,
) -> Result<Json<StakingSummaryResponse>, AppError> {
    validate_position(&request.position)?;
    validate_totals(&request.totals)?;

    let now = resolve_now(request.now_ms, state.clock.as_ref());
    let staking_state = classify_state(&request.position, now);

    let cooldown_remaining_ms = match staking_state {
        StakingState::Cooldown => request
            .position
            .unstake_cooldown_end
            .map(|end| now.millis_until(end)),
        _ => None,
    };

    let periods = state.config.compounding_periods_per_year;
    let share = staked_share(request.position.staked_amount, &request.totals);
    let apr = period_apr(state.config.period_reward_pool, &request.totals, periods);
    let apy = apr_to_apy(apr, periods)?;

    Ok(Json(StakingSummaryResponse {
        state: staking_state,
        cooldown_remaining_ms,
        my_staked_share: share,
        estimated_period_reward: estimated_reward(share, state.config.period_reward_pool),
        apr,
        apy,
        total_balance: request.position.total_balance(),
        effective_total_staked: request.totals.effective_total(),
    }))
}

/// The three externally-confirmed staking operations, modeled over the
/// submitted position. The service computes the would-be resulting position;
/// the actual transfer is the caller's transaction to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StakingAction {
    Stake,
    StartUnstake,
    Unstake,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRequest {
    pub now_ms: Option<i64>,
    pub action: StakingAction,
    /// Required for `stake`; ignored otherwise.
    pub amount: Option<Amount>,
    pub position: StakingPosition,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionResponse {
    pub position: StakingPosition,
    pub state: StakingState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unstake_cooldown_end: Option<TimeMs>,
}

pub async fn apply_transition(
    State(state): State<AppState>,
    Json(request): Json<TransitionRequest>,
) -> Result<Json<TransitionResponse>, AppError> {
    validate_position(&request.position)?;

    let now = resolve_now(request.now_ms, state.clock.as_ref());

    let position = match request.action {
        StakingAction::Stake => {
            let amount = request.amount.ok_or_else(|| {
                AppError::BadRequest("amount is required for stake".to_string())
            })?;
            stake(&request.position, amount, now)?
        }
        StakingAction::StartUnstake => {
            start_unstake(&request.position, now, state.config.unstake_cooldown_ms)?
        }
        StakingAction::Unstake => finalize_unstake(&request.position, now)?,
    };

    Ok(Json(TransitionResponse {
        state: classify_state(&position, now),
        unstake_cooldown_end: position.unstake_cooldown_end,
        position,
    }))
}
