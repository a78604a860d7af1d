//! Reward accounting: rate conversion, proportional shares, escrow claims.

use rust_decimal::Decimal as RustDecimal;

use super::EngineError;
use crate::domain::{Amount, ClaimStatus, EscrowReward, StakingPoolTotals, WeightedAllocation};

/// Largest portion-sum drift (1e-9) accepted before a snapshot is declared
/// inconsistent. Upstream snapshots travel through float-serialized JSON, so
/// exact equality would reject honest payloads.
fn allocation_tolerance() -> Amount {
    Amount::new(RustDecimal::new(1, 9))
}

/// Convert a simple annual rate to its compounded yield:
/// `((1 + apr/100/n)^n - 1) * 100`.
///
/// Negative APR is legal input (net negative yield compounds too).
pub fn apr_to_apy(apr_percent: f64, periods_per_year: u32) -> Result<f64, EngineError> {
    if periods_per_year == 0 {
        return Err(EngineError::InvalidCompoundingPeriods(0));
    }
    let n = f64::from(periods_per_year);
    let apy = ((1.0 + apr_percent / 100.0 / n).powi(periods_per_year as i32) - 1.0) * 100.0;
    Ok(apy)
}

/// Headline APR implied by a fixed per-period reward pool:
/// `pool * periods_per_year * 100 / effective_total`. An empty pool total
/// yields 0.
pub fn period_apr(
    period_reward_pool: Amount,
    totals: &StakingPoolTotals,
    periods_per_year: u32,
) -> f64 {
    let annualized = period_reward_pool * Amount::from_i64(i64::from(periods_per_year));
    (annualized * Amount::HUNDRED)
        .checked_ratio(totals.effective_total())
        .to_f64()
}

/// Whether the claim action is enabled for this period. Exactly
/// `has_claim_rights && !claimed && !is_claim_paused`; no partial states.
pub fn claim_eligibility(reward: &EscrowReward) -> bool {
    reward.has_claim_rights && !reward.claimed && !reward.is_claim_paused
}

/// Why the claim is or is not actionable. A paused distribution masks
/// everything else; missing rights mask the claimed flag.
pub fn claim_status(reward: &EscrowReward) -> ClaimStatus {
    if reward.is_claim_paused {
        ClaimStatus::Paused
    } else if !reward.has_claim_rights {
        ClaimStatus::NoClaimRights
    } else if reward.claimed {
        ClaimStatus::AlreadyClaimed
    } else {
        ClaimStatus::Eligible
    }
}

/// Expected share of the period's reward pool: `(share% / 100) * pool`.
pub fn estimated_reward(my_share_percent: Amount, period_reward_pool: Amount) -> Amount {
    my_share_percent.checked_ratio(Amount::HUNDRED) * period_reward_pool
}

/// Decompose a reward snapshot into its portions, verifying that they sum to
/// the reported total. A mismatch beyond [`ALLOCATION_TOLERANCE`] means the
/// upstream snapshot is malformed and is surfaced, never silently re-summed.
pub fn weighted_allocation(reward: &EscrowReward) -> Result<WeightedAllocation, EngineError> {
    let summed = reward.staking_balance + reward.snx_balance;
    let drift = (summed - reward.total_balance).abs();

    if drift > allocation_tolerance() {
        return Err(EngineError::InconsistentRewardSnapshot {
            staking: reward.staking_balance.to_string(),
            external: reward.snx_balance.to_string(),
            total: reward.total_balance.to_string(),
        });
    }

    Ok(WeightedAllocation {
        staking_portion: reward.staking_balance,
        external_token_portion: reward.snx_balance,
        total: reward.total_balance,
        previous_period_carry_over: reward.previous_period_balance,
    })
}
