//! Staking position state machine.
//!
//! The machine classifies state from already-settled position data; the
//! transition functions model what a confirmed stake/unstake call would leave
//! behind. They never touch the input: invalid requests return
//! [`EngineError::InvalidTransition`] and the caller's position is unchanged.

use super::EngineError;
use crate::domain::{Amount, StakingPoolTotals, StakingPosition, StakingState, TimeMs};

/// Classify a position at an instant.
///
/// Total over every reachable position. The Cooldown → Withdrawable edge is
/// purely time-based: it is re-derived on every call, never recorded.
pub fn classify_state(position: &StakingPosition, now: TimeMs) -> StakingState {
    if position.is_unstaking {
        match position.unstake_cooldown_end {
            Some(end) if now >= end => StakingState::Withdrawable,
            // A missing cooldown end would be upstream data corruption; the
            // conservative reading is "still cooling down".
            _ => StakingState::Cooldown,
        }
    } else if position.staked_amount.is_positive() {
        StakingState::Staked
    } else {
        StakingState::Idle
    }
}

/// Add `amount` to the stake. Legal from Idle and Staked; rejected while an
/// unstake is in flight (the stake is frozen until the cooldown resolves).
pub fn stake(
    position: &StakingPosition,
    amount: Amount,
    now: TimeMs,
) -> Result<StakingPosition, EngineError> {
    if !amount.is_positive() {
        return Err(EngineError::InvalidTransition {
            detail: format!("stake amount must be positive, got {}", amount),
        });
    }
    match classify_state(position, now) {
        StakingState::Idle | StakingState::Staked => Ok(StakingPosition {
            staked_amount: position.staked_amount + amount,
            ..*position
        }),
        state => Err(EngineError::InvalidTransition {
            detail: format!("cannot stake while {}", state),
        }),
    }
}

/// Begin unstaking the full staked balance. Legal only from Staked; starts the
/// cooldown ending at `now + cooldown_ms`.
pub fn start_unstake(
    position: &StakingPosition,
    now: TimeMs,
    cooldown_ms: i64,
) -> Result<StakingPosition, EngineError> {
    match classify_state(position, now) {
        StakingState::Staked => Ok(StakingPosition {
            is_unstaking: true,
            unstake_cooldown_end: Some(now.plus_ms(cooldown_ms)),
            ..*position
        }),
        state => Err(EngineError::InvalidTransition {
            detail: format!("cannot start unstaking while {}", state),
        }),
    }
}

/// Withdraw after the cooldown has elapsed. Legal only from Withdrawable;
/// returns the position to Idle. Escrowed balance is untouched, it vests on
/// its own schedule.
pub fn finalize_unstake(
    position: &StakingPosition,
    now: TimeMs,
) -> Result<StakingPosition, EngineError> {
    match classify_state(position, now) {
        StakingState::Withdrawable => Ok(StakingPosition {
            staked_amount: Amount::ZERO,
            is_unstaking: false,
            unstake_cooldown_end: None,
            ..*position
        }),
        state => Err(EngineError::InvalidTransition {
            detail: format!("cannot unstake while {}", state),
        }),
    }
}

/// Percentage of the effective pool held by `my_staked`:
/// `100 * mine / (total_staked + total_escrowed - total_escrow_excluded)`.
/// An empty pool yields 0, not an error.
pub fn staked_share(my_staked: Amount, totals: &StakingPoolTotals) -> Amount {
    (Amount::HUNDRED * my_staked).checked_ratio(totals.effective_total())
}
