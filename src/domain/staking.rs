//! Staked-token position and pool-wide totals.

use serde::{Deserialize, Serialize};

use super::{Amount, TimeMs};

/// A user's staked position, as read back from settled on-chain state.
///
/// Invariant: `is_unstaking == true` implies `unstake_cooldown_end` is set and
/// the staked amount is frozen until the cooldown resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingPosition {
    pub staked_amount: Amount,
    pub escrowed_amount: Amount,
    #[serde(default)]
    pub is_unstaking: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unstake_cooldown_end: Option<TimeMs>,
}

impl StakingPosition {
    /// An empty position (nothing staked, nothing escrowed).
    pub fn idle() -> Self {
        Self::default()
    }

    /// Staked plus escrowed, the figure the UI shows as "total balance".
    pub fn total_balance(&self) -> Amount {
        self.staked_amount + self.escrowed_amount
    }
}

/// Protocol-wide staking figures the proportional-share math divides by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingPoolTotals {
    pub total_staked: Amount,
    pub total_escrowed: Amount,
    /// Escrowed balance that does not count toward staking weight.
    #[serde(default)]
    pub total_escrow_excluded: Amount,
}

impl StakingPoolTotals {
    /// Effective pool size: `total_staked + total_escrowed - total_escrow_excluded`.
    pub fn effective_total(&self) -> Amount {
        self.total_staked + self.total_escrowed - self.total_escrow_excluded
    }
}

/// Derived lifecycle state of a [`StakingPosition`] at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StakingState {
    /// Nothing staked.
    Idle,
    /// Stake active, not cooling down.
    Staked,
    /// Unstake requested, cooldown still running.
    Cooldown,
    /// Cooldown elapsed, funds claimable.
    Withdrawable,
}

impl std::fmt::Display for StakingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StakingState::Idle => "idle",
            StakingState::Staked => "staked",
            StakingState::Cooldown => "cooldown",
            StakingState::Withdrawable => "withdrawable",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn effective_total_subtracts_excluded_escrow() {
        let totals = StakingPoolTotals {
            total_staked: Amount::from_str("1000").unwrap(),
            total_escrowed: Amount::from_str("300").unwrap(),
            total_escrow_excluded: Amount::from_str("50").unwrap(),
        };
        assert_eq!(totals.effective_total(), Amount::from_str("1250").unwrap());
    }

    #[test]
    fn total_balance_sums_staked_and_escrowed() {
        let position = StakingPosition {
            staked_amount: Amount::from_str("100").unwrap(),
            escrowed_amount: Amount::from_str("25").unwrap(),
            ..StakingPosition::idle()
        };
        assert_eq!(position.total_balance(), Amount::from_str("125").unwrap());
    }
}
