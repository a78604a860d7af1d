//! Escrow reward snapshots for weekly claim periods.

use serde::{Deserialize, Serialize};

use super::Amount;

/// One claim period's reward allocation for a user, as reported by the
/// distribution snapshot. Immutable; a new snapshot supersedes it each period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowReward {
    /// Distribution period index.
    pub index: u64,
    /// Raw claimable balance in base units.
    pub raw_balance: Amount,
    /// Merkle proof entries authorizing the claim.
    #[serde(default)]
    pub proof: Vec<String>,
    /// Portion earned through staking weight.
    pub staking_balance: Amount,
    /// Portion paid in the external incentive token.
    pub snx_balance: Amount,
    /// Total for the period; must equal staking + external portions.
    pub total_balance: Amount,
    /// Unclaimed amount carried over from the previous period.
    #[serde(default)]
    pub previous_period_balance: Amount,
    pub has_claim_rights: bool,
    pub claimed: bool,
    #[serde(default)]
    pub is_claim_paused: bool,
}

/// Decomposition of a period's reward, checked for internal consistency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedAllocation {
    pub staking_portion: Amount,
    pub external_token_portion: Amount,
    pub total: Amount,
    pub previous_period_carry_over: Amount,
}

/// Why a claim is (or is not) currently actionable.
///
/// Precedence mirrors the client's messaging: a paused distribution masks
/// everything else, an already-claimed period masks missing rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClaimStatus {
    Eligible,
    Paused,
    AlreadyClaimed,
    NoClaimRights,
}
