//! Domain types shared by the derived-state engines.
//!
//! Everything here is a plain value: timestamps, balances, snapshots. Derived
//! attributes (market phase, staking state, rank) never appear as stored
//! fields; the engines recompute them from `(now, inputs)` on every call.

pub mod amount;
pub mod market;
pub mod primitives;
pub mod reward;
pub mod staking;
pub mod trader;

pub use amount::Amount;
pub use market::{MarketPhase, MarketTimestamps};
pub use primitives::{Address, TimeMs};
pub use reward::{ClaimStatus, EscrowReward, WeightedAllocation};
pub use staking::{StakingPoolTotals, StakingPosition, StakingState};
pub use trader::{RankedTraderStat, SortDirection, SortKey, TraderStat};
