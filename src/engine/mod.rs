//! Pure derived-state engines.
//!
//! Every function in this module is a synchronous, deterministic function of
//! `(now, inputs)`. Nothing here reads the system clock, performs I/O, or
//! keeps state between calls; callers supply the snapshot and the instant.

use thiserror::Error;

pub mod clock;
pub mod leaderboard;
pub mod phase;
pub mod rewards;
pub mod staking;

pub use clock::{Clock, FixedClock, SystemClock};
pub use leaderboard::{build_leaderboard, page_count, paginate, rank, search_filter, Leaderboard};
pub use phase::{derive_phase, PhaseView};
pub use rewards::{
    apr_to_apy, claim_eligibility, claim_status, estimated_reward, period_apr, weighted_allocation,
};
pub use staking::{classify_state, finalize_unstake, stake, staked_share, start_unstake};

/// Failures the engines can report. All are surfaced synchronously at the
/// point of computation; none are retried here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Market timestamps violate the required strict ordering; the market
    /// cannot display a phase.
    #[error("invalid timestamp order: {detail}")]
    InvalidTimestampOrder { detail: String },

    /// A staking operation was requested from a state that does not permit it.
    #[error("invalid staking transition: {detail}")]
    InvalidTransition { detail: String },

    /// APR/APY conversion needs a positive number of compounding periods.
    #[error("compounding periods per year must be positive, got {0}")]
    InvalidCompoundingPeriods(i64),

    /// A reward snapshot whose portions do not sum to its total. Surfaced
    /// instead of re-summed so upstream accounting bugs stay visible.
    #[error("inconsistent reward snapshot: staking {staking} + external {external} != total {total}")]
    InconsistentRewardSnapshot {
        staking: String,
        external: String,
        total: String,
    },
}
