pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;

pub use config::Config;
pub use domain::{
    Address, Amount, ClaimStatus, EscrowReward, MarketPhase, MarketTimestamps, RankedTraderStat,
    SortDirection, SortKey, StakingPoolTotals, StakingPosition, StakingState, TimeMs, TraderStat,
    WeightedAllocation,
};
pub use engine::{Clock, EngineError, FixedClock, SystemClock};
pub use error::AppError;
