//! Binary-option market lifecycle types.

use serde::{Deserialize, Serialize};

use super::TimeMs;
use crate::engine::EngineError;

/// The three (or four) ordered instants that define a market's lifecycle.
///
/// Markets created with a pre-trade bidding round carry `bidding_end`; markets
/// without one start directly in the trading phase. Immutable once the market
/// exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTimestamps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidding_end: Option<TimeMs>,
    pub maturity: TimeMs,
    pub expiry: TimeMs,
}

impl MarketTimestamps {
    pub fn new(bidding_end: Option<TimeMs>, maturity: TimeMs, expiry: TimeMs) -> Self {
        Self {
            bidding_end,
            maturity,
            expiry,
        }
    }

    /// Check the strict ordering invariant:
    /// `bidding_end < maturity < expiry` (or `maturity < expiry` without bidding).
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.maturity >= self.expiry {
            return Err(EngineError::InvalidTimestampOrder {
                detail: format!(
                    "maturity {} must precede expiry {}",
                    self.maturity, self.expiry
                ),
            });
        }
        if let Some(bidding_end) = self.bidding_end {
            if bidding_end >= self.maturity {
                return Err(EngineError::InvalidTimestampOrder {
                    detail: format!(
                        "bidding end {} must precede maturity {}",
                        bidding_end, self.maturity
                    ),
                });
            }
        }
        Ok(())
    }

    pub fn has_bidding(&self) -> bool {
        self.bidding_end.is_some()
    }
}

/// Lifecycle phase of a market. Declaration order is chronological, so the
/// derived `Ord` gives "later phase" comparisons directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketPhase {
    Bidding,
    Trading,
    Maturity,
    Expiry,
}

impl MarketPhase {
    /// Numeric index of the phase, matching the client-facing phase ordering
    /// (bidding = 0 ... expiry = 3).
    pub fn index(&self) -> u8 {
        match self {
            MarketPhase::Bidding => 0,
            MarketPhase::Trading => 1,
            MarketPhase::Maturity => 2,
            MarketPhase::Expiry => 3,
        }
    }

    /// Expiry is terminal; no further transition exists.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MarketPhase::Expiry)
    }
}

impl std::fmt::Display for MarketPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MarketPhase::Bidding => "bidding",
            MarketPhase::Trading => "trading",
            MarketPhase::Maturity => "maturity",
            MarketPhase::Expiry => "expiry",
        };
        write!(f, "{}", s)
    }
}
