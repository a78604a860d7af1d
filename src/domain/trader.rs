//! Trader statistics and leaderboard ordering parameters.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{Address, Amount};

/// Aggregated trading activity for one wallet, as supplied by the upstream
/// leaderboard pipeline. The collection carries no intrinsic order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraderStat {
    pub wallet_address: Address,
    pub trades: i64,
    pub volume: Amount,
    pub net_profit: Amount,
    pub investment: Amount,
    /// Return on investment, as a percentage.
    pub gain: Amount,
}

/// A trader stat with its derived 1-based rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedTraderStat {
    pub rank: usize,
    #[serde(flatten)]
    pub stat: TraderStat,
}

/// Which numeric column the leaderboard is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Trades,
    Volume,
    NetProfit,
    Investment,
    Gain,
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trades" => Ok(SortKey::Trades),
            "volume" => Ok(SortKey::Volume),
            "netprofit" => Ok(SortKey::NetProfit),
            "investment" => Ok(SortKey::Investment),
            "gain" => Ok(SortKey::Gain),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(()),
        }
    }
}
