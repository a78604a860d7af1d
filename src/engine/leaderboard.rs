//! Leaderboard ranking, filtering, and pagination.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::{RankedTraderStat, SortDirection, SortKey, TraderStat};

/// Fully assembled leaderboard view: ranked, filtered, paginated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub entries: Vec<RankedTraderStat>,
    /// Full population size, before the search filter.
    pub total: usize,
    /// Entries matching the search filter (across all pages).
    pub matched: usize,
    /// Clamped page index actually served.
    pub page: usize,
    pub page_count: usize,
}

fn key_cmp(a: &TraderStat, b: &TraderStat, key: SortKey) -> Ordering {
    match key {
        SortKey::Trades => a.trades.cmp(&b.trades),
        SortKey::Volume => a.volume.cmp(&b.volume),
        SortKey::NetProfit => a.net_profit.cmp(&b.net_profit),
        SortKey::Investment => a.investment.cmp(&b.investment),
        SortKey::Gain => a.gain.cmp(&b.gain),
    }
}

/// Order the stats by `key` and assign 1-based ranks.
///
/// The sort is stable: entries with equal key values keep their relative order
/// from the input collection. Rank is always the entry's position in
/// *descending* key order plus one, independent of the requested display
/// direction, so "rank 1" names the leader under either direction. (Observed
/// client behavior, preserved deliberately; with tied keys the ascending
/// ordering is not the exact mirror of the descending one.)
pub fn rank(stats: &[TraderStat], key: SortKey, direction: SortDirection) -> Vec<RankedTraderStat> {
    let mut sorted: Vec<TraderStat> = stats.to_vec();
    match direction {
        SortDirection::Descending => sorted.sort_by(|a, b| key_cmp(b, a, key)),
        SortDirection::Ascending => sorted.sort_by(|a, b| key_cmp(a, b, key)),
    }

    let len = sorted.len();
    sorted
        .into_iter()
        .enumerate()
        .map(|(index, stat)| RankedTraderStat {
            rank: match direction {
                SortDirection::Descending => index + 1,
                SortDirection::Ascending => len - index,
            },
            stat,
        })
        .collect()
}

/// Keep entries whose wallet address or resolved display name contains
/// `query`, case-insensitively. Runs after ranking so the surviving entries
/// keep their full-population rank numbers. `display_names` is keyed by
/// normalized (lowercased) address.
pub fn search_filter(
    ranked: Vec<RankedTraderStat>,
    query: &str,
    display_names: &HashMap<String, String>,
) -> Vec<RankedTraderStat> {
    let needle = query.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return ranked;
    }

    ranked
        .into_iter()
        .filter(|entry| {
            let address_key = entry.stat.wallet_address.normalized();
            if address_key.contains(&needle) {
                return true;
            }
            display_names
                .get(&address_key)
                .map(|name| name.to_ascii_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .collect()
}

/// Number of pages a collection of `len` entries spans; never zero.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    (len.div_ceil(page_size)).max(1)
}

/// Slice out one page, clamping `page_index` to the last valid page.
/// Requesting a page past the end returns the final page, not an empty list.
pub fn paginate(ranked: &[RankedTraderStat], page_index: usize, page_size: usize) -> &[RankedTraderStat] {
    if page_size == 0 || ranked.is_empty() {
        return &[];
    }
    let clamped = page_index.min(page_count(ranked.len(), page_size) - 1);
    let start = clamped * page_size;
    let end = (start + page_size).min(ranked.len());
    &ranked[start..end]
}

/// Run the whole pipeline: rank, filter, paginate, plus the counts the table
/// footer needs.
pub fn build_leaderboard(
    stats: &[TraderStat],
    key: SortKey,
    direction: SortDirection,
    query: &str,
    display_names: &HashMap<String, String>,
    page_index: usize,
    page_size: usize,
) -> Leaderboard {
    let ranked = rank(stats, key, direction);
    let total = ranked.len();
    let matched = search_filter(ranked, query, display_names);
    let pages = page_count(matched.len(), page_size);
    let page = if matched.is_empty() {
        0
    } else {
        page_index.min(pages - 1)
    };
    let entries = paginate(&matched, page_index, page_size).to_vec();

    Leaderboard {
        entries,
        total,
        matched: matched.len(),
        page,
        page_count: pages,
    }
}
