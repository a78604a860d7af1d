//! Market lifecycle phase derivation.

use serde::{Deserialize, Serialize};

use super::EngineError;
use crate::domain::{MarketPhase, MarketTimestamps, TimeMs};

/// Derived lifecycle view of a market at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseView {
    pub phase: MarketPhase,
    /// Milliseconds until the next phase transition; 0 once expired.
    pub time_remaining: i64,
    /// The instant the current phase ends. `None` once expired (terminal).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_transition_at: Option<TimeMs>,
}

/// Derive the phase of a market from its timestamps at `now`.
///
/// Each phase owns the half-open interval `[start, end)`: an instant exactly
/// on a boundary belongs to the later phase. Markets without a bidding round
/// skip straight to `Trading`.
pub fn derive_phase(now: TimeMs, timestamps: &MarketTimestamps) -> Result<PhaseView, EngineError> {
    timestamps.validate()?;

    if let Some(bidding_end) = timestamps.bidding_end {
        if now < bidding_end {
            return Ok(PhaseView {
                phase: MarketPhase::Bidding,
                time_remaining: now.millis_until(bidding_end),
                next_transition_at: Some(bidding_end),
            });
        }
    }

    let view = if now < timestamps.maturity {
        PhaseView {
            phase: MarketPhase::Trading,
            time_remaining: now.millis_until(timestamps.maturity),
            next_transition_at: Some(timestamps.maturity),
        }
    } else if now < timestamps.expiry {
        PhaseView {
            phase: MarketPhase::Maturity,
            time_remaining: now.millis_until(timestamps.expiry),
            next_transition_at: Some(timestamps.expiry),
        }
    } else {
        PhaseView {
            phase: MarketPhase::Expiry,
            time_remaining: 0,
            next_transition_at: None,
        }
    };

    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_phase() -> MarketTimestamps {
        MarketTimestamps::new(
            Some(TimeMs::new(1_000)),
            TimeMs::new(2_000),
            TimeMs::new(3_000),
        )
    }

    fn three_phase() -> MarketTimestamps {
        MarketTimestamps::new(None, TimeMs::new(2_000), TimeMs::new(3_000))
    }

    #[test]
    fn mid_trading_window() {
        let view = derive_phase(TimeMs::new(1_500), &four_phase()).unwrap();
        assert_eq!(view.phase, MarketPhase::Trading);
        assert_eq!(view.time_remaining, 500);
        assert_eq!(view.next_transition_at, Some(TimeMs::new(2_000)));
    }

    #[test]
    fn bidding_window_only_exists_with_bidding_end() {
        let view = derive_phase(TimeMs::new(500), &four_phase()).unwrap();
        assert_eq!(view.phase, MarketPhase::Bidding);
        assert_eq!(view.time_remaining, 500);

        let view = derive_phase(TimeMs::new(500), &three_phase()).unwrap();
        assert_eq!(view.phase, MarketPhase::Trading);
        assert_eq!(view.time_remaining, 1_500);
    }

    #[test]
    fn boundary_instant_belongs_to_later_phase() {
        let ts = four_phase();
        assert_eq!(
            derive_phase(TimeMs::new(1_000), &ts).unwrap().phase,
            MarketPhase::Trading
        );
        assert_eq!(
            derive_phase(TimeMs::new(2_000), &ts).unwrap().phase,
            MarketPhase::Maturity
        );
        assert_eq!(
            derive_phase(TimeMs::new(3_000), &ts).unwrap().phase,
            MarketPhase::Expiry
        );
    }

    #[test]
    fn expiry_is_terminal() {
        let view = derive_phase(TimeMs::new(10_000), &four_phase()).unwrap();
        assert_eq!(view.phase, MarketPhase::Expiry);
        assert_eq!(view.time_remaining, 0);
        assert_eq!(view.next_transition_at, None);
    }

    #[test]
    fn unordered_timestamps_are_rejected() {
        let ts = MarketTimestamps::new(None, TimeMs::new(3_000), TimeMs::new(2_000));
        assert!(matches!(
            derive_phase(TimeMs::new(0), &ts),
            Err(EngineError::InvalidTimestampOrder { .. })
        ));
    }

    #[test]
    fn phase_is_monotonic_in_now() {
        let ts = four_phase();
        let mut previous = MarketPhase::Bidding;
        for now in (0..4_500).step_by(50) {
            let phase = derive_phase(TimeMs::new(now), &ts).unwrap().phase;
            assert!(phase >= previous, "phase regressed at now={}", now);
            previous = phase;
        }
        assert_eq!(previous, MarketPhase::Expiry);
    }
}
