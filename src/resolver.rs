//! Backward search for the nearest date with a published brief.

use crate::error::BriefError;
use crate::probe::{Probe, ProbeOutcome};
use chrono::NaiveDate;
use tracing::{info, instrument, warn};

/// Walk backward from `start`, one day at a time, until a probe succeeds.
///
/// Candidates are tried most recent first so the freshest available brief
/// wins, and the search short-circuits on the first success. A failed probe
/// of any kind only advances the search; exhausting the whole window is the
/// single fatal outcome, reported with every date that was tried.
#[instrument(level = "info", skip(probe))]
pub async fn resolve(
    probe: &impl Probe,
    start: NaiveDate,
    max_attempts: u32,
) -> Result<NaiveDate, BriefError> {
    let mut attempted = Vec::with_capacity(max_attempts as usize);
    let mut date = start;

    for attempt in 1..=max_attempts {
        attempted.push(date);
        info!(date = %date.format("%Y%m%d"), attempt, max_attempts, "Probing for daily brief");

        match probe.probe(date).await {
            ProbeOutcome::Found => {
                info!(date = %date.format("%Y%m%d"), "Found published brief");
                return Ok(date);
            }
            ProbeOutcome::NotFound(reason) => {
                warn!(date = %date.format("%Y%m%d"), %reason, "No brief for date");
            }
        }

        match date.pred_opt() {
            Some(previous) => date = previous,
            // calendar underflow; nothing earlier to try
            None => break,
        }
    }

    Err(BriefError::WindowExhausted { attempted })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Probe that replays a fixed sequence of outcomes and panics when
    /// called more often than scripted.
    struct ScriptedProbe {
        outcomes: RefCell<VecDeque<ProbeOutcome>>,
    }

    impl ScriptedProbe {
        fn new(outcomes: impl IntoIterator<Item = ProbeOutcome>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes.into_iter().collect()),
            }
        }

        fn remaining(&self) -> usize {
            self.outcomes.borrow().len()
        }
    }

    impl Probe for ScriptedProbe {
        async fn probe(&self, _date: NaiveDate) -> ProbeOutcome {
            self.outcomes
                .borrow_mut()
                .pop_front()
                .expect("probe called more times than scripted")
        }
    }

    fn missing() -> ProbeOutcome {
        ProbeOutcome::NotFound("HTTP 404 Not Found".to_string())
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_resolves_start_date_when_first_probe_succeeds() {
        let probe = ScriptedProbe::new([ProbeOutcome::Found, missing(), missing()]);
        let resolved = resolve(&probe, day(2025, 8, 6), 7).await.unwrap();
        assert_eq!(resolved, day(2025, 8, 6));
        // Short-circuit: the later outcomes were never consumed.
        assert_eq!(probe.remaining(), 2);
    }

    #[tokio::test]
    async fn test_resolves_first_found_date_in_sequence() {
        // [Fail, Fail, Found] for D, D-1, D-2 resolves to D-2.
        let probe = ScriptedProbe::new([missing(), missing(), ProbeOutcome::Found]);
        let resolved = resolve(&probe, day(2025, 8, 6), 7).await.unwrap();
        assert_eq!(resolved, day(2025, 8, 4));
    }

    #[tokio::test]
    async fn test_search_crosses_month_boundary() {
        let probe = ScriptedProbe::new([missing(), ProbeOutcome::Found]);
        let resolved = resolve(&probe, day(2025, 8, 1), 7).await.unwrap();
        assert_eq!(resolved, day(2025, 7, 31));
    }

    #[tokio::test]
    async fn test_exhausted_window_carries_every_attempted_date() {
        let probe = ScriptedProbe::new(std::iter::repeat_with(missing).take(7));
        let err = resolve(&probe, day(2025, 8, 6), 7).await.unwrap_err();

        match err {
            BriefError::WindowExhausted { attempted } => {
                assert_eq!(attempted.len(), 7);
                assert_eq!(attempted[0], day(2025, 8, 6));
                assert_eq!(attempted[6], day(2025, 7, 31));
                // Strictly one day apart, most recent first.
                for pair in attempted.windows(2) {
                    assert_eq!(pair[0].pred_opt().unwrap(), pair[1]);
                }
            }
            other => panic!("expected WindowExhausted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_zero_attempts_exhausts_immediately() {
        let probe = ScriptedProbe::new(Vec::new());
        let err = resolve(&probe, day(2025, 8, 6), 0).await.unwrap_err();
        match err {
            BriefError::WindowExhausted { attempted } => assert!(attempted.is_empty()),
            other => panic!("expected WindowExhausted, got {other:?}"),
        }
    }
}
