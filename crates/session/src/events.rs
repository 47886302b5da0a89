use leasecheck_core::ScanInput;
use leasecheck_risk::{RiskScorer, RiskTier};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SessionError;
use crate::state::{SessionId, SessionStore};

/// One user action against a session, as recorded in a replay file.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionEvent {
    Scan {
        session: SessionId,
        input: ScanInput,
        #[serde(default)]
        market_price: Option<u64>,
    },
    Check {
        session: SessionId,
        item: String,
        #[serde(default = "default_checked")]
        checked: bool,
    },
    Review {
        session: SessionId,
        rating: u8,
        text: String,
    },
}

impl SessionEvent {
    pub fn session(&self) -> &SessionId {
        match self {
            Self::Scan { session, .. } | Self::Check { session, .. } | Self::Review { session, .. } => {
                session
            }
        }
    }
}

fn default_checked() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EventOutcome {
    Scanned { score: u32, tier: RiskTier },
    Checked { done: usize, total: usize },
    Reviewed { count: usize },
}

pub fn apply_event(
    store: &mut SessionStore,
    scorer: &RiskScorer,
    event: SessionEvent,
    now_ms: u64,
) -> Result<EventOutcome, SessionError> {
    match event {
        SessionEvent::Scan {
            session,
            input,
            market_price,
        } => {
            let report = scorer.report(input, market_price);
            let outcome = EventOutcome::Scanned {
                score: report.result.score,
                tier: report.classification.tier,
            };
            store.record_scan(&session, report, now_ms);
            debug!(%session, ?outcome, "scan recorded");
            Ok(outcome)
        }
        SessionEvent::Check {
            session,
            item,
            checked,
        } => {
            let (done, total) = store.toggle_check(&session, &item, checked, now_ms)?;
            Ok(EventOutcome::Checked { done, total })
        }
        SessionEvent::Review {
            session,
            rating,
            text,
        } => {
            let count = store.add_review(&session, rating, &text, now_ms)?;
            Ok(EventOutcome::Reviewed { count })
        }
    }
}
