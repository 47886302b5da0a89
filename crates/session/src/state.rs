use leasecheck_core::config::SessionConfig;
use leasecheck_risk::{RiskTier, ScanReport};
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use tracing::debug;

use crate::checklist::Checklist;
use crate::error::SessionError;
use crate::review::Review;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    pub checklist: Checklist,
    pub reviews: Vec<Review>,
    pub last_scan: Option<ScanReport>,
    pub created_ms: u64,
    pub last_touch_ms: u64,
}

impl SessionState {
    pub fn new(now_ms: u64) -> Self {
        Self {
            checklist: Checklist::new(),
            reviews: Vec::new(),
            last_scan: None,
            created_ms: now_ms,
            last_touch_ms: now_ms,
        }
    }

    fn is_expired(&self, now_ms: u64, ttl_ms: u64) -> bool {
        now_ms > self.last_touch_ms.saturating_add(ttl_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub session: SessionId,
    pub created_ms: u64,
    pub checklist_done: usize,
    pub checklist_total: usize,
    pub reviews: usize,
    pub average_rating: Option<f64>,
    pub last_score: Option<u32>,
    pub last_tier: Option<RiskTier>,
}

/// Ephemeral per-session state, keyed by session id. Least recently used
/// sessions are evicted at capacity; idle sessions expire after the TTL and
/// start over on their next touch.
pub struct SessionStore {
    entries: LruCache<SessionId, SessionState>,
    ttl_ms: u64,
    max_reviews: usize,
}

impl SessionStore {
    pub fn new(cfg: &SessionConfig) -> Self {
        let capacity = NonZeroUsize::new(cfg.capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            ttl_ms: cfg.ttl_ms,
            max_reviews: cfg.max_reviews.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the live state for `id`, creating or resetting it as needed.
    pub fn open(&mut self, id: &SessionId, now_ms: u64) -> &mut SessionState {
        let expired = self
            .entries
            .peek(id)
            .is_some_and(|state| state.is_expired(now_ms, self.ttl_ms));
        if expired {
            debug!(session = %id, "session expired; starting over");
            self.entries.pop(id);
        }
        let state = self
            .entries
            .get_or_insert_mut(id.clone(), || SessionState::new(now_ms));
        state.last_touch_ms = now_ms;
        state
    }

    pub fn get(&mut self, id: &SessionId, now_ms: u64) -> Option<&SessionState> {
        let ttl_ms = self.ttl_ms;
        self.entries
            .get(id)
            .filter(|state| !state.is_expired(now_ms, ttl_ms))
    }

    pub fn toggle_check(
        &mut self,
        id: &SessionId,
        item: &str,
        checked: bool,
        now_ms: u64,
    ) -> Result<(usize, usize), SessionError> {
        let state = self.open(id, now_ms);
        state.checklist.set(item, checked)?;
        Ok(state.checklist.progress())
    }

    pub fn checklist(&mut self, id: &SessionId, now_ms: u64) -> Checklist {
        self.get(id, now_ms)
            .map(|state| state.checklist.clone())
            .unwrap_or_default()
    }

    pub fn checklist_progress(&mut self, id: &SessionId, now_ms: u64) -> (usize, usize) {
        self.checklist(id, now_ms).progress()
    }

    /// Appends a validated review, dropping the oldest beyond the cap.
    /// Returns the number of reviews held.
    pub fn add_review(
        &mut self,
        id: &SessionId,
        rating: u8,
        text: &str,
        now_ms: u64,
    ) -> Result<usize, SessionError> {
        let review = Review::new(rating, text, now_ms)?;
        let max_reviews = self.max_reviews;
        let state = self.open(id, now_ms);
        state.reviews.push(review);
        if state.reviews.len() > max_reviews {
            let excess = state.reviews.len() - max_reviews;
            state.reviews.drain(..excess);
        }
        Ok(state.reviews.len())
    }

    pub fn reviews(&mut self, id: &SessionId, now_ms: u64) -> &[Review] {
        self.get(id, now_ms)
            .map(|state| state.reviews.as_slice())
            .unwrap_or(&[])
    }

    pub fn record_scan(&mut self, id: &SessionId, report: ScanReport, now_ms: u64) {
        self.open(id, now_ms).last_scan = Some(report);
    }

    pub fn last_scan(&mut self, id: &SessionId, now_ms: u64) -> Option<&ScanReport> {
        self.get(id, now_ms)
            .and_then(|state| state.last_scan.as_ref())
    }

    pub fn summary(&mut self, id: &SessionId, now_ms: u64) -> Option<SessionSummary> {
        let state = self.get(id, now_ms)?;
        let (checklist_done, checklist_total) = state.checklist.progress();
        let average_rating = if state.reviews.is_empty() {
            None
        } else {
            let total: u32 = state.reviews.iter().map(|r| u32::from(r.rating)).sum();
            Some(f64::from(total) / state.reviews.len() as f64)
        };
        Some(SessionSummary {
            session: id.clone(),
            created_ms: state.created_ms,
            checklist_done,
            checklist_total,
            reviews: state.reviews.len(),
            average_rating,
            last_score: state.last_scan.as_ref().map(|r| r.result.score),
            last_tier: state.last_scan.as_ref().map(|r| r.classification.tier),
        })
    }

    /// Drops every expired session. Returns how many were removed.
    pub fn purge_expired(&mut self, now_ms: u64) -> usize {
        let ttl_ms = self.ttl_ms;
        let expired: Vec<SessionId> = self
            .entries
            .iter()
            .filter(|(_, state)| state.is_expired(now_ms, ttl_ms))
            .map(|(id, _)| id.clone())
            .collect();
        for id in &expired {
            self.entries.pop(id);
        }
        if !expired.is_empty() {
            debug!(purged = expired.len(), "expired sessions purged");
        }
        expired.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionId, SessionStore};
    use crate::error::SessionError;
    use leasecheck_core::config::SessionConfig;
    use leasecheck_core::{ContractType, ScanInput};
    use leasecheck_risk::{RiskScorer, RiskTier};

    fn store(capacity: usize, ttl_ms: u64) -> SessionStore {
        SessionStore::new(&SessionConfig {
            capacity,
            ttl_ms,
            max_reviews: 3,
        })
    }

    #[test]
    fn sessions_are_isolated() {
        let mut store = store(4, 1_000);
        let alice = SessionId::from("alice");
        let bob = SessionId::from("bob");
        store.toggle_check(&alice, "tax-arrears", true, 0).unwrap();
        assert_eq!(store.checklist_progress(&alice, 10).0, 1);
        assert_eq!(store.checklist_progress(&bob, 10).0, 0);
        assert!(store.get(&bob, 10).is_none());
    }

    #[test]
    fn unknown_check_item_is_rejected() {
        let mut store = store(4, 1_000);
        let err = store
            .toggle_check(&SessionId::from("s"), "nope", true, 0)
            .unwrap_err();
        assert_eq!(err, SessionError::UnknownChecklistItem("nope".to_string()));
    }

    #[test]
    fn idle_sessions_expire() {
        let mut store = store(4, 100);
        let id = SessionId::from("s");
        store.toggle_check(&id, "registry-extract", true, 1_000).unwrap();
        assert!(store.get(&id, 1_100).is_some());
        assert!(store.get(&id, 1_101).is_none());
        assert_eq!(store.checklist_progress(&id, 1_200).0, 0);
        store.open(&id, 1_200);
        assert_eq!(store.checklist_progress(&id, 1_200).0, 0);
        assert_eq!(store.summary(&id, 1_200).unwrap().created_ms, 1_200);
    }

    #[test]
    fn touch_refreshes_ttl() {
        let mut store = store(4, 100);
        let id = SessionId::from("s");
        store.toggle_check(&id, "registry-extract", true, 1_000).unwrap();
        store.toggle_check(&id, "tax-arrears", true, 1_090).unwrap();
        assert_eq!(store.checklist_progress(&id, 1_180).0, 2);
    }

    #[test]
    fn lru_evicts_least_recent() {
        let mut store = store(2, 10_000);
        let a = SessionId::from("a");
        let b = SessionId::from("b");
        let c = SessionId::from("c");
        store.open(&a, 0);
        store.open(&b, 1);
        store.open(&a, 2);
        store.open(&c, 3);
        assert_eq!(store.len(), 2);
        assert!(store.get(&a, 4).is_some());
        assert!(store.get(&b, 4).is_none());
    }

    #[test]
    fn reviews_are_capped() {
        let mut store = store(4, 10_000);
        let id = SessionId::from("s");
        for (i, rating) in [5u8, 4, 3, 2].into_iter().enumerate() {
            store.add_review(&id, rating, &format!("review {i}"), i as u64).unwrap();
        }
        let reviews = store.reviews(&id, 10);
        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[0].text, "review 1");
        let summary = store.summary(&id, 10).unwrap();
        assert_eq!(summary.average_rating, Some(3.0));
    }

    #[test]
    fn invalid_review_leaves_session_untouched() {
        let mut store = store(4, 10_000);
        let id = SessionId::from("s");
        assert!(store.add_review(&id, 9, "great", 0).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn records_last_scan() {
        let mut store = store(4, 10_000);
        let id = SessionId::from("s");
        let scorer = RiskScorer::default();
        let report = scorer.report(
            ScanInput::new(9000, 50, ContractType::Monthly, None),
            None,
        );
        store.record_scan(&id, report, 0);
        assert_eq!(store.last_scan(&id, 1).unwrap().result.score, 85);
        let summary = store.summary(&id, 1).unwrap();
        assert_eq!(summary.created_ms, 0);
        assert_eq!(summary.last_tier, Some(RiskTier::High));
        assert_eq!(summary.average_rating, None);
    }

    #[test]
    fn purge_drops_only_expired() {
        let mut store = store(4, 100);
        store.open(&SessionId::from("old"), 0);
        store.open(&SessionId::from("new"), 150);
        assert_eq!(store.purge_expired(200), 1);
        assert_eq!(store.len(), 1);
        assert!(store.get(&SessionId::from("new"), 200).is_some());
    }
}
