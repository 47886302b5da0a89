use serde::Serialize;
use std::collections::BTreeSet;

/// Outcome of scoring one [`leasecheck_core::ScanInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub score: u32,
    pub detected_issues: BTreeSet<String>,
}

impl ScanResult {
    pub fn clear() -> Self {
        Self {
            score: 0,
            detected_issues: BTreeSet::new(),
        }
    }

    pub fn add_issue(&mut self, label: impl Into<String>) {
        self.detected_issues.insert(label.into());
    }

    pub fn issues(&self) -> impl Iterator<Item = &str> {
        self.detected_issues.iter().map(String::as_str)
    }
}
