use leasecheck_core::config::ScanConfig;
use leasecheck_core::{ContractType, ScanInput};
use tracing::debug;

use crate::keywords::{KeywordRule, KeywordTable};
use crate::types::ScanResult;

struct RiskFinding<'a> {
    label: Option<&'a str>,
    score: u32,
}

impl<'a> RiskFinding<'a> {
    fn weight(score: u32) -> Self {
        Self { label: None, score }
    }

    fn issue(label: &'a str, score: u32) -> Self {
        Self {
            label: Some(label),
            score,
        }
    }
}

const SCORE_BASE: u32 = 40;
pub const SCORE_MAX: u32 = 100;
const LOW_RENT_CEILING: u64 = 5;
const SCORE_LOW_RENT: u32 = 5;

/// Deposit surcharge breakpoints, ascending. Amounts below the first get nothing.
const DEPOSIT_TIERS: &[(u64, u32)] = &[(2_000, 15), (5_000, 30), (8_000, 45)];

#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    keywords: KeywordTable,
}

impl RiskScorer {
    pub fn new(cfg: &ScanConfig) -> Self {
        let keywords = match &cfg.keywords {
            Some(rules) => KeywordTable::from_rules(rules.iter().map(KeywordRule::from)),
            None => KeywordTable::builtin(),
        };
        Self { keywords }
    }

    pub fn with_keywords(keywords: KeywordTable) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    pub fn score(&self, input: &ScanInput) -> ScanResult {
        if input.deposit_amount == 0 {
            debug!("no deposit; skipping scan");
            return ScanResult::clear();
        }

        let mut findings = vec![
            RiskFinding::weight(SCORE_BASE),
            RiskFinding::weight(deposit_surcharge(input.deposit_amount)),
            RiskFinding::weight(contract_surcharge(input.contract_type)),
        ];
        if input.monthly_rent <= LOW_RENT_CEILING {
            findings.push(RiskFinding::weight(SCORE_LOW_RENT));
        }
        findings.extend(
            self.keywords
                .matches(&input.condition_memo)
                .map(|rule| RiskFinding::issue(&rule.label, rule.weight)),
        );

        let raw = findings
            .iter()
            .fold(0u32, |acc, finding| acc.saturating_add(finding.score));
        let mut result = ScanResult {
            score: raw.min(SCORE_MAX),
            ..ScanResult::clear()
        };
        for label in findings.iter().filter_map(|finding| finding.label) {
            result.add_issue(label);
        }
        debug!(
            raw,
            score = result.score,
            issues = ?result.detected_issues,
            "scan scored"
        );
        result
    }
}

fn deposit_surcharge(deposit: u64) -> u32 {
    DEPOSIT_TIERS
        .iter()
        .rev()
        .find(|(floor, _)| deposit >= *floor)
        .map(|(_, surcharge)| *surcharge)
        .unwrap_or(0)
}

fn contract_surcharge(kind: ContractType) -> u32 {
    match kind {
        ContractType::FullDeposit => 10,
        ContractType::PartialDeposit => 5,
        ContractType::Monthly => 0,
    }
}
