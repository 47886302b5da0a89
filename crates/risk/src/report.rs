use leasecheck_core::ScanInput;
use serde::Serialize;

use crate::classify::{classify, Classification};
use crate::engine::RiskScorer;
use crate::ratio::{deposit_ratio, DepositRatio};
use crate::types::ScanResult;

/// Everything a caller needs to display one scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub input: ScanInput,
    pub result: ScanResult,
    pub classification: Classification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_ratio: Option<DepositRatio>,
}

impl RiskScorer {
    /// Scores `input` and attaches the classification and, when a market
    /// price is known, the deposit-to-value ratio.
    pub fn report(&self, input: ScanInput, market_price: Option<u64>) -> ScanReport {
        let result = self.score(&input);
        let classification = classify(result.score);
        let deposit_ratio =
            market_price.and_then(|price| deposit_ratio(input.deposit_amount, price));
        ScanReport {
            input,
            result,
            classification,
            deposit_ratio,
        }
    }
}
