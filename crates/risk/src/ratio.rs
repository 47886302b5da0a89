//! Deposit-to-value ratio: how much of the property's market price the
//! deposit already covers. Informational only, never folded into the score.

use serde::Serialize;

const ELEVATED_FLOOR_PCT: f64 = 60.0;
const CRITICAL_FLOOR_PCT: f64 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioBand {
    Comfortable,
    Elevated,
    Critical,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DepositRatio {
    pub percent: f64,
    pub band: RatioBand,
}

/// `None` when the market price is unknown (zero).
pub fn deposit_ratio(deposit: u64, market_price: u64) -> Option<DepositRatio> {
    if market_price == 0 {
        return None;
    }
    let percent = deposit as f64 / market_price as f64 * 100.0;
    let band = if percent >= CRITICAL_FLOOR_PCT {
        RatioBand::Critical
    } else if percent >= ELEVATED_FLOOR_PCT {
        RatioBand::Elevated
    } else {
        RatioBand::Comfortable
    };
    Some(DepositRatio { percent, band })
}
