pub mod classify;
pub mod engine;
pub mod keywords;
pub mod ratio;
pub mod report;
pub mod types;

pub use classify::{classify, Classification, RiskTier};
pub use engine::RiskScorer;
pub use keywords::{KeywordRule, KeywordTable};
pub use ratio::{deposit_ratio, DepositRatio, RatioBand};
pub use report::ScanReport;
pub use types::ScanResult;
