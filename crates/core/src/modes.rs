use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Lease structure the tenant is signing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// Large deposit, no periodic rent.
    FullDeposit,
    /// Deposit plus reduced periodic rent.
    PartialDeposit,
    Monthly,
}

impl ContractType {
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "full_deposit" | "full-deposit" | "fulldeposit" | "jeonse" => Ok(Self::FullDeposit),
            "partial_deposit" | "partial-deposit" | "partialdeposit" | "banjeonse" => {
                Ok(Self::PartialDeposit)
            }
            "monthly" | "wolse" => Ok(Self::Monthly),
            _ => Err(anyhow!("unsupported contract type: {raw}").into()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullDeposit => "full_deposit",
            Self::PartialDeposit => "partial_deposit",
            Self::Monthly => "monthly",
        }
    }
}

impl FromStr for ContractType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
