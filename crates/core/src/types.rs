use serde::{Deserialize, Deserializer, Serialize};

use crate::modes::ContractType;

/// One scan request. Amounts are in the source currency unit (10,000 won).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanInput {
    pub deposit_amount: u64,
    pub monthly_rent: u64,
    pub contract_type: ContractType,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub condition_memo: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ScanInput {
    pub fn new(
        deposit_amount: u64,
        monthly_rent: u64,
        contract_type: ContractType,
        condition_memo: Option<&str>,
    ) -> Self {
        Self {
            deposit_amount,
            monthly_rent,
            contract_type,
            condition_memo: condition_memo.unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScanInput;
    use crate::modes::ContractType;

    #[test]
    fn absent_memo_is_empty() {
        let input = ScanInput::new(3000, 0, ContractType::FullDeposit, None);
        assert_eq!(input.condition_memo, "");
    }

    #[test]
    fn deserialize_defaults_memo() {
        let input = from_toml(
            "deposit_amount = 10\nmonthly_rent = 1\ncontract_type = \"monthly\"\n",
        );
        assert_eq!(input.contract_type, ContractType::Monthly);
        assert!(input.condition_memo.is_empty());
    }

    fn from_toml(raw: &str) -> ScanInput {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap();
        cfg.try_deserialize().unwrap()
    }
}
