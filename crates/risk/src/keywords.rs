use leasecheck_core::config::KeywordConfig;
use serde::{Deserialize, Serialize};

/// A memo substring and what it contributes when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub pattern: String,
    pub weight: u32,
    pub label: String,
}

impl KeywordRule {
    pub fn new(pattern: impl Into<String>, weight: u32, label: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            weight,
            label: label.into(),
        }
    }
}

impl From<&KeywordConfig> for KeywordRule {
    fn from(cfg: &KeywordConfig) -> Self {
        Self::new(cfg.pattern.clone(), cfg.weight, cfg.label.clone())
    }
}

// Overlapping patterns ("floor noise" / "noise", "wall crack" / "crack") are
// meant to fire together.
const BUILTIN: &[(&str, u32, &str)] = &[
    ("mold", 10, "mold"),
    ("leak", 10, "water-leak"),
    ("defect", 6, "defect"),
    ("odor", 6, "odor"),
    ("smell", 4, "smell"),
    ("noise", 6, "noise"),
    ("insect", 6, "insect"),
    ("floor noise", 6, "floor-noise"),
    ("cockroach", 8, "insect"),
    ("electrical", 10, "electrical-fault"),
    ("crack", 4, "crack"),
    ("wall crack", 6, "wall-crack"),
    ("haunt", 3, "rumor-of-haunting"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    rules: Vec<KeywordRule>,
}

impl KeywordTable {
    pub fn builtin() -> Self {
        Self {
            rules: BUILTIN
                .iter()
                .map(|(pattern, weight, label)| KeywordRule::new(*pattern, *weight, *label))
                .collect(),
        }
    }

    /// Empty patterns are dropped; they would match every memo.
    pub fn from_rules(rules: impl IntoIterator<Item = KeywordRule>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .filter(|rule| !rule.pattern.is_empty())
                .collect(),
        }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Every rule whose pattern occurs in `memo`. Case-sensitive, untokenized.
    pub fn matches<'a>(&'a self, memo: &'a str) -> impl Iterator<Item = &'a KeywordRule> + 'a {
        self.rules
            .iter()
            .filter(move |rule| memo.contains(rule.pattern.as_str()))
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::builtin()
    }
}
