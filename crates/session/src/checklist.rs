use serde::Serialize;

use crate::error::SessionError;

/// Pre-signing checks a tenant works through, in display order.
pub const CHECKLIST_ITEMS: &[&str] = &[
    "registry-extract",
    "mortgage-seniority",
    "landlord-identity",
    "tax-arrears",
    "deposit-insurance",
    "move-in-report",
    "fixed-date-stamp",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub key: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
}

impl Checklist {
    pub fn new() -> Self {
        Self {
            items: CHECKLIST_ITEMS
                .iter()
                .map(|key| ChecklistItem {
                    key: *key,
                    checked: false,
                })
                .collect(),
        }
    }

    pub fn set(&mut self, key: &str, checked: bool) -> Result<(), SessionError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.key == key)
            .ok_or_else(|| SessionError::UnknownChecklistItem(key.to_string()))?;
        item.checked = checked;
        Ok(())
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// `(checked, total)`
    pub fn progress(&self) -> (usize, usize) {
        let done = self.items.iter().filter(|item| item.checked).count();
        (done, self.items.len())
    }
}

impl Default for Checklist {
    fn default() -> Self {
        Self::new()
    }
}
