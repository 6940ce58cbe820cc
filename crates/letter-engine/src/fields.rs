//! User-supplied field values

use serde::{Deserialize, Serialize};

/// Field values submitted with a letter request.
///
/// Every field is optional. An empty string is treated the same as an
/// absent value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creditor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Category key of the dispute letter, e.g. `"UCC Article 8"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispute_type: Option<String>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_creditor_name(mut self, value: impl Into<String>) -> Self {
        self.creditor_name = Some(value.into());
        self
    }

    pub fn with_account_number(mut self, value: impl Into<String>) -> Self {
        self.account_number = Some(value.into());
        self
    }

    pub fn with_reason(mut self, value: impl Into<String>) -> Self {
        self.reason = Some(value.into());
        self
    }

    pub fn with_dispute_type(mut self, value: impl Into<String>) -> Self {
        self.dispute_type = Some(value.into());
        self
    }

    pub fn creditor_name(&self) -> Option<&str> {
        provided(&self.creditor_name)
    }

    pub fn account_number(&self) -> Option<&str> {
        provided(&self.account_number)
    }

    pub fn reason(&self) -> Option<&str> {
        provided(&self.reason)
    }

    pub fn dispute_type(&self) -> Option<&str> {
        provided(&self.dispute_type)
    }
}

fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
