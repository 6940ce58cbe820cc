//! Document families
//!
//! Each family owns an independent category table with its own fallback.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The three independent template tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFamily {
    /// Credit dispute letters (UCC Article 8 / 9, general)
    #[default]
    Dispute,
    /// Traffic-ticket remedy letters
    Remedy,
    /// Trust documents
    Trust,
}

impl DocumentFamily {
    /// All families, in display order
    pub const ALL: [DocumentFamily; 3] = [
        DocumentFamily::Dispute,
        DocumentFamily::Remedy,
        DocumentFamily::Trust,
    ];

    /// Lowercase name used in URLs and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFamily::Dispute => "dispute",
            DocumentFamily::Remedy => "remedy",
            DocumentFamily::Trust => "trust",
        }
    }
}

impl std::fmt::Display for DocumentFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DocumentFamily {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dispute" => Ok(DocumentFamily::Dispute),
            "remedy" => Ok(DocumentFamily::Remedy),
            "trust" => Ok(DocumentFamily::Trust),
            _ => Err(EngineError::UnknownFamily(s.to_string())),
        }
    }
}
