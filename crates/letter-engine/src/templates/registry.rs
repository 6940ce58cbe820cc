//! Template registry and metadata

use serde::{Deserialize, Serialize};

use super::resolver::table;
use crate::family::DocumentFamily;
use crate::substitution::{placeholders, Token};

/// Information about an available template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub family: DocumentFamily,
    /// Category key passed to the resolver
    pub key: String,
    /// Human-readable title
    pub title: String,
    /// Human-readable description
    pub description: String,
    /// True for the template served when no key matches
    pub is_fallback: bool,
    /// Placeholders the engine fills in
    pub engine_fields: Vec<String>,
    /// Placeholders left for the user to complete by hand
    pub manual_fields: Vec<String>,
}

struct CatalogEntry {
    family: DocumentFamily,
    key: &'static str,
    title: &'static str,
    description: &'static str,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        family: DocumentFamily::Dispute,
        key: "UCC Article 8",
        title: "UCC Article 8 Dispute",
        description: "Credit dispute citing UCC Article 8 (investment securities) and demanding proof of entitlement",
    },
    CatalogEntry {
        family: DocumentFamily::Dispute,
        key: "UCC Article 9",
        title: "UCC Article 9 Dispute",
        description: "Credit dispute citing UCC Article 9 (secured transactions) and demanding security agreement and assignment records",
    },
    CatalogEntry {
        family: DocumentFamily::Dispute,
        key: "general",
        title: "General Dispute",
        description: "Direct furnisher dispute under the FCRA, used for any dispute type without a dedicated letter",
    },
    CatalogEntry {
        family: DocumentFamily::Remedy,
        key: "right-of-rescission",
        title: "Right of Rescission",
        description: "Rescinds the signature given on a traffic citation",
    },
    CatalogEntry {
        family: DocumentFamily::Remedy,
        key: "debt-validation",
        title: "Debt Validation",
        description: "Disputes a citation fine and requests validation of the alleged obligation",
    },
    CatalogEntry {
        family: DocumentFamily::Remedy,
        key: "notice-of-status",
        title: "Notice of Status",
        description: "Places private, non-commercial travel status on the record",
    },
    CatalogEntry {
        family: DocumentFamily::Remedy,
        key: "quo-warranto",
        title: "Quo Warranto",
        description: "Demands proof of the issuing officer's and magistrate's authority",
    },
    CatalogEntry {
        family: DocumentFamily::Remedy,
        key: "abatement",
        title: "Plea in Abatement",
        description: "Pleads abatement of the action for defects in the citation",
    },
    CatalogEntry {
        family: DocumentFamily::Trust,
        key: "schedule-a",
        title: "Schedule A",
        description: "Trust property schedule assigning listed assets to the trustee",
    },
];

impl CatalogEntry {
    fn text(&self) -> &'static str {
        let table = table(self.family);
        table.get(self.key).unwrap_or_else(|| table.fallback().text())
    }

    fn info(&self) -> TemplateInfo {
        let (engine_fields, manual_fields): (Vec<String>, Vec<String>) = placeholders(self.text())
            .into_iter()
            .partition(|marker| Token::from_marker(marker).is_some());

        TemplateInfo {
            family: self.family,
            key: self.key.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            is_fallback: table(self.family).get(self.key).is_none(),
            engine_fields,
            manual_fields,
        }
    }
}

/// List all available templates
pub fn list_templates() -> Vec<TemplateInfo> {
    CATALOG.iter().map(CatalogEntry::info).collect()
}

/// List the templates of one family
pub fn list_family(family: DocumentFamily) -> Vec<TemplateInfo> {
    CATALOG
        .iter()
        .filter(|entry| entry.family == family)
        .map(CatalogEntry::info)
        .collect()
}

/// Metadata for a single template
pub fn template_info(family: DocumentFamily, key: &str) -> Option<TemplateInfo> {
    CATALOG
        .iter()
        .find(|entry| entry.family == family && entry.key == key)
        .map(CatalogEntry::info)
}
