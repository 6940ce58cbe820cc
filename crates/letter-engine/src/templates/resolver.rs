//! Category key resolution
//!
//! Every family owns one static table. Lookups are exact and case-sensitive,
//! and each table falls back differently when a key is unknown:
//! - dispute: the general dispute letter
//! - remedy: a human-readable "not found" message, not a template
//! - trust: the empty string

use serde::Serialize;
use tracing::debug;

use super::embedded::*;
use crate::family::DocumentFamily;
use crate::fields::FieldSet;

/// Text returned by the remedy table for an unknown key
pub const NOT_FOUND_MESSAGE: &str = "Template not found. Please select a valid template type.";

/// What a table returns when no key matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// A default template that is itself rendered like any other
    Template(&'static str),
    /// A plain message shown in place of a template
    Message(&'static str),
    /// Nothing
    Empty,
}

impl Fallback {
    pub fn text(&self) -> &'static str {
        match *self {
            Fallback::Template(text) | Fallback::Message(text) => text,
            Fallback::Empty => "",
        }
    }
}

/// Static category-to-template table for one family
#[derive(Debug)]
pub struct TemplateTable {
    pub family: DocumentFamily,
    entries: &'static [(&'static str, &'static str)],
    fallback: Fallback,
}

/// Outcome of a lookup: the text plus whether the key matched exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub text: &'static str,
    pub matched: bool,
}

pub static DISPUTE_TABLE: TemplateTable = TemplateTable {
    family: DocumentFamily::Dispute,
    entries: &[
        ("UCC Article 8", UCC_ARTICLE_8_TEMPLATE),
        ("UCC Article 9", UCC_ARTICLE_9_TEMPLATE),
    ],
    fallback: Fallback::Template(GENERAL_DISPUTE_TEMPLATE),
};

pub static REMEDY_TABLE: TemplateTable = TemplateTable {
    family: DocumentFamily::Remedy,
    entries: &[
        ("right-of-rescission", RIGHT_OF_RESCISSION_TEMPLATE),
        ("debt-validation", DEBT_VALIDATION_TEMPLATE),
        ("notice-of-status", NOTICE_OF_STATUS_TEMPLATE),
        ("quo-warranto", QUO_WARRANTO_TEMPLATE),
        ("abatement", ABATEMENT_TEMPLATE),
    ],
    fallback: Fallback::Message(NOT_FOUND_MESSAGE),
};

pub static TRUST_TABLE: TemplateTable = TemplateTable {
    family: DocumentFamily::Trust,
    entries: &[("schedule-a", SCHEDULE_A_TEMPLATE)],
    fallback: Fallback::Empty,
};

impl TemplateTable {
    /// Exact-match lookup without fallback
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, text)| *text)
    }

    /// Lookup reporting whether the fallback was used
    pub fn lookup(&self, key: &str) -> Resolution {
        match self.get(key) {
            Some(text) => Resolution {
                text,
                matched: true,
            },
            None => {
                debug!(family = %self.family, key, "no template for key, using fallback");
                Resolution {
                    text: self.fallback.text(),
                    matched: false,
                }
            }
        }
    }

    /// Resolve a key to text. Never fails.
    pub fn resolve(&self, key: &str) -> &'static str {
        self.lookup(key).text
    }

    /// Category keys with a dedicated template, in table order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn fallback(&self) -> Fallback {
        self.fallback
    }
}

/// The table for a family
pub fn table(family: DocumentFamily) -> &'static TemplateTable {
    match family {
        DocumentFamily::Dispute => &DISPUTE_TABLE,
        DocumentFamily::Remedy => &REMEDY_TABLE,
        DocumentFamily::Trust => &TRUST_TABLE,
    }
}

/// Resolve a category key within a family
pub fn resolve(family: DocumentFamily, key: &str) -> &'static str {
    table(family).resolve(key)
}

/// Resolve the dispute letter selected by `fields.dispute_type`
pub fn resolve_for(fields: &FieldSet) -> &'static str {
    DISPUTE_TABLE.resolve(fields.dispute_type().unwrap_or_default())
}
