//! Token-to-rule table

use std::borrow::Cow;

use chrono::NaiveDate;

use crate::fields::FieldSet;

/// Substituted for `[ACCOUNT_NUMBER]` when no account number is supplied
pub const DEFAULT_ACCOUNT_NUMBER: &str = "N/A";

/// Substituted for every `[REPORTED_BALANCE]`; not derived from any field
pub const REPORTED_BALANCE: &str = "$0.00";

/// A placeholder the engine knows how to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    CreditorName,
    AccountNumber,
    ReportedBalance,
    Date,
    Day,
    Month,
    Year,
    Reason,
}

impl Token {
    pub const ALL: [Token; 8] = [
        Token::CreditorName,
        Token::AccountNumber,
        Token::ReportedBalance,
        Token::Date,
        Token::Day,
        Token::Month,
        Token::Year,
        Token::Reason,
    ];

    /// The bracketed marker as it appears in template text
    pub fn marker(&self) -> &'static str {
        match self {
            Token::CreditorName => "[CREDITOR_NAME]",
            Token::AccountNumber => "[ACCOUNT_NUMBER]",
            Token::ReportedBalance => "[REPORTED_BALANCE]",
            Token::Date => "[DATE]",
            Token::Day => "[DAY]",
            Token::Month => "[MONTH]",
            Token::Year => "[YEAR]",
            Token::Reason => "[REASON]",
        }
    }

    /// Recognise a full bracketed marker, e.g. `"[DATE]"`
    pub fn from_marker(marker: &str) -> Option<Token> {
        Token::ALL.into_iter().find(|token| token.marker() == marker)
    }

    /// The replacement for this token, or `None` to leave the marker in place
    pub fn value<'a>(&self, fields: &'a FieldSet, date: NaiveDate) -> Option<Cow<'a, str>> {
        match self {
            Token::CreditorName => fields.creditor_name().map(Cow::Borrowed),
            Token::AccountNumber => Some(Cow::Borrowed(
                fields.account_number().unwrap_or(DEFAULT_ACCOUNT_NUMBER),
            )),
            Token::ReportedBalance => Some(Cow::Borrowed(REPORTED_BALANCE)),
            // en-US short date, e.g. 3/7/2025
            Token::Date => Some(Cow::Owned(date.format("%-m/%-d/%Y").to_string())),
            Token::Day => Some(Cow::Owned(date.format("%-d").to_string())),
            Token::Month => Some(Cow::Owned(date.format("%B").to_string())),
            Token::Year => Some(Cow::Owned(date.format("%Y").to_string())),
            Token::Reason => fields.reason().map(Cow::Borrowed),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marker())
    }
}
