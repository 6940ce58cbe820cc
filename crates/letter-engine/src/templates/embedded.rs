//! Embedded template loader
//!
//! This module loads letter templates from external files at compile time,
//! embedding them directly in the binary.

/// UCC Article 8 dispute letter - loaded from templates/dispute_ucc_article_8.txt
pub const UCC_ARTICLE_8_TEMPLATE: &str = include_str!("../../templates/dispute_ucc_article_8.txt");

/// UCC Article 9 dispute letter - loaded from templates/dispute_ucc_article_9.txt
pub const UCC_ARTICLE_9_TEMPLATE: &str = include_str!("../../templates/dispute_ucc_article_9.txt");

/// General dispute letter - loaded from templates/dispute_general.txt
/// Fallback for any dispute type without a dedicated template
pub const GENERAL_DISPUTE_TEMPLATE: &str = include_str!("../../templates/dispute_general.txt");

/// Right of rescission - loaded from templates/remedy_right_of_rescission.txt
pub const RIGHT_OF_RESCISSION_TEMPLATE: &str =
    include_str!("../../templates/remedy_right_of_rescission.txt");

/// Debt validation - loaded from templates/remedy_debt_validation.txt
pub const DEBT_VALIDATION_TEMPLATE: &str =
    include_str!("../../templates/remedy_debt_validation.txt");

/// Notice of status - loaded from templates/remedy_notice_of_status.txt
pub const NOTICE_OF_STATUS_TEMPLATE: &str =
    include_str!("../../templates/remedy_notice_of_status.txt");

/// Quo warranto demand - loaded from templates/remedy_quo_warranto.txt
pub const QUO_WARRANTO_TEMPLATE: &str = include_str!("../../templates/remedy_quo_warranto.txt");

/// Plea in abatement - loaded from templates/remedy_abatement.txt
pub const ABATEMENT_TEMPLATE: &str = include_str!("../../templates/remedy_abatement.txt");

/// Trust property schedule - loaded from templates/trust_schedule_a.txt
pub const SCHEDULE_A_TEMPLATE: &str = include_str!("../../templates/trust_schedule_a.txt");
