//! Placeholder substitution
//!
//! Templates mark substitution points with bracketed tokens such as
//! `[CREDITOR_NAME]`. The engine recognises a fixed set of tokens (see
//! [`Token`]) and leaves every other bracketed marker untouched for the
//! user to complete.

pub mod render;
pub mod scanner;
pub mod tokens;

pub use render::{render, render_at, render_document, RenderedDocument};
pub use scanner::placeholders;
pub use tokens::{Token, DEFAULT_ACCOUNT_NUMBER, REPORTED_BALANCE};
