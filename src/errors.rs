//! Unified error types for `RaffleBuddy`.
//!
//! Expected "no row" outcomes (no drawing yet this week, unknown patron id)
//! are surfaced as `Ok(None)` or `false` by the core functions, never as
//! errors. The variants here cover the hard failures: missing rows that an
//! operation requires, violated preconditions, and store errors, which are
//! always propagated immediately and never retried.

use thiserror::Error;

/// All errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration or validation failure with a human-readable message
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what was invalid
        message: String,
    },

    /// Error from the underlying store, propagated as-is
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A drawing was requested but no patrons are registered at all
    #[error("No patrons found in database")]
    NoPatrons,

    /// A lookup that requires exactly one row found none
    #[error("No patron holds number {number}")]
    PatronNotFound {
        /// The assigned number that matched no patron
        number: i32,
    },

    /// A reset was requested for a week with no recorded drawing
    #[error("No drawing found for week {week}")]
    DrawingNotFound {
        /// The week number with no drawing row
        week: i32,
    },

    /// A drawing was requested for a week that already has one
    #[error("Drawing for week {week} has already been performed")]
    DrawingAlreadyDone {
        /// The week number that is already drawn
        week: i32,
    },

    /// Integer conversion overflow (counts far beyond realistic patron totals)
    #[error("Integer conversion error: {0}")]
    IntConversion(#[from] std::num::TryFromIntError),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
