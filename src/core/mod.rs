//! Core business logic - framework-agnostic raffle operations.
//!
//! Everything here is a plain async function over a `DatabaseConnection`
//! (or a pure function, for the week clock), returning structured data for
//! a presentation layer to render.

/// Drawing engine - random selection, outcome evaluation, reset
pub mod drawing;
/// Patron directory - registration, lookups, search
pub mod patron;
/// Sign-in ledger - weekly attendance records
pub mod sign_in;
/// Week stats aggregation for the admin view
pub mod stats;
/// Week clock - week-of-year numbering
pub mod week;
