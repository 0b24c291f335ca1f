//! Patron directory business logic - registration, lookups, and search.
//!
//! Patrons receive a sequential `assigned_number` at registration and are
//! never mutated afterward. Lookups come in two flavors that callers must not
//! confuse: by-id tolerates zero rows (`Ok(None)`), while by-number requires
//! exactly one row and fails otherwise.

use crate::{
    entities::{Patron, patron, sign_in},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use tracing::info;

/// Maximum number of rows a patron search returns.
const SEARCH_LIMIT: u64 = 10;

/// Creates a new patron with the next sequential assigned number.
///
/// Validates that the name is not blank and trims surrounding whitespace.
/// Numbering reads the current maximum and inserts max + 1 (or 1 for the
/// first patron). The two store calls are not transactional, so concurrent
/// registrations can race to the same number; the unique index on
/// `assigned_number` turns that race into a store error instead of a
/// duplicate.
pub async fn create_patron(
    db: &DatabaseConnection,
    name: String,
    contact: Option<String>,
) -> Result<patron::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Patron name cannot be empty".to_string(),
        });
    }

    let highest = Patron::find()
        .order_by_desc(patron::Column::AssignedNumber)
        .one(db)
        .await?;
    let next_number = highest.map_or(1, |p| p.assigned_number + 1);

    let new_patron = patron::ActiveModel {
        id: Set(Uuid::new_v4()),
        created_at: Set(Utc::now()),
        name: Set(name.trim().to_string()),
        contact: Set(contact),
        assigned_number: Set(next_number),
    };

    let created = new_patron.insert(db).await?;
    info!(number = created.assigned_number, "registered patron");
    Ok(created)
}

/// Registers a new patron and signs them in for the given week.
///
/// This is the registration flow: create the patron, then record an
/// automatic sign-in so the new registrant is immediately eligible. The two
/// writes are separate with no transaction between them, so a failure after
/// the first leaves a registered patron with no sign-in.
pub async fn register_patron(
    db: &DatabaseConnection,
    name: String,
    contact: Option<String>,
    week_number: i32,
) -> Result<(patron::Model, sign_in::Model)> {
    let created = create_patron(db, name, contact).await?;
    let auto_sign_in =
        crate::core::sign_in::record_sign_in(db, created.id, week_number).await?;
    Ok((created, auto_sign_in))
}

/// Finds a patron by their opaque id, returning None if no such patron
/// exists. Absence is a valid outcome here, not an error.
pub async fn get_patron_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<patron::Model>> {
    Patron::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Looks up the patron holding an assigned number, requiring exactly one row.
///
/// Unlike [`get_patron_by_id`], absence here is a hard failure: callers pass
/// a number they expect to exist, such as a drawing's drawn number.
pub async fn get_patron_by_number(db: &DatabaseConnection, number: i32) -> Result<patron::Model> {
    Patron::find()
        .filter(patron::Column::AssignedNumber.eq(number))
        .one(db)
        .await?
        .ok_or(Error::PatronNotFound { number })
}

/// Searches patrons by assigned number or name fragment, capped at 10 rows.
///
/// A query that parses as a number matches the exact assigned number;
/// anything else matches as a substring of the name. A blank query returns
/// an empty list without querying the store.
pub async fn search_patrons(db: &DatabaseConnection, query: &str) -> Result<Vec<patron::Model>> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    // SQLite's LIKE is case-insensitive for ASCII, so the name match ignores case.
    let filter = match query.parse::<i32>() {
        Ok(number) => patron::Column::AssignedNumber.eq(number),
        Err(_) => patron::Column::Name.contains(query),
    };

    Patron::find()
        .filter(filter)
        .limit(SEARCH_LIMIT)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves every registered patron, ordered by assigned number.
///
/// This is the candidate pool for the weekly drawing: every registrant is
/// included whether or not they signed in this week.
pub async fn get_all_patrons(db: &DatabaseConnection) -> Result<Vec<patron::Model>> {
    Patron::find()
        .order_by_asc(patron::Column::AssignedNumber)
        .all(db)
        .await
        .map_err(Into::into)
}
