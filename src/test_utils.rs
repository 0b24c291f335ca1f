//! Shared test utilities for `RaffleBuddy`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{patron, sign_in},
    entities,
    errors::Result,
};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test patron with no contact info.
pub async fn create_test_patron(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::patron::Model> {
    patron::create_patron(db, name.to_string(), None).await
}

/// Creates a test patron with custom contact info.
pub async fn create_custom_patron(
    db: &DatabaseConnection,
    name: &str,
    contact: Option<String>,
) -> Result<entities::patron::Model> {
    patron::create_patron(db, name.to_string(), contact).await
}

/// Signs a patron in for a week.
pub async fn sign_in_patron(
    db: &DatabaseConnection,
    signer: &entities::patron::Model,
    week_number: i32,
) -> Result<entities::sign_in::Model> {
    sign_in::record_sign_in(db, signer.id, week_number).await
}

/// Inserts a drawing row directly with an explicit creation timestamp, so
/// tests can control which drawing counts as the most recent.
pub async fn insert_drawing(
    db: &DatabaseConnection,
    week_number: i32,
    drawn_number: i32,
    winner_id: Option<Uuid>,
    prize_amount: i32,
    created_at: DateTime<Utc>,
) -> Result<entities::drawing::Model> {
    entities::drawing::ActiveModel {
        created_at: Set(created_at),
        week_number: Set(week_number),
        drawn_number: Set(drawn_number),
        winner_id: Set(winner_id),
        prize_amount: Set(prize_amount),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Sets up a database with `count` patrons already registered, named
/// "Patron 0" through "Patron count-1" with numbers 1 through count.
/// Returns (db, patrons) for drawing and stats scenarios.
pub async fn setup_with_patrons(
    count: usize,
) -> Result<(DatabaseConnection, Vec<entities::patron::Model>)> {
    let db = setup_test_db().await?;
    let mut patrons = Vec::with_capacity(count);
    for i in 0..count {
        patrons.push(create_test_patron(&db, &format!("Patron {i}")).await?);
    }
    Ok((db, patrons))
}
