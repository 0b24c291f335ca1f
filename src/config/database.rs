//! Database configuration module for `RaffleBuddy`.
//!
//! This module handles `SQLite` database connection and table creation using
//! `SeaORM`. Tables are created from the entity definitions via
//! `Schema::create_table_from_entity`, so the database schema matches the
//! Rust struct definitions without manual SQL.

use crate::entities::{Drawing, Patron, SignIn};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/raffle_buddy.sqlite";

/// Resolves the database URL: the `DATABASE_URL` environment variable wins,
/// then an optional `config.toml`, then a default local `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        return url;
    }
    if let Ok(config) = super::app::load_default_config() {
        if let Some(url) = config.database_url {
            return url;
        }
    }
    DEFAULT_DATABASE_URL.to_string()
}

/// Establishes a connection to the database resolved by [`get_database_url`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url())
        .await
        .map_err(Into::into)
}

/// Creates the patrons, `sign_ins`, and drawings tables from the entity
/// definitions. Existing tables are left untouched, so this is safe to run
/// on every startup.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut patron_table = schema.create_table_from_entity(Patron);
    let mut sign_in_table = schema.create_table_from_entity(SignIn);
    let mut drawing_table = schema.create_table_from_entity(Drawing);

    db.execute(builder.build(patron_table.if_not_exists()))
        .await?;
    db.execute(builder.build(sign_in_table.if_not_exists()))
        .await?;
    db.execute(builder.build(drawing_table.if_not_exists()))
        .await?;

    Ok(())
}

/// Connects and ensures the schema exists, the one-call setup for callers.
pub async fn init_db() -> Result<DatabaseConnection> {
    let db = create_connection().await?;
    create_tables(&db).await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        drawing::Model as DrawingModel, patron::Model as PatronModel,
        sign_in::Model as SignInModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<PatronModel> = Patron::find().limit(1).all(&db).await?;
        let _: Vec<SignInModel> = SignIn::find().limit(1).all(&db).await?;
        let _: Vec<DrawingModel> = Drawing::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let _: Vec<PatronModel> = Patron::find().limit(1).all(&db).await?;
        Ok(())
    }
}
