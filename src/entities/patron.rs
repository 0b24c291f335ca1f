//! Patron entity - Represents a registered raffle participant.
//!
//! Each patron carries an opaque uuid identity plus a human-facing
//! `assigned_number`, handed out sequentially at registration. Patrons are
//! created once and never mutated or deleted in normal operation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Patron database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "patrons")]
pub struct Model {
    /// Opaque identifier for the patron
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// When the patron registered
    pub created_at: DateTimeUtc,
    /// Display name used for search and drawing announcements
    pub name: String,
    /// Optional contact string (phone, email), free-form
    pub contact: Option<String>,
    /// Sequentially assigned raffle number, unique across all patrons
    #[sea_orm(unique)]
    pub assigned_number: i32,
}

/// Defines relationships between Patron and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One patron has many weekly sign-ins
    #[sea_orm(has_many = "super::sign_in::Entity")]
    SignIns,
}

impl Related<super::sign_in::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SignIns.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
