//! Drawing entity - The persisted outcome of one weekly drawing.
//!
//! At most one row exists per week number, enforced by application logic
//! rather than a constraint. `drawn_number` correlates to a patron's
//! `assigned_number` for display purposes and is deliberately not a foreign
//! key; `winner_id` is null when the drawn patron had not signed in.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Drawing database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "drawings")]
pub struct Model {
    /// Unique identifier for the drawing
    #[sea_orm(primary_key)]
    pub id: i64,
    /// When the drawing was performed
    pub created_at: DateTimeUtc,
    /// Week number this drawing settles
    pub week_number: i32,
    /// Assigned number of the randomly drawn patron
    pub drawn_number: i32,
    /// ID of the winning patron, None when the drawn patron had not signed in
    pub winner_id: Option<Uuid>,
    /// Prize pool at stake, in whole dollars
    pub prize_amount: i32,
}

/// Defines relationships between Drawing and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each drawing optionally references the winning patron
    #[sea_orm(
        belongs_to = "super::patron::Entity",
        from = "Column::WinnerId",
        to = "super::patron::Column::Id"
    )]
    Winner,
}

impl Related<super::patron::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Winner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
