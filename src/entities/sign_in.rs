//! Sign-in entity - Records a patron's attendance for one week.
//!
//! A row makes the patron eligible to collect that week's prize. Rows are
//! only ever inserted; the (patron, week) pair is kept unique by caller-side
//! pre-checks rather than a constraint.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sign-in database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sign_ins")]
pub struct Model {
    /// Unique identifier for the sign-in
    #[sea_orm(primary_key)]
    pub id: i64,
    /// When the sign-in was recorded
    pub created_at: DateTimeUtc,
    /// ID of the patron who signed in
    pub patron_id: Uuid,
    /// Week number the sign-in counts toward
    pub week_number: i32,
}

/// Defines relationships between `SignIn` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each sign-in belongs to one patron
    #[sea_orm(
        belongs_to = "super::patron::Entity",
        from = "Column::PatronId",
        to = "super::patron::Column::Id"
    )]
    Patron,
}

impl Related<super::patron::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Patron.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
