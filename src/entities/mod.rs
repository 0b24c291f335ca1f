//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod drawing;
pub mod patron;
pub mod sign_in;

// Re-export specific types to avoid conflicts
pub use drawing::{Column as DrawingColumn, Entity as Drawing, Model as DrawingModel};
pub use patron::{Column as PatronColumn, Entity as Patron, Model as PatronModel};
pub use sign_in::{Column as SignInColumn, Entity as SignIn, Model as SignInModel};
