//! Sample models
//!
//! Records implementing the [`Record`](table_object::Record) contract by hand.

pub mod office;
pub mod user;

pub use office::Office;
pub use user::User;
