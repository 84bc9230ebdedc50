//! Query builder utilities
//!
//! This module provides SQL statement construction for the generic table.

pub mod sql_generation;


pub use sql_generation::{SqlGenerator, Statement};
