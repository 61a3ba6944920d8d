//! Route definitions.

pub mod books;
pub mod health;
