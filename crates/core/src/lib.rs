//! Domain layer for the Cordel do Saber book catalog.
//!
//! Holds the pieces with no I/O: shared type aliases, the error taxonomy,
//! and the book payload with its validation rules. Persistence lives in
//! `cordel-db`, HTTP in `cordel-api`.

pub mod catalog;
pub mod error;
pub mod types;
