//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Incoming payloads live in `cordel-core` next to their
//! validation rules.

pub mod book;
