//! Book entity model.

use serde::Serialize;
use sqlx::FromRow;

use cordel_core::types::DbId;

/// A row from the `books` table.
///
/// Serializes with the Portuguese wire keys the HTTP contract requires
/// (`titulo`, `nomeAutor`, `isbn`, `preco`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Book {
    pub id: DbId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "nomeAutor")]
    pub author_name: String,
    pub isbn: String,
    #[serde(rename = "preco")]
    pub price: f64,
}
