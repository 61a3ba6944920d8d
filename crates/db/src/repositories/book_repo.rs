//! Repository for the `books` table.

use cordel_core::catalog::BookPayload;
use cordel_core::types::DbId;

use crate::models::book::Book;
use crate::DbPool;

/// Column list for the `books` table.
const COLUMNS: &str = "id, title, author_name, isbn, price";

/// Provides single-row CRUD operations for books.
///
/// Each method is one atomic statement; no cross-request transactions or
/// locks are taken here. Payloads are expected to be validated before they
/// reach this layer.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book and return the persisted row with its assigned id.
    pub async fn insert(pool: &DbPool, input: &BookPayload) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (title, author_name, isbn, price) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&input.title)
            .bind(&input.author_name)
            .bind(&input.isbn)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a book by its id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all books in store order.
    pub async fn find_all(pool: &DbPool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books");
        sqlx::query_as::<_, Book>(&query).fetch_all(pool).await
    }

    /// Overwrite all mutable fields of an existing book. The id never changes.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &BookPayload,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET \
                title = $2, \
                author_name = $3, \
                isbn = $4, \
                price = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author_name)
            .bind(&input.isbn)
            .bind(input.price)
            .fetch_optional(pool)
            .await
    }

    /// Permanently remove a book. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Check whether a book with the given id exists.
    pub async fn exists_by_id(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let exists: (i64,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists.0 != 0)
    }
}
