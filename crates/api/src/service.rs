//! Catalog service: the translation layer between payloads and rows.
//!
//! Runs validation before any store interaction, maps payloads to
//! repository calls, and surfaces typed failures ([`AppError`]). HTTP
//! status codes and bodies are the handlers' concern, never this layer's.

use cordel_core::catalog::BookPayload;
use cordel_core::error::CoreError;
use cordel_core::types::DbId;
use cordel_db::models::book::Book;
use cordel_db::repositories::BookRepo;
use cordel_db::DbPool;

use crate::error::AppResult;

/// Entity name used in not-found failures.
const ENTITY: &str = "Livro";

/// Stateless per-request orchestrator over [`BookRepo`].
///
/// Constructed once at process start and shared through `AppState`.
#[derive(Clone)]
pub struct CatalogService {
    pool: DbPool,
}

impl CatalogService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Fetch every book, in store order.
    pub async fn list_all(&self) -> AppResult<Vec<Book>> {
        Ok(BookRepo::find_all(&self.pool).await?)
    }

    /// Fetch a single book by id.
    pub async fn get_by_id(&self, id: DbId) -> AppResult<Book> {
        BookRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| CoreError::NotFound { entity: ENTITY, id }.into())
    }

    /// Validate and persist a new book, returning the row with its
    /// assigned id.
    pub async fn create(&self, payload: BookPayload) -> AppResult<Book> {
        payload.validate()?;
        let book = BookRepo::insert(&self.pool, &payload).await?;
        tracing::info!(id = book.id, "Book created");
        Ok(book)
    }

    /// Validate and overwrite all mutable fields of an existing book.
    ///
    /// Validation runs first; a missing id is only reported for valid
    /// payloads, and in that case nothing is written to the store.
    pub async fn update(&self, id: DbId, payload: BookPayload) -> AppResult<Book> {
        payload.validate()?;
        let book = BookRepo::update(&self.pool, id, &payload)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        tracing::info!(id, "Book updated");
        Ok(book)
    }

    /// Permanently remove a book.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        let deleted = BookRepo::delete(&self.pool, id).await?;
        if !deleted {
            return Err(CoreError::NotFound { entity: ENTITY, id }.into());
        }
        tracing::info!(id, "Book deleted");
        Ok(())
    }
}
