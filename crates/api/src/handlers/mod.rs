//! Request handlers.
//!
//! Handlers parse path and body, delegate to [`crate::service`], and map
//! results to HTTP responses. Failure translation happens in one place,
//! via `AppError::into_response`.

pub mod books;
