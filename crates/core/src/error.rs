use serde::Serialize;

use crate::types::DbId;

/// A single field-level validation violation, in wire shape
/// (`{"campo": ..., "mensagem": ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Wire name of the offending field (e.g. `preco`).
    #[serde(rename = "campo")]
    pub field: &'static str,
    /// Human-readable message for that field.
    #[serde(rename = "mensagem")]
    pub message: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {} violation(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("Internal error: {0}")]
    Internal(String),
}
