//! Book catalog payload and validation rules.
//!
//! Provides the wire-facing book payload, the field limits, and the
//! validation function used by the catalog service before any store
//! interaction. Violations are collected in one pass, never fail-fast,
//! so clients receive every problem in a single response.

use serde::Deserialize;

use crate::error::{CoreError, FieldViolation};

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

/// Minimum title length in characters.
pub const TITLE_MIN_CHARS: usize = 2;

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 100;

// ---------------------------------------------------------------------------
// Violation messages (wire-facing, Portuguese)
// ---------------------------------------------------------------------------

pub const MSG_TITLE_REQUIRED: &str = "O título é obrigatório";
pub const MSG_TITLE_LENGTH: &str = "O título deve ter entre 2 e 100 caracteres";
pub const MSG_AUTHOR_REQUIRED: &str = "O nome do autor é obrigatório";
pub const MSG_ISBN_REQUIRED: &str = "O ISBN é obrigatório";
pub const MSG_PRICE_POSITIVE: &str = "O preço deve ser um valor positivo";

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// Incoming book payload for create and update requests.
///
/// Field names follow the JSON wire contract (`titulo`, `nomeAutor`,
/// `isbn`, `preco`). `preco` is optional at the deserialization layer so
/// an absent price surfaces as a validation violation rather than a
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct BookPayload {
    #[serde(rename = "titulo", default)]
    pub title: String,
    #[serde(rename = "nomeAutor", default)]
    pub author_name: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(rename = "preco", default)]
    pub price: Option<f64>,
}

impl BookPayload {
    /// Check all validation rules, collecting every violation.
    ///
    /// Rules are independent: an empty title trips both the required and
    /// the length rule, matching stacked declarative constraints.
    pub fn validate(&self) -> Result<(), CoreError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(violations))
        }
    }

    /// Collect all rule violations for this payload, in field order.
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if is_blank(&self.title) {
            violations.push(FieldViolation {
                field: "titulo",
                message: MSG_TITLE_REQUIRED,
            });
        }
        let title_chars = self.title.chars().count();
        if title_chars < TITLE_MIN_CHARS || title_chars > TITLE_MAX_CHARS {
            violations.push(FieldViolation {
                field: "titulo",
                message: MSG_TITLE_LENGTH,
            });
        }

        if is_blank(&self.author_name) {
            violations.push(FieldViolation {
                field: "nomeAutor",
                message: MSG_AUTHOR_REQUIRED,
            });
        }

        if is_blank(&self.isbn) {
            violations.push(FieldViolation {
                field: "isbn",
                message: MSG_ISBN_REQUIRED,
            });
        }

        // Absent, non-positive, and NaN prices all fail this rule.
        if !self.price.is_some_and(|p| p > 0.0) {
            violations.push(FieldViolation {
                field: "preco",
                message: MSG_PRICE_POSITIVE,
            });
        }

        violations
    }
}

/// A field is blank when it is empty or whitespace-only.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
