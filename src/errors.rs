use thiserror::Error;
use uuid::Uuid;

/// Error type that captures the outcomes of booking-state operations.
///
/// Preconditions that fail never pass silently: an unresolved id is
/// `NotFound`, a guarded category delete is `CategoryInUse`, and bad
/// caller input is `InvalidInput` even though the presentation layer
/// is expected to validate first.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("{entity} `{id}` not found")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("category `{name}` still has {services} linked service(s)")]
    CategoryInUse { name: String, services: usize },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl BookingError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
