//! Domain errors

use thiserror::Error;

/// Domain-level error types
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed or out-of-range input; caller may resubmit corrected input
    #[error("Validation: {0}")]
    Validation(String),

    /// Ticket, route, or city absent
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// A confirmed booking already occupies the exact journey/seat tuple
    #[error("Seat {seat} is already booked for {route} on {date} at {time}")]
    SeatConflict {
        route: String,
        date: String,
        time: String,
        seat: u32,
    },

    /// Cancel requested for a ticket that is already cancelled
    #[error("Ticket {0} is already cancelled")]
    AlreadyCancelled(String),

    /// Generated ticket identifier collided with an existing one
    #[error("Ticket id already exists: {0}")]
    DuplicateTicketId(String),

    /// Credential check failed
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Storage/database error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Whether this error is likely transient (e.g. DB connection lost)
    /// and the operation may succeed if retried or served by the fallback.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Storage(_))
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_are_transient() {
        assert!(DomainError::Storage("connection reset".into()).is_transient());
    }

    #[test]
    fn business_errors_are_permanent() {
        assert!(!DomainError::Validation("invalid age".into()).is_transient());
        assert!(!DomainError::AlreadyCancelled("AB12CD34".into()).is_transient());
        assert!(!DomainError::NotFound {
            entity: "Route",
            field: "name",
            value: "Harare to Norton".into(),
        }
        .is_transient());
    }
}
