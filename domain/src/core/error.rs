//! Domain error types

use super::category::Category;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    #[error("Not enough category {category} participants: required {required}, available {available}")]
    InsufficientParticipants {
        category: Category,
        required: usize,
        available: usize,
    },
}

impl DomainError {
    /// Check if this error means the roster cannot satisfy the quotas
    pub fn is_insufficient(&self) -> bool {
        matches!(self, DomainError::InsufficientParticipants { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_participants_display() {
        let error = DomainError::InsufficientParticipants {
            category: Category::A,
            required: 54,
            available: 50,
        };
        assert_eq!(
            error.to_string(),
            "Not enough category A participants: required 54, available 50"
        );
        assert!(error.is_insufficient());
    }

    #[test]
    fn test_invalid_roster_display() {
        let error = DomainError::InvalidRoster("blank name at row 3".to_string());
        assert_eq!(error.to_string(), "Invalid roster: blank name at row 3");
        assert!(!error.is_insufficient());
    }
}
