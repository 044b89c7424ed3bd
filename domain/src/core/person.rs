//! Person entity

use super::category::Category;
use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A single roster entry: a full name plus the binary category.
///
/// Immutable once constructed. The constructor rejects blank names; rosters
/// that arrive through deserialization are re-checked by
/// [`Roster::validate`](super::roster::Roster::validate) before a draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    full_name: String,
    category: Category,
}

impl Person {
    /// Create a person, rejecting blank names
    pub fn new(full_name: impl Into<String>, category: Category) -> Result<Self, DomainError> {
        let full_name = full_name.into();
        if full_name.trim().is_empty() {
            return Err(DomainError::InvalidRoster(
                "person with empty name".to_string(),
            ));
        }
        Ok(Self {
            full_name,
            category,
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.full_name, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_new() {
        let person = Person::new("Maria Lopez", Category::B).unwrap();
        assert_eq!(person.full_name(), "Maria Lopez");
        assert_eq!(person.category(), Category::B);
    }

    #[test]
    fn test_person_rejects_blank_name() {
        assert!(Person::new("", Category::A).is_err());
        assert!(Person::new("   ", Category::A).is_err());
    }

    #[test]
    fn test_person_display() {
        let person = Person::new("Juan Perez", Category::A).unwrap();
        assert_eq!(person.to_string(), "Juan Perez (A)");
    }
}
