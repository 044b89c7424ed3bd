//! Roster aggregate

use super::category::Category;
use super::error::DomainError;
use super::person::Person;
use serde::{Deserialize, Serialize};

/// The ordered input list of people eligible for allocation.
///
/// Duplicates are allowed; order carries no meaning for the draw itself but
/// is preserved for display and export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Number of roster members in the given category
    pub fn count(&self, category: Category) -> usize {
        self.people
            .iter()
            .filter(|p| p.category() == category)
            .count()
    }

    /// Members of the given category, in roster order
    pub fn of_category(&self, category: Category) -> Vec<Person> {
        self.people
            .iter()
            .filter(|p| p.category() == category)
            .cloned()
            .collect()
    }

    /// Re-check invariants that deserialization cannot enforce
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.people.is_empty() {
            return Err(DomainError::InvalidRoster("roster is empty".to_string()));
        }
        for (idx, person) in self.people.iter().enumerate() {
            if person.full_name().trim().is_empty() {
                return Err(DomainError::InvalidRoster(format!(
                    "person at position {idx} has an empty name"
                )));
            }
        }
        Ok(())
    }
}

impl FromIterator<Person> for Roster {
    fn from_iter<T: IntoIterator<Item = Person>>(iter: T) -> Self {
        Self {
            people: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Roster {
    type Item = Person;
    type IntoIter = std::vec::IntoIter<Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.people.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Roster {
        Roster::new(vec![
            Person::new("Ana", Category::B).unwrap(),
            Person::new("Luis", Category::A).unwrap(),
            Person::new("Carla", Category::B).unwrap(),
        ])
    }

    #[test]
    fn test_roster_counts() {
        let roster = sample();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.count(Category::A), 1);
        assert_eq!(roster.count(Category::B), 2);
    }

    #[test]
    fn test_of_category_preserves_order() {
        let roster = sample();
        let b = roster.of_category(Category::B);
        assert_eq!(b.len(), 2);
        assert_eq!(b[0].full_name(), "Ana");
        assert_eq!(b[1].full_name(), "Carla");
    }

    #[test]
    fn test_validate_rejects_empty_roster() {
        let roster = Roster::default();
        assert!(matches!(
            roster.validate(),
            Err(DomainError::InvalidRoster(_))
        ));
    }

    #[test]
    fn test_validate_catches_blank_name_after_deserialization() {
        // Person::new refuses blank names, but serde bypasses the constructor.
        let json = r#"{"people":[{"full_name":"  ","category":"A"}]}"#;
        let roster: Roster = serde_json::from_str(json).unwrap();
        let err = roster.validate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidRoster(_)));
    }

    #[test]
    fn test_validate_accepts_good_roster() {
        assert!(sample().validate().is_ok());
    }
}
