//! Category value object
//!
//! The binary attribute the quotas are computed over. External data may spell
//! the two sides however it likes (e.g. `HOMBRE`/`MUJER` in the original
//! deployment); adapters map those spellings to `A`/`B` before anything
//! reaches the domain.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The binary category a person belongs to (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    A,
    B,
}

impl Category {
    /// Canonical string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
        }
    }

    /// Both categories, in canonical order
    pub fn all() -> [Category; 2] {
        [Category::A, Category::B]
    }

    /// The opposite category
    pub fn other(&self) -> Category {
        match self {
            Category::A => Category::B,
            Category::B => Category::A,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Category::A),
            "B" | "b" => Ok(Category::B),
            other => Err(format!("unrecognized category: {other:?}")),
        }
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in Category::all() {
            let s = category.to_string();
            let parsed: Category = s.parse().unwrap();
            assert_eq!(category, parsed);
        }
    }

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!("a".parse::<Category>().unwrap(), Category::A);
        assert_eq!(" B ".parse::<Category>().unwrap(), Category::B);
    }

    #[test]
    fn test_category_parse_rejects_unknown() {
        assert!("C".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_other() {
        assert_eq!(Category::A.other(), Category::B);
        assert_eq!(Category::B.other(), Category::A);
    }

    #[test]
    fn test_category_serde_as_string() {
        let json = serde_json::to_string(&Category::B).unwrap();
        assert_eq!(json, "\"B\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::B);
    }
}
