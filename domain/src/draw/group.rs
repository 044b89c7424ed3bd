//! Group types

use crate::core::category::Category;
use crate::core::person::Person;
use serde::{Deserialize, Serialize};

/// Which of the two output groups a person was assigned to.
///
/// Canonical identifiers are `group1`/`group2`; human-facing display names
/// (e.g. "Alianza Verde" / "Alianza Azul") are presentation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupLabel {
    Group1,
    Group2,
}

impl GroupLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupLabel::Group1 => "group1",
            GroupLabel::Group2 => "group2",
        }
    }
}

impl std::fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl serde::Serialize for GroupLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for GroupLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "group1" => Ok(GroupLabel::Group1),
            "group2" => Ok(GroupLabel::Group2),
            other => Err(serde::de::Error::custom(format!(
                "unrecognized group label: {other:?}"
            ))),
        }
    }
}

/// One of the two output partitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub label: GroupLabel,
    pub members: Vec<Person>,
}

impl Group {
    pub fn new(label: GroupLabel) -> Self {
        Self {
            label,
            members: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of members in the given category
    pub fn count(&self, category: Category) -> usize {
        self.members
            .iter()
            .filter(|p| p.category() == category)
            .count()
    }
}
