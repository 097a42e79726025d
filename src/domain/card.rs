use crate::domain::id::make_id;
use serde::{Deserialize, Serialize};

/// A single task: title, free-text description, completion flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl Card {
    /// Creates a new open card with a fresh identity
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: make_id(),
            title: title.into(),
            description: String::new(),
            completed: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

// Equality is identity only: two cards with identical titles but different
// ids are distinct, and an edited card is still the same card.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_defaults() {
        let card = Card::new("Write report");
        assert_eq!(card.title, "Write report");
        assert_eq!(card.description, "");
        assert!(!card.completed);
        assert!(!card.id.is_empty());
    }

    #[test]
    fn test_card_builders() {
        let card = Card::new("Ship release")
            .with_description("Tag and publish")
            .with_completed(true);
        assert_eq!(card.description, "Tag and publish");
        assert!(card.completed);
    }

    #[test]
    fn test_equality_is_by_id() {
        let a = Card::new("Same title");
        let b = Card::new("Same title");
        assert_ne!(a, b);

        let mut edited = a.clone();
        edited.title = "Renamed".to_string();
        edited.completed = true;
        assert_eq!(a, edited);
    }

    #[test]
    fn test_minimal_document_loads_with_defaults() {
        let json = r#"{"id": "abc", "title": "Bare card"}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.description, "");
        assert!(!card.completed);
    }
}
