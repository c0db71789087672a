use core::fmt;
use serde::{Deserialize, Serialize};

/// Position of a card inside the [`CardSet`](crate::model::card_set::CardSet) it was captured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub usize);

impl CardId {
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub category: String,
    pub title: String,
}

impl Card {
    pub fn new(id: CardId, category: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            category: category.into(),
            title: title.into(),
        }
    }

    pub fn is_tagged(&self, tag: &str) -> bool {
        self.category == tag
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, CardId};

    #[test]
    fn display_includes_title_and_category() {
        let card = Card::new(CardId(3), "dessert", "Honey Panna Cotta");
        assert_eq!(card.to_string(), "Honey Panna Cotta [dessert]");
        assert_eq!(card.id.to_string(), "#3");
    }

    #[test]
    fn tag_match_is_exact() {
        let card = Card::new(CardId(0), "main", "Chili Wings");
        assert!(card.is_tagged("main"));
        assert!(!card.is_tagged("Main"));
        assert!(!card.is_tagged(""));
    }
}
