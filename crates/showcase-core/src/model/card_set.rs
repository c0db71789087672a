use crate::model::card::{Card, CardId};
use crate::model::category::Category;

/// Every card present on the page when the engine was initialized, in page
/// order. Captured once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Builds the set from `(category, title)` pairs; ids follow input order.
    pub fn from_entries<I, C, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, T)>,
        C: Into<String>,
        T: Into<String>,
    {
        let cards = entries
            .into_iter()
            .enumerate()
            .map(|(index, (category, title))| Card::new(CardId(index), category, title))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    pub fn contains(&self, id: CardId) -> bool {
        id.index() < self.cards.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(|card| card.id)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Ids of the cards accepted by `category`, in set order.
    pub fn filter(&self, category: &Category) -> Vec<CardId> {
        self.cards
            .iter()
            .filter(|card| category.matches(card))
            .map(|card| card.id)
            .collect()
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for card in &self.cards {
            if !seen.contains(&card.category.as_str()) {
                seen.push(card.category.as_str());
            }
        }
        seen
    }
}
