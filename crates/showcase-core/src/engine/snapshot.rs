use super::{EngineOptions, RecipeEngine};
use crate::model::card::CardId;
use crate::model::card_set::CardSet;
use crate::model::category::Category;
use crate::order::{PresentationOrder, ShufflePolicy};
use crate::pagination::cursor::{PageCursor, total_pages_for};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Serializable view of the mutable engine state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub category: Category,
    pub order: Vec<CardId>,
    pub current_page: usize,
    pub total_pages: usize,
    pub shuffle: ShufflePolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport_width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("snapshot references card {0} which is not in the card set")]
    UnknownCard(CardId),
    #[error("snapshot lists card {0} more than once")]
    DuplicateCard(CardId),
    #[error("card {0} does not belong to category '{1}'")]
    CategoryMismatch(CardId, String),
    #[error("order lists {listed} cards but category '{category}' matches {expected}")]
    IncompleteOrder {
        category: String,
        listed: usize,
        expected: usize,
    },
    #[error("snapshot records {recorded} pages but {items} cards make {expected}")]
    TotalPagesMismatch {
        recorded: usize,
        expected: usize,
        items: usize,
    },
    #[error("page {page} is out of range for {items} cards")]
    PageOutOfRange { page: usize, items: usize },
}

impl EngineSnapshot {
    pub fn capture(engine: &RecipeEngine) -> Self {
        Self {
            category: engine.category().clone(),
            order: engine.order().ids().to_vec(),
            current_page: engine.current_page(),
            total_pages: engine.total_pages(),
            shuffle: engine.policy(),
            viewport_width: engine.viewport_width(),
        }
    }

    pub fn to_json(engine: &RecipeEngine) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Self::capture(engine))
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl RecipeEngine {
    /// Rebuilds an engine over `cards` at the position recorded in
    /// `snapshot`. Later reshuffles draw from `seed`.
    pub fn restore(
        cards: CardSet,
        snapshot: &EngineSnapshot,
        seed: Option<u64>,
    ) -> Result<Self, SnapshotError> {
        let mut seen = vec![false; cards.len()];
        for &id in &snapshot.order {
            let card = cards.get(id).ok_or(SnapshotError::UnknownCard(id))?;
            if !snapshot.category.matches(card) {
                return Err(SnapshotError::CategoryMismatch(
                    id,
                    snapshot.category.to_string(),
                ));
            }
            if std::mem::replace(&mut seen[id.index()], true) {
                return Err(SnapshotError::DuplicateCard(id));
            }
        }
        let items = snapshot.order.len();
        let expected = cards.filter(&snapshot.category).len();
        if items != expected {
            return Err(SnapshotError::IncompleteOrder {
                category: snapshot.category.to_string(),
                listed: items,
                expected,
            });
        }
        if snapshot.total_pages != total_pages_for(items) {
            return Err(SnapshotError::TotalPagesMismatch {
                recorded: snapshot.total_pages,
                expected: total_pages_for(items),
                items,
            });
        }
        let cursor = PageCursor::at(items, snapshot.current_page).ok_or(
            SnapshotError::PageOutOfRange {
                page: snapshot.current_page,
                items,
            },
        )?;

        let mut engine = RecipeEngine::new(
            cards,
            EngineOptions {
                shuffle: snapshot.shuffle,
                seed,
                viewport_width: snapshot.viewport_width,
            },
        );
        engine.category = snapshot.category.clone();
        engine.order = PresentationOrder::from_ids(snapshot.order.clone());
        engine.cursor = cursor;
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::{EngineSnapshot, SnapshotError};
    use crate::engine::RecipeEngine;
    use crate::model::card::CardId;
    use crate::model::card_set::CardSet;

    fn set() -> CardSet {
        CardSet::from_entries((0..14).map(|i| {
            (
                if i % 2 == 0 { "main" } else { "sauce" },
                format!("Recipe {i}"),
            )
        }))
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut engine = RecipeEngine::with_seed(set(), 77);
        engine.set_category("sauce");
        let json = EngineSnapshot::to_json(&engine).unwrap();
        assert!(json.contains("\"category\": \"sauce\""));
        assert!(json.contains("\"current_page\": 1"));
        assert!(json.contains("\"shuffle\": \"reshuffle\""));
        assert!(!json.contains("viewport_width"));
    }

    #[test]
    fn restore_resumes_position_and_order() {
        let mut engine = RecipeEngine::with_seed(set(), 5);
        engine.go_to_page(2);
        let snapshot = EngineSnapshot::capture(&engine);

        let restored = RecipeEngine::restore(set(), &snapshot, Some(1)).unwrap();
        assert_eq!(restored.current_page(), 2);
        assert_eq!(restored.order(), engine.order());
        assert_eq!(restored.render().visible, engine.render().visible);
    }

    #[test]
    fn restore_rejects_inconsistent_snapshots() {
        let engine = RecipeEngine::with_seed(set(), 5);
        let mut snapshot = EngineSnapshot::capture(&engine);

        snapshot.current_page = 4;
        assert!(matches!(
            RecipeEngine::restore(set(), &snapshot, None),
            Err(SnapshotError::PageOutOfRange { page: 4, items: 14 })
        ));

        snapshot.current_page = 1;
        snapshot.order.push(CardId(20));
        assert_eq!(
            RecipeEngine::restore(set(), &snapshot, None).unwrap_err(),
            SnapshotError::UnknownCard(CardId(20))
        );

        snapshot.order.pop();
        let first = snapshot.order[0];
        snapshot.order.push(first);
        assert_eq!(
            RecipeEngine::restore(set(), &snapshot, None).unwrap_err(),
            SnapshotError::DuplicateCard(first)
        );
    }

    #[test]
    fn restore_requires_every_matching_card() {
        let all_main = CardSet::from_entries((0..14).map(|i| ("main", format!("Dish {i}"))));
        let json = r#"{
            "category": "main",
            "order": [3],
            "current_page": 1,
            "total_pages": 3,
            "shuffle": "reshuffle"
        }"#;
        let snapshot = EngineSnapshot::from_json(json).unwrap();
        assert_eq!(
            RecipeEngine::restore(all_main, &snapshot, None).unwrap_err(),
            SnapshotError::IncompleteOrder {
                category: "main".into(),
                listed: 1,
                expected: 14,
            }
        );
    }

    #[test]
    fn restore_checks_recorded_page_count() {
        let engine = RecipeEngine::with_seed(set(), 5);
        let mut snapshot = EngineSnapshot::capture(&engine);
        snapshot.total_pages = 5;
        assert_eq!(
            RecipeEngine::restore(set(), &snapshot, None).unwrap_err(),
            SnapshotError::TotalPagesMismatch {
                recorded: 5,
                expected: 3,
                items: 14,
            }
        );
    }

    #[test]
    fn restore_checks_category_membership() {
        let json = r#"{
            "category": "main",
            "order": [0, 1],
            "current_page": 1,
            "total_pages": 1,
            "shuffle": "stable"
        }"#;
        let snapshot = EngineSnapshot::from_json(json).unwrap();
        assert_eq!(
            RecipeEngine::restore(set(), &snapshot, None).unwrap_err(),
            SnapshotError::CategoryMismatch(CardId(1), "main".into())
        );
    }
}
