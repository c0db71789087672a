use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use showcase_core::CardSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CATALOG_ENV: &str = "SHOWCASE_CATALOG";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CatalogCard {
    pub category: String,
    pub title: String,
}

/// Static recipe content rendered into the page, in page order.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct Catalog {
    pub cards: Vec<CatalogCard>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse catalog {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        path: PathBuf,
    },
}

static CATALOG: Lazy<Catalog> = Lazy::new(load_catalog);

fn load_catalog() -> Catalog {
    if let Ok(path) = std::env::var(CATALOG_ENV) {
        match Catalog::from_path(&path) {
            Ok(catalog) => return catalog,
            Err(err) => eprintln!("{err}; falling back to placeholder catalog"),
        }
    }

    Catalog::placeholder()
}

impl Catalog {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            source,
            path: path.to_path_buf(),
        })?;
        serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
            source,
            path: path.to_path_buf(),
        })
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Catalog loaded from `SHOWCASE_CATALOG`, or the placeholder menu.
    pub fn current() -> &'static Catalog {
        &CATALOG
    }

    pub fn placeholder() -> Self {
        let entries: [(&str, &str); 14] = [
            ("main", "Hot Honey Fried Chicken"),
            ("dessert", "Honey Panna Cotta"),
            ("main", "Glazed Pork Belly"),
            ("sauce", "Chili Honey Dipping Sauce"),
            ("main", "Honey Lemongrass Salmon"),
            ("dessert", "Sticky Rice with Mango"),
            ("drink", "Honey Ginger Iced Tea"),
            ("main", "Kampot Pepper Wings"),
            ("sauce", "Honey Garlic Glaze"),
            ("dessert", "Hot Honey Vanilla Ice Cream"),
            ("main", "Spicy Honey Beef Skewers"),
            ("drink", "Lime Honey Soda"),
            ("sauce", "Sweet Chili Vinaigrette"),
            ("main", "Honey Roasted Vegetables"),
        ];
        Self {
            cards: entries
                .into_iter()
                .map(|(category, title)| CatalogCard {
                    category: category.into(),
                    title: title.into(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Entries for the category selector: `all` followed by each distinct
    /// category in first-appearance order.
    pub fn categories(&self) -> Vec<String> {
        let mut out = vec![showcase_core::model::category::ALL_SENTINEL.to_string()];
        for card in &self.cards {
            if !out.contains(&card.category) {
                out.push(card.category.clone());
            }
        }
        out
    }

    pub fn card_set(&self) -> CardSet {
        CardSet::from_entries(
            self.cards
                .iter()
                .map(|card| (card.category.clone(), card.title.clone())),
        )
    }
}
