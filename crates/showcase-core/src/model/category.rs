use crate::model::card::Card;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Sentinel accepted by the category selector for "show everything".
pub const ALL_SENTINEL: &str = "all";

/// Active category filter. Any tag is accepted; a tag no card carries simply
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Category {
    #[default]
    All,
    Tag(String),
}

impl Category {
    pub fn parse(value: &str) -> Self {
        if value == ALL_SENTINEL {
            Category::All
        } else {
            Category::Tag(value.to_string())
        }
    }

    pub fn matches(&self, card: &Card) -> bool {
        match self {
            Category::All => true,
            Category::Tag(tag) => card.is_tagged(tag),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::All => ALL_SENTINEL,
            Category::Tag(tag) => tag,
        }
    }

    pub const fn is_all(&self) -> bool {
        matches!(self, Category::All)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::parse(value)
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        if value == ALL_SENTINEL {
            Category::All
        } else {
            Category::Tag(value)
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::All => ALL_SENTINEL.to_string(),
            Category::Tag(tag) => tag,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
