use serde::{Deserialize, Serialize};
use showcase_core::{Card, Category};

/// Event name shared by every content interaction.
pub const SELECT_CONTENT: &str = "select_content";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    RecipeCategory,
    Recipe,
}

impl ContentType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ContentType::RecipeCategory => "recipe_category",
            ContentType::Recipe => "recipe",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsEvent {
    CategorySelected { category: String },
    RecipeActivated { title: String, category: String },
}

/// Wire shape handed to the analytics backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPayload {
    pub name: String,
    pub content_type: ContentType,
    pub content_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl AnalyticsEvent {
    pub fn category(category: &Category) -> Self {
        AnalyticsEvent::CategorySelected {
            category: category.as_str().to_string(),
        }
    }

    pub fn recipe(card: &Card) -> Self {
        AnalyticsEvent::RecipeActivated {
            title: card.title.clone(),
            category: card.category.clone(),
        }
    }

    pub const fn name(&self) -> &'static str {
        SELECT_CONTENT
    }

    pub const fn content_type(&self) -> ContentType {
        match self {
            AnalyticsEvent::CategorySelected { .. } => ContentType::RecipeCategory,
            AnalyticsEvent::RecipeActivated { .. } => ContentType::Recipe,
        }
    }

    pub fn content_id(&self) -> &str {
        match self {
            AnalyticsEvent::CategorySelected { category } => category,
            AnalyticsEvent::RecipeActivated { title, .. } => title,
        }
    }

    pub fn payload(&self) -> EventPayload {
        EventPayload {
            name: self.name().to_string(),
            content_type: self.content_type(),
            content_id: self.content_id().to_string(),
            category: match self {
                AnalyticsEvent::CategorySelected { .. } => None,
                AnalyticsEvent::RecipeActivated { category, .. } => Some(category.clone()),
            },
        }
    }
}
