use super::RecipeEngine;
use super::render::RenderIntent;
use crate::model::card::{Card, CardId};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discrete inputs the page can feed the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum InputEvent {
    CategorySelected(String),
    PageRequested(usize),
    NextRequested,
    PrevRequested,
    ViewportChanged(u32),
    CardActivated(CardId),
}

/// Result of handling one [`InputEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Rendered(RenderIntent),
    Unchanged,
    /// A card was clicked; engine state is untouched.
    Activated(Card),
}

impl Outcome {
    pub fn intent(&self) -> Option<&RenderIntent> {
        match self {
            Outcome::Rendered(intent) => Some(intent),
            _ => None,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Outcome::Rendered(_) => "rendered",
            Outcome::Unchanged => "unchanged",
            Outcome::Activated(_) => "activated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEventError {
    #[error("empty event")]
    Empty,
    #[error("unknown event '{0}'; expected category:, page:, next, prev, viewport: or activate:")]
    UnknownKind(String),
    #[error("event '{kind}' requires a value")]
    MissingValue { kind: &'static str },
    #[error("invalid number '{value}' for '{kind}'")]
    InvalidNumber { kind: &'static str, value: String },
}

impl FromStr for InputEvent {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseEventError::Empty);
        }
        let (kind, value) = match trimmed.split_once(':') {
            Some((kind, value)) => (kind.trim(), Some(value.trim())),
            None => (trimmed, None),
        };

        match kind.to_ascii_lowercase().as_str() {
            "next" => Ok(InputEvent::NextRequested),
            "prev" | "previous" => Ok(InputEvent::PrevRequested),
            "category" => {
                let value = required("category", value)?;
                Ok(InputEvent::CategorySelected(value.to_string()))
            }
            "page" => number("page", value).map(InputEvent::PageRequested),
            "viewport" | "width" => number("viewport", value).map(InputEvent::ViewportChanged),
            "activate" => number("activate", value).map(|n| InputEvent::CardActivated(CardId(n))),
            other => Err(ParseEventError::UnknownKind(other.to_string())),
        }
    }
}

fn required<'a>(kind: &'static str, value: Option<&'a str>) -> Result<&'a str, ParseEventError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ParseEventError::MissingValue { kind }),
    }
}

fn number<T: FromStr>(kind: &'static str, value: Option<&str>) -> Result<T, ParseEventError> {
    let raw = required(kind, value)?;
    raw.parse::<T>().map_err(|_| ParseEventError::InvalidNumber {
        kind,
        value: raw.to_string(),
    })
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEvent::CategorySelected(category) => write!(f, "category:{category}"),
            InputEvent::PageRequested(page) => write!(f, "page:{page}"),
            InputEvent::NextRequested => f.write_str("next"),
            InputEvent::PrevRequested => f.write_str("prev"),
            InputEvent::ViewportChanged(width) => write!(f, "viewport:{width}"),
            InputEvent::CardActivated(id) => write!(f, "activate:{}", id.index()),
        }
    }
}

impl RecipeEngine {
    /// Routes one input event to the matching engine operation.
    pub fn handle(&mut self, event: &InputEvent) -> Outcome {
        let rendered = match event {
            InputEvent::CategorySelected(category) => Some(self.set_category(category)),
            InputEvent::PageRequested(page) => self.go_to_page(*page),
            InputEvent::NextRequested => self.next_page(),
            InputEvent::PrevRequested => self.prev_page(),
            InputEvent::ViewportChanged(width) => Some(self.viewport_changed(*width)),
            InputEvent::CardActivated(id) => {
                return match self.activate(*id) {
                    Some(card) => Outcome::Activated(card.clone()),
                    None => Outcome::Unchanged,
                };
            }
        };
        rendered.map_or(Outcome::Unchanged, Outcome::Rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::{InputEvent, Outcome, ParseEventError};
    use crate::engine::RecipeEngine;
    use crate::model::card::CardId;
    use crate::model::card_set::CardSet;

    #[test]
    fn parses_textual_events() {
        assert_eq!(
            "category:dessert".parse::<InputEvent>(),
            Ok(InputEvent::CategorySelected("dessert".into()))
        );
        assert_eq!("page: 3".parse::<InputEvent>(), Ok(InputEvent::PageRequested(3)));
        assert_eq!("NEXT".parse::<InputEvent>(), Ok(InputEvent::NextRequested));
        assert_eq!("previous".parse::<InputEvent>(), Ok(InputEvent::PrevRequested));
        assert_eq!("width:480".parse::<InputEvent>(), Ok(InputEvent::ViewportChanged(480)));
        assert_eq!(
            "activate:2".parse::<InputEvent>(),
            Ok(InputEvent::CardActivated(CardId(2)))
        );
    }

    #[test]
    fn rejects_malformed_events() {
        assert_eq!("".parse::<InputEvent>(), Err(ParseEventError::Empty));
        assert_eq!(
            "page".parse::<InputEvent>(),
            Err(ParseEventError::MissingValue { kind: "page" })
        );
        assert!(matches!(
            "page:-1".parse::<InputEvent>(),
            Err(ParseEventError::InvalidNumber { .. })
        ));
        assert!(matches!(
            "scroll:4".parse::<InputEvent>(),
            Err(ParseEventError::UnknownKind(kind)) if kind == "scroll"
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for event in [
            InputEvent::CategorySelected("main".into()),
            InputEvent::PageRequested(2),
            InputEvent::NextRequested,
            InputEvent::ViewportChanged(720),
            InputEvent::CardActivated(CardId(7)),
        ] {
            assert_eq!(event.to_string().parse::<InputEvent>(), Ok(event));
        }
    }

    #[test]
    fn handle_maps_events_to_outcomes() {
        let set = CardSet::from_entries((0..8).map(|i| ("main", format!("R{i}"))));
        let mut engine = RecipeEngine::with_seed(set, 1);

        assert!(matches!(
            engine.handle(&InputEvent::NextRequested),
            Outcome::Rendered(intent) if intent.current_page == 2
        ));
        assert_eq!(engine.handle(&InputEvent::NextRequested), Outcome::Unchanged);
        assert_eq!(engine.handle(&InputEvent::PageRequested(9)), Outcome::Unchanged);
        assert!(matches!(
            engine.handle(&InputEvent::CardActivated(CardId(3))),
            Outcome::Activated(card) if card.title == "R3"
        ));
        assert_eq!(
            engine.handle(&InputEvent::CardActivated(CardId(30))),
            Outcome::Unchanged
        );
        assert_eq!(engine.current_page(), 2);
    }
}
