use showcase_core::{CardId, CardSet, PaginationControls};
use showcase_ui::strip::controls_line;

/// Container holding the recipe cards.
pub trait CardSurface {
    fn set_visible(&mut self, id: CardId, visible: bool);

    /// Restart the entrance animation of a card that was just shown.
    fn play_entrance(&mut self, _id: CardId) {}
}

/// Prev/next buttons plus the page-number container.
pub trait PaginationSurface {
    fn hide(&mut self);
    fn show(&mut self, controls: &PaginationControls);
}

/// Card grid kept as text, in the order cards were shown.
#[derive(Debug, Clone)]
pub struct TextGrid {
    cards: CardSet,
    shown: Vec<CardId>,
    entrances: usize,
}

impl TextGrid {
    pub fn new(cards: CardSet) -> Self {
        Self {
            cards,
            shown: Vec::new(),
            entrances: 0,
        }
    }

    pub fn shown(&self) -> &[CardId] {
        &self.shown
    }

    pub fn entrances(&self) -> usize {
        self.entrances
    }

    pub fn lines(&self) -> Vec<String> {
        self.shown
            .iter()
            .filter_map(|id| self.cards.get(*id))
            .map(|card| format!("  - {card}"))
            .collect()
    }
}

impl CardSurface for TextGrid {
    fn set_visible(&mut self, id: CardId, visible: bool) {
        let present = self.shown.iter().position(|shown| *shown == id);
        match (visible, present) {
            (true, None) => self.shown.push(id),
            (false, Some(index)) => {
                self.shown.remove(index);
            }
            _ => {}
        }
    }

    fn play_entrance(&mut self, _id: CardId) {
        self.entrances += 1;
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextPager {
    line: Option<String>,
}

impl TextPager {
    pub fn new() -> Self {
        Self { line: None }
    }

    /// Current widget text, `None` while hidden.
    pub fn line(&self) -> Option<&str> {
        self.line.as_deref()
    }
}

impl PaginationSurface for TextPager {
    fn hide(&mut self) {
        self.line = None;
    }

    fn show(&mut self, controls: &PaginationControls) {
        self.line = Some(controls_line(controls));
    }
}
