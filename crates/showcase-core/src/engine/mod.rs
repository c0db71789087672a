pub mod event;
pub mod render;
pub mod snapshot;

use crate::model::card::{Card, CardId};
use crate::model::card_set::CardSet;
use crate::model::category::Category;
use crate::order::{PresentationOrder, ShufflePolicy};
use crate::pagination::cursor::PageCursor;
use crate::pagination::strip::{self, ViewportClass};
use rand::SeedableRng;
use rand::rngs::StdRng;
use render::{NavControl, PageControl, PaginationControls, PaginationView, RenderIntent};
use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineOptions {
    pub shuffle: ShufflePolicy,
    /// Seed for the shuffle RNG; a random seed is drawn when absent.
    pub seed: Option<u64>,
    pub viewport_width: Option<u32>,
}

impl EngineOptions {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn stable() -> Self {
        Self {
            shuffle: ShufflePolicy::Stable,
            ..Self::default()
        }
    }
}

/// Category filter and pagination state for one page load.
#[derive(Debug, Clone)]
pub struct RecipeEngine {
    cards: CardSet,
    category: Category,
    order: PresentationOrder,
    cursor: PageCursor,
    policy: ShufflePolicy,
    viewport_width: Option<u32>,
    rng: StdRng,
    seed: u64,
}

impl RecipeEngine {
    pub fn new(cards: CardSet, options: EngineOptions) -> Self {
        let seed = options.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let category = Category::All;
        let order = PresentationOrder::build(&cards, &category, options.shuffle, &mut rng);
        let cursor = PageCursor::new(order.len());

        tracing::event!(
            Level::DEBUG,
            cards = cards.len(),
            policy = options.shuffle.as_str(),
            seed,
            "recipe engine initialized"
        );

        Self {
            cards,
            category,
            order,
            cursor,
            policy: options.shuffle,
            viewport_width: options.viewport_width,
            rng,
            seed,
        }
    }

    pub fn with_seed(cards: CardSet, seed: u64) -> Self {
        Self::new(cards, EngineOptions::with_seed(seed))
    }

    pub fn cards(&self) -> &CardSet {
        &self.cards
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn order(&self) -> &PresentationOrder {
        &self.order
    }

    pub fn current_page(&self) -> usize {
        self.cursor.current()
    }

    pub fn total_pages(&self) -> usize {
        self.cursor.total_pages()
    }

    pub fn policy(&self) -> ShufflePolicy {
        self.policy
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn viewport_width(&self) -> Option<u32> {
        self.viewport_width
    }

    pub fn viewport_class(&self) -> ViewportClass {
        ViewportClass::from_width(self.viewport_width)
    }

    /// Switches the filter, rebuilds the presentation order and returns to
    /// page one.
    pub fn set_category(&mut self, category: &str) -> RenderIntent {
        self.category = Category::parse(category);
        self.order = PresentationOrder::build(&self.cards, &self.category, self.policy, &mut self.rng);
        self.cursor = PageCursor::new(self.order.len());

        tracing::event!(
            Level::DEBUG,
            category = self.category.as_str(),
            matched = self.order.len(),
            total_pages = self.cursor.total_pages(),
            "category selected"
        );
        self.render()
    }

    /// Jumps to `page`. Targets outside `1..=total_pages` leave the state
    /// untouched and return `None`.
    pub fn go_to_page(&mut self, page: usize) -> Option<RenderIntent> {
        if !self.cursor.go_to(page) {
            tracing::event!(
                Level::TRACE,
                page,
                total_pages = self.cursor.total_pages(),
                "page request ignored"
            );
            return None;
        }
        tracing::event!(Level::DEBUG, page, "page selected");
        Some(self.render())
    }

    pub fn next_page(&mut self) -> Option<RenderIntent> {
        if !self.cursor.next() {
            tracing::event!(Level::TRACE, page = self.cursor.current(), "already on last page");
            return None;
        }
        Some(self.render())
    }

    pub fn prev_page(&mut self) -> Option<RenderIntent> {
        if !self.cursor.prev() {
            tracing::event!(Level::TRACE, "already on first page");
            return None;
        }
        Some(self.render())
    }

    /// Records the new viewport width. Only the page strip layout depends on
    /// it.
    pub fn viewport_changed(&mut self, width: u32) -> RenderIntent {
        self.viewport_width = Some(width);
        tracing::event!(
            Level::TRACE,
            width,
            class = self.viewport_class().as_str(),
            "viewport changed"
        );
        self.render()
    }

    /// Card lookup for collaborators reacting to a click on a card.
    pub fn activate(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn render(&self) -> RenderIntent {
        let (start, end) = self.cursor.window();
        let visible = self.order.slice(start, end).to_vec();
        let hidden = self
            .cards
            .ids()
            .filter(|id| !visible.contains(id))
            .collect();
        let total_pages = self.cursor.total_pages();
        let current_page = self.cursor.current();

        let pagination = if total_pages <= 1 {
            PaginationView::Hidden
        } else {
            let viewport = self.viewport_class();
            PaginationView::Visible(PaginationControls {
                prev: NavControl {
                    disabled: self.cursor.is_first(),
                },
                next: NavControl {
                    disabled: self.cursor.is_last(),
                },
                pages: (1..=total_pages)
                    .map(|number| PageControl {
                        number,
                        active: number == current_page,
                    })
                    .collect(),
                viewport,
                strip: strip::layout(total_pages, current_page, viewport),
            })
        };

        RenderIntent {
            category: self.category.clone(),
            current_page,
            total_pages,
            entering: visible.clone(),
            visible,
            hidden,
            pagination,
        }
    }
}
