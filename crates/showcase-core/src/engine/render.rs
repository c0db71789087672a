use crate::model::card::CardId;
use crate::model::category::Category;
use crate::pagination::strip::{PageSlot, ViewportClass};
use serde::{Deserialize, Serialize};

/// Everything a rendering adapter needs to bring the page in line with the
/// engine state. Produced fresh by every render; holds no references back
/// into the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderIntent {
    pub category: Category,
    pub current_page: usize,
    pub total_pages: usize,
    /// Cards inside the current page window, in presentation order.
    pub visible: Vec<CardId>,
    /// Every other card of the set, in set order.
    pub hidden: Vec<CardId>,
    /// Cards whose entrance animation should be replayed. Purely cosmetic.
    pub entering: Vec<CardId>,
    pub pagination: PaginationView,
}

impl RenderIntent {
    pub fn is_visible(&self, id: CardId) -> bool {
        self.visible.contains(&id)
    }

    /// Nothing to show at all: the filter matched no card.
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PaginationView {
    /// Zero or one page: neither page numbers nor prev/next are shown.
    Hidden,
    Visible(PaginationControls),
}

impl PaginationView {
    pub fn controls(&self) -> Option<&PaginationControls> {
        match self {
            PaginationView::Hidden => None,
            PaginationView::Visible(controls) => Some(controls),
        }
    }

    pub const fn is_hidden(&self) -> bool {
        matches!(self, PaginationView::Hidden)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationControls {
    pub prev: NavControl,
    pub next: NavControl,
    /// One entry per page, `1..=total_pages`.
    pub pages: Vec<PageControl>,
    pub viewport: ViewportClass,
    /// Subset of `pages` to lay out at the current viewport width.
    pub strip: Vec<PageSlot>,
}

impl PaginationControls {
    pub fn active_page(&self) -> Option<usize> {
        self.pages.iter().find(|p| p.active).map(|p| p.number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavControl {
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageControl {
    pub number: usize,
    pub active: bool,
}
