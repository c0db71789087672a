//! Viewport-dependent layout of the page-index controls.
//!
//! The strip only decides which page numbers are *shown*; it never moves the
//! cursor or changes which cards are visible.

use serde::{Deserialize, Serialize};

const COMPACT_MAX_WIDTH: u32 = 576;
const MEDIUM_MAX_WIDTH: u32 = 992;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    Compact,
    Medium,
    Wide,
}

impl ViewportClass {
    /// Classifies a viewport width in CSS pixels; an unknown width counts as
    /// wide.
    pub fn from_width(width: Option<u32>) -> Self {
        match width {
            Some(w) if w < COMPACT_MAX_WIDTH => ViewportClass::Compact,
            Some(w) if w < MEDIUM_MAX_WIDTH => ViewportClass::Medium,
            _ => ViewportClass::Wide,
        }
    }

    /// Maximum number of slots the strip may occupy, `None` for unlimited.
    pub const fn slot_budget(self) -> Option<usize> {
        match self {
            ViewportClass::Compact => Some(5),
            ViewportClass::Medium => Some(7),
            ViewportClass::Wide => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ViewportClass::Compact => "compact",
            ViewportClass::Medium => "medium",
            ViewportClass::Wide => "wide",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageSlot {
    Page { number: usize, current: bool },
    Ellipsis,
}

impl PageSlot {
    pub const fn page_number(self) -> Option<usize> {
        match self {
            PageSlot::Page { number, .. } => Some(number),
            PageSlot::Ellipsis => None,
        }
    }
}

/// Lays out the strip for `total_pages` pages with `current` highlighted.
pub fn layout(total_pages: usize, current: usize, class: ViewportClass) -> Vec<PageSlot> {
    let page = |number: usize| PageSlot::Page {
        number,
        current: number == current,
    };

    let Some(budget) = class.slot_budget() else {
        return (1..=total_pages).map(page).collect();
    };
    if total_pages <= budget {
        return (1..=total_pages).map(page).collect();
    }

    // first + last + current + two ellipsis markers, rest split as siblings
    let siblings = (budget - 5) / 2;
    let mut slots = Vec::with_capacity(budget);

    if current <= siblings + 3 {
        slots.extend((1..=budget - 2).map(page));
        slots.push(PageSlot::Ellipsis);
        slots.push(page(total_pages));
    } else if current + siblings + 2 >= total_pages {
        slots.push(page(1));
        slots.push(PageSlot::Ellipsis);
        slots.extend((total_pages + 3 - budget..=total_pages).map(page));
    } else {
        slots.push(page(1));
        slots.push(PageSlot::Ellipsis);
        slots.extend((current - siblings..=current + siblings).map(page));
        slots.push(PageSlot::Ellipsis);
        slots.push(page(total_pages));
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::{PageSlot, ViewportClass, layout};

    fn numbers(slots: &[PageSlot]) -> Vec<Option<usize>> {
        slots.iter().map(|slot| slot.page_number()).collect()
    }

    #[test]
    fn width_classification() {
        assert_eq!(ViewportClass::from_width(None), ViewportClass::Wide);
        assert_eq!(ViewportClass::from_width(Some(375)), ViewportClass::Compact);
        assert_eq!(ViewportClass::from_width(Some(576)), ViewportClass::Medium);
        assert_eq!(ViewportClass::from_width(Some(991)), ViewportClass::Medium);
        assert_eq!(ViewportClass::from_width(Some(1440)), ViewportClass::Wide);
    }

    #[test]
    fn wide_viewport_lists_every_page() {
        let slots = layout(12, 5, ViewportClass::Wide);
        assert_eq!(slots.len(), 12);
        assert!(slots.iter().all(|s| !matches!(s, PageSlot::Ellipsis)));
    }

    #[test]
    fn short_lists_are_never_truncated() {
        assert_eq!(layout(5, 2, ViewportClass::Compact).len(), 5);
        assert!(layout(0, 1, ViewportClass::Compact).is_empty());
    }

    #[test]
    fn compact_windows_near_start_middle_and_end() {
        assert_eq!(
            numbers(&layout(10, 2, ViewportClass::Compact)),
            vec![Some(1), Some(2), Some(3), None, Some(10)]
        );
        assert_eq!(
            numbers(&layout(10, 5, ViewportClass::Compact)),
            vec![Some(1), None, Some(5), None, Some(10)]
        );
        assert_eq!(
            numbers(&layout(10, 9, ViewportClass::Compact)),
            vec![Some(1), None, Some(8), Some(9), Some(10)]
        );
    }

    #[test]
    fn medium_window_keeps_siblings() {
        assert_eq!(
            numbers(&layout(20, 10, ViewportClass::Medium)),
            vec![Some(1), None, Some(9), Some(10), Some(11), None, Some(20)]
        );
    }

    #[test]
    fn every_layout_respects_budget_and_marks_one_current() {
        for class in [ViewportClass::Compact, ViewportClass::Medium] {
            let budget = class.slot_budget().unwrap();
            for total in 1..=30 {
                for current in 1..=total {
                    let slots = layout(total, current, class);
                    assert!(slots.len() <= budget, "{total}/{current} overflowed");
                    assert_eq!(slots.first().and_then(|s| s.page_number()), Some(1));
                    assert_eq!(slots.last().and_then(|s| s.page_number()), Some(total));
                    let currents = slots
                        .iter()
                        .filter(|s| matches!(s, PageSlot::Page { current: true, .. }))
                        .count();
                    assert_eq!(currents, 1, "{total}/{current}");
                }
            }
        }
    }
}
