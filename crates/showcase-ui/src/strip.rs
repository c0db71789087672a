use showcase_core::pagination::PageSlot;
use showcase_core::{CardSet, PaginationControls, PaginationView, RenderIntent};

const PREV_LABEL: &str = "‹";
const NEXT_LABEL: &str = "›";
const DISABLED_LABEL: &str = "·";
const ELLIPSIS_LABEL: &str = "…";

/// One-line rendering of the pagination widget, `None` when it is hidden.
pub fn pagination_line(view: &PaginationView) -> Option<String> {
    view.controls().map(controls_line)
}

/// Prev arrow, laid-out page strip, next arrow.
pub fn controls_line(controls: &PaginationControls) -> String {
    let mut parts = Vec::with_capacity(controls.strip.len() + 2);
    parts.push(if controls.prev.disabled {
        DISABLED_LABEL.to_string()
    } else {
        PREV_LABEL.to_string()
    });
    for slot in &controls.strip {
        parts.push(match *slot {
            PageSlot::Page {
                number,
                current: true,
            } => format!("[{number}]"),
            PageSlot::Page { number, .. } => number.to_string(),
            PageSlot::Ellipsis => ELLIPSIS_LABEL.to_string(),
        });
    }
    parts.push(if controls.next.disabled {
        DISABLED_LABEL.to_string()
    } else {
        NEXT_LABEL.to_string()
    });
    parts.join(" ")
}

/// Numbered list of the visible cards, numbering continuing across pages.
pub fn card_lines(intent: &RenderIntent, cards: &CardSet) -> Vec<String> {
    let offset = intent.current_page.saturating_sub(1) * showcase_core::pagination::PAGE_SIZE;
    intent
        .visible
        .iter()
        .enumerate()
        .filter_map(|(i, id)| {
            cards
                .get(*id)
                .map(|card| format!("{:>3}. {card}", offset + i + 1))
        })
        .collect()
}

/// Full text frame: header, cards, pagination line.
pub fn frame(intent: &RenderIntent, cards: &CardSet) -> String {
    let mut out = format!(
        "category: {} | page {}/{}",
        intent.category, intent.current_page, intent.total_pages
    );
    if intent.is_empty() {
        out.push_str("\n  (no recipes)");
        return out;
    }
    for line in card_lines(intent, cards) {
        out.push('\n');
        out.push_str(&line);
    }
    if let Some(line) = pagination_line(&intent.pagination) {
        out.push('\n');
        out.push_str(&line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{card_lines, frame, pagination_line};
    use showcase_core::{CardSet, RecipeEngine};

    fn engine(count: usize) -> RecipeEngine {
        let set = CardSet::from_entries((0..count).map(|i| ("main", format!("Dish {i}"))));
        RecipeEngine::new(set, showcase_core::EngineOptions::stable())
    }

    #[test]
    fn hidden_pagination_renders_nothing() {
        let intent = engine(4).render();
        assert!(pagination_line(&intent.pagination).is_none());
    }

    #[test]
    fn first_page_disables_prev() {
        let intent = engine(14).render();
        assert_eq!(pagination_line(&intent.pagination).unwrap(), "· [1] 2 3 ›");
    }

    #[test]
    fn compact_strip_shows_ellipsis() {
        let mut engine = engine(60);
        engine.go_to_page(5);
        let intent = engine.viewport_changed(320);
        assert_eq!(
            pagination_line(&intent.pagination).unwrap(),
            "‹ 1 … [5] … 10 ›"
        );
    }

    #[test]
    fn card_numbering_continues_across_pages() {
        let mut engine = engine(8);
        let intent = engine.next_page().unwrap();
        let lines = card_lines(&intent, engine.cards());
        assert_eq!(lines, vec!["  7. Dish 6 [main]", "  8. Dish 7 [main]"]);
    }

    #[test]
    fn empty_frame_says_so() {
        let mut engine = engine(3);
        let intent = engine.set_category("dessert");
        assert_eq!(
            frame(&intent, engine.cards()),
            "category: dessert | page 1/0\n  (no recipes)"
        );
    }
}
