use crate::surface::{CardSurface, PaginationSurface};
use showcase_analytics::{AnalyticsEvent, Notifier};
use showcase_core::{
    CardSet, EngineOptions, InputEvent, Outcome, PaginationView, RecipeEngine, RenderIntent,
};
use tracing::{Level, event};

/// What the host page provides. Any part may be missing: pages without the
/// recipe grid still mount a controller, it just stays inert.
pub struct PageBindings<C, P> {
    pub content: Option<CardSet>,
    pub cards: Option<C>,
    pub pagination: Option<P>,
}

impl<C, P> PageBindings<C, P> {
    pub fn new(content: CardSet, cards: C, pagination: P) -> Self {
        Self {
            content: Some(content),
            cards: Some(cards),
            pagination: Some(pagination),
        }
    }

    pub fn empty() -> Self {
        Self {
            content: None,
            cards: None,
            pagination: None,
        }
    }
}

pub struct PageController<C, P> {
    engine: Option<RecipeEngine>,
    cards: Option<C>,
    pagination: Option<P>,
    notifier: Notifier,
    last_intent: Option<RenderIntent>,
}

impl<C: CardSurface, P: PaginationSurface> PageController<C, P> {
    pub fn mount(bindings: PageBindings<C, P>, options: EngineOptions, notifier: Notifier) -> Self {
        let PageBindings {
            content,
            cards,
            pagination,
        } = bindings;

        let engine = match (content, cards.is_some()) {
            (Some(content), true) => Some(RecipeEngine::new(content, options)),
            _ => {
                event!(Level::DEBUG, "recipe grid not present; controller inert");
                None
            }
        };

        let mut controller = Self {
            engine,
            cards,
            pagination,
            notifier,
            last_intent: None,
        };
        if let Some(intent) = controller.engine.as_ref().map(RecipeEngine::render) {
            controller.apply(&intent);
            controller.last_intent = Some(intent);
        }
        controller
    }

    pub fn is_active(&self) -> bool {
        self.engine.is_some()
    }

    pub fn engine(&self) -> Option<&RecipeEngine> {
        self.engine.as_ref()
    }

    pub fn card_surface(&self) -> Option<&C> {
        self.cards.as_ref()
    }

    pub fn pagination_surface(&self) -> Option<&P> {
        self.pagination.as_ref()
    }

    /// Most recent render applied to the surfaces.
    pub fn last_intent(&self) -> Option<&RenderIntent> {
        self.last_intent.as_ref()
    }

    pub fn dispatch(&mut self, input: &InputEvent) -> Outcome {
        let Some(engine) = self.engine.as_mut() else {
            event!(Level::TRACE, %input, "event ignored by inert controller");
            return Outcome::Unchanged;
        };

        let outcome = engine.handle(input);
        match &outcome {
            Outcome::Rendered(intent) => {
                if input_is_category(input) {
                    self.notifier
                        .notify(&AnalyticsEvent::category(&intent.category));
                }
                self.apply(intent);
                self.last_intent = Some(intent.clone());
            }
            Outcome::Activated(card) => {
                self.notifier.notify(&AnalyticsEvent::recipe(card));
            }
            Outcome::Unchanged => {}
        }
        outcome
    }

    fn apply(&mut self, intent: &RenderIntent) {
        match self.cards.as_mut() {
            Some(cards) => {
                for id in intent.hidden.iter().chain(&intent.visible) {
                    cards.set_visible(*id, false);
                }
                for id in &intent.visible {
                    cards.set_visible(*id, true);
                }
                for id in &intent.entering {
                    cards.play_entrance(*id);
                }
            }
            None => event!(Level::DEBUG, "card container missing; skipping card update"),
        }

        match self.pagination.as_mut() {
            Some(pagination) => match &intent.pagination {
                PaginationView::Hidden => pagination.hide(),
                PaginationView::Visible(controls) => pagination.show(controls),
            },
            None => event!(
                Level::DEBUG,
                "pagination container missing; skipping pagination update"
            ),
        }
    }
}

fn input_is_category(input: &InputEvent) -> bool {
    matches!(input, InputEvent::CategorySelected(_))
}
