#![deny(warnings)]
pub mod engine;
pub mod model;
pub mod order;
pub mod pagination;

pub use engine::event::{InputEvent, Outcome, ParseEventError};
pub use engine::render::{PaginationControls, PaginationView, RenderIntent};
pub use engine::{EngineOptions, RecipeEngine};
pub use model::card::{Card, CardId};
pub use model::card_set::CardSet;
pub use model::category::Category;
pub use order::{ParsePolicyError, ShufflePolicy};

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "showcase"
    }

    pub const fn codename() -> &'static str {
        "Recipe Grid"
    }

    pub const fn about() -> &'static str {
        "Category filter and pagination for the recipe grid"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
