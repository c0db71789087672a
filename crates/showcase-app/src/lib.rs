pub mod controller;
pub mod surface;

pub use controller::{PageBindings, PageController};
pub use surface::{CardSurface, PaginationSurface, TextGrid, TextPager};
