pub mod cursor;
pub mod strip;

pub use cursor::{PAGE_SIZE, PageCursor, total_pages_for};
pub use strip::{PageSlot, ViewportClass};
