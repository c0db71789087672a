pub mod resource;
pub mod strip;

pub use resource::{Catalog, CatalogCard, CatalogError};
