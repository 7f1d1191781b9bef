//! Reference example catalogue loading.

mod json_store;

pub use json_store::{BUNDLED_SCENARIOS, CatalogueError, JsonExampleStore};
