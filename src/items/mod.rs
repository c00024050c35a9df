//! Item system: definitions, held copies, and the catalog.
//!
//! ## Key Types
//!
//! - `ItemId`: Identifier for an item definition
//! - `ItemDefinition`: When-played effects and passive listeners
//! - `Item`: A held copy with its own instance id
//! - `ItemCatalog`: Definition lookup (`ItemCatalog::standard()` ships content)

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::{CatalogError, ItemCatalog};
pub use definition::{Genre, ItemDefinition, ItemId};
pub use instance::Item;
