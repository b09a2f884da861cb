pub mod database;
pub mod names;
pub mod types;

pub use database::{CardCatalog, CatalogError, COMBO_SIZE};
pub use types::{CardDefinition, CardKind, CardRef, CardType};
