//! Inventory domain module.
//!
//! Daily aging rules for the inn's stock, implemented purely as deterministic
//! domain logic (no IO, no storage).

pub mod category;
pub mod item;
pub mod updater;

pub use category::Category;
pub use item::{Item, ItemRecord};
pub use updater::InventoryUpdater;
