//! Domain types for the aktrades accounting engine

pub mod fill;
pub mod layer;
pub mod order;
pub mod side;

pub use fill::Fill;
pub use layer::InventoryLayer;
pub use order::{Order, OrderType};
pub use side::Side;
