//! Database Models

pub mod cafe;
pub mod menu_item;

// Re-exports
pub use cafe::{Cafe, CafeCreate, CafeId, CafeListOut, CafeOut, CafeUpdate};
pub use menu_item::{
    MenuItem, MenuItemCreate, MenuItemId, MenuItemListOut, MenuItemOut, MenuItemUpdate,
};
