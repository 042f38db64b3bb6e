mod item;

pub use item::{DeletedItem, Item, ItemPayload};
