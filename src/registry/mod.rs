use indexmap::IndexMap;

use crate::error::{AppError, AppResult};
use crate::models::{Item, ItemPayload};

/// Authoritative in-memory store of items.
///
/// `IndexMap` keeps the insertion order the list endpoint exposes while
/// giving O(1) lookups by id. Nothing here is synchronised: callers share
/// the registry behind a single `RwLock` (see `AppState`).
#[derive(Debug, Default)]
pub struct ItemRegistry {
    items: IndexMap<u64, Item>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    // ── Reads ─────────────────────────────────────────────────────────────────

    pub fn list(&self) -> Vec<Item> {
        self.items.values().cloned().collect()
    }

    pub fn get(&self, id: u64) -> AppResult<Item> {
        self.items.get(&id).cloned().ok_or(AppError::NotFound)
    }

    // ── Writes ────────────────────────────────────────────────────────────────

    /// Appends a new item with `id = max(existing) + 1`. The max is
    /// recomputed on every call, so a deleted top id is handed out again.
    pub fn create(&mut self, payload: ItemPayload) -> Item {
        let id = self.next_id();
        let item = Item::from_payload(id, payload);
        self.items.insert(id, item.clone());
        item
    }

    /// Full replacement of every field but `id`; the item keeps its position
    /// and gets a fresh `created_at`.
    pub fn update(&mut self, id: u64, payload: ItemPayload) -> AppResult<Item> {
        let slot = self.items.get_mut(&id).ok_or(AppError::NotFound)?;
        *slot = Item::from_payload(id, payload);
        Ok(slot.clone())
    }

    pub fn delete(&mut self, id: u64) -> AppResult<Item> {
        // shift_remove keeps the remaining items in insertion order.
        self.items.shift_remove(&id).ok_or(AppError::NotFound)
    }

    fn next_id(&self) -> u64 {
        self.items.keys().max().map_or(1, |max| max + 1)
    }
}
