use tracing::info;

use crate::models::ItemPayload;
use crate::registry::ItemRegistry;

/// Catalog every fresh process starts with.
const SEED_ITEMS: &[(&str, &str, f64)] = &[
    ("Laptop", "MacBook Pro", 2500.0),
    ("Mouse", "Wireless mouse", 25.0),
];

/// Builds a registry holding the seed catalog (ids 1 and 2).
pub fn seeded_registry() -> ItemRegistry {
    let mut registry = ItemRegistry::new();
    for (name, description, price) in SEED_ITEMS {
        registry.create(ItemPayload::new(*name, Some(*description), *price));
    }
    info!("Seeded registry with {} items", registry.len());
    registry
}
