use axum::{extract::State, Json};
use tracing::{debug, info};

use crate::{
    error::{AppError, AppJson, AppPath, AppResult},
    models::{DeletedItem, Item, ItemPayload},
    AppState,
};

/// Parses an `{id}` segment. Any integer is well-formed; negative or
/// out-of-range values can never name an item, so they are `NotFound`
/// rather than a validation failure.
fn parse_item_id(raw: &str) -> AppResult<u64> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::Validation(format!(
            "Invalid URL: `{raw}` is not a valid integer"
        )));
    }
    if negative {
        debug!(id = raw, "Negative item id");
        return Err(AppError::NotFound);
    }
    digits.parse::<u64>().map_err(|_| {
        debug!(id = raw, "Item id out of range");
        AppError::NotFound
    })
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    let items = state.registry.read().await.list();
    info!(count = items.len(), "Listed items");
    Json(items)
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_item(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ItemPayload>,
) -> Json<Item> {
    // Id assignment and insertion happen under one write guard.
    let item = state.registry.write().await.create(payload);
    info!(id = item.id, name = %item.name, "Created item");
    Json(item)
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_item(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
) -> AppResult<Json<Item>> {
    let id = parse_item_id(&raw_id)?;
    let item = state.registry.read().await.get(id).inspect_err(|_| {
        debug!(id, "Item lookup missed");
    })?;
    info!(id, "Fetched item");
    Ok(Json(item))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_item(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
    AppJson(payload): AppJson<ItemPayload>,
) -> AppResult<Json<Item>> {
    let id = parse_item_id(&raw_id)?;
    let item = state.registry.write().await.update(id, payload).inspect_err(|_| {
        debug!(id, "Update target missing");
    })?;
    info!(id, name = %item.name, "Updated item");
    Ok(Json(item))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_item(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
) -> AppResult<Json<DeletedItem>> {
    let id = parse_item_id(&raw_id)?;
    let deleted_item = state.registry.write().await.delete(id).inspect_err(|_| {
        debug!(id, "Delete target missing");
    })?;
    info!(id, name = %deleted_item.name, "Deleted item");
    Ok(Json(DeletedItem {
        message: format!("Item {id} deleted"),
        deleted_item,
    }))
}
