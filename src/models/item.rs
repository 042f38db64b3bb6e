use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Core catalog entity. `id` is owned by the registry and never changes;
/// `created_at` is stamped every time the value is (re)built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Builds an item from a payload, stamping the current time.
    pub fn from_payload(id: u64, payload: ItemPayload) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            created_at: Utc::now(),
        }
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body accepted by both create and update. Updates are full replacements,
/// so `name` and `price` are always required.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub price: f64,
}

/// Accepts `75`, `75.0` or `"75.0"`. Strings must hold a finite number.
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => Ok(n),
        RawPrice::Text(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| de::Error::custom(format!("price: `{s}` is not a valid number"))),
    }
}

impl ItemPayload {
    pub fn new(name: impl Into<String>, description: Option<&str>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
            price,
        }
    }
}

// ── Responses ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DeletedItem {
    pub message: String,
    pub deleted_item: Item,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_description_defaults_to_none() {
        let p: ItemPayload = serde_json::from_str(r#"{"name":"Keyboard","price":75.0}"#).unwrap();
        assert_eq!(p.name, "Keyboard");
        assert!(p.description.is_none());
        assert!((p.price - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn payload_coerces_integer_price() {
        let p: ItemPayload = serde_json::from_str(r#"{"name":"Cable","price":12}"#).unwrap();
        assert!((p.price - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn payload_coerces_numeric_string_price() {
        let p: ItemPayload =
            serde_json::from_str(r#"{"name":"Keyboard","price":"75.0"}"#).unwrap();
        assert!((p.price - 75.0).abs() < f64::EPSILON);

        let p: ItemPayload = serde_json::from_str(r#"{"name":"Cable","price":" 12 "}"#).unwrap();
        assert!((p.price - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn payload_rejects_non_finite_string_price() {
        for price in ["NaN", "inf", "-infinity"] {
            let body = format!(r#"{{"name":"Cable","price":"{price}"}}"#);
            assert!(serde_json::from_str::<ItemPayload>(&body).is_err(), "{price}");
        }
    }

    #[test]
    fn payload_rejects_boolean_price() {
        let res = serde_json::from_str::<ItemPayload>(r#"{"name":"Cable","price":true}"#);
        assert!(res.is_err());
    }

    #[test]
    fn payload_rejects_missing_price() {
        let res = serde_json::from_str::<ItemPayload>(r#"{"name":"Cable"}"#);
        assert!(res.is_err(), "price is required");
    }

    #[test]
    fn payload_rejects_non_numeric_string_price() {
        let res = serde_json::from_str::<ItemPayload>(r#"{"name":"Cable","price":"cheap"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn payload_ignores_unknown_fields() {
        let p: ItemPayload =
            serde_json::from_str(r#"{"name":"Cable","price":1.5,"id":99}"#).unwrap();
        assert_eq!(p.name, "Cable");
    }

    #[test]
    fn item_serializes_null_description() {
        let item = Item::from_payload(3, ItemPayload::new("Keyboard", None, 75.0));
        let v = serde_json::to_value(&item).unwrap();
        assert_eq!(v["id"], 3);
        assert!(v["description"].is_null());
        assert_eq!(v["price"], 75.0);
        assert!(v["created_at"].is_string());
    }

    #[test]
    fn created_at_is_stamped_per_instance() {
        let a = Item::from_payload(1, ItemPayload::new("A", None, 1.0));
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = Item::from_payload(2, ItemPayload::new("B", None, 1.0));
        assert!(b.created_at > a.created_at, "timestamps must not be shared");
    }
}
