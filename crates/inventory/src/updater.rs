use gilded_rose_core::{DomainError, DomainResult};
use serde::Deserialize;
use serde_json::Value;

use crate::item::Item;

/// Holds a non-empty inventory and advances it one day at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryUpdater {
    items: Vec<Item>,
}

impl InventoryUpdater {
    /// Take ownership of `items`, rejecting an empty inventory.
    pub fn new(items: Vec<Item>) -> DomainResult<Self> {
        if items.is_empty() {
            tracing::debug!("rejected empty inventory");
            return Err(DomainError::invalid_argument("items must not be empty"));
        }
        Ok(Self { items })
    }

    /// Build from an untyped JSON array of item records.
    ///
    /// Each element may be an object or a `[name, sell_in, quality]` triple;
    /// see [`crate::ItemRecord`].
    pub fn from_json(value: &Value) -> DomainResult<Self> {
        let Value::Array(elements) = value else {
            tracing::debug!("rejected non-array inventory document");
            return Err(DomainError::type_mismatch("inventory must be a list of items"));
        };

        let items = elements
            .iter()
            .enumerate()
            .map(|(index, element)| {
                Item::deserialize(element).map_err(|e| {
                    let problem = shape_problem(element);
                    tracing::debug!(index, error = %e, %problem, "rejected inventory element");
                    DomainError::type_mismatch(format!(
                        "all elements must be valid items (element {index}: {problem})"
                    ))
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Self::new(items)
    }

    /// Parse JSON text and build from it, see [`InventoryUpdater::from_json`].
    pub fn from_json_str(text: &str) -> DomainResult<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| {
            DomainError::invalid_argument(format!("inventory is not valid JSON: {e}"))
        })?;
        Self::from_json(&value)
    }

    /// Advance every item by one day, in order.
    pub fn update_quality(&mut self) {
        tracing::debug!(items = self.items.len(), "advancing inventory by one day");

        for item in &mut self.items {
            let (sell_in, quality) = (item.sell_in(), item.quality());
            item.advance_day();
            tracing::trace!(
                name = item.name(),
                category = item.category().as_str(),
                sell_in_before = sell_in,
                quality_before = quality,
                sell_in = item.sell_in(),
                quality = item.quality(),
                "item advanced"
            );
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Hand the items back to the caller.
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

const ITEM_SHAPE: &str = "expected {name, sell_in, quality} or [name, sell_in, quality]";

/// Describe why `value` is not an item, naming the first offending field.
fn shape_problem(value: &Value) -> String {
    let fields = match value {
        Value::Object(map) => [
            ("name", map.get("name")),
            ("sell_in", map.get("sell_in").or_else(|| map.get("sellIn"))),
            ("quality", map.get("quality")),
        ],
        Value::Array(parts) if parts.len() != 3 => {
            return format!("{ITEM_SHAPE}, found a list of {} values", parts.len());
        }
        Value::Array(parts) => [
            ("name", parts.first()),
            ("sell_in", parts.get(1)),
            ("quality", parts.get(2)),
        ],
        other => return format!("{ITEM_SHAPE}, found {}", kind(other)),
    };

    for (field, found) in fields {
        let valid = match (field, found) {
            ("name", Some(v)) => v.is_string(),
            (_, Some(v)) => v.is_i64(),
            (_, None) => false,
        };
        if !valid {
            return match found {
                None => format!("`{field}` is missing"),
                Some(v) if field == "name" => format!("`{field}` must be a string, found {}", kind(v)),
                Some(v) => format!("`{field}` must be an integer, found {}", kind(v)),
            };
        }
    }

    ITEM_SHAPE.to_string()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_i64() => "an integer",
        Value::Number(n) if n.is_u64() => "an integer out of range",
        Value::Number(_) => "a fractional number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
