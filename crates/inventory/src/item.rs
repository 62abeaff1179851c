use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A single line of inventory.
///
/// The category is resolved from the name once, at construction. The name is
/// read-only afterwards, so the two can't drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord")]
pub struct Item {
    name: String,
    sell_in: i64,
    quality: i64,
    #[serde(skip_serializing)]
    category: Category,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        let name = name.into();
        let category = Category::from_name(&name);
        Self {
            name,
            sell_in,
            quality,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days left to sell; negative once past due.
    pub fn sell_in(&self) -> i64 {
        self.sell_in
    }

    pub fn quality(&self) -> i64 {
        self.quality
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub(crate) fn advance_day(&mut self) {
        self.category.apply_day(&mut self.sell_in, &mut self.quality);
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Wire shape of an item: either `{"name", "sell_in", "quality"}` or a
/// `[name, sell_in, quality]` triple.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(
    untagged,
    expecting = "an item as {name, sell_in, quality} or [name, sell_in, quality]"
)]
pub enum ItemRecord {
    Fields {
        name: String,
        #[serde(alias = "sellIn")]
        sell_in: i64,
        quality: i64,
    },
    Triple(String, i64, i64),
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        match record {
            ItemRecord::Fields {
                name,
                sell_in,
                quality,
            } => Item::new(name, sell_in, quality),
            ItemRecord::Triple(name, sell_in, quality) => Item::new(name, sell_in, quality),
        }
    }
}
