//! Per-category daily rules.

use gilded_rose_core::adjust_quality;

pub const LEGENDARY: &str = "Sulfuras, Hand of Ragnaros";
pub const AGED_CHEESE: &str = "Aged Brie";
pub const EVENT_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";
/// Matched case-insensitively against the start of the name.
pub const CONJURED_PREFIX: &str = "conjured";

const AGED_CHEESE_DAILY: i64 = 1;
const AGED_CHEESE_EXPIRED: i64 = 1;

const NORMAL_DAILY: i64 = -1;
const NORMAL_EXPIRED: i64 = -1;

const CONJURED_DAILY: i64 = -2;
const CONJURED_EXPIRED: i64 = -2;

/// Days left at or above which a pass gains the far increment.
const EVENT_PASS_FAR_THRESHOLD: i64 = 11;
/// Days left at or above which a pass gains the medium increment.
const EVENT_PASS_NEAR_THRESHOLD: i64 = 6;
const EVENT_PASS_FAR: i64 = 1;
const EVENT_PASS_MEDIUM: i64 = 2;
const EVENT_PASS_NEAR: i64 = 3;
const EVENT_PASS_EXPIRED_QUALITY: i64 = 0;

/// Behavior class of an item, derived from its name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Never sold, never degrades.
    Legendary,
    /// Improves with age, twice as fast once past due.
    AgedCheese,
    /// Improves faster as the event approaches, worthless after it.
    EventPass,
    /// Degrades twice as fast as a normal item.
    Conjured,
    Normal,
}

impl Category {
    /// Resolve the category for an item name.
    ///
    /// Exact names win over the conjured prefix; anything unrecognised is
    /// [`Category::Normal`].
    pub fn from_name(name: &str) -> Self {
        match name {
            LEGENDARY => Category::Legendary,
            AGED_CHEESE => Category::AgedCheese,
            EVENT_PASS => Category::EventPass,
            _ if name.to_lowercase().starts_with(CONJURED_PREFIX) => Category::Conjured,
            _ => Category::Normal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Legendary => "legendary",
            Category::AgedCheese => "aged_cheese",
            Category::EventPass => "event_pass",
            Category::Conjured => "conjured",
            Category::Normal => "normal",
        }
    }

    /// Advance one day: base delta, then the sell-in decrement, then the
    /// past-due adjustment if the decremented sell-in is negative.
    pub(crate) fn apply_day(self, sell_in: &mut i64, quality: &mut i64) {
        match self {
            Category::Legendary => {}
            Category::AgedCheese => {
                standard_aging(sell_in, quality, AGED_CHEESE_DAILY, AGED_CHEESE_EXPIRED)
            }
            Category::EventPass => {
                // Tier is chosen from the days left before today's decrement.
                *quality = adjust_quality(*quality, event_pass_increment(*sell_in));
                *sell_in = sell_in.saturating_sub(1);
                if *sell_in < 0 {
                    *quality = EVENT_PASS_EXPIRED_QUALITY;
                }
            }
            Category::Conjured => {
                standard_aging(sell_in, quality, CONJURED_DAILY, CONJURED_EXPIRED)
            }
            Category::Normal => standard_aging(sell_in, quality, NORMAL_DAILY, NORMAL_EXPIRED),
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn standard_aging(sell_in: &mut i64, quality: &mut i64, daily: i64, expired: i64) {
    *quality = adjust_quality(*quality, daily);
    *sell_in = sell_in.saturating_sub(1);
    if *sell_in < 0 {
        *quality = adjust_quality(*quality, expired);
    }
}

fn event_pass_increment(sell_in: i64) -> i64 {
    if sell_in < EVENT_PASS_NEAR_THRESHOLD {
        EVENT_PASS_NEAR
    } else if sell_in < EVENT_PASS_FAR_THRESHOLD {
        EVENT_PASS_MEDIUM
    } else {
        EVENT_PASS_FAR
    }
}
