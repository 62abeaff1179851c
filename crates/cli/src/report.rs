//! Report rendering. Each writer prints the state of every item, then
//! advances the inventory by one day, for days `0..=days`.
//!
//! Output is streamed a day at a time; nothing is buffered per day count.

use std::io::{self, Write};

use gilded_rose_inventory::{InventoryUpdater, Item};
use serde::Serialize;
use serde::ser::{SerializeSeq, Serializer as _};

const BANNER: &str = "OMGHAI!";
const HEADER: &str = "name, sellIn, quality";

/// Texttest tables, one per day.
pub fn write_text<W: Write>(
    out: &mut W,
    updater: &mut InventoryUpdater,
    days: u32,
) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;

    for day in 0..=days {
        writeln!(out, "-------- day {day} --------")?;
        writeln!(out, "{HEADER}")?;
        for item in updater.items() {
            writeln!(out, "{item}")?;
        }
        writeln!(out)?;
        updater.update_quality();
    }

    Ok(())
}

/// State of the inventory at the start of a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport<'a> {
    pub day: u32,
    pub items: &'a [Item],
}

/// Pretty JSON array `[{"day": 0, "items": [...]}, ...]`, newline terminated.
pub fn write_json<W: Write>(
    out: &mut W,
    updater: &mut InventoryUpdater,
    days: u32,
) -> serde_json::Result<()> {
    let mut serializer = serde_json::Serializer::pretty(&mut *out);
    let mut seq = serializer.serialize_seq(None)?;

    for day in 0..=days {
        seq.serialize_element(&DayReport {
            day,
            items: updater.items(),
        })?;
        updater.update_quality();
    }

    seq.end()?;
    writeln!(out).map_err(serde_json::Error::io)
}
