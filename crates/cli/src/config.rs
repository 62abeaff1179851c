use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "gilded-rose",
    version,
    about = "Age the Gilded Rose inventory day by day and print it"
)]
pub struct Cli {
    /// Days to simulate; a table is printed for day 0 through this day
    #[arg(short, long, env = "GILDED_ROSE_DAYS", default_value_t = 1)]
    pub days: u32,

    /// JSON inventory file (objects or [name, sell_in, quality] triples)
    #[arg(short, long, env = "GILDED_ROSE_INVENTORY")]
    pub inventory: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Texttest tables
    #[default]
    Text,
    /// One JSON document with every day
    Json,
}
