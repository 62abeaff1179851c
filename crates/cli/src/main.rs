use std::io::{BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use gilded_rose_cli::Cli;

fn main() -> Result<()> {
    gilded_rose_observability::init();

    let cli = Cli::parse();
    let mut out = BufWriter::new(std::io::stdout().lock());
    gilded_rose_cli::run(&cli, &mut out)?;
    out.flush()?;

    Ok(())
}
