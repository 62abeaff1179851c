//! Shared helpers for the CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo;

/// A `gilded-rose` command isolated from the caller's configuration.
pub fn gilded_rose() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("gilded-rose"));
    cmd.env_remove("GILDED_ROSE_DAYS")
        .env_remove("GILDED_ROSE_INVENTORY")
        .env_remove("GILDED_ROSE_LOG_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}
