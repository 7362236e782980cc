pub mod config;
pub mod demo;
pub mod genres;
pub mod movie;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

pub use demo::run_demo;
pub use genres::list_genres;
pub use movie::{edit_movie, inspect_movie, new_movie, show_movie, Edits};

/// Read a JSON value from `input`, or from stdin when `input` is `-`.
fn read_json(input: &Path) -> Result<serde_json::Value> {
    let text = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?
    };

    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", input.display()))
}
