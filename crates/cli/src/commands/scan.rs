use std::path::Path;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use dupesweep_core::{DetectionMode, DetectorConfig};

pub fn run(
    path: &Path,
    mode: Option<DetectionMode>,
    config: &DetectorConfig,
    json: bool,
) -> Result<()> {
    let records = super::detect(path, mode, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No duplicate images found.");
        return Ok(());
    }

    println!("Found {} duplicate(s):", records.len());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Original"),
        Cell::new("Duplicate"),
    ]);
    for (i, record) in records.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(record.original.display()),
            Cell::new(record.duplicate.display()),
        ]);
    }
    println!("{table}");

    Ok(())
}
