//! Repository output formatter

use std::io::Write;

use comfy_table::{presets::ASCII_FULL_CONDENSED, Table};

use crate::error::Result;
use crate::github::Repository;

/// Build the Name / Private / License table
pub fn build_repositories_table(repos: &[Repository]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL_CONDENSED)
        .set_header(vec!["Name", "Private", "License"]);

    for repo in repos {
        table.add_row(vec![
            repo.name().to_string(),
            repo.is_private().to_string(),
            repo.license_id().to_string(),
        ]);
    }

    table
}

/// Write the repositories table to `out`
pub fn output_repositories<W: Write>(repos: &[Repository], out: &mut W) -> Result<()> {
    let table = build_repositories_table(repos);
    writeln!(out, "{table}")?;
    Ok(())
}
