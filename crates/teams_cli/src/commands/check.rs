use anyhow::{Context, Result};
use std::path::Path;
use teams_core::snapshot::SEASON_2022;
use teams_core::{Season, TeamError, ValidationContext};
use teams_parser::{ParserError, parse_file, season_from_path};
use tracing::info;

use crate::output;

pub fn execute(
    file: &str,
    season: Option<u16>,
    strict: bool,
    expected: usize,
    format: &str,
) -> Result<()> {
    info!("Checking team table: {}", file);
    info!("Strict mode: {}", strict);

    let path = Path::new(file);
    let season = season
        .map(Season::new)
        .or_else(|| season_from_path(path))
        .unwrap_or(SEASON_2022);
    let context = ValidationContext::new()
        .with_strict(strict)
        .with_expected_count(expected);

    let report = match parse_file(path, Some(season), &context) {
        Ok(table) => {
            if format != "json" {
                output::print_info(&format!(
                    "Table loaded: {} teams for season {}",
                    table.len(),
                    table.season()
                ));
            }
            table.validation_report().clone()
        }
        Err(ParserError::Table(TeamError::InvalidTable { report, .. })) => report,
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read team table: {}", file));
        }
    };

    output::print_validation_report(&report, format)?;

    if !report.passed() {
        std::process::exit(1);
    }

    Ok(())
}
