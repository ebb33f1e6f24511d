use anyhow::{Context, Result};
use teams_core::MatchupParser;

use super::TableSource;
use crate::output;

pub fn execute(source: &TableSource<'_>, line: &str, format: &str) -> Result<()> {
    let table = source.load()?;
    let parser = MatchupParser::new(&table).context("Failed to build matchup pattern")?;

    match parser.parse(line) {
        Some(matchup) => output::print_matchup(&matchup, format),
        None => {
            output::print_error(&format!("No matchup recognised in: {}", line));
            std::process::exit(1);
        }
    }
}
