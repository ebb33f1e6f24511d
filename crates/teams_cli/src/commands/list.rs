use anyhow::Result;

use super::TableSource;
use crate::output;

pub fn execute(source: &TableSource<'_>, format: &str) -> Result<()> {
    let table = source.load()?;
    output::print_teams(&table, format)
}
