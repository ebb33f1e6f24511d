use anyhow::Result;
use std::fmt;
use tracing::debug;

use super::TableSource;
use crate::output;

/// The exact key a team is looked up by.
pub enum Lookup {
    Id(String),
    Abbr(String),
    Name(String),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Id(id) => write!(f, "id '{}'", id),
            Lookup::Abbr(abbr) => write!(f, "abbreviation '{}'", abbr),
            Lookup::Name(name) => write!(f, "name '{}'", name),
        }
    }
}

pub fn execute(source: &TableSource<'_>, lookup: &Lookup, format: &str) -> Result<()> {
    let table = source.load()?;
    debug!("Looking up team by {}", lookup);

    let found = match lookup {
        Lookup::Id(id) => table.find_by_id(id),
        Lookup::Abbr(abbr) => table.find_by_abbr(abbr),
        Lookup::Name(name) => table.find_by_name(name),
    };

    match found {
        Some(record) => output::print_team(record, format),
        None => {
            output::print_error(&format!(
                "No team found with {} in season {}",
                lookup,
                table.season()
            ));
            std::process::exit(1);
        }
    }
}
