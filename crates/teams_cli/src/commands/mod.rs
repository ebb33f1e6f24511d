pub mod check;
pub mod find;
pub mod list;
pub mod parse;

use anyhow::{Context, Result, anyhow};
use std::borrow::Cow;
use std::path::Path;
use teams_core::snapshot::{self, SEASON_2022};
use teams_core::{Season, TeamTable, ValidationContext};
use teams_parser::parse_file;
use tracing::debug;

/// Where the read-only commands take their teams from.
pub struct TableSource<'a> {
    pub path: Option<&'a str>,
    pub season: Option<u16>,
}

impl TableSource<'_> {
    /// Loads the table file if one was given, otherwise the embedded snapshot.
    ///
    /// Table files are held to the full league invariants.
    pub fn load(&self) -> Result<Cow<'static, TeamTable>> {
        let season = self.season.map(Season::new);

        match self.path {
            Some(path) => {
                let table = parse_file(Path::new(path), season, &ValidationContext::new())
                    .with_context(|| format!("Failed to load team table: {}", path))?;
                Ok(Cow::Owned(table))
            }
            None => {
                let season = season.unwrap_or(SEASON_2022);
                debug!(%season, "Using embedded snapshot");
                snapshot::snapshot(season)
                    .map(Cow::Borrowed)
                    .ok_or_else(|| anyhow!("No embedded team table for season {}", season))
            }
        }
    }
}
