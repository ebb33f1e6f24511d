//! Matchup parsing for broadcast channel titles.
//!
//! Sports channels announce games with titles such as
//! `"USA NFL Sunday 705: Las Vegas Raiders vs Minnesota Vikings @ 04:25 PM"`.
//! [`MatchupParser`] recognises the two franchises in such a title by their full
//! names and resolves them to records in a [`TeamTable`].

use crate::{Result, TeamRecord, TeamTable};
use regex::Regex;
use std::fmt;

/// A game recognised in a channel title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup<'t> {
    /// Channel label before the colon, e.g. "USA NFL Sunday 705"
    pub channel: String,

    /// First team named in the title
    pub team1: &'t TeamRecord,

    /// Second team named in the title
    pub team2: &'t TeamRecord,

    /// Kick-off time as written, e.g. "04:25 PM"
    pub time: String,
}

impl fmt::Display for Matchup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} vs {} @ {}",
            self.channel, self.team1.team_name, self.team2.team_name, self.time
        )
    }
}

/// Finds matchups in channel titles using the team names of one table.
///
/// Matching ignores case; the returned records are always the table's own.
///
/// # Example
///
/// ```rust
/// use teams_core::{MatchupParser, snapshot};
///
/// let parser = MatchupParser::new(snapshot::nfl_2022()).unwrap();
/// let game = parser
///     .parse("USA NFL Sunday Night: Cincinnati Bengals vs Los Angeles Rams @ 06:30 PM")
///     .unwrap();
///
/// assert_eq!(game.channel, "USA NFL Sunday Night");
/// assert_eq!(game.team1.team_abbr, "CIN");
/// assert_eq!(game.team2.team_abbr, "LAR");
/// assert_eq!(game.time, "06:30 PM");
/// ```
#[derive(Debug, Clone)]
pub struct MatchupParser<'t> {
    table: &'t TeamTable,
    pattern: Regex,
}

impl<'t> MatchupParser<'t> {
    /// Compiles a title pattern from every team name in `table`.
    pub fn new(table: &'t TeamTable) -> Result<Self> {
        let mut names: Vec<&str> = table.iter().map(|r| r.team_name.as_str()).collect();
        // Longest first so a name is never cut short by another that prefixes it.
        names.sort_by(|a, b| b.len().cmp(&a.len()));
        let teams = names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = Regex::new(&format!(
            r"(?i)(?P<channel>[\w\s]+):\s+(?P<team1>{teams})[vsat\s]*(?P<team2>{teams})[\s@(]+(?P<time>\d{{1,2}}:\d{{2}}(?:\s*[AP]M)?)"
        ))?;

        Ok(Self { table, pattern })
    }

    /// Parses one title. Returns `None` unless two teams and a time are present.
    pub fn parse(&self, line: &str) -> Option<Matchup<'t>> {
        let caps = self.pattern.captures(line)?;

        Some(Matchup {
            channel: caps.name("channel")?.as_str().trim().to_string(),
            team1: self.resolve(caps.name("team1")?.as_str())?,
            team2: self.resolve(caps.name("team2")?.as_str())?,
            time: caps.name("time")?.as_str().to_string(),
        })
    }

    fn resolve(&self, name: &str) -> Option<&'t TeamRecord> {
        self.table
            .find_by_name(name)
            .or_else(|| self.table.iter().find(|r| r.team_name.eq_ignore_ascii_case(name)))
    }
}
