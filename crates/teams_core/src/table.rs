//! The immutable team reference table.
//!
//! A `TeamTable` is validated when it is built and exposes no way to change its
//! records afterwards. Lookups by id, abbreviation and name go through hash indices
//! built once at construction.

use crate::{
    Result, Season, TableValidator, TeamError, TeamRecord, ValidationContext, ValidationReport,
};
use std::collections::HashMap;
use tracing::{debug, warn};

/// A validated, read-only set of team records for one season.
///
/// Records keep their authored order. All lookups are exact matches and return
/// `None` on a miss.
///
/// # Example
///
/// ```rust
/// use teams_core::{Season, TeamRecordBuilder, TeamTable, ValidationContext};
///
/// let records = vec![
///     TeamRecordBuilder::new("19", "New York Giants")
///         .nick("Giants")
///         .abbr("NYG")
///         .area("New York")
///         .venue("MetLife Stadium")
///         .build(),
/// ];
///
/// let context = ValidationContext::new().with_expected_count(1);
/// let table = TeamTable::with_context(Season::new(2022), records, &context).unwrap();
///
/// assert_eq!(table.find_by_abbr("NYG").unwrap().team_nick, "Giants");
/// assert!(table.find_by_abbr("nyg").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct TeamTable {
    season: Season,
    records: Vec<TeamRecord>,
    by_id: HashMap<String, usize>,
    by_abbr: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    report: ValidationReport,
}

impl TeamTable {
    /// Builds a table held to the full league invariants (strict, 32 records).
    ///
    /// # Errors
    ///
    /// Returns `TeamError::InvalidTable` with every violation if any invariant fails.
    pub fn new(season: Season, records: Vec<TeamRecord>) -> Result<Self> {
        Self::with_context(season, records, &ValidationContext::default())
    }

    /// Builds a table validated under the given context.
    pub fn with_context(
        season: Season,
        records: Vec<TeamRecord>,
        context: &ValidationContext,
    ) -> Result<Self> {
        let report = TableValidator::new().validate(&records, context);
        if !report.passed() {
            return Err(TeamError::InvalidTable { season, report });
        }
        for warning in &report.warnings {
            warn!(%season, "{}", warning);
        }

        let by_id = build_index(&records, |r| r.team_id.as_str());
        let by_abbr = build_index(&records, |r| r.team_abbr.as_str());
        let by_name = build_index(&records, |r| r.team_name.as_str());

        debug!(
            %season,
            records = records.len(),
            checks = report.stats.checks_evaluated,
            "Team table loaded"
        );

        Ok(Self {
            season,
            records,
            by_id,
            by_abbr,
            by_name,
            report,
        })
    }

    /// Parses the JSON array representation and builds a strict table.
    pub fn from_json(season: Season, json: &str) -> Result<Self> {
        let records: Vec<TeamRecord> = serde_json::from_str(json)?;
        Self::new(season, records)
    }

    /// Season this table describes.
    pub fn season(&self) -> Season {
        self.season
    }

    /// The passing report this table was built with, warnings included.
    pub fn validation_report(&self) -> &ValidationReport {
        &self.report
    }

    /// All records in authored order.
    pub fn all(&self) -> &[TeamRecord] {
        &self.records
    }

    /// Iterates over records in authored order.
    pub fn iter(&self) -> std::slice::Iter<'_, TeamRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact match on `team_id`.
    pub fn find_by_id(&self, id: &str) -> Option<&TeamRecord> {
        self.lookup(&self.by_id, id)
    }

    /// Exact, case-sensitive match on `team_abbr`.
    ///
    /// Abbreviations are stored uppercase, so `"kc"` does not find Kansas City.
    pub fn find_by_abbr(&self, abbr: &str) -> Option<&TeamRecord> {
        self.lookup(&self.by_abbr, abbr)
    }

    /// Exact match on `team_name`.
    pub fn find_by_name(&self, name: &str) -> Option<&TeamRecord> {
        self.lookup(&self.by_name, name)
    }

    /// Records whose home venue is `venue`, in authored order.
    pub fn tenants_of_venue<'a>(&'a self, venue: &'a str) -> impl Iterator<Item = &'a TeamRecord> {
        self.records.iter().filter(move |r| r.team_venue == venue)
    }

    /// Records whose metro area is `area`, in authored order.
    pub fn teams_in_area<'a>(&'a self, area: &'a str) -> impl Iterator<Item = &'a TeamRecord> {
        self.records.iter().filter(move |r| r.team_area == area)
    }

    fn lookup(&self, index: &HashMap<String, usize>, key: &str) -> Option<&TeamRecord> {
        index.get(key).and_then(|&i| self.records.get(i))
    }
}

impl<'a> IntoIterator for &'a TeamTable {
    type Item = &'a TeamRecord;
    type IntoIter = std::slice::Iter<'a, TeamRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn build_index(
    records: &[TeamRecord],
    key: impl Fn(&TeamRecord) -> &str,
) -> HashMap<String, usize> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| (key(record).to_string(), i))
        .collect()
}
