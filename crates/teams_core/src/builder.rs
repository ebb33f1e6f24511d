//! Builder for team records.

use crate::TeamRecord;

/// Builder for creating a `TeamRecord`.
///
/// Fields that are never set stay empty, and table validation rejects them, so a
/// partially built record can never reach a lookup.
///
/// # Example
///
/// ```rust
/// use teams_core::TeamRecordBuilder;
///
/// let record = TeamRecordBuilder::new("19", "New York Giants")
///     .nick("Giants")
///     .abbr("NYG")
///     .area("New York")
///     .venue("MetLife Stadium")
///     .build();
///
/// assert_eq!(record.team_abbr, "NYG");
/// ```
#[derive(Debug, Default)]
pub struct TeamRecordBuilder {
    team_id: String,
    team_name: String,
    team_nick: String,
    team_abbr: String,
    team_area: String,
    team_venue: String,
}

impl TeamRecordBuilder {
    /// Creates a new record builder with the identifying fields.
    ///
    /// # Arguments
    ///
    /// * `team_id` - Franchise identifier (digits)
    /// * `team_name` - Full franchise name
    pub fn new(team_id: impl Into<String>, team_name: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            team_name: team_name.into(),
            ..Default::default()
        }
    }

    /// Sets the nickname.
    pub fn nick(mut self, nick: impl Into<String>) -> Self {
        self.team_nick = nick.into();
        self
    }

    /// Sets the abbreviation.
    pub fn abbr(mut self, abbr: impl Into<String>) -> Self {
        self.team_abbr = abbr.into();
        self
    }

    /// Sets the metro area.
    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.team_area = area.into();
        self
    }

    /// Sets the home venue.
    pub fn venue(mut self, venue: impl Into<String>) -> Self {
        self.team_venue = venue.into();
        self
    }

    /// Builds the record.
    pub fn build(self) -> TeamRecord {
        TeamRecord {
            team_id: self.team_id,
            team_name: self.team_name,
            team_nick: self.team_nick,
            team_abbr: self.team_abbr,
            team_area: self.team_area,
            team_venue: self.team_venue,
        }
    }
}
