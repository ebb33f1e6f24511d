//! Team record and season types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One NFL franchise as authored in a season snapshot.
///
/// All six fields are plain strings, matching the external JSON representation.
/// `team_id` is a numeric identifier encoded as digits and is stable per franchise.
///
/// # Example
///
/// ```rust
/// use teams_core::TeamRecord;
///
/// let json = r#"{
///     "team_id": "12",
///     "team_name": "Kansas City Chiefs",
///     "team_nick": "Chiefs",
///     "team_abbr": "KC",
///     "team_area": "Kansas City",
///     "team_venue": "GEHA Field at Arrowhead Stadium"
/// }"#;
///
/// let record: TeamRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.team_nick, "Chiefs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamRecord {
    /// Franchise identifier (digits only)
    pub team_id: String,

    /// Full franchise name, e.g. "New York Giants"
    pub team_name: String,

    /// Mascot portion of the name, e.g. "Giants"
    pub team_nick: String,

    /// Two or three uppercase letters, e.g. "NYG"
    pub team_abbr: String,

    /// Metro area or region; shared by co-tenant franchises
    pub team_area: String,

    /// Home stadium; shared by co-tenant franchises
    pub team_venue: String,
}

impl TeamRecord {
    /// Field names paired with their values, in schema order.
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("team_id", self.team_id.as_str()),
            ("team_name", self.team_name.as_str()),
            ("team_nick", self.team_nick.as_str()),
            ("team_abbr", self.team_abbr.as_str()),
            ("team_area", self.team_area.as_str()),
            ("team_venue", self.team_venue.as_str()),
        ]
    }

    /// Whether `team_nick` is the trailing word(s) of `team_name`.
    pub fn nick_matches_name(&self) -> bool {
        self.team_name
            .strip_suffix(self.team_nick.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.ends_with(' '))
    }
}

impl fmt::Display for TeamRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.team_name, self.team_abbr)
    }
}

/// The season a snapshot describes, identified by its starting year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Season(u16);

impl Season {
    /// Creates a season from its starting year.
    pub const fn new(year: u16) -> Self {
        Self(year)
    }

    /// Starting year of the season.
    pub const fn year(self) -> u16 {
        self.0
    }
}

impl From<u16> for Season {
    fn from(year: u16) -> Self {
        Self(year)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year())
    }
}
