//! Embedded season snapshots.
//!
//! The 2022 table ships inside the crate as a JSON asset and is built on
//! first access. The table is frozen: teams relocate and venues get renamed in later
//! seasons, and none of that is reflected here.

use crate::{Season, TeamTable};
use std::sync::LazyLock;
use tracing::debug;

/// Season covered by the embedded table.
pub const SEASON_2022: Season = Season::new(2022);

/// The embedded 2022 asset, a JSON array of 32 team objects.
pub const NFL_TEAMS_2022_JSON: &str = include_str!("../data/nfl_teams_2022.json");

static NFL_2022: LazyLock<TeamTable> = LazyLock::new(|| {
    let table = TeamTable::from_json(SEASON_2022, NFL_TEAMS_2022_JSON)
        .unwrap_or_else(|err| panic!("embedded {SEASON_2022} team table is invalid: {err}"));
    debug!(season = %SEASON_2022, teams = table.len(), "Embedded snapshot initialized");
    table
});

/// The 2022 team table.
///
/// Built once, on first call, and shared by every caller afterwards.
///
/// # Panics
///
/// Panics on first access if the embedded asset breaks a table invariant. The asset
/// is covered by this crate's tests, so this only happens if it is edited by hand.
pub fn nfl_2022() -> &'static TeamTable {
    &NFL_2022
}

/// Seasons with an embedded snapshot.
pub fn available_seasons() -> &'static [Season] {
    &[SEASON_2022]
}

/// The embedded table for `season`, if one ships with this crate.
///
/// # Example
///
/// ```rust
/// use teams_core::{Season, snapshot};
///
/// assert!(snapshot::snapshot(Season::new(2022)).is_some());
/// assert!(snapshot::snapshot(Season::new(2023)).is_none());
/// ```
pub fn snapshot(season: Season) -> Option<&'static TeamTable> {
    (season == SEASON_2022).then(nfl_2022)
}
