//! Properties of the embedded 2022 snapshot.
//!
//! These pin the data contract consumers rely on: the record count, key uniqueness,
//! known lookups, lookup misses, venue sharing and stable ordering.

use pretty_assertions::assert_eq;
use std::collections::HashSet;
use teams_core::snapshot::{self, NFL_TEAMS_2022_JSON, SEASON_2022};
use teams_core::{Season, TableValidator, TeamRecord, TeamTable, ValidationContext};

#[test]
fn test_snapshot_has_32_records() {
    assert_eq!(snapshot::nfl_2022().len(), 32);
    assert_eq!(snapshot::nfl_2022().all().len(), 32);
}

#[test]
fn test_unique_keys() {
    let teams = snapshot::nfl_2022();

    let ids: HashSet<&str> = teams.iter().map(|r| r.team_id.as_str()).collect();
    let abbrs: HashSet<&str> = teams.iter().map(|r| r.team_abbr.as_str()).collect();
    let names: HashSet<&str> = teams.iter().map(|r| r.team_name.as_str()).collect();

    assert_eq!(ids.len(), 32);
    assert_eq!(abbrs.len(), 32);
    assert_eq!(names.len(), 32);
}

#[test]
fn test_every_field_non_empty() {
    for record in snapshot::nfl_2022() {
        for (field, value) in record.fields() {
            assert!(
                !value.is_empty(),
                "{} has an empty {}",
                record.team_name,
                field
            );
        }
    }
}

#[test]
fn test_find_by_id_kansas_city() {
    let chiefs = snapshot::nfl_2022().find_by_id("12").expect("id 12 exists");
    assert_eq!(chiefs.team_name, "Kansas City Chiefs");
    assert_eq!(chiefs.team_abbr, "KC");
}

#[test]
fn test_find_by_abbr_san_francisco() {
    let niners = snapshot::nfl_2022().find_by_abbr("SF").expect("SF exists");
    assert_eq!(niners.team_name, "San Francisco 49ers");
    assert_eq!(niners.team_venue, "Levi's Stadium");
}

#[test]
fn test_find_by_name() {
    let titans = snapshot::nfl_2022()
        .find_by_name("Tennessee Titans")
        .expect("Titans exist");
    assert_eq!(titans.team_id, "10");
    assert_eq!(titans.team_venue, "Nissan Stadium");
}

#[test]
fn test_unknown_id_is_not_found() {
    assert_eq!(snapshot::nfl_2022().find_by_id("999"), None);
    assert_eq!(snapshot::nfl_2022().find_by_id(""), None);
}

#[test]
fn test_abbr_lookup_is_case_sensitive() {
    assert!(snapshot::nfl_2022().find_by_abbr("KC").is_some());
    assert!(snapshot::nfl_2022().find_by_abbr("kc").is_none());
}

#[test]
fn test_new_york_teams_share_metlife() {
    let teams = snapshot::nfl_2022();
    let giants = teams.find_by_abbr("NYG").unwrap();
    let jets = teams.find_by_abbr("NYJ").unwrap();

    assert_ne!(giants, jets);
    assert_eq!(giants.team_venue, "MetLife Stadium");
    assert_eq!(jets.team_venue, "MetLife Stadium");

    let tenants: Vec<&str> = teams
        .tenants_of_venue("MetLife Stadium")
        .map(|r| r.team_abbr.as_str())
        .collect();
    assert_eq!(tenants, vec!["NYG", "NYJ"]);

    let report = TableValidator::new().validate(teams.all(), &ValidationContext::new());
    assert!(report.passed(), "{}", report.summary());
    assert!(report.warnings.is_empty());
}

#[test]
fn test_los_angeles_is_shared_area() {
    let abbrs: Vec<&str> = snapshot::nfl_2022()
        .teams_in_area("Los Angeles")
        .map(|r| r.team_abbr.as_str())
        .collect();
    assert_eq!(abbrs, vec!["LAC", "LAR"]);
}

#[test]
fn test_repeated_reads_are_identical() {
    let first: Vec<TeamRecord> = snapshot::nfl_2022().all().to_vec();
    let second: Vec<TeamRecord> = snapshot::nfl_2022().all().to_vec();
    assert_eq!(first, second);
}

#[test]
fn test_authored_order() {
    let teams = snapshot::nfl_2022();
    assert_eq!(teams.all()[0].team_abbr, "ARI");
    assert_eq!(teams.all()[1].team_abbr, "ATL");
    assert_eq!(teams.all()[31].team_abbr, "WSH");
}

#[test]
fn test_asset_rebuilds_to_same_table() {
    let rebuilt = TeamTable::from_json(SEASON_2022, NFL_TEAMS_2022_JSON).unwrap();
    assert_eq!(rebuilt.all(), snapshot::nfl_2022().all());
    assert_eq!(rebuilt.season(), Season::new(2022));
}

#[test]
fn test_concurrent_readers_see_full_table() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| snapshot::nfl_2022().find_by_abbr("BUF").cloned()))
        .collect();

    for handle in handles {
        let bills = handle.join().unwrap().expect("BUF exists");
        assert_eq!(bills.team_venue, "Highmark Stadium");
    }
}
