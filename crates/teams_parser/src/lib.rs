//! Loader for team table files (JSON/YAML/TOML formats).
//!
//! This crate reads a table file, deserializes it into `TeamRecord`s and builds a
//! validated `TeamTable`. A file that breaks any invariant never produces a table.
//!
//! JSON and YAML files hold a top-level sequence of records. TOML files hold an array
//! of `[[teams]]` tables.
//!
//! # Example
//!
//! ```rust
//! use teams_core::{Season, ValidationContext};
//! use teams_parser::parse_yaml;
//!
//! let yaml = r#"
//! - team_id: "19"
//!   team_name: New York Giants
//!   team_nick: Giants
//!   team_abbr: NYG
//!   team_area: New York
//!   team_venue: MetLife Stadium
//! "#;
//!
//! let context = ValidationContext::new().with_expected_count(1);
//! let table = parse_yaml(Season::new(2022), yaml, &context).expect("Failed to parse table");
//! assert_eq!(table.find_by_abbr("NYG").unwrap().team_nick, "Giants");
//! ```

use serde::Deserialize;
use std::path::Path;
use teams_core::{Season, TeamError, TeamRecord, TeamTable, ValidationContext};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading a table file.
#[derive(Debug, Error)]
pub enum ParserError {
    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// No season given and none found in the file name
    #[error("Cannot determine season for '{0}': pass one or put the year in the file name")]
    UnknownSeason(String),

    /// Records parsed but broke a table invariant
    #[error(transparent)]
    Table(#[from] TeamError),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported table file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// JSON format (.json, .js)
    Json,
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// TOML has no top-level arrays, so records live under `teams`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlTable {
    teams: Vec<TeamRecord>,
}

/// Parse a table from a JSON array.
pub fn parse_json(
    season: Season,
    content: &str,
    context: &ValidationContext,
) -> Result<TeamTable> {
    let records: Vec<TeamRecord> = serde_json::from_str(content)?;
    build(season, records, context)
}

/// Parse a table from a YAML sequence.
pub fn parse_yaml(
    season: Season,
    content: &str,
    context: &ValidationContext,
) -> Result<TeamTable> {
    let records: Vec<TeamRecord> = serde_yaml_ng::from_str(content)?;
    build(season, records, context)
}

/// Parse a table from TOML `[[teams]]` entries.
///
/// # Example
///
/// ```rust
/// use teams_core::{Season, ValidationContext};
/// use teams_parser::parse_toml;
///
/// let toml = r#"
/// [[teams]]
/// team_id = "12"
/// team_name = "Kansas City Chiefs"
/// team_nick = "Chiefs"
/// team_abbr = "KC"
/// team_area = "Kansas City"
/// team_venue = "GEHA Field at Arrowhead Stadium"
/// "#;
///
/// let context = ValidationContext::new().with_expected_count(1);
/// let table = parse_toml(Season::new(2022), toml, &context).unwrap();
/// assert_eq!(table.find_by_id("12").unwrap().team_abbr, "KC");
/// ```
pub fn parse_toml(
    season: Season,
    content: &str,
    context: &ValidationContext,
) -> Result<TeamTable> {
    let document: TomlTable =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    build(season, document.teams, context)
}

/// Detect the table format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.json`, `.js` → `TableFormat::Json`
/// * `.yaml`, `.yml` → `TableFormat::Yaml`
/// * `.toml` → `TableFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<TableFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "json" | "js" => Ok(TableFormat::Json),
        "yaml" | "yml" => Ok(TableFormat::Yaml),
        "toml" => Ok(TableFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Read the season year from a file name such as `nfl_teams_2022.json`.
pub fn season_from_path(path: &Path) -> Option<Season> {
    let stem = path.file_stem()?.to_str()?;
    stem.split(|c: char| !c.is_ascii_digit())
        .filter(|run| run.len() == 4)
        .find_map(|run| run.parse::<u16>().ok())
        .map(Season::new)
}

/// Parse a table from a file with automatic format detection.
///
/// An explicit `season` takes precedence over one found in the file name.
///
/// # Example
///
/// ```no_run
/// use teams_core::ValidationContext;
/// use teams_parser::parse_file;
/// use std::path::Path;
///
/// let table = parse_file(
///     Path::new("data/nfl_teams_2022.json"),
///     None,
///     &ValidationContext::new(),
/// )
/// .unwrap();
/// println!("Loaded {} teams for {}", table.len(), table.season());
/// ```
pub fn parse_file(
    path: &Path,
    season: Option<Season>,
    context: &ValidationContext,
) -> Result<TeamTable> {
    let format = detect_format(path)?;
    let season = season
        .or_else(|| season_from_path(path))
        .ok_or_else(|| ParserError::UnknownSeason(path.display().to_string()))?;
    let content = std::fs::read_to_string(path)?;

    debug!(path = %path.display(), ?format, %season, "Reading team table");

    let table = match format {
        TableFormat::Json => parse_json(season, &content, context),
        TableFormat::Yaml => parse_yaml(season, &content, context),
        TableFormat::Toml => parse_toml(season, &content, context),
    }?;

    info!("Loaded {} teams for season {} from {}", table.len(), season, path.display());
    Ok(table)
}

fn build(
    season: Season,
    records: Vec<TeamRecord>,
    context: &ValidationContext,
) -> Result<TeamTable> {
    Ok(TeamTable::with_context(season, records, context)?)
}
