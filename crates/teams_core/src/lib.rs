//! # NFL Teams Core
//!
//! Core data structures for the NFL team reference table.
//!
//! This crate holds the record schema, the validated in-memory table with its lookup
//! indices, and the embedded 2022 snapshot. A table is validated once when it is built
//! and never changes afterwards, so any number of readers can share it.
//!
//! ## Key Concepts
//!
//! - **TeamRecord**: One franchise (identifier, name, nickname, abbreviation, area, venue)
//! - **TeamTable**: The immutable, validated set of records with exact-match lookups
//! - **Season**: The year a snapshot describes
//! - **Co-tenancy**: Two franchises sharing a metro area or venue, which is valid
//!
//! ## Example
//!
//! ```rust
//! use teams_core::snapshot;
//!
//! let teams = snapshot::nfl_2022();
//! assert_eq!(teams.len(), 32);
//!
//! let chiefs = teams.find_by_id("12").expect("Chiefs are in the 2022 table");
//! assert_eq!(chiefs.team_abbr, "KC");
//!
//! assert!(teams.find_by_id("999").is_none());
//! ```

pub mod builder;
pub mod error;
pub mod matchup;
pub mod snapshot;
pub mod table;
pub mod team;
pub mod validator;

pub use builder::*;
pub use error::*;
pub use matchup::*;
pub use table::*;
pub use team::*;
pub use validator::*;
