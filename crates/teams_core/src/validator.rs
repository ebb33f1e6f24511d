//! Invariant validation for team tables.
//!
//! Every table is checked here before it is built. Hard invariants (record count,
//! non-empty fields, unique id/abbreviation/name) are always errors. Format checks
//! (digit ids, uppercase abbreviations, nickname inside the name) are errors in strict
//! mode and warnings otherwise. Shared areas and venues are never reported.

use crate::TeamRecord;
use std::collections::HashMap;
use thiserror::Error;

/// Number of franchises in the league.
pub const LEAGUE_SIZE: usize = 32;

/// A single broken table invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Wrong number of records
    #[error("expected {expected} team records, found {actual}")]
    RecordCount {
        /// Required count
        expected: usize,
        /// Count found
        actual: usize,
    },

    /// A field is empty or whitespace
    #[error("record {index}: field '{field}' is empty")]
    EmptyField {
        /// Position of the record in authored order
        index: usize,
        /// Field name
        field: &'static str,
    },

    /// A unique key appears twice
    #[error("duplicate {field} '{value}' in records {first} and {second}")]
    DuplicateKey {
        /// Key field name
        field: &'static str,
        /// Repeated value
        value: String,
        /// Position of the first occurrence
        first: usize,
        /// Position of the repeat
        second: usize,
    },

    /// A field does not have the expected shape
    #[error("record {index}: {field} '{value}' {reason}")]
    MalformedField {
        /// Position of the record in authored order
        index: usize,
        /// Field name
        field: &'static str,
        /// Offending value
        value: String,
        /// What is wrong with it
        reason: &'static str,
    },
}

/// Options for validating a table.
///
/// The default is strict with [`LEAGUE_SIZE`] records, which is what the embedded
/// snapshot is held to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationContext {
    /// Treat format problems as errors instead of warnings
    pub strict: bool,

    /// Exact number of records the table must hold
    pub expected_count: usize,
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self {
            strict: true,
            expected_count: LEAGUE_SIZE,
        }
    }
}

impl ValidationContext {
    /// Creates a new validation context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets strict validation mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the required record count.
    pub fn with_expected_count(mut self, expected_count: usize) -> Self {
        self.expected_count = expected_count;
        self
    }
}

/// Report of validation results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Violations that prevent the table from loading
    pub errors: Vec<Violation>,

    /// Format problems tolerated in lenient mode
    pub warnings: Vec<String>,

    /// Validation statistics
    pub stats: ValidationStats,
}

/// Statistics about validation execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationStats {
    /// Number of records validated
    pub records_validated: usize,

    /// Number of individual checks evaluated
    pub checks_evaluated: usize,
}

impl ValidationReport {
    /// Creates an empty, passing report.
    pub fn success() -> Self {
        Self::default()
    }

    /// Whether validation passed overall.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the report.
    pub fn add_error(&mut self, violation: Violation) {
        self.errors.push(violation);
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// One-line description of every error, for logs and error messages.
    pub fn summary(&self) -> String {
        if self.errors.is_empty() {
            return "no violations".to_string();
        }
        let details: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        format!("{} violation(s): {}", self.errors.len(), details.join("; "))
    }
}

/// Checks a list of records against the table invariants.
pub struct TableValidator;

impl TableValidator {
    /// Creates a new table validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates records in authored order.
    ///
    /// Collects every violation rather than stopping at the first, so a report
    /// lists all problems in a malformed file at once.
    pub fn validate(
        &self,
        records: &[TeamRecord],
        context: &ValidationContext,
    ) -> ValidationReport {
        let mut report = ValidationReport::success();
        let mut checks = 1;

        if records.len() != context.expected_count {
            report.add_error(Violation::RecordCount {
                expected: context.expected_count,
                actual: records.len(),
            });
        }

        for (index, record) in records.iter().enumerate() {
            for (field, value) in record.fields() {
                checks += 1;
                if value.trim().is_empty() {
                    report.add_error(Violation::EmptyField { index, field });
                }
            }

            let format_violations = self.check_formats(index, record);
            checks += 3;
            for violation in format_violations {
                if context.strict {
                    report.add_error(violation);
                } else {
                    report.add_warning(violation.to_string());
                }
            }
        }

        checks += self.check_unique("team_id", records, |r| r.team_id.as_str(), &mut report);
        checks += self.check_unique("team_abbr", records, |r| r.team_abbr.as_str(), &mut report);
        checks += self.check_unique("team_name", records, |r| r.team_name.as_str(), &mut report);

        report.stats = ValidationStats {
            records_validated: records.len(),
            checks_evaluated: checks,
        };
        report
    }

    /// Shape checks for a single record. Blank fields are skipped here since they
    /// are already reported as empty.
    fn check_formats(&self, index: usize, record: &TeamRecord) -> Vec<Violation> {
        let mut violations = Vec::new();

        let id = record.team_id.as_str();
        if !id.trim().is_empty() && !id.chars().all(|c| c.is_ascii_digit()) {
            violations.push(Violation::MalformedField {
                index,
                field: "team_id",
                value: id.to_string(),
                reason: "is not a string of digits",
            });
        }

        let abbr = record.team_abbr.as_str();
        if !abbr.trim().is_empty() && !is_valid_abbr(abbr) {
            violations.push(Violation::MalformedField {
                index,
                field: "team_abbr",
                value: abbr.to_string(),
                reason: "is not 2-3 uppercase letters",
            });
        }

        let has_nick_and_name =
            !record.team_nick.trim().is_empty() && !record.team_name.trim().is_empty();
        if has_nick_and_name && !record.nick_matches_name() {
            violations.push(Violation::MalformedField {
                index,
                field: "team_nick",
                value: record.team_nick.clone(),
                reason: "is not the trailing part of team_name",
            });
        }

        violations
    }

    /// Reports every repeat of a key field. Returns the number of values compared.
    fn check_unique<'a>(
        &self,
        field: &'static str,
        records: &'a [TeamRecord],
        key: impl Fn(&'a TeamRecord) -> &'a str,
        report: &mut ValidationReport,
    ) -> usize {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut compared = 0;

        for (index, record) in records.iter().enumerate() {
            let value = key(record);
            if value.trim().is_empty() {
                continue;
            }
            compared += 1;
            match seen.get(value) {
                Some(&first) => report.add_error(Violation::DuplicateKey {
                    field,
                    value: value.to_string(),
                    first,
                    second: index,
                }),
                None => {
                    seen.insert(value, index);
                }
            }
        }

        compared
    }
}

impl Default for TableValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn is_valid_abbr(abbr: &str) -> bool {
    (2..=3).contains(&abbr.len()) && abbr.chars().all(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TeamRecordBuilder;
    use pretty_assertions::assert_eq;

    fn giants() -> TeamRecord {
        TeamRecordBuilder::new("19", "New York Giants")
            .nick("Giants")
            .abbr("NYG")
            .area("New York")
            .venue("MetLife Stadium")
            .build()
    }

    fn jets() -> TeamRecord {
        TeamRecordBuilder::new("20", "New York Jets")
            .nick("Jets")
            .abbr("NYJ")
            .area("New York")
            .venue("MetLife Stadium")
            .build()
    }

    fn context(count: usize) -> ValidationContext {
        ValidationContext::new().with_expected_count(count)
    }

    #[test]
    fn test_shared_venue_and_area_pass() {
        let report = TableValidator::new().validate(&[giants(), jets()], &context(2));
        assert!(report.passed(), "{}", report.summary());
        assert!(report.warnings.is_empty());
        assert_eq!(report.stats.records_validated, 2);
    }

    #[test]
    fn test_wrong_record_count() {
        let report = TableValidator::new().validate(&[giants()], &ValidationContext::new());
        assert_eq!(
            report.errors,
            vec![Violation::RecordCount {
                expected: 32,
                actual: 1
            }]
        );
    }

    #[test]
    fn test_duplicate_id_reported_with_positions() {
        let mut second = jets();
        second.team_id = "19".to_string();

        let report = TableValidator::new().validate(&[giants(), second], &context(2));
        assert_eq!(
            report.errors,
            vec![Violation::DuplicateKey {
                field: "team_id",
                value: "19".to_string(),
                first: 0,
                second: 1,
            }]
        );
    }

    #[test]
    fn test_duplicate_abbr_and_name_both_reported() {
        let copy = giants();
        let report = TableValidator::new().validate(&[giants(), copy], &context(2));

        let fields: Vec<&str> = report
            .errors
            .iter()
            .filter_map(|v| match v {
                Violation::DuplicateKey { field, .. } => Some(*field),
                _ => None,
            })
            .collect();
        assert_eq!(fields, vec!["team_id", "team_abbr", "team_name"]);
    }

    #[test]
    fn test_empty_fields_reported_once() {
        let record = TeamRecordBuilder::new("", "Chicago Bears")
            .nick("Bears")
            .abbr("CHI")
            .area("Chicago")
            .venue("   ")
            .build();

        let report = TableValidator::new().validate(&[record], &context(1));
        assert_eq!(
            report.errors,
            vec![
                Violation::EmptyField {
                    index: 0,
                    field: "team_id"
                },
                Violation::EmptyField {
                    index: 0,
                    field: "team_venue"
                },
            ]
        );
    }

    #[test]
    fn test_blank_fields_skip_format_checks() {
        let record = TeamRecordBuilder::new(" ", "Chicago Bears")
            .nick("  ")
            .abbr(" ")
            .area("Chicago")
            .venue("Soldier Field")
            .build();

        let report = TableValidator::new().validate(&[record], &context(1));
        assert_eq!(
            report.errors,
            vec![
                Violation::EmptyField {
                    index: 0,
                    field: "team_id"
                },
                Violation::EmptyField {
                    index: 0,
                    field: "team_nick"
                },
                Violation::EmptyField {
                    index: 0,
                    field: "team_abbr"
                },
            ]
        );
    }

    #[test]
    fn test_two_empty_ids_are_not_duplicates() {
        let mut first = giants();
        first.team_id = String::new();
        let mut second = jets();
        second.team_id = String::new();

        let report = TableValidator::new().validate(&[first, second], &context(2));
        assert!(
            report
                .errors
                .iter()
                .all(|v| matches!(v, Violation::EmptyField { .. }))
        );
    }

    #[test]
    fn test_malformed_fields_fail_in_strict_mode() {
        let mut record = giants();
        record.team_id = "G19".to_string();
        record.team_abbr = "nyg".to_string();
        record.team_nick = "Jets".to_string();

        let report = TableValidator::new().validate(&[record], &context(1));
        assert!(!report.passed());
        assert_eq!(report.errors.len(), 3);
        assert!(report.errors[0].to_string().contains("not a string of digits"));
        assert!(report.errors[1].to_string().contains("2-3 uppercase letters"));
        assert!(report.errors[2].to_string().contains("trailing part"));
    }

    #[test]
    fn test_malformed_fields_warn_in_lenient_mode() {
        let mut record = giants();
        record.team_abbr = "NYGI".to_string();

        let report =
            TableValidator::new().validate(&[record], &context(1).with_strict(false));
        assert!(report.passed());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("NYGI"));
    }

    #[test]
    fn test_summary_lists_all_errors() {
        let report = TableValidator::new().validate(&[giants(), giants()], &context(3));
        let summary = report.summary();
        assert!(summary.starts_with("4 violation(s)"), "{}", summary);
        assert!(summary.contains("expected 3 team records, found 2"));
        assert!(summary.contains("duplicate team_abbr 'NYG'"));
    }

    #[test]
    fn test_abbr_shape() {
        assert!(is_valid_abbr("KC"));
        assert!(is_valid_abbr("WSH"));
        assert!(!is_valid_abbr("K"));
        assert!(!is_valid_abbr("Kc"));
        assert!(!is_valid_abbr("NYGS"));
    }
}
