//! Guard file parsing and roster output.
//!
//! # Guard file format
//!
//! One guard per line, ids assigned `1, 2, ...` in line order:
//!
//! ```text
//! # preferred weekdays, then forbidden ones
//! 1 3 E6 E7
//! 2 E1
//! -
//! ```
//!
//! A bare digit `d` is a preferred weekday, `E<d>` a forbidden one, with
//! `d` in `1..=7`. A line holding only `-` is a guard with no constraints.
//! Blank lines and lines starting with `#` are skipped.
//!
//! # Roster format
//!
//! One line per day, `day night1 night2` as 1-based guard ids.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::error::RosterError;
use crate::models::{is_weekday, Guard, Schedule, Weekday};

/// Guard file parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token is neither a weekday number nor an `E<d>` forbidden day.
    #[error("line {line}: unrecognized token '{token}'")]
    InvalidToken {
        /// Line number (1-based).
        line: usize,
        /// Offending token.
        token: String,
    },

    /// A weekday token parsed as a number outside `1..=7`.
    #[error("line {line}: weekday out of range in '{token}' (expected 1..=7)")]
    WeekdayOutOfRange {
        /// Line number (1-based).
        line: usize,
        /// Offending token.
        token: String,
    },
}

/// Placeholder line for a guard without constraints.
const UNCONSTRAINED: &str = "-";

/// Prefix marking a forbidden weekday.
const FORBIDDEN_PREFIX: char = 'E';

/// Parses a guard file.
///
/// # Example
/// ```
/// use u_roster::io::parse_guards;
///
/// let guards = parse_guards("1 2 E7\n-\nE1\n").unwrap();
/// assert_eq!(guards.len(), 3);
/// assert!(guards[0].prefers(2));
/// assert!(guards[0].is_forbidden(7));
/// assert!(guards[1].preferred.is_empty());
/// assert!(guards[2].is_forbidden(1));
/// ```
pub fn parse_guards(input: &str) -> Result<Vec<Guard>, ParseError> {
    let mut guards = Vec::new();

    for (line_idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_no = line_idx + 1;
        let mut guard = Guard::new(guards.len() + 1);

        if line != UNCONSTRAINED {
            for token in line.split_whitespace() {
                match token.strip_prefix(FORBIDDEN_PREFIX) {
                    Some(rest) => {
                        let weekday = parse_weekday(rest, token, line_no)?;
                        guard.forbidden.insert(weekday);
                    }
                    None => {
                        let weekday = parse_weekday(token, token, line_no)?;
                        guard.preferred.insert(weekday);
                    }
                }
            }
        }

        guards.push(guard);
    }

    Ok(guards)
}

fn parse_weekday(digits: &str, token: &str, line: usize) -> Result<Weekday, ParseError> {
    let value: u32 = digits.parse().map_err(|_| ParseError::InvalidToken {
        line,
        token: token.to_string(),
    })?;
    match Weekday::try_from(value) {
        Ok(weekday) if is_weekday(weekday) => Ok(weekday),
        _ => Err(ParseError::WeekdayOutOfRange {
            line,
            token: token.to_string(),
        }),
    }
}

/// Reads and parses a guard file.
pub fn read_guards(path: impl AsRef<Path>) -> Result<Vec<Guard>, RosterError> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_guards(&contents)?)
}

/// Renders a roster, one `day night1 night2` line per day.
///
/// Unassigned slots render as `-`.
pub fn format_schedule(schedule: &Schedule) -> String {
    let mut out = String::with_capacity(schedule.day_count() * 12);
    for row in schedule.days() {
        let cells: Vec<String> = row
            .iter()
            .map(|slot| match slot {
                Some(guard) => guard.to_string(),
                None => UNCONSTRAINED.to_string(),
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

/// Writes a roster to `path`, replacing any existing file.
pub fn write_schedule(path: impl AsRef<Path>, schedule: &Schedule) -> Result<(), RosterError> {
    fs::write(path, format_schedule(schedule))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GuardId;

    #[test]
    fn test_parse_preferences_and_forbidden() {
        let guards = parse_guards("1 3 E6 E7\n2 E1\n").unwrap();
        assert_eq!(guards.len(), 2);
        assert_eq!(guards[0].id, GuardId::new(1));
        assert_eq!(guards[0].preferred.iter().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(guards[0].forbidden.iter().collect::<Vec<_>>(), vec![6, 7]);
        assert_eq!(guards[1].id, GuardId::new(2));
        assert!(guards[1].prefers(2));
        assert!(guards[1].is_forbidden(1));
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let input = "# roster input\n\n1\n   \n# trailing\nE2\n";
        let guards = parse_guards(input).unwrap();
        assert_eq!(guards.len(), 2);
        assert_eq!(guards[1].id, GuardId::new(2));
        assert!(guards[1].is_forbidden(2));
    }

    #[test]
    fn test_parse_placeholder_guard() {
        let guards = parse_guards("-\n4\n").unwrap();
        assert!(guards[0].preferred.is_empty());
        assert!(guards[0].forbidden.is_empty());
        assert!(guards[1].prefers(4));
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let guards = parse_guards("  1   E3\t5 \r\n").unwrap();
        assert!(guards[0].prefers(1));
        assert!(guards[0].prefers(5));
        assert!(guards[0].is_forbidden(3));
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        let err = parse_guards("1\n2 x\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidToken {
                line: 2,
                token: "x".to_string()
            }
        );
        assert_eq!(err.to_string(), "line 2: unrecognized token 'x'");
    }

    #[test]
    fn test_parse_rejects_out_of_range_weekday() {
        let err = parse_guards("E8\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::WeekdayOutOfRange {
                line: 1,
                token: "E8".to_string()
            }
        );
        assert!(matches!(
            parse_guards("0").unwrap_err(),
            ParseError::WeekdayOutOfRange { .. }
        ));
        assert!(matches!(
            parse_guards("1000").unwrap_err(),
            ParseError::WeekdayOutOfRange { .. }
        ));
    }

    #[test]
    fn test_parse_rejects_placeholder_mixed_with_weekdays() {
        assert!(matches!(
            parse_guards("- 3").unwrap_err(),
            ParseError::InvalidToken { line: 1, .. }
        ));
    }

    #[test]
    fn test_line_numbers_count_skipped_lines() {
        let err = parse_guards("# header\n\n1\nE\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidToken {
                line: 4,
                token: "E".to_string()
            }
        );
    }

    #[test]
    fn test_format_schedule() {
        let g = GuardId::new;
        let schedule = Schedule::from_rows(vec![[g(1), g(2), g(3)], [g(12), g(1), g(7)]]);
        assert_eq!(format_schedule(&schedule), "1 2 3\n12 1 7\n");
        assert_eq!(format_schedule(&Schedule::new(0)), "");
    }

    #[test]
    fn test_format_unassigned_slot() {
        let mut schedule = Schedule::new(1);
        schedule.assign(0, crate::models::Slot::Night1, GuardId::new(4));
        assert_eq!(format_schedule(&schedule), "- 4 -\n");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("guards.txt");
        fs::write(&input, "1 E7\n2\n3\n").unwrap();

        let guards = read_guards(&input).unwrap();
        assert_eq!(guards.len(), 3);

        let g = GuardId::new;
        let schedule = Schedule::from_rows(vec![[g(1), g(2), g(3)]]);
        let output = dir.path().join("roster.txt");
        write_schedule(&output, &schedule).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "1 2 3\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_guards(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, RosterError::Io(_)));
    }

    #[test]
    fn test_read_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("guards.txt");
        fs::write(&input, "E9\n").unwrap();
        assert!(matches!(
            read_guards(&input).unwrap_err(),
            RosterError::Parse(ParseError::WeekdayOutOfRange { line: 1, .. })
        ));
    }
}
