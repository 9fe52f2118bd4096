use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RecordFormatError;

/// Win / loss / overtime-loss triplet, written `W-L-OT` on the standings page
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub overtime_losses: u32,
}

impl Record {
    pub fn new(wins: u32, losses: u32, overtime_losses: u32) -> Self {
        Self {
            wins,
            losses,
            overtime_losses,
        }
    }

    pub fn games_played(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses) + u64::from(self.overtime_losses)
    }

    /// Two points per win, one per overtime loss
    pub fn points(&self) -> u64 {
        u64::from(self.wins) * 2 + u64::from(self.overtime_losses)
    }
}

/// Parse a `"41-31-10"` style record.
///
/// Whitespace around the string and around each value is ignored. Anything
/// other than exactly three integers separated by `-` is rejected.
pub fn parse_record(s: &str) -> Result<Record, RecordFormatError> {
    let input = s.trim();
    let parts: Vec<&str> = input.split('-').collect();
    if parts.len() != 3 {
        return Err(RecordFormatError::FieldCount {
            input: input.to_string(),
            found: parts.len(),
        });
    }

    let number = |part: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|source| RecordFormatError::InvalidNumber {
                input: input.to_string(),
                part: part.to_string(),
                source,
            })
    };

    Ok(Record::new(
        number(parts[0])?,
        number(parts[1])?,
        number(parts[2])?,
    ))
}

impl FromStr for Record {
    type Err = RecordFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_record(s)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.overtime_losses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_record() {
        assert_eq!(parse_record("41-31-10").unwrap(), Record::new(41, 31, 10));
        assert_eq!(parse_record("  0-0-0\n").unwrap(), Record::new(0, 0, 0));
        assert_eq!(parse_record("20 - 16 - 5").unwrap(), Record::new(20, 16, 5));
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(matches!(
            parse_record("41-31"),
            Err(RecordFormatError::FieldCount { found: 2, .. })
        ));
        assert!(matches!(
            parse_record("41-31-10-5"),
            Err(RecordFormatError::FieldCount { found: 4, .. })
        ));
    }

    #[test]
    fn rejects_non_integer_parts() {
        let err = parse_record("x-1-2").unwrap_err();
        match err {
            RecordFormatError::InvalidNumber { part, input, .. } => {
                assert_eq!(part, "x");
                assert_eq!(input, "x-1-2");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(parse_record("41/31/10").is_err());
        assert!(parse_record("1.5-2-3").is_err());
    }

    #[test]
    fn rejects_empty_input() {
        // "" splits into a single empty part
        assert!(matches!(
            parse_record(""),
            Err(RecordFormatError::FieldCount { found: 1, .. })
        ));
        assert!(matches!(
            parse_record("--"),
            Err(RecordFormatError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn display_and_from_str_agree() {
        let record: Record = "15-10-3".parse().unwrap();
        assert_eq!(record.to_string(), "15-10-3");
        assert_eq!(record.games_played(), 28);
        assert_eq!(record.points(), 33);
    }

    #[test]
    fn totals_do_not_overflow_on_large_counts() {
        let record = parse_record("4294967295-1-0").unwrap();
        assert_eq!(record.wins, u32::MAX);
        assert_eq!(record.games_played(), u64::from(u32::MAX) + 1);
        assert_eq!(record.points(), u64::from(u32::MAX) * 2);

        let record = parse_record("4294967295-4294967295-4294967295").unwrap();
        assert_eq!(record.games_played(), u64::from(u32::MAX) * 3);
        assert_eq!(record.points(), u64::from(u32::MAX) * 3);
    }
}
