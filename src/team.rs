use serde::Serialize;

use crate::error::FieldError;
use crate::record::{parse_record, Record};

/// Number of columns in one standings row
pub const ROW_WIDTH: usize = 11;

/// One row of the standings table
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub record: Record,
    /// Regulation + overtime wins. A single count, not a triplet.
    pub row: u32,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub home_record: Record,
    pub away_record: Record,
    pub division_record: Record,
    pub conference_record: Record,
    pub icf_record: Record,
}

impl Team {
    /// Build a team from one row's columns, in page order:
    /// name, W-L-OT, ROW, Pts, GF, GA, Home, Away, Div, Cnf, Icf.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, FieldError> {
        if fields.len() != ROW_WIDTH {
            return Err(FieldError::ColumnCount {
                expected: ROW_WIDTH,
                found: fields.len(),
            });
        }
        let columns: Vec<&str> = fields.iter().map(AsRef::as_ref).collect();

        Ok(Self {
            name: columns[0].to_string(),
            record: record_field("record", columns[1])?,
            row: integer_field("ROW", columns[2])?,
            points: integer_field("points", columns[3])?,
            goals_for: integer_field("goalsfor", columns[4])?,
            goals_against: integer_field("goalsagainst", columns[5])?,
            home_record: record_field("homerecord", columns[6])?,
            away_record: record_field("awayrecord", columns[7])?,
            division_record: record_field("divisionrecord", columns[8])?,
            conference_record: record_field("conferencerecord", columns[9])?,
            icf_record: record_field("icf", columns[10])?,
        })
    }

    pub fn goal_differential(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

fn record_field(field: &'static str, value: &str) -> Result<Record, FieldError> {
    parse_record(value).map_err(|source| FieldError::Record { field, source })
}

fn integer_field(field: &'static str, value: &str) -> Result<u32, FieldError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|source| FieldError::Integer {
            field,
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_columns_by_position() {
        let team = Team::from_fields(&[
            "New York Rangers",
            "55-23-4",
            "50",
            "114",
            "282",
            "229",
            "29-10-2",
            "26-13-2",
            "15-9-2",
            "34-15-3",
            "21-8-1",
        ])
        .unwrap();

        assert_eq!(team.name, "New York Rangers");
        assert_eq!(team.record, Record::new(55, 23, 4));
        assert_eq!(team.row, 50);
        assert_eq!(team.points, 114);
        assert_eq!(team.goals_for, 282);
        assert_eq!(team.goals_against, 229);
        assert_eq!(team.home_record, Record::new(29, 10, 2));
        assert_eq!(team.away_record, Record::new(26, 13, 2));
        assert_eq!(team.division_record, Record::new(15, 9, 2));
        assert_eq!(team.conference_record, Record::new(34, 15, 3));
        assert_eq!(team.icf_record, Record::new(21, 8, 1));
        assert_eq!(team.goal_differential(), 53);
    }

    #[test]
    fn row_must_be_a_plain_integer() {
        let err = Team::from_fields(&[
            "Boston", "41-31-10", "25-1-0", "92", "250", "210", "20-16-5", "21-15-5", "10-8-2",
            "30-20-6", "15-10-3",
        ])
        .unwrap_err();

        assert_eq!(err.field(), Some("ROW"));
        assert!(matches!(err, FieldError::Integer { .. }));
    }

    #[test]
    fn reports_the_failing_record_column() {
        let err = Team::from_fields(&[
            "Boston", "41-31-10", "25", "92", "250", "210", "20-16-5", "21-15-5", "10-8-2",
            "30-20", "15-10-3",
        ])
        .unwrap_err();

        assert_eq!(err.field(), Some("conferencerecord"));
        assert!(matches!(err, FieldError::Record { .. }));
    }

    #[test]
    fn negative_counts_are_rejected() {
        let err = Team::from_fields(&[
            "Boston", "41-31-10", "-1", "92", "250", "210", "20-16-5", "21-15-5", "10-8-2",
            "30-20-6", "15-10-3",
        ])
        .unwrap_err();

        assert_eq!(err.field(), Some("ROW"));
        match err {
            FieldError::Integer { value, .. } => assert_eq!(value, "-1"),
            other => panic!("unexpected error: {other:?}"),
        }

        let team = Team::from_fields(&[
            "Boston", "41-31-10", "+25", "92", "250", "210", "20-16-5", "21-15-5", "10-8-2",
            "30-20-6", "15-10-3",
        ])
        .unwrap();
        assert_eq!(team.row, 25);
    }

    #[test]
    fn short_rows_are_rejected() {
        let err = Team::from_fields(&["Boston", "41-31-10", "25"]).unwrap_err();
        assert_eq!(
            err,
            FieldError::ColumnCount {
                expected: ROW_WIDTH,
                found: 3
            }
        );
        assert_eq!(err.field(), None);
    }
}
