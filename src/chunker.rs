//! Turns the text of the standings table into teams.
//!
//! The table's text nodes arrive as one flat sequence: conference and
//! division headings, column labels, blank spacer cells and the team rows
//! themselves. Header text is dropped by substring match against a set of
//! noise markers, blanks are skipped, and every 11 remaining tokens make one
//! row.

use tracing::{debug, warn};

use crate::error::ChunkParseError;
use crate::team::{Team, ROW_WIDTH};

/// Header and label text found between team rows on the standings page
pub const DEFAULT_NOISE_MARKERS: [&str; 12] = [
    "CONFERENCE",
    "Division",
    "W-L-OT",
    "ROW",
    "Pts",
    "GF",
    "GA",
    "Home",
    "Away",
    "Div",
    "Cnf",
    "Icf",
];

/// Substring markers that identify a token as table furniture rather than data.
///
/// Matching is case-sensitive and by substring, so a team name containing a
/// marker (say "Division") is dropped along with the headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseFilter {
    markers: Vec<String>,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new(DEFAULT_NOISE_MARKERS)
    }
}

impl NoiseFilter {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers
                .into_iter()
                .map(Into::into)
                .filter(|m: &String| !m.is_empty())
                .collect(),
        }
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    pub fn is_noise(&self, token: &str) -> bool {
        self.markers.iter().any(|marker| token.contains(marker.as_str()))
    }
}

/// Lazily groups tokens into rows, yielding one result per 11 accepted tokens.
///
/// A failed row is yielded as an error and the buffer starts over, so the
/// next row is unaffected. Tokens left over at the end are dropped.
pub struct TeamChunks<'a, I> {
    tokens: I,
    noise: &'a NoiseFilter,
    buffer: Vec<String>,
}

impl<'a, I> TeamChunks<'a, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new<T>(tokens: T, noise: &'a NoiseFilter) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            tokens: tokens.into_iter(),
            noise,
            buffer: Vec::with_capacity(ROW_WIDTH),
        }
    }
}

impl<I> Iterator for TeamChunks<'_, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<Team, ChunkParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        for token in self.tokens.by_ref() {
            let token = token.as_ref();
            if self.noise.is_noise(token) {
                continue;
            }
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            self.buffer.push(token.to_string());
            if self.buffer.len() == ROW_WIDTH {
                let chunk = std::mem::replace(&mut self.buffer, Vec::with_capacity(ROW_WIDTH));
                return Some(match Team::from_fields(chunk.as_slice()) {
                    Ok(team) => Ok(team),
                    Err(source) => Err(ChunkParseError { chunk, source }),
                });
            }
        }

        if !self.buffer.is_empty() {
            debug!(
                "Dropping {} trailing tokens that do not fill a row: {:?}",
                self.buffer.len(),
                self.buffer
            );
            self.buffer.clear();
        }
        None
    }
}

/// Teams parsed from one table, plus the rows that could not be parsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    pub teams: Vec<Team>,
    pub failures: Vec<ChunkParseError>,
}

/// Parse every row in `tokens`, keeping teams in input order.
///
/// Rows that fail are logged and collected in `failures`; they never stop the
/// run.
pub fn parse_teams<T>(tokens: T, noise: &NoiseFilter) -> ParsedTable
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut parsed = ParsedTable::default();

    for result in TeamChunks::new(tokens, noise) {
        match result {
            Ok(team) => parsed.teams.push(team),
            Err(error) => {
                warn!(
                    "Skipping team row {:?}: {}",
                    error.chunk, error.source
                );
                parsed.failures.push(error);
            }
        }
    }

    debug!(
        "Parsed {} teams ({} rows skipped)",
        parsed.teams.len(),
        parsed.failures.len()
    );
    parsed
}
