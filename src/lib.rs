//! NHL standings scraper.
//!
//! Fetches the standings page from shrpsports.com, pulls the text out of its
//! standings table and turns it into per-team records keyed by team name.

pub mod chunker;
pub mod client;
pub mod config;
pub mod error;
pub mod markup;
pub mod record;
pub mod standings;
pub mod team;

pub use chunker::{parse_teams, NoiseFilter, ParsedTable, TeamChunks};
pub use client::{parse_standings_page, StandingsClient, StandingsReport};
pub use config::{StandingsConfig, StandingsQuery, TableLocator, View};
pub use error::{ChunkParseError, FieldError, RecordFormatError, Result, StandingsError};
pub use record::{parse_record, Record};
pub use standings::{Standings, TeamStats};
pub use team::Team;
