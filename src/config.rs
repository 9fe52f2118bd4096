use std::fmt;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};

use crate::chunker::NoiseFilter;

pub const DEFAULT_STANDINGS_URL: &str = "https://www.shrpsports.com/nhl/stand.php";
pub const DEFAULT_USER_AGENT: &str = "NHL Standings Scraper 1.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How the standings page groups teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum View {
    /// Grouped by division
    #[default]
    Div,
    /// Grouped by conference
    Cnf,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Div => "div",
            View::Cnf => "cnf",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which standings page to request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsQuery {
    /// Year the season ends in (2025 for 2024-25)
    pub season: i32,
    pub view: View,
    /// `0` means "latest"
    pub date: String,
    /// `xxx` means "latest"
    pub month: String,
}

impl StandingsQuery {
    pub fn new(season: i32) -> Self {
        Self {
            season,
            view: View::default(),
            date: "0".to_string(),
            month: "xxx".to_string(),
        }
    }

    /// Query for the season in progress on `today`.
    ///
    /// Seasons start in October, so from September on the page is keyed by
    /// the following year.
    pub fn for_date(today: NaiveDate) -> Self {
        Self::new(season_for(today))
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.view = view;
        self
    }

    /// Query-string pairs in the order the site expects them
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("link", "Y".to_string()),
            ("season", self.season.to_string()),
            ("divcnf", self.view.as_str().to_string()),
            ("date", self.date.clone()),
            ("month", self.month.clone()),
        ]
    }
}

pub fn season_for(today: NaiveDate) -> i32 {
    if today.month() >= 9 {
        today.year() + 1
    } else {
        today.year()
    }
}

/// Attributes that pick out the standings table among the page's tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLocator {
    pub attributes: Vec<(String, String)>,
}

impl Default for TableLocator {
    fn default() -> Self {
        Self {
            attributes: vec![
                ("cellpadding".to_string(), "4".to_string()),
                ("cellspacing".to_string(), "0".to_string()),
            ],
        }
    }
}

impl TableLocator {
    /// CSS selector for the first matching `<table>`
    pub fn selector(&self) -> String {
        let mut selector = String::from("table");
        for (name, value) in &self.attributes {
            selector.push_str(&format!("[{}=\"{}\"]", name, value));
        }
        selector
    }
}

/// Everything about a run that is not part of the query
#[derive(Debug, Clone)]
pub struct StandingsConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub table: TableLocator,
    pub noise: NoiseFilter,
}

impl Default for StandingsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STANDINGS_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            table: TableLocator::default(),
            noise: NoiseFilter::default(),
        }
    }
}
