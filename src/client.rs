use reqwest::Url;
use tracing::{debug, info};

use crate::chunker::parse_teams;
use crate::config::{StandingsConfig, StandingsQuery};
use crate::error::{ChunkParseError, Result, StandingsError};
use crate::markup::table_tokens;
use crate::standings::Standings;

/// Outcome of one run: the standings, and the rows that were skipped
#[derive(Debug, Clone, Default)]
pub struct StandingsReport {
    pub standings: Standings,
    pub failures: Vec<ChunkParseError>,
}

/// Extract standings from an already-fetched page
pub fn parse_standings_page(html: &str, config: &StandingsConfig) -> Result<StandingsReport> {
    let tokens = table_tokens(html, &config.table)?;
    let parsed = parse_teams(&tokens, &config.noise);

    let report = StandingsReport {
        standings: parsed.teams.into_iter().collect(),
        failures: parsed.failures,
    };
    info!(
        "Parsed standings for {} teams ({} rows skipped)",
        report.standings.len(),
        report.failures.len()
    );
    Ok(report)
}

/// HTTP client for the standings page
pub struct StandingsClient {
    client: reqwest::Client,
    config: StandingsConfig,
}

impl StandingsClient {
    pub fn new(config: StandingsConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .pool_max_idle_per_host(2)
            .build()
            .map_err(|e| StandingsError::fetch(config.base_url.as_str(), e))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &StandingsConfig {
        &self.config
    }

    pub fn page_url(&self, query: &StandingsQuery) -> Result<Url> {
        Url::parse_with_params(&self.config.base_url, query.params()).map_err(|e| {
            StandingsError::InvalidUrl {
                url: self.config.base_url.clone(),
                message: e.to_string(),
            }
        })
    }

    /// GET the standings page and return its body
    pub async fn fetch_page(&self, query: &StandingsQuery) -> Result<String> {
        let url = self.page_url(query)?;
        debug!("Fetching standings page {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| StandingsError::fetch(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StandingsError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        response
            .text()
            .await
            .map_err(|e| StandingsError::fetch(url.as_str(), e))
    }

    /// Fetch the page for `query` and parse it
    pub async fn fetch_standings(&self, query: &StandingsQuery) -> Result<StandingsReport> {
        let html = self.fetch_page(query).await?;
        parse_standings_page(&html, &self.config)
    }
}
