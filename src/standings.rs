use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::Record;
use crate::team::Team;

/// One team's statistics, serialized with the standings output field names
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TeamStats {
    pub record: Record,
    #[serde(rename = "ROW")]
    pub row: u32,
    pub points: u32,
    #[serde(rename = "goalsfor")]
    pub goals_for: u32,
    #[serde(rename = "goalsagainst")]
    pub goals_against: u32,
    #[serde(rename = "homerecord")]
    pub home_record: Record,
    #[serde(rename = "awayrecord")]
    pub away_record: Record,
    #[serde(rename = "divisionrecord")]
    pub division_record: Record,
    #[serde(rename = "conferencerecord")]
    pub conference_record: Record,
    pub icf: Record,
}

impl From<Team> for TeamStats {
    fn from(team: Team) -> Self {
        Self {
            record: team.record,
            row: team.row,
            points: team.points,
            goals_for: team.goals_for,
            goals_against: team.goals_against,
            home_record: team.home_record,
            away_record: team.away_record,
            division_record: team.division_record,
            conference_record: team.conference_record,
            icf: team.icf_record,
        }
    }
}

/// Team name to statistics. Serializes as a plain JSON object.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Standings {
    teams: BTreeMap<String, TeamStats>,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a team, replacing any earlier entry with the same name
    pub fn insert(&mut self, team: Team) -> Option<TeamStats> {
        let name = team.name.clone();
        self.teams.insert(name, TeamStats::from(team))
    }

    pub fn get(&self, name: &str) -> Option<&TeamStats> {
        self.teams.get(name)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TeamStats)> {
        self.teams.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    /// Teams ordered by points, then regulation + overtime wins, then name
    pub fn ranked(&self) -> Vec<(&str, &TeamStats)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|(a_name, a), (b_name, b)| {
            b.points
                .cmp(&a.points)
                .then(b.row.cmp(&a.row))
                .then(a_name.cmp(b_name))
        });
        ranked
    }
}

impl FromIterator<Team> for Standings {
    fn from_iter<T: IntoIterator<Item = Team>>(iter: T) -> Self {
        let mut standings = Standings::new();
        for team in iter {
            standings.insert(team);
        }
        standings
    }
}

impl Extend<Team> for Standings {
    fn extend<T: IntoIterator<Item = Team>>(&mut self, iter: T) {
        for team in iter {
            self.insert(team);
        }
    }
}
