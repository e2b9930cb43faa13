use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// Combined document written by the extraction step: raw API sections
/// plus a pre-resolved game id, date and metadata at the top level.
#[derive(Debug, Deserialize)]
pub struct CombinedPayload {
    pub game_id: i64,
    pub game_date: Option<NaiveDate>,
    pub game_type: Option<String>,
    pub official_date: Option<NaiveDate>,
    pub series_description: Option<String>,
    pub boxscore: Option<Value>,
    pub game_data: Option<Value>,
}

/// Raw per-game boxscore document.
#[derive(Debug, Deserialize)]
pub struct BoxscorePayload {
    pub teams: BoxscoreTeams,
}

#[derive(Debug, Deserialize)]
pub struct BoxscoreTeams {
    pub home: BoxscoreSide,
    pub away: BoxscoreSide,
}

#[derive(Debug, Default, Deserialize)]
pub struct BoxscoreSide {
    #[serde(default)]
    pub team: Option<TeamDescriptor>,
    // Keys look like "ID660271"; a BTreeMap keeps iteration stable.
    #[serde(default)]
    pub players: BTreeMap<String, BoxscorePlayer>,
}

#[derive(Debug, Deserialize)]
pub struct BoxscorePlayer {
    #[serde(default)]
    pub person: Option<PersonDescriptor>,
    #[serde(default)]
    pub stats: PlayerStats,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerStats {
    #[serde(default)]
    pub batting: serde_json::Map<String, Value>,
}

impl PlayerStats {
    /// The feed leaves `batting` as an empty object for players without a
    /// plate appearance; those produce no boxscore line at all.
    pub fn batting(&self) -> Result<Option<BattingStats>> {
        if self.batting.is_empty() {
            return Ok(None);
        }
        let stats = serde_json::from_value(Value::Object(self.batting.clone()))?;
        Ok(Some(stats))
    }
}

/// Batting counters under the API's camelCase names. A field absent from
/// the source is zero.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BattingStats {
    #[serde(rename = "atBats")]
    pub at_bats: i64,
    pub runs: i64,
    pub hits: i64,
    pub doubles: i64,
    pub triples: i64,
    #[serde(rename = "homeRuns")]
    pub home_runs: i64,
    pub rbi: i64,
    #[serde(rename = "baseOnBalls")]
    pub walks: i64,
    #[serde(rename = "strikeOuts")]
    pub strikeouts: i64,
    #[serde(rename = "hitByPitch")]
    pub hit_by_pitch: i64,
    #[serde(rename = "sacFlies")]
    pub sacrifice_flies: i64,
    #[serde(rename = "sacBunts")]
    pub sacrifice_bunts: i64,
}

/// Raw per-game summary document (linescore shape).
#[derive(Debug, Deserialize)]
pub struct GamePayload {
    pub teams: GameTeams,
    #[serde(rename = "currentInning")]
    pub current_inning: Option<i64>,
    #[serde(rename = "inningState")]
    pub inning_state: Option<String>,
    #[serde(rename = "gameDate")]
    pub game_date: Option<String>,
    #[serde(rename = "gameType")]
    pub game_type: Option<String>,
    #[serde(rename = "seriesDescription")]
    pub series_description: Option<String>,
    #[serde(rename = "officialDate")]
    pub official_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<StatusDescriptor>,
}

#[derive(Debug, Deserialize)]
pub struct GameTeams {
    pub home: GameSide,
    pub away: GameSide,
}

#[derive(Debug, Default, Deserialize)]
pub struct GameSide {
    #[serde(default)]
    pub team: Option<TeamDescriptor>,
    #[serde(default)]
    pub runs: i64,
}

#[derive(Debug, Deserialize)]
pub struct StatusDescriptor {
    #[serde(rename = "detailedState")]
    pub detailed_state: Option<String>,
    #[serde(rename = "abstractGameState")]
    pub abstract_game_state: Option<String>,
}

impl StatusDescriptor {
    pub fn state(&self) -> Option<&str> {
        self.detailed_state
            .as_deref()
            .or(self.abstract_game_state.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamDescriptor {
    pub id: i64,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub league: Option<NamedRef>,
    #[serde(default)]
    pub division: Option<NamedRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PersonDescriptor {
    pub id: i64,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(rename = "primaryPosition")]
    pub primary_position: Option<NamedRef>,
}

/// Schedule endpoint response: games grouped by date.
#[derive(Debug, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleDate {
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub games: Vec<ScheduleGame>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleGame {
    #[serde(rename = "gamePk")]
    pub game_pk: i64,
    #[serde(rename = "gameDate")]
    pub game_date: Option<String>,
    #[serde(rename = "officialDate")]
    pub official_date: Option<NaiveDate>,
    #[serde(rename = "gameType")]
    pub game_type: Option<String>,
    #[serde(rename = "seriesDescription")]
    pub series_description: Option<String>,
    #[serde(default)]
    pub status: Option<StatusDescriptor>,
    #[serde(default)]
    pub teams: Option<ScheduleTeams>,
    #[serde(default)]
    pub linescore: Option<Linescore>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleTeams {
    pub home: ScheduleSide,
    pub away: ScheduleSide,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleSide {
    #[serde(default)]
    pub team: Option<TeamDescriptor>,
}

#[derive(Debug, Deserialize)]
pub struct Linescore {
    #[serde(rename = "currentInning")]
    pub current_inning: Option<i64>,
    #[serde(rename = "inningState")]
    pub inning_state: Option<String>,
    #[serde(default)]
    pub teams: Option<LinescoreTeams>,
}

#[derive(Debug, Deserialize)]
pub struct LinescoreTeams {
    pub home: LinescoreSide,
    pub away: LinescoreSide,
}

#[derive(Debug, Default, Deserialize)]
pub struct LinescoreSide {
    #[serde(default)]
    pub runs: Option<i64>,
}
