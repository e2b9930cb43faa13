use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Reference entity keyed by the external MLB team id. Written once,
/// never updated (first observation is authoritative).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub team_id: i64,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub league: Option<String>,
    pub division: Option<String>,
}

/// Reference entity keyed by the external MLB player id. `team_id` is the
/// first-seen affiliation and is not updated on trade or call-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub player_id: i64,
    pub full_name: Option<String>,
    pub team_id: Option<i64>,
    pub position: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Scheduled,
    Live,
    Final,
    Postponed,
    Suspended,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Scheduled => "Scheduled",
            GameStatus::Live => "Live",
            GameStatus::Final => "Final",
            GameStatus::Postponed => "Postponed",
            GameStatus::Suspended => "Suspended",
        }
    }

    /// Map an explicit source status string (e.g. `status.detailedState`)
    /// onto the stored enumeration. Returns None for states we don't
    /// recognize so the caller can fall back to the inning heuristic.
    pub fn from_detailed_state(state: &str) -> Option<GameStatus> {
        let s = state.to_ascii_lowercase();
        if s.contains("postponed") {
            Some(GameStatus::Postponed)
        } else if s.contains("suspended") {
            Some(GameStatus::Suspended)
        } else if s.contains("final") || s.contains("completed") || s.contains("game over") {
            Some(GameStatus::Final)
        } else if s.contains("in progress") || s.contains("live") {
            Some(GameStatus::Live)
        } else if s.contains("scheduled") || s.contains("pre-game") || s.contains("warmup") {
            Some(GameStatus::Scheduled)
        } else {
            None
        }
    }

    /// Fallback used when the source carries no explicit status field:
    /// a non-null current inning means the game is live, otherwise final.
    pub fn from_current_inning(current_inning: Option<i64>) -> GameStatus {
        if current_inning.is_some() {
            GameStatus::Live
        } else {
            GameStatus::Final
        }
    }

    pub fn parse(s: &str) -> Option<GameStatus> {
        match s {
            "Scheduled" => Some(GameStatus::Scheduled),
            "Live" => Some(GameStatus::Live),
            "Final" => Some(GameStatus::Final),
            "Postponed" => Some(GameStatus::Postponed),
            "Suspended" => Some(GameStatus::Suspended),
            _ => None,
        }
    }
}

/// MLB single-letter game type codes. NULL in the database until known;
/// unrecognized codes are treated as unknown so the metadata backfill can
/// repair them from the schedule endpoint later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameType {
    SpringTraining,
    RegularSeason,
    WildCard,
    DivisionSeries,
    ChampionshipSeries,
    WorldSeries,
    AllStar,
}

impl GameType {
    pub fn from_code(code: &str) -> Option<GameType> {
        match code {
            "S" => Some(GameType::SpringTraining),
            "R" => Some(GameType::RegularSeason),
            "F" => Some(GameType::WildCard),
            "D" => Some(GameType::DivisionSeries),
            "L" => Some(GameType::ChampionshipSeries),
            "W" => Some(GameType::WorldSeries),
            "A" => Some(GameType::AllStar),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            GameType::SpringTraining => "S",
            GameType::RegularSeason => "R",
            GameType::WildCard => "F",
            GameType::DivisionSeries => "D",
            GameType::ChampionshipSeries => "L",
            GameType::WorldSeries => "W",
            GameType::AllStar => "A",
        }
    }
}

/// The three metadata fields the primary payloads often lack, resolvable
/// from the combined payload's top level or the schedule endpoint.
#[derive(Debug, Clone, Default)]
pub struct GameMeta {
    pub game_type: Option<GameType>,
    pub series_description: Option<String>,
    pub official_date: Option<NaiveDate>,
}

impl GameMeta {
    pub fn is_complete(&self) -> bool {
        self.game_type.is_some() && self.series_description.is_some() && self.official_date.is_some()
    }

    /// Fill only the fields still missing; present fields keep precedence.
    pub fn fill_missing(&mut self, other: GameMeta) {
        if self.game_type.is_none() {
            self.game_type = other.game_type;
        }
        if self.series_description.is_none() {
            self.series_description = other.series_description;
        }
        if self.official_date.is_none() {
            self.official_date = other.official_date;
        }
    }
}

/// A game row as written by the loader. `created_at` is left to the
/// database default and preserved across updates.
#[derive(Debug, Clone)]
pub struct NewGame {
    pub game_id: i64,
    pub game_date: NaiveDate,
    pub home_team_id: Option<i64>,
    pub away_team_id: Option<i64>,
    pub home_score: i64,
    pub away_score: i64,
    pub current_inning: Option<i64>,
    pub inning_half: Option<String>,
    pub status: GameStatus,
    pub game_type: Option<GameType>,
    pub series_description: Option<String>,
    pub official_date: Option<NaiveDate>,
}

/// A game row as read back from the database.
#[derive(Debug, Clone)]
pub struct Game {
    pub game_id: i64,
    pub game_date: NaiveDate,
    pub home_team_id: Option<i64>,
    pub away_team_id: Option<i64>,
    pub home_score: i64,
    pub away_score: i64,
    pub current_inning: Option<i64>,
    pub inning_half: Option<String>,
    pub status: Option<GameStatus>,
    pub game_type: Option<GameType>,
    pub series_description: Option<String>,
    pub official_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Per-player-per-game batting line. The composite natural key is
/// (game_id, player_id); the rowid only exists as a storage artifact.
#[derive(Debug, Clone)]
pub struct NewBoxscoreLine {
    pub game_id: i64,
    pub player_id: i64,
    pub team_id: Option<i64>,
    pub at_bats: i64,
    pub runs: i64,
    pub hits: i64,
    pub doubles: i64,
    pub triples: i64,
    pub home_runs: i64,
    pub rbi: i64,
    pub walks: i64,
    pub strikeouts: i64,
    pub hit_by_pitch: i64,
    pub sacrifice_flies: i64,
    pub sacrifice_bunts: i64,
    pub game_date: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct BoxscoreLine {
    pub id: i64,
    pub game_id: i64,
    pub player_id: i64,
    pub team_id: Option<i64>,
    pub at_bats: i64,
    pub runs: i64,
    pub hits: i64,
    pub doubles: i64,
    pub triples: i64,
    pub home_runs: i64,
    pub rbi: i64,
    pub walks: i64,
    pub strikeouts: i64,
    pub hit_by_pitch: i64,
    pub sacrifice_flies: i64,
    pub sacrifice_bunts: i64,
    pub game_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadKind {
    Combined,
    Boxscore,
    GameData,
}

impl PayloadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadKind::Combined => "combined",
            PayloadKind::Boxscore => "boxscore",
            PayloadKind::GameData => "game_data",
        }
    }
}

/// Unmodified audit copy of a source document. Append-only.
#[derive(Debug, Clone)]
pub struct NewRawPayload {
    pub game_id: i64,
    pub payload_kind: PayloadKind,
    pub serialized_json: String,
}

/// Everything one input file writes, applied in a single transaction.
#[derive(Debug, Clone, Default)]
pub struct LoadPlan {
    pub raw: Option<NewRawPayload>,
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub games: Vec<NewGame>,
    pub lines: Vec<NewBoxscoreLine>,
}
