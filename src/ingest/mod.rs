pub mod classify;
pub mod payload;

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::ScheduleClient;
use crate::db::Repository;
use crate::error::{AppError, Result};
use crate::models::{
    GameMeta, GameStatus, GameType, LoadPlan, NewBoxscoreLine, NewGame, NewRawPayload, PayloadKind,
    Player, Team,
};

use classify::Classified;
use payload::{
    BoxscorePayload, CombinedPayload, GamePayload, ScheduleGame, ScheduleResponse, TeamDescriptor,
};

/// Per-file ingestion: classify, parse, enrich missing metadata (combined
/// path only), then hand the repository one plan to apply atomically.
/// Processing is strictly sequential; one file commits or rolls back
/// before the next is considered.
pub struct Loader {
    repo: Repository,
    schedule: Option<ScheduleClient>,
}

#[derive(Debug)]
pub struct LoadReport {
    pub game_id: i64,
    pub kind: PayloadKind,
    pub lines: usize,
}

#[derive(Debug)]
pub struct BackfillReport {
    pub examined: usize,
    pub updated: usize,
}

impl Loader {
    pub fn new(repo: Repository, schedule: Option<ScheduleClient>) -> Self {
        Self { repo, schedule }
    }

    pub async fn load_file(&self, path: &Path) -> Result<LoadReport> {
        let content = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|e| AppError::Payload(format!("{}: {}", path.display(), e)))?;
        let classified = classify::classify(path, &value)?;
        self.load_payload(classified, value).await
    }

    pub async fn load_payload(&self, classified: Classified, value: Value) -> Result<LoadReport> {
        match classified.kind {
            PayloadKind::Combined => self.load_combined(value).await,
            PayloadKind::Boxscore => self.load_boxscore(classified.game_id, value).await,
            PayloadKind::GameData => self.load_game_data(classified.game_id, value).await,
        }
    }

    async fn load_combined(&self, value: Value) -> Result<LoadReport> {
        let parsed: CombinedPayload = parse_section(&value, "combined payload")?;
        let game_id = parsed.game_id;

        let game_section: Option<GamePayload> = parsed
            .game_data
            .as_ref()
            .map(|v| parse_section(v, "game_data section"))
            .transpose()?;
        let boxscore_section: Option<BoxscorePayload> = parsed
            .boxscore
            .as_ref()
            .map(|v| parse_section(v, "boxscore section"))
            .transpose()?;

        // Top-level metadata wins over fields embedded in the game body;
        // the schedule endpoint is only consulted for what is still
        // missing after both.
        let mut meta = GameMeta {
            game_type: parsed.game_type.as_deref().and_then(GameType::from_code),
            series_description: parsed.series_description.clone(),
            official_date: parsed.official_date,
        };
        if let Some(game) = &game_section {
            meta.fill_missing(embedded_meta(game));
        }
        if !meta.is_complete() {
            if let Some(client) = &self.schedule {
                if let Some(found) = client.fetch_game_metadata(game_id).await? {
                    meta.fill_missing(found);
                }
            }
        }

        let mut plan = LoadPlan {
            raw: Some(NewRawPayload {
                game_id,
                payload_kind: PayloadKind::Combined,
                serialized_json: value.to_string(),
            }),
            ..Default::default()
        };

        if let Some(game) = &game_section {
            plan_game_section(&mut plan, game_id, game, parsed.game_date, Some(&meta));
        }
        if let Some(boxscore) = &boxscore_section {
            plan_boxscore_section(&mut plan, game_id, boxscore, parsed.game_date)?;
        }

        let lines = plan.lines.len();
        self.repo.apply_load(plan).await?;
        tracing::info!("Loaded combined data for game {}", game_id);
        Ok(LoadReport {
            game_id,
            kind: PayloadKind::Combined,
            lines,
        })
    }

    async fn load_boxscore(&self, game_id: i64, value: Value) -> Result<LoadReport> {
        let boxscore: BoxscorePayload = parse_section(&value, "boxscore payload")?;

        let mut plan = LoadPlan {
            raw: Some(NewRawPayload {
                game_id,
                payload_kind: PayloadKind::Boxscore,
                serialized_json: value.to_string(),
            }),
            ..Default::default()
        };
        plan_boxscore_section(&mut plan, game_id, &boxscore, None)?;

        let lines = plan.lines.len();
        self.repo.apply_load(plan).await?;
        tracing::info!("Loaded boxscore data for game {}", game_id);
        Ok(LoadReport {
            game_id,
            kind: PayloadKind::Boxscore,
            lines,
        })
    }

    async fn load_game_data(&self, game_id: i64, value: Value) -> Result<LoadReport> {
        let game: GamePayload = parse_section(&value, "game payload")?;

        let mut plan = LoadPlan {
            raw: Some(NewRawPayload {
                game_id,
                payload_kind: PayloadKind::GameData,
                serialized_json: value.to_string(),
            }),
            ..Default::default()
        };
        plan_game_section(&mut plan, game_id, &game, None, None);

        self.repo.apply_load(plan).await?;
        tracing::info!("Loaded game data for game {}", game_id);
        Ok(LoadReport {
            game_id,
            kind: PayloadKind::GameData,
            lines: 0,
        })
    }

    pub async fn load_schedule_file(&self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path)?;
        let schedule: ScheduleResponse = serde_json::from_str(&content)
            .map_err(|e| AppError::Payload(format!("{}: {}", path.display(), e)))?;
        self.load_schedule(schedule).await
    }

    /// Load a schedule API response straight into teams + games. One file
    /// is still one unit of work.
    pub async fn load_schedule(&self, schedule: ScheduleResponse) -> Result<usize> {
        let mut plan = LoadPlan::default();
        for date in &schedule.dates {
            for entry in &date.games {
                plan_schedule_entry(&mut plan, entry, date.date);
            }
        }

        let count = plan.games.len();
        self.repo.apply_load(plan).await?;
        tracing::info!("Loaded {} scheduled games", count);
        Ok(count)
    }

    /// Re-run enrichment for games whose game_type is still null. This is
    /// the recovery path for loads made while the schedule endpoint was
    /// unreachable.
    pub async fn backfill_metadata(&self) -> Result<BackfillReport> {
        let client = self
            .schedule
            .as_ref()
            .ok_or_else(|| AppError::Config("metadata enrichment is disabled".to_string()))?;

        let ids = self.repo.games_missing_metadata().await?;
        let mut updated = 0;
        for game_id in &ids {
            match client.fetch_game_metadata(*game_id).await? {
                Some(meta) => {
                    if self.repo.update_game_metadata(*game_id, meta).await? {
                        updated += 1;
                    }
                }
                None => tracing::debug!("No schedule entry found for game {}", game_id),
            }
        }

        Ok(BackfillReport {
            examined: ids.len(),
            updated,
        })
    }
}

fn parse_section<T: DeserializeOwned>(value: &Value, what: &str) -> Result<T> {
    serde_json::from_value(value.clone()).map_err(|e| AppError::Payload(format!("{}: {}", what, e)))
}

fn embedded_meta(game: &GamePayload) -> GameMeta {
    GameMeta {
        game_type: game.game_type.as_deref().and_then(GameType::from_code),
        series_description: game.series_description.clone(),
        official_date: game.official_date,
    }
}

fn team_from_descriptor(team: &TeamDescriptor) -> Team {
    Team {
        team_id: team.id,
        name: team.name.clone(),
        abbreviation: team.abbreviation.clone(),
        league: team.league.as_ref().and_then(|l| l.name.clone()),
        division: team.division.as_ref().and_then(|d| d.name.clone()),
    }
}

/// Date precedence: caller-supplied date, then the date portion of an
/// embedded ISO timestamp, then today. The wall-clock fallback mis-dates
/// historical loads that carry no date at all; such rows are repaired by
/// reloading from a combined file.
fn resolve_game_date(caller_date: Option<NaiveDate>, embedded_timestamp: Option<&str>) -> NaiveDate {
    if let Some(date) = caller_date {
        return date;
    }
    if let Some(ts) = embedded_timestamp {
        if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
            return dt.date_naive();
        }
    }
    Utc::now().date_naive()
}

fn plan_game_section(
    plan: &mut LoadPlan,
    game_id: i64,
    game: &GamePayload,
    caller_date: Option<NaiveDate>,
    meta: Option<&GameMeta>,
) {
    if let Some(team) = &game.teams.home.team {
        plan.teams.push(team_from_descriptor(team));
    }
    if let Some(team) = &game.teams.away.team {
        plan.teams.push(team_from_descriptor(team));
    }

    // Explicit source status wins; the inning heuristic only covers
    // documents that carry no status field at all.
    let status = game
        .status
        .as_ref()
        .and_then(|s| s.state())
        .and_then(GameStatus::from_detailed_state)
        .unwrap_or_else(|| GameStatus::from_current_inning(game.current_inning));

    let game_type = meta
        .and_then(|m| m.game_type)
        .or_else(|| game.game_type.as_deref().and_then(GameType::from_code));
    let series_description = meta
        .and_then(|m| m.series_description.clone())
        .or_else(|| game.series_description.clone());
    let official_date = meta.and_then(|m| m.official_date).or(game.official_date);

    plan.games.push(NewGame {
        game_id,
        game_date: resolve_game_date(caller_date, game.game_date.as_deref()),
        home_team_id: game.teams.home.team.as_ref().map(|t| t.id),
        away_team_id: game.teams.away.team.as_ref().map(|t| t.id),
        home_score: game.teams.home.runs,
        away_score: game.teams.away.runs,
        current_inning: game.current_inning,
        inning_half: game.inning_state.clone(),
        status,
        game_type,
        series_description,
        official_date,
    });
}

fn plan_boxscore_section(
    plan: &mut LoadPlan,
    game_id: i64,
    boxscore: &BoxscorePayload,
    game_date: Option<NaiveDate>,
) -> Result<()> {
    for side in [&boxscore.teams.home, &boxscore.teams.away] {
        let team_id = side.team.as_ref().map(|t| t.id);
        if let Some(team) = &side.team {
            plan.teams.push(team_from_descriptor(team));
        }

        for (key, entry) in &side.players {
            if !key.starts_with("ID") {
                continue;
            }
            let Some(person) = &entry.person else {
                continue;
            };

            plan.players.push(Player {
                player_id: person.id,
                full_name: person.full_name.clone(),
                team_id,
                position: person
                    .primary_position
                    .as_ref()
                    .and_then(|p| p.name.clone()),
            });

            if let Some(batting) = entry.stats.batting()? {
                plan.lines.push(NewBoxscoreLine {
                    game_id,
                    player_id: person.id,
                    team_id,
                    at_bats: batting.at_bats,
                    runs: batting.runs,
                    hits: batting.hits,
                    doubles: batting.doubles,
                    triples: batting.triples,
                    home_runs: batting.home_runs,
                    rbi: batting.rbi,
                    walks: batting.walks,
                    strikeouts: batting.strikeouts,
                    hit_by_pitch: batting.hit_by_pitch,
                    sacrifice_flies: batting.sacrifice_flies,
                    sacrifice_bunts: batting.sacrifice_bunts,
                    game_date,
                });
            }
        }
    }
    Ok(())
}

fn plan_schedule_entry(plan: &mut LoadPlan, entry: &ScheduleGame, date_bucket: Option<NaiveDate>) {
    let home_team = entry.teams.as_ref().and_then(|t| t.home.team.as_ref());
    let away_team = entry.teams.as_ref().and_then(|t| t.away.team.as_ref());
    for team in [home_team, away_team].into_iter().flatten() {
        plan.teams.push(team_from_descriptor(team));
    }

    let linescore = entry.linescore.as_ref();
    let current_inning = linescore.and_then(|l| l.current_inning);
    let (home_score, away_score) = linescore
        .and_then(|l| l.teams.as_ref())
        .map(|t| (t.home.runs.unwrap_or(0), t.away.runs.unwrap_or(0)))
        .unwrap_or((0, 0));

    // A schedule entry without a recognizable status and without a
    // linescore is a game that has not started.
    let status = entry
        .status
        .as_ref()
        .and_then(|s| s.state())
        .and_then(GameStatus::from_detailed_state)
        .unwrap_or_else(|| {
            if linescore.is_some() {
                GameStatus::from_current_inning(current_inning)
            } else {
                GameStatus::Scheduled
            }
        });

    let game_date = entry
        .game_date
        .as_deref()
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map(|dt| dt.date_naive())
        .or(date_bucket)
        .unwrap_or_else(|| Utc::now().date_naive());

    plan.games.push(NewGame {
        game_id: entry.game_pk,
        game_date,
        home_team_id: home_team.map(|t| t.id),
        away_team_id: away_team.map(|t| t.id),
        home_score,
        away_score,
        current_inning,
        inning_half: linescore.and_then(|l| l.inning_state.clone()),
        status,
        game_type: entry.game_type.as_deref().and_then(GameType::from_code),
        series_description: entry.series_description.clone(),
        official_date: entry.official_date,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn test_loader() -> (Loader, Repository, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");
        let repo = Repository::new(path.to_str().unwrap()).await.unwrap();
        let loader = Loader::new(repo.clone(), None);
        (loader, repo, dir)
    }

    fn write_json(dir: &tempfile::TempDir, name: &str, value: &Value) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
        path
    }

    fn combined_payload() -> Value {
        json!({
            "game_id": 700001,
            "game_date": "2024-04-10",
            "game_type": "R",
            "boxscore": {
                "teams": {
                    "home": {
                        "team": {"id": 10, "name": "A"},
                        "players": {
                            "ID1": {
                                "person": {"id": 501, "fullName": "X"},
                                "stats": {"batting": {"atBats": 4, "hits": 2, "homeRuns": 1}}
                            }
                        }
                    },
                    "away": {"team": {"id": 20, "name": "B"}, "players": {}}
                }
            },
            "game_data": {
                "teams": {
                    "home": {"team": {"id": 10}, "runs": 3},
                    "away": {"team": {"id": 20}, "runs": 1}
                },
                "currentInning": null
            }
        })
    }

    #[tokio::test]
    async fn combined_payload_end_to_end() {
        let (loader, repo, dir) = test_loader().await;
        let path = write_json(&dir, "combined_data_700001.json", &combined_payload());

        let report = loader.load_file(&path).await.unwrap();
        assert_eq!(report.game_id, 700001);
        assert_eq!(report.kind, PayloadKind::Combined);
        assert_eq!(report.lines, 1);

        assert!(repo.get_team(10).await.unwrap().is_some());
        assert!(repo.get_team(20).await.unwrap().is_some());

        let game = repo.get_game(700001).await.unwrap().unwrap();
        assert_eq!(game.home_score, 3);
        assert_eq!(game.away_score, 1);
        assert_eq!(game.status, Some(GameStatus::Final));
        assert_eq!(game.game_type, Some(GameType::RegularSeason));
        assert_eq!(game.game_date, NaiveDate::from_ymd_opt(2024, 4, 10).unwrap());

        let lines = repo.get_boxscore_lines(700001).await.unwrap();
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert_eq!(line.player_id, 501);
        assert_eq!(line.at_bats, 4);
        assert_eq!(line.hits, 2);
        assert_eq!(line.home_runs, 1);
        assert_eq!(line.runs, 0);
        assert_eq!(line.doubles, 0);
        assert_eq!(line.triples, 0);
        assert_eq!(line.rbi, 0);
        assert_eq!(line.walks, 0);
        assert_eq!(line.strikeouts, 0);
        assert_eq!(line.hit_by_pitch, 0);
        assert_eq!(line.sacrifice_flies, 0);
        assert_eq!(line.sacrifice_bunts, 0);
    }

    #[tokio::test]
    async fn reloading_the_same_file_is_idempotent() {
        let (loader, repo, dir) = test_loader().await;
        let path = write_json(&dir, "combined_data_700001.json", &combined_payload());

        loader.load_file(&path).await.unwrap();
        loader.load_file(&path).await.unwrap();

        let lines = repo.get_boxscore_lines(700001).await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].at_bats, 4);

        let game = repo.get_game(700001).await.unwrap().unwrap();
        assert_eq!(game.home_score, 3);

        // The audit log is the one table that is NOT idempotent.
        assert_eq!(repo.count_raw_payloads(700001).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn referential_integrity_after_combined_load() {
        let (loader, repo, dir) = test_loader().await;
        let path = write_json(&dir, "combined_data_700001.json", &combined_payload());
        loader.load_file(&path).await.unwrap();

        let game = repo.get_game(700001).await.unwrap().unwrap();
        assert!(repo.get_team(game.home_team_id.unwrap()).await.unwrap().is_some());
        assert!(repo.get_team(game.away_team_id.unwrap()).await.unwrap().is_some());

        for line in repo.get_boxscore_lines(700001).await.unwrap() {
            assert_eq!(line.game_id, game.game_id);
            assert!(repo.get_player(line.player_id).await.unwrap().is_some());
            assert!(repo.get_team(line.team_id.unwrap()).await.unwrap().is_some());
        }
    }

    #[tokio::test]
    async fn caller_metadata_overrides_embedded_fields() {
        let (loader, repo, dir) = test_loader().await;
        let mut payload = combined_payload();
        payload["game_data"]["gameType"] = json!("S");
        let path = write_json(&dir, "combined_data_700001.json", &payload);

        loader.load_file(&path).await.unwrap();

        let game = repo.get_game(700001).await.unwrap().unwrap();
        assert_eq!(game.game_type, Some(GameType::RegularSeason));
    }

    #[tokio::test]
    async fn embedded_metadata_used_when_top_level_absent() {
        let (loader, repo, dir) = test_loader().await;
        let mut payload = combined_payload();
        payload.as_object_mut().unwrap().remove("game_type");
        payload["game_data"]["gameType"] = json!("S");
        payload["game_data"]["seriesDescription"] = json!("Spring Training");
        let path = write_json(&dir, "combined_data_700001.json", &payload);

        loader.load_file(&path).await.unwrap();

        let game = repo.get_game(700001).await.unwrap().unwrap();
        assert_eq!(game.game_type, Some(GameType::SpringTraining));
        assert_eq!(game.series_description.as_deref(), Some("Spring Training"));
    }

    #[tokio::test]
    async fn missing_metadata_loads_as_null_without_error() {
        let (loader, repo, dir) = test_loader().await;
        let mut payload = combined_payload();
        payload.as_object_mut().unwrap().remove("game_type");
        let path = write_json(&dir, "combined_data_700001.json", &payload);

        loader.load_file(&path).await.unwrap();

        let game = repo.get_game(700001).await.unwrap().unwrap();
        assert_eq!(game.game_type, None);
        assert_eq!(game.series_description, None);
        assert_eq!(game.official_date, None);
    }

    #[tokio::test]
    async fn unreachable_enrichment_endpoint_degrades_to_null_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let repo = Repository::new(db_path.to_str().unwrap()).await.unwrap();
        let loader = Loader::new(
            repo.clone(),
            Some(ScheduleClient::new("http://127.0.0.1:9")),
        );

        let mut payload = combined_payload();
        payload.as_object_mut().unwrap().remove("game_type");
        let path = write_json(&dir, "combined_data_700001.json", &payload);

        loader.load_file(&path).await.unwrap();

        let game = repo.get_game(700001).await.unwrap().unwrap();
        assert_eq!(game.game_type, None);
        assert_eq!(game.series_description, None);
        assert_eq!(game.official_date, None);
    }

    #[tokio::test]
    async fn boxscore_reload_zeroes_fields_absent_from_the_source() {
        let (loader, repo, dir) = test_loader().await;

        let mut payload = combined_payload();
        payload["boxscore"]["teams"]["home"]["players"]["ID1"]["stats"]["batting"] =
            json!({"atBats": 4, "hits": 2, "doubles": 2});
        let path = write_json(&dir, "combined_data_700001.json", &payload);
        loader.load_file(&path).await.unwrap();

        let lines = repo.get_boxscore_lines(700001).await.unwrap();
        assert_eq!(lines[0].doubles, 2);

        // The later boxscore-only snapshot carries no doubles field; the
        // full-overwrite contract stores it as zero.
        let boxscore_only = json!({
            "teams": {
                "home": {
                    "team": {"id": 10, "name": "A"},
                    "players": {
                        "ID1": {
                            "person": {"id": 501, "fullName": "X"},
                            "stats": {"batting": {"atBats": 4, "hits": 2}}
                        }
                    }
                },
                "away": {"team": {"id": 20, "name": "B"}, "players": {}}
            }
        });
        let path = write_json(&dir, "boxscore_raw_700001.json", &boxscore_only);
        loader.load_file(&path).await.unwrap();

        let lines = repo.get_boxscore_lines(700001).await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].doubles, 0);
        assert_eq!(lines[0].hits, 2);
    }

    #[tokio::test]
    async fn game_only_payload_with_live_inning() {
        let (loader, repo, dir) = test_loader().await;
        let payload = json!({
            "teams": {
                "home": {"team": {"id": 10, "name": "A"}, "runs": 2},
                "away": {"team": {"id": 20, "name": "B"}, "runs": 2}
            },
            "currentInning": 7,
            "inningState": "Top"
        });
        let path = write_json(&dir, "game_raw_700002.json", &payload);

        let report = loader.load_file(&path).await.unwrap();
        assert_eq!(report.kind, PayloadKind::GameData);
        assert_eq!(report.game_id, 700002);

        let game = repo.get_game(700002).await.unwrap().unwrap();
        assert_eq!(game.status, Some(GameStatus::Live));
        assert_eq!(game.current_inning, Some(7));
        assert_eq!(game.inning_half.as_deref(), Some("Top"));
        assert_eq!(game.home_score, 2);
    }

    #[tokio::test]
    async fn malformed_payload_writes_nothing() {
        let (loader, repo, dir) = test_loader().await;
        let path = write_json(&dir, "boxscore_raw_700003.json", &json!({"foo": 1}));

        let result = loader.load_file(&path).await;
        assert!(matches!(result, Err(AppError::Payload(_))));

        // Nothing committed for the failed file, audit row included.
        assert_eq!(repo.count_raw_payloads(700003).await.unwrap(), 0);
        assert!(repo.get_game(700003).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn schedule_response_loads_teams_and_games() {
        let (loader, repo, _dir) = test_loader().await;
        let schedule: ScheduleResponse = serde_json::from_value(json!({
            "dates": [{
                "date": "2024-04-10",
                "games": [
                    {
                        "gamePk": 700010,
                        "gameType": "R",
                        "seriesDescription": "Regular Season",
                        "officialDate": "2024-04-10",
                        "status": {"detailedState": "Final"},
                        "teams": {
                            "home": {"team": {"id": 10, "name": "A"}},
                            "away": {"team": {"id": 20, "name": "B"}}
                        },
                        "linescore": {
                            "currentInning": null,
                            "teams": {"home": {"runs": 5}, "away": {"runs": 4}}
                        }
                    },
                    {
                        "gamePk": 700011,
                        "gameType": "R",
                        "teams": {
                            "home": {"team": {"id": 10, "name": "A"}},
                            "away": {"team": {"id": 30, "name": "C"}}
                        }
                    }
                ]
            }]
        }))
        .unwrap();

        let count = loader.load_schedule(schedule).await.unwrap();
        assert_eq!(count, 2);

        let finished = repo.get_game(700010).await.unwrap().unwrap();
        assert_eq!(finished.status, Some(GameStatus::Final));
        assert_eq!(finished.home_score, 5);
        assert_eq!(finished.game_type, Some(GameType::RegularSeason));

        // No status and no linescore: the game has not started.
        let upcoming = repo.get_game(700011).await.unwrap().unwrap();
        assert_eq!(upcoming.status, Some(GameStatus::Scheduled));
        assert_eq!(upcoming.home_score, 0);
        assert_eq!(upcoming.game_date, NaiveDate::from_ymd_opt(2024, 4, 10).unwrap());

        assert!(repo.get_team(30).await.unwrap().is_some());
    }
}
