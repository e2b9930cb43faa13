use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, Row};
use tokio_rusqlite::Connection;

use crate::error::Result;
use crate::models::{
    BoxscoreLine, Game, GameMeta, GameStatus, GameType, LoadPlan, NewBoxscoreLine, NewGame,
    NewRawPayload, Player, Team,
};

use super::schema::SCHEMA;

#[derive(Clone)]
pub struct Repository {
    conn: Connection,
}

impl Repository {
    pub async fn new(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path).await?;

        conn.call(|conn| {
            conn.execute_batch(SCHEMA)?;
            Ok(())
        })
        .await?;

        Ok(Self { conn })
    }

    /// Apply all writes for one input file as a single unit of work.
    /// Either everything commits (raw copy, teams, players, games, lines)
    /// or nothing does; errors are surfaced to the caller after rollback.
    pub async fn apply_load(&self, plan: LoadPlan) -> Result<()> {
        self.conn
            .call(move |conn| {
                let tx = conn.transaction()?;

                if let Some(raw) = &plan.raw {
                    insert_raw_payload(&tx, raw)?;
                }
                for team in &plan.teams {
                    insert_team_if_absent(&tx, team)?;
                }
                for player in &plan.players {
                    insert_player_if_absent(&tx, player)?;
                }
                for game in &plan.games {
                    upsert_game(&tx, game)?;
                }
                for line in &plan.lines {
                    upsert_boxscore_line(&tx, line)?;
                }

                tx.commit()?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    /// Games whose game_type is still unknown, for the metadata backfill pass.
    pub async fn games_missing_metadata(&self) -> Result<Vec<i64>> {
        let ids = self
            .conn
            .call(|conn| {
                let mut stmt =
                    conn.prepare("SELECT game_id FROM games WHERE game_type IS NULL ORDER BY game_id")?;
                let ids = stmt
                    .query_map([], |row| row.get(0))?
                    .collect::<std::result::Result<Vec<i64>, _>>()?;
                Ok(ids)
            })
            .await?;
        Ok(ids)
    }

    /// Overwrite only the three enrichable metadata fields of one game.
    /// Returns false when the game does not exist.
    pub async fn update_game_metadata(&self, game_id: i64, meta: GameMeta) -> Result<bool> {
        let updated = self
            .conn
            .call(move |conn| {
                let updated = conn.execute(
                    "UPDATE games SET game_type = ?2, series_description = ?3, official_date = ?4
                     WHERE game_id = ?1",
                    params![
                        game_id,
                        meta.game_type.map(|t| t.code()),
                        meta.series_description,
                        meta.official_date.map(|d| d.to_string()),
                    ],
                )?;
                Ok(updated > 0)
            })
            .await?;
        Ok(updated)
    }

    pub async fn get_team(&self, team_id: i64) -> Result<Option<Team>> {
        let team = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT team_id, name, abbreviation, league, division FROM teams WHERE team_id = ?1",
                )?;
                let team = stmt
                    .query_row(params![team_id], |row| Ok(team_from_row(row)))
                    .optional()?;
                Ok(team)
            })
            .await?;
        Ok(team)
    }

    pub async fn get_player(&self, player_id: i64) -> Result<Option<Player>> {
        let player = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT player_id, full_name, team_id, position FROM players WHERE player_id = ?1",
                )?;
                let player = stmt
                    .query_row(params![player_id], |row| Ok(player_from_row(row)))
                    .optional()?;
                Ok(player)
            })
            .await?;
        Ok(player)
    }

    pub async fn get_game(&self, game_id: i64) -> Result<Option<Game>> {
        let game = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT game_id, game_date, home_team_id, away_team_id, home_score, away_score,
                            current_inning, inning_half, status, game_type, series_description,
                            official_date, created_at
                     FROM games WHERE game_id = ?1",
                )?;
                let game = stmt
                    .query_row(params![game_id], |row| Ok(game_from_row(row)))
                    .optional()?;
                Ok(game)
            })
            .await?;
        Ok(game)
    }

    pub async fn get_boxscore_lines(&self, game_id: i64) -> Result<Vec<BoxscoreLine>> {
        let lines = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, game_id, player_id, team_id, at_bats, runs, hits, doubles, triples,
                            home_runs, rbi, walks, strikeouts, hit_by_pitch, sacrifice_flies,
                            sacrifice_bunts, game_date
                     FROM boxscore_lines WHERE game_id = ?1 ORDER BY player_id",
                )?;
                let lines = stmt
                    .query_map(params![game_id], |row| Ok(line_from_row(row)))?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(lines)
            })
            .await?;
        Ok(lines)
    }

    pub async fn count_raw_payloads(&self, game_id: i64) -> Result<i64> {
        let count = self
            .conn
            .call(move |conn| {
                let count: i64 = conn.query_row(
                    "SELECT COUNT(*) FROM raw_payloads WHERE game_id = ?1",
                    params![game_id],
                    |row| row.get(0),
                )?;
                Ok(count)
            })
            .await?;
        Ok(count)
    }
}

// Write helpers below run inside the per-file transaction.

fn insert_raw_payload(conn: &rusqlite::Connection, raw: &NewRawPayload) -> rusqlite::Result<()> {
    // Append-only: reprocessing the same file records a new audit row.
    conn.execute(
        "INSERT INTO raw_payloads (game_id, payload_kind, serialized_json) VALUES (?1, ?2, ?3)",
        params![raw.game_id, raw.payload_kind.as_str(), raw.serialized_json],
    )?;
    Ok(())
}

fn insert_team_if_absent(conn: &rusqlite::Connection, team: &Team) -> rusqlite::Result<()> {
    // First observation is authoritative; existing rows are never touched,
    // including fields that were null on first insert.
    conn.execute(
        "INSERT OR IGNORE INTO teams (team_id, name, abbreviation, league, division)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            team.team_id,
            team.name,
            team.abbreviation,
            team.league,
            team.division
        ],
    )?;
    Ok(())
}

fn insert_player_if_absent(conn: &rusqlite::Connection, player: &Player) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO players (player_id, full_name, team_id, position)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            player.player_id,
            player.full_name,
            player.team_id,
            player.position
        ],
    )?;
    Ok(())
}

fn upsert_game(conn: &rusqlite::Connection, game: &NewGame) -> rusqlite::Result<()> {
    // The update branch must rewrite the team ids and metadata along with
    // the scores, so a row inserted from an incomplete payload heals on
    // reload. created_at is the insert timestamp and survives updates.
    conn.execute(
        "INSERT INTO games (game_id, game_date, home_team_id, away_team_id, home_score, away_score,
                            current_inning, inning_half, status, game_type, series_description,
                            official_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
         ON CONFLICT(game_id) DO UPDATE SET
             game_date = excluded.game_date,
             home_team_id = excluded.home_team_id,
             away_team_id = excluded.away_team_id,
             home_score = excluded.home_score,
             away_score = excluded.away_score,
             current_inning = excluded.current_inning,
             inning_half = excluded.inning_half,
             status = excluded.status,
             game_type = excluded.game_type,
             series_description = excluded.series_description,
             official_date = excluded.official_date",
        params![
            game.game_id,
            game.game_date.to_string(),
            game.home_team_id,
            game.away_team_id,
            game.home_score,
            game.away_score,
            game.current_inning,
            game.inning_half,
            game.status.as_str(),
            game.game_type.map(|t| t.code()),
            game.series_description,
            game.official_date.map(|d| d.to_string()),
        ],
    )?;
    Ok(())
}

fn upsert_boxscore_line(conn: &rusqlite::Connection, line: &NewBoxscoreLine) -> rusqlite::Result<()> {
    // UPDATE first, INSERT only when no row was touched. One round trip on
    // the common reload path, one wasted statement on first-ever insert.
    // Every stat column is overwritten from the incoming payload; a field
    // absent from the source arrives here as zero and is stored as zero.
    let updated = conn.execute(
        "UPDATE boxscore_lines SET
             team_id = ?3, at_bats = ?4, runs = ?5, hits = ?6, doubles = ?7, triples = ?8,
             home_runs = ?9, rbi = ?10, walks = ?11, strikeouts = ?12, hit_by_pitch = ?13,
             sacrifice_flies = ?14, sacrifice_bunts = ?15, game_date = ?16
         WHERE game_id = ?1 AND player_id = ?2",
        params![
            line.game_id,
            line.player_id,
            line.team_id,
            line.at_bats,
            line.runs,
            line.hits,
            line.doubles,
            line.triples,
            line.home_runs,
            line.rbi,
            line.walks,
            line.strikeouts,
            line.hit_by_pitch,
            line.sacrifice_flies,
            line.sacrifice_bunts,
            line.game_date.map(|d| d.to_string()),
        ],
    )?;

    if updated == 0 {
        conn.execute(
            "INSERT INTO boxscore_lines (game_id, player_id, team_id, at_bats, runs, hits, doubles,
                                         triples, home_runs, rbi, walks, strikeouts, hit_by_pitch,
                                         sacrifice_flies, sacrifice_bunts, game_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
            params![
                line.game_id,
                line.player_id,
                line.team_id,
                line.at_bats,
                line.runs,
                line.hits,
                line.doubles,
                line.triples,
                line.home_runs,
                line.rbi,
                line.walks,
                line.strikeouts,
                line.hit_by_pitch,
                line.sacrifice_flies,
                line.sacrifice_bunts,
                line.game_date.map(|d| d.to_string()),
            ],
        )?;
    }

    Ok(())
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    // Try RFC3339 first (e.g., "2026-01-11T12:34:56+00:00")
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Try SQLite datetime format (e.g., "2026-01-11 12:34:56")
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    None
}

fn team_from_row(row: &Row) -> Team {
    Team {
        team_id: row.get(0).unwrap(),
        name: row.get(1).unwrap(),
        abbreviation: row.get(2).unwrap(),
        league: row.get(3).unwrap(),
        division: row.get(4).unwrap(),
    }
}

fn player_from_row(row: &Row) -> Player {
    Player {
        player_id: row.get(0).unwrap(),
        full_name: row.get(1).unwrap(),
        team_id: row.get(2).unwrap(),
        position: row.get(3).unwrap(),
    }
}

fn game_from_row(row: &Row) -> Game {
    Game {
        game_id: row.get(0).unwrap(),
        game_date: row
            .get::<_, String>(1)
            .ok()
            .and_then(|s| parse_date(&s))
            .unwrap_or_default(),
        home_team_id: row.get(2).unwrap(),
        away_team_id: row.get(3).unwrap(),
        home_score: row.get(4).unwrap(),
        away_score: row.get(5).unwrap(),
        current_inning: row.get(6).unwrap(),
        inning_half: row.get(7).unwrap(),
        status: row
            .get::<_, String>(8)
            .ok()
            .and_then(|s| GameStatus::parse(&s)),
        game_type: row
            .get::<_, Option<String>>(9)
            .unwrap()
            .and_then(|s| GameType::from_code(&s)),
        series_description: row.get(10).unwrap(),
        official_date: row
            .get::<_, Option<String>>(11)
            .unwrap()
            .and_then(|s| parse_date(&s)),
        created_at: row
            .get::<_, String>(12)
            .ok()
            .and_then(|s| parse_datetime(&s))
            .unwrap_or_else(Utc::now),
    }
}

fn line_from_row(row: &Row) -> BoxscoreLine {
    BoxscoreLine {
        id: row.get(0).unwrap(),
        game_id: row.get(1).unwrap(),
        player_id: row.get(2).unwrap(),
        team_id: row.get(3).unwrap(),
        at_bats: row.get(4).unwrap(),
        runs: row.get(5).unwrap(),
        hits: row.get(6).unwrap(),
        doubles: row.get(7).unwrap(),
        triples: row.get(8).unwrap(),
        home_runs: row.get(9).unwrap(),
        rbi: row.get(10).unwrap(),
        walks: row.get(11).unwrap(),
        strikeouts: row.get(12).unwrap(),
        hit_by_pitch: row.get(13).unwrap(),
        sacrifice_flies: row.get(14).unwrap(),
        sacrifice_bunts: row.get(15).unwrap(),
        game_date: row
            .get::<_, Option<String>>(16)
            .unwrap()
            .and_then(|s| parse_date(&s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_repo() -> (Repository, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");
        let repo = Repository::new(path.to_str().unwrap()).await.unwrap();
        (repo, dir)
    }

    fn team(team_id: i64, name: &str) -> Team {
        Team {
            team_id,
            name: Some(name.to_string()),
            abbreviation: None,
            league: None,
            division: None,
        }
    }

    fn game(game_id: i64, home: i64, away: i64) -> NewGame {
        NewGame {
            game_id,
            game_date: NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
            home_team_id: Some(home),
            away_team_id: Some(away),
            home_score: 3,
            away_score: 1,
            current_inning: None,
            inning_half: None,
            status: GameStatus::Final,
            game_type: Some(GameType::RegularSeason),
            series_description: Some("Regular Season".to_string()),
            official_date: None,
        }
    }

    fn line(game_id: i64, player_id: i64) -> NewBoxscoreLine {
        NewBoxscoreLine {
            game_id,
            player_id,
            team_id: Some(10),
            at_bats: 4,
            runs: 1,
            hits: 2,
            doubles: 1,
            triples: 0,
            home_runs: 1,
            rbi: 2,
            walks: 0,
            strikeouts: 1,
            hit_by_pitch: 0,
            sacrifice_flies: 0,
            sacrifice_bunts: 0,
            game_date: NaiveDate::from_ymd_opt(2024, 4, 10),
        }
    }

    #[tokio::test]
    async fn team_first_observation_wins() {
        let (repo, _dir) = test_repo().await;

        let plan = LoadPlan {
            teams: vec![team(10, "Athletics")],
            ..Default::default()
        };
        repo.apply_load(plan).await.unwrap();

        let plan = LoadPlan {
            teams: vec![team(10, "Renamed")],
            ..Default::default()
        };
        repo.apply_load(plan).await.unwrap();

        let stored = repo.get_team(10).await.unwrap().unwrap();
        assert_eq!(stored.name.as_deref(), Some("Athletics"));
    }

    #[tokio::test]
    async fn player_team_affiliation_is_frozen() {
        let (repo, _dir) = test_repo().await;

        let player = Player {
            player_id: 501,
            full_name: Some("X".to_string()),
            team_id: Some(10),
            position: None,
        };
        let plan = LoadPlan {
            teams: vec![team(10, "A"), team(20, "B")],
            players: vec![player.clone()],
            ..Default::default()
        };
        repo.apply_load(plan).await.unwrap();

        let traded = Player {
            team_id: Some(20),
            ..player
        };
        let plan = LoadPlan {
            players: vec![traded],
            ..Default::default()
        };
        repo.apply_load(plan).await.unwrap();

        let stored = repo.get_player(501).await.unwrap().unwrap();
        assert_eq!(stored.team_id, Some(10));
    }

    #[tokio::test]
    async fn game_update_rewrites_team_ids_and_metadata() {
        let (repo, _dir) = test_repo().await;

        let plan = LoadPlan {
            teams: vec![team(10, "A"), team(20, "B"), team(30, "C")],
            games: vec![game(700001, 10, 20)],
            ..Default::default()
        };
        repo.apply_load(plan).await.unwrap();

        // Reload with a corrected home team and new metadata: every mutable
        // field must reflect the latest payload.
        let mut reloaded = game(700001, 30, 20);
        reloaded.home_score = 5;
        reloaded.game_type = Some(GameType::WorldSeries);
        let plan = LoadPlan {
            games: vec![reloaded],
            ..Default::default()
        };
        repo.apply_load(plan).await.unwrap();

        let stored = repo.get_game(700001).await.unwrap().unwrap();
        assert_eq!(stored.home_team_id, Some(30));
        assert_eq!(stored.home_score, 5);
        assert_eq!(stored.game_type, Some(GameType::WorldSeries));
    }

    #[tokio::test]
    async fn game_upsert_is_idempotent() {
        let (repo, _dir) = test_repo().await;

        let plan = LoadPlan {
            teams: vec![team(10, "A"), team(20, "B")],
            games: vec![game(700001, 10, 20)],
            ..Default::default()
        };
        repo.apply_load(plan.clone()).await.unwrap();
        repo.apply_load(plan).await.unwrap();

        let stored = repo.get_game(700001).await.unwrap().unwrap();
        assert_eq!(stored.home_score, 3);
        assert_eq!(stored.status, Some(GameStatus::Final));
        assert!(stored.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn boxscore_line_updates_in_place() {
        let (repo, _dir) = test_repo().await;

        let plan = LoadPlan {
            lines: vec![line(700001, 501)],
            ..Default::default()
        };
        repo.apply_load(plan).await.unwrap();

        let mut second = line(700001, 501);
        second.hits = 3;
        second.doubles = 0;
        let plan = LoadPlan {
            lines: vec![second],
            ..Default::default()
        };
        repo.apply_load(plan).await.unwrap();

        let lines = repo.get_boxscore_lines(700001).await.unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].id > 0);
        assert_eq!(lines[0].hits, 3);
        // Zero from the latest payload overwrites the earlier nonzero value.
        assert_eq!(lines[0].doubles, 0);
    }

    #[tokio::test]
    async fn raw_payloads_append_on_every_load() {
        let (repo, _dir) = test_repo().await;

        let raw = NewRawPayload {
            game_id: 700001,
            payload_kind: crate::models::PayloadKind::Combined,
            serialized_json: "{}".to_string(),
        };
        let plan = LoadPlan {
            raw: Some(raw),
            ..Default::default()
        };
        repo.apply_load(plan.clone()).await.unwrap();
        repo.apply_load(plan).await.unwrap();

        assert_eq!(repo.count_raw_payloads(700001).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn metadata_backfill_targets_null_game_type() {
        let (repo, _dir) = test_repo().await;

        let mut bare = game(700002, 10, 20);
        bare.game_type = None;
        bare.series_description = None;
        let plan = LoadPlan {
            teams: vec![team(10, "A"), team(20, "B")],
            games: vec![game(700001, 10, 20), bare],
            ..Default::default()
        };
        repo.apply_load(plan).await.unwrap();

        assert_eq!(repo.games_missing_metadata().await.unwrap(), vec![700002]);

        let meta = GameMeta {
            game_type: Some(GameType::RegularSeason),
            series_description: Some("Regular Season".to_string()),
            official_date: NaiveDate::from_ymd_opt(2024, 4, 11),
        };
        assert!(repo.update_game_metadata(700002, meta).await.unwrap());
        assert!(repo.games_missing_metadata().await.unwrap().is_empty());

        let stored = repo.get_game(700002).await.unwrap().unwrap();
        assert_eq!(stored.game_type, Some(GameType::RegularSeason));
        assert_eq!(stored.official_date, NaiveDate::from_ymd_opt(2024, 4, 11));
    }
}
