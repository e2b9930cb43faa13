pub const SCHEMA: &str = r#"
-- teams table (insert-if-absent reference data)
CREATE TABLE IF NOT EXISTS teams (
    team_id INTEGER PRIMARY KEY,
    name TEXT,
    abbreviation TEXT,
    league TEXT,
    division TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- players table (insert-if-absent reference data; team_id is first-seen)
CREATE TABLE IF NOT EXISTS players (
    player_id INTEGER PRIMARY KEY,
    full_name TEXT,
    team_id INTEGER REFERENCES teams(team_id),
    position TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_players_team_id ON players(team_id);

-- games table (one current row per game_id, mutable fields overwritten on reload)
CREATE TABLE IF NOT EXISTS games (
    game_id INTEGER PRIMARY KEY,
    game_date TEXT NOT NULL,
    home_team_id INTEGER REFERENCES teams(team_id),
    away_team_id INTEGER REFERENCES teams(team_id),
    home_score INTEGER NOT NULL DEFAULT 0,
    away_score INTEGER NOT NULL DEFAULT 0,
    current_inning INTEGER,
    inning_half TEXT,
    status TEXT NOT NULL,
    game_type TEXT,
    series_description TEXT,
    official_date TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_games_game_date ON games(game_date);
CREATE INDEX IF NOT EXISTS idx_games_game_type ON games(game_type);

-- boxscore_lines table
-- The natural key (game_id, player_id) is enforced by the loader's
-- update-then-insert upsert, not by a schema constraint.
CREATE TABLE IF NOT EXISTS boxscore_lines (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    game_id INTEGER NOT NULL REFERENCES games(game_id),
    player_id INTEGER NOT NULL REFERENCES players(player_id),
    team_id INTEGER REFERENCES teams(team_id),
    at_bats INTEGER NOT NULL DEFAULT 0,
    runs INTEGER NOT NULL DEFAULT 0,
    hits INTEGER NOT NULL DEFAULT 0,
    doubles INTEGER NOT NULL DEFAULT 0,
    triples INTEGER NOT NULL DEFAULT 0,
    home_runs INTEGER NOT NULL DEFAULT 0,
    rbi INTEGER NOT NULL DEFAULT 0,
    walks INTEGER NOT NULL DEFAULT 0,
    strikeouts INTEGER NOT NULL DEFAULT 0,
    hit_by_pitch INTEGER NOT NULL DEFAULT 0,
    sacrifice_flies INTEGER NOT NULL DEFAULT 0,
    sacrifice_bunts INTEGER NOT NULL DEFAULT 0,
    game_date TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_boxscore_lines_game_player ON boxscore_lines(game_id, player_id);
CREATE INDEX IF NOT EXISTS idx_boxscore_lines_player_id ON boxscore_lines(player_id);

-- raw_payloads table (append-only audit log, never read by the loader)
CREATE TABLE IF NOT EXISTS raw_payloads (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    game_id INTEGER NOT NULL,
    payload_kind TEXT NOT NULL,
    serialized_json TEXT NOT NULL,
    captured_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_raw_payloads_game_id ON raw_payloads(game_id);
"#;
