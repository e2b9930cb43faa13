use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::ingest::payload::{ScheduleGame, ScheduleResponse};
use crate::models::{GameMeta, GameType};

/// Looks up game metadata (game type, series description, official date)
/// on the schedule endpoint when the primary payload lacks it. Failures
/// degrade to `Ok(None)`: the caller stores null metadata and a later
/// backfill pass can repair it.
pub struct ScheduleClient {
    client: Client,
    base_url: String,
}

impl ScheduleClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("dugout-loader/1.0")
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_game_metadata(&self, game_id: i64) -> Result<Option<GameMeta>> {
        let url = format!("{}/schedule", self.base_url);
        let response = match self
            .client
            .get(&url)
            .query(&[("gamePk", game_id.to_string().as_str()), ("hydrate", "game")])
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Schedule lookup failed for game {}: {}", game_id, e);
                return Ok(None);
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                "Schedule lookup for game {} returned HTTP {}",
                game_id,
                response.status()
            );
            return Ok(None);
        }

        let schedule: ScheduleResponse = match response.json().await {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("Unreadable schedule response for game {}: {}", game_id, e);
                return Ok(None);
            }
        };

        Ok(find_game_entry(&schedule, game_id).map(meta_from_entry))
    }
}

/// Scan the date-grouped response for the exact gamePk. The endpoint may
/// return sibling games on the same date, so a first-entry shortcut would
/// attach the wrong game's metadata.
pub fn find_game_entry(schedule: &ScheduleResponse, game_id: i64) -> Option<&ScheduleGame> {
    schedule
        .dates
        .iter()
        .flat_map(|date| date.games.iter())
        .find(|game| game.game_pk == game_id)
}

fn meta_from_entry(entry: &ScheduleGame) -> GameMeta {
    GameMeta {
        game_type: entry.game_type.as_deref().and_then(GameType::from_code),
        series_description: entry.series_description.clone(),
        official_date: entry.official_date,
    }
}
