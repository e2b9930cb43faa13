use std::path::Path;

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::PayloadKind;

/// Field names the upstream API uses for the game identifier, in the order
/// we probe for them. The extraction step writes `game_id`; raw API
/// documents use `gamePk`.
const GAME_ID_KEYS: [&str; 2] = ["game_id", "gamePk"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    pub kind: PayloadKind,
    pub game_id: i64,
}

/// Decide which ingestion path applies to a payload. The filename
/// convention is checked first, then the payload shape; the game id is
/// recovered with the ordered fallback in [`resolve_game_id`].
pub fn classify(path: &Path, payload: &Value) -> Result<Classified> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let kind = kind_from_filename(file_name)
        .or_else(|| kind_from_shape(payload))
        .ok_or_else(|| {
            AppError::Classification(format!("unknown payload kind for {}", path.display()))
        })?;

    let game_id = resolve_game_id(payload, path).ok_or_else(|| {
        AppError::Classification(format!("no game id recoverable from {}", path.display()))
    })?;

    Ok(Classified { kind, game_id })
}

fn kind_from_filename(file_name: &str) -> Option<PayloadKind> {
    if file_name.contains("combined_data") {
        Some(PayloadKind::Combined)
    } else if file_name.contains("boxscore_raw") {
        Some(PayloadKind::Boxscore)
    } else if file_name.contains("game_raw") {
        Some(PayloadKind::GameData)
    } else {
        None
    }
}

/// Infer the payload kind from its shape when the filename gives no hint.
/// A combined document carries `boxscore`/`game_data` sections; raw
/// boxscore documents have per-side `players` maps; raw game summaries
/// have `teams` without players.
fn kind_from_shape(payload: &Value) -> Option<PayloadKind> {
    let obj = payload.as_object()?;

    if obj.contains_key("boxscore") || obj.contains_key("game_data") {
        return Some(PayloadKind::Combined);
    }

    let teams = obj.get("teams")?.as_object()?;
    let has_players = ["home", "away"].iter().any(|side| {
        teams
            .get(*side)
            .and_then(Value::as_object)
            .is_some_and(|s| s.contains_key("players"))
    });

    if has_players {
        Some(PayloadKind::Boxscore)
    } else {
        Some(PayloadKind::GameData)
    }
}

/// Ordered game-id recovery: a canonical identifier field at the top
/// level, then one level into nested objects, then a digit run at the end
/// of the file stem. The upstream API is inconsistent about where it
/// places the identifier across endpoint variants, so all three tiers see
/// real use.
pub fn resolve_game_id(payload: &Value, path: &Path) -> Option<i64> {
    if let Some(obj) = payload.as_object() {
        if let Some(id) = game_id_in(obj) {
            return Some(id);
        }
        for value in obj.values() {
            if let Some(nested) = value.as_object() {
                if let Some(id) = game_id_in(nested) {
                    return Some(id);
                }
            }
        }
    }
    game_id_from_filename(path)
}

fn game_id_in(obj: &serde_json::Map<String, Value>) -> Option<i64> {
    GAME_ID_KEYS
        .iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_i64))
}

fn game_id_from_filename(path: &Path) -> Option<i64> {
    let stem = path.file_stem()?.to_str()?;
    let digits = stem
        .as_bytes()
        .iter()
        .rev()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    stem[stem.len() - digits..].parse().ok()
}
