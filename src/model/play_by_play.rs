use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::game::Game;

/// Replay play-by-play document. Only the last play is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayByPlay {
    #[serde(rename = "LastPlay", default)]
    pub last_play: Option<String>,

    // The replay feed nests the game record; its LastPlay is the fallback.
    #[serde(rename = "Game", default)]
    pub game: Option<Game>,
}

impl PlayByPlay {
    /// Interpret a raw replay document. `{}`, `[]` and `null` carry no detail and yield `None`;
    /// any other non-object is rejected.
    pub fn from_document(document: Value) -> Result<Option<Self>, serde_json::Error> {
        match &document {
            Value::Null => return Ok(None),
            Value::Object(fields) if fields.is_empty() => return Ok(None),
            Value::Array(items) if items.is_empty() => return Ok(None),
            Value::Object(_) => {}
            _ => {
                return Err(<serde_json::Error as serde::de::Error>::custom(
                    "play-by-play document is not a JSON object",
                ));
            }
        }
        serde_json::from_value(document).map(Some)
    }

    pub fn last_play(&self) -> Option<&str> {
        self.last_play
            .as_deref()
            .or_else(|| self.game.as_ref().and_then(|g| g.last_play.as_deref()))
    }
}
