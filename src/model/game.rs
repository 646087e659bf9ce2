use serde::{Deserialize, Serialize};

use crate::model::game_status::GameStatus;

/// One entry of the GamesByDate response. Every field may be missing or null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "GameID", default)]
    pub game_id: Option<i64>,

    #[serde(rename = "Status", default)]
    pub status: Option<String>,

    #[serde(rename = "AwayTeam", default)]
    pub away_team: Option<String>,

    #[serde(rename = "HomeTeam", default)]
    pub home_team: Option<String>,

    #[serde(rename = "AwayTeamScore", default)]
    pub away_team_score: Option<i64>,

    #[serde(rename = "HomeTeamScore", default)]
    pub home_team_score: Option<i64>,

    /// Tip-off as reported by the API (Eastern, no offset), kept verbatim for display.
    #[serde(rename = "DateTime", default)]
    pub date_time: Option<String>,

    #[serde(rename = "Channel", default)]
    pub channel: Option<String>,

    #[serde(rename = "Quarters", default)]
    pub quarters: Option<Vec<Quarter>>,

    #[serde(rename = "LastPlay", default)]
    pub last_play: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quarter {
    #[serde(rename = "Number", default)]
    pub number: Option<i64>,

    #[serde(rename = "AwayScore", default)]
    pub away_score: Option<i64>,

    #[serde(rename = "HomeScore", default)]
    pub home_score: Option<i64>,
}

impl Game {
    pub fn status_kind(&self) -> GameStatus {
        GameStatus::from_raw(self.status.as_deref())
    }

    pub fn quarters(&self) -> &[Quarter] {
        self.quarters.as_deref().unwrap_or_default()
    }
}
