use std::fmt;

use serde::de::DeserializeOwned;
use tracing::{info, info_span, instrument};

use crate::error::FeedError;
use crate::model::game::Game;

pub const DEFAULT_SCORES_BASE_URL: &str = "https://api.sportsdata.io";
pub const DEFAULT_REPLAY_BASE_URL: &str = "https://replay.sportsdata.io";

/// Source of game and play-by-play records.
pub trait GameFeed {
    /// All games scheduled on `date` (`YYYY-MM-DD`).
    fn games_by_date(&self, date: &str) -> Result<Vec<Game>, FeedError>;

    /// Raw replay document for a single game. It may be empty; see `PlayByPlay::from_document`.
    fn play_by_play(&self, game_id: i64) -> Result<serde_json::Value, FeedError>;
}

/// Blocking SportsDataIO client for the NBA scores and replay feeds.
#[derive(Clone)]
pub struct SportsData {
    api_key: String,
    scores_base_url: String,
    replay_base_url: String,
}

// Keep the API key out of logs.
impl fmt::Debug for SportsData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SportsData")
            .field("scores_base_url", &self.scores_base_url)
            .field("replay_base_url", &self.replay_base_url)
            .finish_non_exhaustive()
    }
}

impl SportsData {
    pub fn new(api_key: String, scores_base_url: String, replay_base_url: String) -> Self {
        Self {
            api_key,
            scores_base_url: scores_base_url.trim_end_matches('/').to_string(),
            replay_base_url: replay_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `{base}{path}?key=...` and deserialize the JSON body.
    /// Errors carry `endpoint` (URL without the key); callers decide how to log them.
    fn get_json<T: DeserializeOwned>(&self, base: &str, path: &str) -> Result<T, FeedError> {
        let endpoint = format!("{}{}", base, path);
        let url = format!("{}?key={}", endpoint, self.api_key);

        let response_result = {
            let _span = info_span!("sportsdata_fetch", endpoint = %endpoint).entered();
            ureq::get(&url).call()
        };
        let response = response_result.map_err(|source| FeedError::Request {
            url: endpoint.clone(),
            source,
        })?;

        let mut body_reader = response.into_body();
        let body = body_reader.read_to_string().map_err(|source| FeedError::Body {
            url: endpoint.clone(),
            source,
        })?;

        serde_json::from_str::<T>(&body).map_err(|source| FeedError::Parse { url: endpoint, source })
    }
}

impl GameFeed for SportsData {
    #[instrument(level = "info", skip(self))]
    fn games_by_date(&self, date: &str) -> Result<Vec<Game>, FeedError> {
        let path = format!("/v3/nba/scores/json/GamesByDate/{}", date);
        let games: Vec<Game> = self.get_json(&self.scores_base_url, &path)?;
        info!(count = games.len(), "Fetched games");
        Ok(games)
    }

    #[instrument(level = "info", skip(self))]
    fn play_by_play(&self, game_id: i64) -> Result<serde_json::Value, FeedError> {
        let path = format!("/api/v3/nba/pbp/json/playbyplay/{}", game_id);
        self.get_json(&self.replay_base_url, &path)
    }
}
