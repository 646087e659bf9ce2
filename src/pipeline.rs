use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use crate::error::PipelineError;
use crate::formatter::format_game;
use crate::model::play_by_play::PlayByPlay;
use crate::sns::Notifier;
use crate::sportsdata::GameFeed;

pub const SUBJECT: &str = "NBA Game Updates";
pub const SEPARATOR: &str = "\n---\n";
pub const NO_GAMES_MESSAGE: &str = "No games available for today.";

pub const BODY_OK: &str = "Data processed and sent to SNS";
pub const BODY_FETCH_FAILED: &str = "Error fetching game data";
pub const BODY_PUBLISH_FAILED: &str = "Error publishing to SNS";
pub const BODY_CONFIG_FAILED: &str = "Error loading configuration";

/// Lambda response in the API Gateway style shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl Response {
    pub fn ok() -> Self {
        Self { status_code: 200, body: BODY_OK.to_string() }
    }

    pub fn failure(body: &str) -> Self {
        Self { status_code: 500, body: body.to_string() }
    }
}

/// Fetch the day's games and format one block per game, in feed order.
/// Games without a GameID (or with GameID 0) are skipped. A failed or empty play-by-play
/// fetch only drops that detail.
#[instrument(level = "info", skip(feed))]
pub fn collect_messages<F: GameFeed>(feed: &F, date: &str) -> Result<Vec<String>, PipelineError> {
    let games = feed.games_by_date(date)?;
    debug!(games = ?games, "Raw game data");

    let mut messages = Vec::with_capacity(games.len());
    for game in &games {
        let Some(game_id) = game.game_id.filter(|id| *id != 0) else {
            debug!(?game, "Skipping game without GameID");
            continue;
        };
        let play_by_play = match feed.play_by_play(game_id) {
            Ok(document) => match PlayByPlay::from_document(document) {
                Ok(pbp) => pbp,
                Err(e) => {
                    error!(error = %e, game_id, "Unusable play-by-play data");
                    None
                }
            },
            Err(e) => {
                error!(error = %e, game_id, "Error fetching play-by-play data");
                None
            }
        };
        messages.push(format_game(game, play_by_play.as_ref()));
    }
    Ok(messages)
}

/// Join formatted blocks into the notification body.
pub fn compose_message(messages: &[String]) -> String {
    if messages.is_empty() {
        NO_GAMES_MESSAGE.to_string()
    } else {
        messages.join(SEPARATOR)
    }
}

/// Fetch, format and publish. Fetching runs on the blocking pool since the HTTP client is synchronous.
pub async fn run_pipeline<F, N>(feed: F, notifier: &N, date: String) -> Result<(), PipelineError>
where
    F: GameFeed + Send + 'static,
    N: Notifier + ?Sized,
{
    info!(date = %date, "Fetching games for date");
    let messages = tokio::task::spawn_blocking(move || collect_messages(&feed, &date)).await??;
    let final_message = compose_message(&messages);
    info!(games = messages.len(), "Prepared message");

    notifier.publish(SUBJECT, &final_message).await?;
    info!("Message published to SNS successfully");
    Ok(())
}

/// Map the pipeline outcome onto the invocation response.
pub async fn run<F, N>(feed: F, notifier: &N, date: String) -> Response
where
    F: GameFeed + Send + 'static,
    N: Notifier + ?Sized,
{
    match run_pipeline(feed, notifier, date).await {
        Ok(()) => Response::ok(),
        Err(e @ (PipelineError::Fetch(_) | PipelineError::Task(_))) => {
            error!(error = %e, "Error fetching game data from API");
            Response::failure(BODY_FETCH_FAILED)
        }
        Err(e @ PipelineError::Publish(_)) => {
            error!(error = %e, "Error publishing to SNS");
            Response::failure(BODY_PUBLISH_FAILED)
        }
    }
}
