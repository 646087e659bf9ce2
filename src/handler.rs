use lambda_runtime::{Error, LambdaEvent};
use tracing::{error, instrument, warn};

use crate::config::Config;
use crate::game_date::GameDateRule;
use crate::pipeline::{self, BODY_CONFIG_FAILED, Response};
use crate::sns::SnsNotifier;
use crate::sportsdata::SportsData;

/// The trigger payload is opaque (typically an EventBridge scheduled event) and is not inspected.
pub type Request = serde_json::Value;

#[instrument(skip(event), fields(request_id = %event.context.request_id))]
pub async fn handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    // Config is read once per invocation
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Ok(Response::failure(BODY_CONFIG_FAILED));
        }
    };

    if let GameDateRule::FixedOffset { hours_behind_utc } = config.date_rule {
        warn!(hours_behind_utc, "Game date uses a fixed UTC offset; daylight saving is not applied");
    }
    let date = config.date_rule.game_date(chrono::Utc::now());

    let feed = SportsData::new(config.api_key, config.scores_base_url, config.replay_base_url);
    let sns = SnsNotifier::from_env(config.topic_arn).await;

    Ok(pipeline::run(feed, &sns, date).await)
}
