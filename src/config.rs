use std::env;
use std::str::FromStr;

use chrono_tz::Tz;

use crate::error::ConfigError;
use crate::game_date::GameDateRule;
use crate::sportsdata::{DEFAULT_REPLAY_BASE_URL, DEFAULT_SCORES_BASE_URL};

/// Per-invocation settings, read from the Lambda environment.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub topic_arn: String,
    pub scores_base_url: String,
    pub replay_base_url: String,
    pub date_rule: GameDateRule,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("topic_arn", &self.topic_arn)
            .field("scores_base_url", &self.scores_base_url)
            .field("replay_base_url", &self.replay_base_url)
            .field("date_rule", &self.date_rule)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Parse settings from any variable lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing { name })
        };
        let optional = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = required("NBA_API_KEY")?;
        let topic_arn = required("SNS_TOPIC_ARN")?;
        let scores_base_url =
            optional("SPORTSDATA_BASE_URL").unwrap_or_else(|| DEFAULT_SCORES_BASE_URL.to_string());
        let replay_base_url =
            optional("SPORTSDATA_REPLAY_BASE_URL").unwrap_or_else(|| DEFAULT_REPLAY_BASE_URL.to_string());

        let date_rule = match optional("GAME_DATE_TIMEZONE") {
            Some(name) => {
                let tz = Tz::from_str(&name).map_err(|e| ConfigError::Invalid {
                    name: "GAME_DATE_TIMEZONE",
                    value: name.clone(),
                    reason: e.to_string(),
                })?;
                GameDateRule::TimeZone(tz)
            }
            None => match optional("GAME_DATE_UTC_OFFSET_HOURS") {
                Some(raw) => {
                    let hours_behind_utc = raw.parse::<i64>().map_err(|e| ConfigError::Invalid {
                        name: "GAME_DATE_UTC_OFFSET_HOURS",
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?;
                    if !(-14..=14).contains(&hours_behind_utc) {
                        return Err(ConfigError::Invalid {
                            name: "GAME_DATE_UTC_OFFSET_HOURS",
                            value: raw,
                            reason: "must be between -14 and 14".to_string(),
                        });
                    }
                    GameDateRule::FixedOffset { hours_behind_utc }
                }
                None => GameDateRule::default(),
            },
        };

        Ok(Self {
            api_key,
            topic_arn,
            scores_base_url,
            replay_base_url,
            date_rule,
        })
    }
}
