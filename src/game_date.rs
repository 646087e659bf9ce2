use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

/// How "today" is derived from the current UTC time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameDateRule {
    /// Naive fixed shift west of UTC. Does not follow daylight saving.
    FixedOffset { hours_behind_utc: i64 },
    /// Proper local date in an IANA zone.
    TimeZone(Tz),
}

impl Default for GameDateRule {
    fn default() -> Self {
        GameDateRule::FixedOffset { hours_behind_utc: 6 }
    }
}

impl GameDateRule {
    /// `YYYY-MM-DD` for the GamesByDate endpoint.
    pub fn game_date(&self, now_utc: DateTime<Utc>) -> String {
        match self {
            GameDateRule::FixedOffset { hours_behind_utc } => (now_utc - Duration::hours(*hours_behind_utc))
                .format("%Y-%m-%d")
                .to_string(),
            GameDateRule::TimeZone(tz) => now_utc.with_timezone(tz).format("%Y-%m-%d").to_string(),
        }
    }
}
