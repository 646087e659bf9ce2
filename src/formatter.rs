use crate::model::game::Game;
use crate::model::game_status::GameStatus;
use crate::model::play_by_play::PlayByPlay;

const UNKNOWN: &str = "Unknown";
const NOT_AVAILABLE: &str = "N/A";

fn score_or_na(score: Option<i64>) -> String {
    score.map_or_else(|| NOT_AVAILABLE.to_string(), |s| s.to_string())
}

/// "Q1: 28-25, Q2: 30-22, ..."
fn quarter_scores(game: &Game) -> String {
    game.quarters()
        .iter()
        .map(|q| {
            format!(
                "Q{}: {}-{}",
                score_or_na(q.number),
                score_or_na(q.away_score),
                score_or_na(q.home_score)
            )
        })
        .collect::<Vec<String>>()
        .join(", ")
}

/// Render one game as a plain-text block for the notification body.
/// Never fails: missing fields fall back to "Unknown" or "N/A".
pub fn format_game(game: &Game, play_by_play: Option<&PlayByPlay>) -> String {
    let status = game.status.as_deref().unwrap_or(UNKNOWN);
    let away_team = game.away_team.as_deref().unwrap_or(UNKNOWN);
    let home_team = game.home_team.as_deref().unwrap_or(UNKNOWN);
    let score = format!(
        "{}-{}",
        score_or_na(game.away_team_score),
        score_or_na(game.home_team_score)
    );
    let start_time = game.date_time.as_deref().unwrap_or(UNKNOWN);
    let channel = game.channel.as_deref().unwrap_or(UNKNOWN);

    let play_by_play_info = match play_by_play {
        Some(pbp) => format!("\nLast Play: {}", pbp.last_play().unwrap_or(NOT_AVAILABLE)),
        None => String::new(),
    };

    match game.status_kind() {
        GameStatus::Final => format!(
            "Game Status: {}\n{} vs {}\nFinal Score: {}\nStart Time: {}\nChannel: {}\nQuarter Scores: {}\n{}",
            status,
            away_team,
            home_team,
            score,
            start_time,
            channel,
            quarter_scores(game),
            play_by_play_info
        ),
        GameStatus::InProgress => format!(
            "Game Status: {}\n{} vs {}\nCurrent Score: {}\nLast Play: {}\nChannel: {}\n{}",
            status,
            away_team,
            home_team,
            score,
            game.last_play.as_deref().unwrap_or(NOT_AVAILABLE),
            channel,
            play_by_play_info
        ),
        GameStatus::Scheduled => format!(
            "Game Status: {}\n{} vs {}\nStart Time: {}\nChannel: {}\n",
            status, away_team, home_team, start_time, channel
        ),
        GameStatus::Other => format!(
            "Game Status: {}\n{} vs {}\nDetails are unavailable at the moment.\n",
            status, away_team, home_team
        ),
    }
}
