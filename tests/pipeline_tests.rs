use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use nba_game_updates::error::{FeedError, PublishError};
use nba_game_updates::model::game::Game;
use nba_game_updates::pipeline::{
    self, BODY_FETCH_FAILED, BODY_OK, BODY_PUBLISH_FAILED, NO_GAMES_MESSAGE, SEPARATOR, SUBJECT,
    collect_messages, compose_message,
};
use nba_game_updates::sns::Notifier;
use nba_game_updates::sportsdata::GameFeed;

fn parse_error() -> FeedError {
    FeedError::Parse {
        url: "fake".to_string(),
        source: serde_json::from_str::<Vec<Game>>("not json").unwrap_err(),
    }
}

/// In-memory feed. `games: None` makes the primary fetch fail.
#[derive(Clone, Default)]
struct FakeFeed {
    games: Option<Vec<Game>>,
    play_by_play: HashMap<i64, Value>,
    failing_play_by_play: HashSet<i64>,
    requested: Arc<Mutex<Vec<i64>>>,
}

impl GameFeed for FakeFeed {
    fn games_by_date(&self, _date: &str) -> Result<Vec<Game>, FeedError> {
        self.games.clone().ok_or_else(parse_error)
    }

    fn play_by_play(&self, game_id: i64) -> Result<Value, FeedError> {
        self.requested.lock().unwrap().push(game_id);
        if self.failing_play_by_play.contains(&game_id) {
            return Err(parse_error());
        }
        Ok(self.play_by_play.get(&game_id).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
struct RecordingNotifier {
    fail: bool,
    published: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn publish(&self, subject: &str, message: &str) -> Result<(), PublishError> {
        self.published.lock().unwrap().push((subject.to_string(), message.to_string()));
        if self.fail {
            return Err(PublishError::Sns {
                topic_arn: "arn:aws:sns:us-east-1:000000000000:nba".to_string(),
                message: "AccessDenied".to_string(),
            });
        }
        Ok(())
    }
}

fn sample_games() -> Vec<Game> {
    serde_json::from_str(include_str!("games_by_date.json")).unwrap()
}

fn pbp(last_play: &str) -> Value {
    json!({ "LastPlay": last_play })
}

fn final_game(game_id: i64) -> Game {
    serde_json::from_value(json!({
        "GameID": game_id,
        "Status": "Final",
        "AwayTeam": "BOS",
        "HomeTeam": "MIA",
        "AwayTeamScore": 101,
        "HomeTeamScore": 99,
        "Channel": "ESPN",
        "Quarters": [{ "Number": 1, "AwayScore": 25, "HomeScore": 20 }]
    }))
    .unwrap()
}

#[test]
fn compose_empty_uses_no_games_message() {
    assert_eq!(compose_message(&[]), "No games available for today.");
}

#[test]
fn compose_joins_in_order() {
    let blocks = vec!["a\n".to_string(), "b\n".to_string(), "c\n".to_string()];
    assert_eq!(compose_message(&blocks), "a\n\n---\nb\n\n---\nc\n");
}

#[test]
fn collect_skips_games_without_id_and_keeps_order() {
    let feed = FakeFeed { games: Some(sample_games()), ..FakeFeed::default() };
    let messages = collect_messages(&feed, "2025-01-15").unwrap();

    assert_eq!(messages.len(), 4);
    assert!(messages[0].contains("BOS vs MIA"));
    assert!(messages[1].contains("LAL vs DEN"));
    assert!(messages[2].contains("GS vs PHO"));
    assert!(messages[3].contains("NY vs CHI"));
    assert_eq!(*feed.requested.lock().unwrap(), vec![20811, 20812, 20813, 20814]);
}

#[test]
fn collect_fails_when_game_list_fails() {
    let feed = FakeFeed::default();
    assert!(collect_messages(&feed, "2025-01-15").is_err());
    assert!(feed.requested.lock().unwrap().is_empty());
}

#[tokio::test]
async fn publishes_joined_blocks_with_subject() {
    let mut feed = FakeFeed { games: Some(sample_games()), ..FakeFeed::default() };
    feed.play_by_play.insert(20811, pbp("Final buzzer"));
    let expected = compose_message(&collect_messages(&feed, "2025-01-15").unwrap());

    let notifier = RecordingNotifier::default();
    let response = pipeline::run(feed, &notifier, "2025-01-15".to_string()).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, BODY_OK);
    let published = notifier.published.lock().unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].0, SUBJECT);
    assert_eq!(published[0].1, expected);
    assert_eq!(published[0].1.matches(SEPARATOR).count(), 3);
    assert!(published[0].1.contains("Last Play: Final buzzer"));
}

#[tokio::test]
async fn zero_games_publishes_no_games_message() {
    let feed = FakeFeed { games: Some(Vec::new()), ..FakeFeed::default() };
    let notifier = RecordingNotifier::default();
    let response = pipeline::run(feed, &notifier, "2025-07-04".to_string()).await;

    assert_eq!(response.status_code, 200);
    let published = notifier.published.lock().unwrap();
    assert_eq!(published[0].1, NO_GAMES_MESSAGE);
}

#[tokio::test]
async fn fetch_failure_returns_500_without_publishing() {
    let notifier = RecordingNotifier::default();
    let response = pipeline::run(FakeFeed::default(), &notifier, "2025-01-15".to_string()).await;

    assert_eq!(response.status_code, 500);
    assert_eq!(response.body, BODY_FETCH_FAILED);
    assert!(notifier.published.lock().unwrap().is_empty());
}

#[tokio::test]
async fn play_by_play_failure_is_not_fatal() {
    let mut feed = FakeFeed { games: Some(vec![final_game(7)]), ..FakeFeed::default() };
    feed.failing_play_by_play.insert(7);

    let notifier = RecordingNotifier::default();
    let response = pipeline::run(feed, &notifier, "2025-01-15".to_string()).await;

    assert_eq!(response.status_code, 200);
    let published = notifier.published.lock().unwrap();
    assert_eq!(published.len(), 1);
    let body = &published[0].1;
    assert!(!body.contains("Last Play"), "body was: {}", body);
    for label in ["Game Status: Final", "BOS vs MIA", "Final Score: 101-99", "Channel: ESPN", "Quarter Scores: Q1: 25-20"] {
        assert!(body.contains(label), "missing {:?} in: {}", label, body);
    }
}

#[tokio::test]
async fn publish_failure_returns_500() {
    let feed = FakeFeed { games: Some(sample_games()), ..FakeFeed::default() };
    let notifier = RecordingNotifier { fail: true, ..RecordingNotifier::default() };
    let response = pipeline::run(feed, &notifier, "2025-01-15".to_string()).await;

    assert_eq!(response.status_code, 500);
    assert_eq!(response.body, BODY_PUBLISH_FAILED);
    assert_eq!(notifier.published.lock().unwrap().len(), 1);
}

#[test]
fn empty_replay_documents_add_no_last_play() {
    let mut feed = FakeFeed {
        games: Some(vec![final_game(1), final_game(2), final_game(3)]),
        ..FakeFeed::default()
    };
    feed.play_by_play.insert(1, json!({}));
    feed.play_by_play.insert(2, json!([]));
    feed.play_by_play.insert(3, Value::Null);

    let messages = collect_messages(&feed, "2025-01-15").unwrap();
    assert_eq!(messages.len(), 3);
    for msg in &messages {
        assert!(!msg.contains("Last Play"), "message was: {}", msg);
        assert!(msg.ends_with("Quarter Scores: Q1: 25-20\n"), "message was: {}", msg);
    }
}

#[test]
fn replay_document_without_last_play_shows_na() {
    let mut feed = FakeFeed { games: Some(vec![final_game(4)]), ..FakeFeed::default() };
    feed.play_by_play.insert(4, json!({ "Plays": [] }));

    let messages = collect_messages(&feed, "2025-01-15").unwrap();
    assert!(messages[0].ends_with("\nLast Play: N/A"), "message was: {}", messages[0]);
}

#[test]
fn non_object_replay_document_is_not_fatal() {
    let mut feed = FakeFeed { games: Some(vec![final_game(5)]), ..FakeFeed::default() };
    feed.play_by_play.insert(5, json!(["unexpected"]));

    let messages = collect_messages(&feed, "2025-01-15").unwrap();
    assert_eq!(messages.len(), 1);
    assert!(!messages[0].contains("Last Play"), "message was: {}", messages[0]);
}

#[test]
fn game_id_zero_is_skipped() {
    let feed = FakeFeed { games: Some(vec![final_game(0), final_game(9)]), ..FakeFeed::default() };

    let messages = collect_messages(&feed, "2025-01-15").unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(*feed.requested.lock().unwrap(), vec![9]);
}
