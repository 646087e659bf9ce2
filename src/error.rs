//! Error types for the game updates job

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be set")]
    Missing { name: &'static str },

    #[error("Invalid {name}: {value} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Failure talking to the SportsDataIO endpoints.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("Failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("Failed to parse response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("SNS publish to {topic_arn} failed: {message}")]
    Sns { topic_arn: String, message: String },
}

/// The two fatal exits of one invocation, plus a panicked blocking task.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FeedError),

    #[error("Publish failed: {0}")]
    Publish(#[from] PublishError),

    #[error("Blocking fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
