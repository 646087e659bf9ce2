use async_trait::async_trait;
use aws_sdk_sns::error::DisplayErrorContext;
use tracing::info;

use crate::error::PublishError;

/// Destination for the composed notification.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, subject: &str, message: &str) -> Result<(), PublishError>;
}

/// SNS topic client encapsulating the topic ARN.
#[derive(Debug, Clone)]
pub struct SnsNotifier {
    client: aws_sdk_sns::Client,
    topic_arn: String,
}

impl SnsNotifier {
    pub fn new(client: aws_sdk_sns::Client, topic_arn: String) -> Self {
        Self { client, topic_arn }
    }

    /// Build a client from the standard AWS environment (region, credentials).
    pub async fn from_env(topic_arn: String) -> Self {
        let sdk_config = aws_config::load_from_env().await;
        Self::new(aws_sdk_sns::Client::new(&sdk_config), topic_arn)
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, subject: &str, message: &str) -> Result<(), PublishError> {
        let result = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await;
        match result {
            Ok(output) => {
                info!(message_id = output.message_id().unwrap_or_default(), "Published message to SNS");
                Ok(())
            }
            Err(e) => Err(PublishError::Sns {
                topic_arn: self.topic_arn.clone(),
                message: DisplayErrorContext(&e).to_string(),
            }),
        }
    }
}
