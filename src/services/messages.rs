use std::sync::Arc;
use tokio::sync::RwLock;
use crate::error::ApiError;
use crate::models::{ChatMessage, UserId};
use crate::services::swipes::SwipeEngine;

/// Append-only message log between matched users
///
/// Messages are kept in a single vector in send order; history for a pair
/// is a filter over it.
pub struct MessageRelay {
    log: RwLock<Vec<ChatMessage>>,
    swipes: Arc<SwipeEngine>,
}

impl MessageRelay {
    pub fn new(swipes: Arc<SwipeEngine>) -> Self {
        Self {
            log: RwLock::new(Vec::new()),
            swipes,
        }
    }

    /// Append a message from `from_id` to `to_id` on behalf of `caller`
    pub async fn send(
        &self,
        caller: UserId,
        from_id: UserId,
        to_id: UserId,
        text: String,
    ) -> Result<ChatMessage, ApiError> {
        if caller != from_id {
            return Err(ApiError::Forbidden(format!(
                "user {} cannot send messages as user {}",
                caller, from_id
            )));
        }

        self.ensure_matched(from_id, to_id).await?;

        let message = ChatMessage {
            id: uuid::Uuid::new_v4(),
            from_id,
            to_id,
            text,
            timestamp: chrono::Utc::now(),
        };

        self.log.write().await.push(message.clone());

        tracing::info!("Message {} sent from {} to {}", message.id, from_id, to_id);
        Ok(message)
    }

    /// Every message between `user_id` and `peer_id`, in send order
    pub async fn history(&self, user_id: UserId, peer_id: UserId) -> Result<Vec<ChatMessage>, ApiError> {
        self.ensure_matched(user_id, peer_id).await?;

        let history: Vec<ChatMessage> = self
            .log
            .read()
            .await
            .iter()
            .filter(|message| message.is_between(user_id, peer_id))
            .cloned()
            .collect();

        tracing::debug!("Returning {} messages between {} and {}", history.len(), user_id, peer_id);
        Ok(history)
    }

    async fn ensure_matched(&self, a: UserId, b: UserId) -> Result<(), ApiError> {
        if self.swipes.is_matched(a, b).await {
            Ok(())
        } else {
            Err(ApiError::NotMatched(a, b))
        }
    }
}
