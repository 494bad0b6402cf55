use serde::{Deserialize, Serialize};
use crate::models::domain::{SwipeOutcome, UserId};

/// Issued access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_id: UserId,
}

impl TokenResponse {
    pub fn bearer(access_token: String, user_id: UserId) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            user_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeStatus {
    Ok,
    Match,
}

/// Swipe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeResponse {
    pub status: SwipeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_with: Option<UserId>,
}

impl From<SwipeOutcome> for SwipeResponse {
    fn from(outcome: SwipeOutcome) -> Self {
        match outcome {
            SwipeOutcome::Recorded => Self {
                status: SwipeStatus::Ok,
                match_with: None,
            },
            SwipeOutcome::Matched { with } => Self {
                status: SwipeStatus::Match,
                match_with: Some(with),
            },
        }
    }
}

/// Receipt for an appended message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageReceipt {
    pub status: String,
    pub message_id: uuid::Uuid,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Plain informational message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
