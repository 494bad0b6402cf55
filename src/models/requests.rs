use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{SwipeAction, UserId};

/// Request to create an account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "phone")]
    pub handle: String,
    #[validate(length(min = 1))]
    #[serde(alias = "password")]
    pub secret: String,
    #[validate(length(min = 1))]
    #[serde(alias = "displayName", alias = "name")]
    pub display_name: String,
}

/// Request to sign in to an existing account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "phone")]
    pub handle: String,
    #[validate(length(min = 1))]
    #[serde(alias = "password")]
    pub secret: String,
}

/// Query string for the candidates endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidatesQuery {
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
}

/// Like or pass on another user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeRequest {
    #[serde(alias = "targetId")]
    pub target_id: UserId,
    pub action: SwipeAction,
}

/// Message to a matched user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    #[serde(alias = "fromId")]
    pub from_id: UserId,
    #[serde(alias = "toId")]
    pub to_id: UserId,
    pub text: String,
}
