//! Lume API - dating app backend for the Lume dating app
//!
//! This library provides accounts, profiles, candidate discovery, swipes,
//! mutual matches and matched-pair messaging over HTTP. All state is held
//! in process memory behind async locks.

pub mod config;
pub mod core;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use crate::core::{CandidateRanker, compatibility_score};
pub use crate::error::ApiError;
pub use crate::models::{Profile, CandidateCard, ChatMessage, SwipeAction, SwipeOutcome, UserId};
pub use crate::state::AppState;
