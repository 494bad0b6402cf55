use std::sync::Arc;
use crate::config::Settings;
use crate::core::CandidateRanker;
use crate::services::{Argon2Verifier, CredentialError, CredentialVerifier, IdentityStore, MessageRelay, SwipeEngine, TokenService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenService>,
    pub identity: Arc<IdentityStore>,
    pub swipes: Arc<SwipeEngine>,
    pub messages: Arc<MessageRelay>,
    pub ranker: CandidateRanker,
}

impl AppState {
    pub fn new(
        tokens: TokenService,
        verifier: Arc<dyn CredentialVerifier>,
        ranker: CandidateRanker,
    ) -> Self {
        let swipes = Arc::new(SwipeEngine::new());

        Self {
            tokens: Arc::new(tokens),
            identity: Arc::new(IdentityStore::new(verifier)),
            messages: Arc::new(MessageRelay::new(swipes.clone())),
            swipes,
            ranker,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, CredentialError> {
        let argon2 = &settings.auth.argon2;
        let verifier = Argon2Verifier::new(argon2.memory_kib, argon2.iterations, argon2.parallelism)?;

        let tokens = TokenService::new(
            &settings.auth.jwt_secret,
            chrono::Duration::seconds(settings.auth.token_ttl_secs),
        );

        let ranker = CandidateRanker::new(
            settings.discovery.default_limit,
            settings.discovery.max_limit,
        );

        Ok(Self::new(tokens, Arc::new(verifier), ranker))
    }
}
