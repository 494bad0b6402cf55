use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::error::ApiError;
use crate::models::{DirectoryEntry, Profile, User, UserId};
use crate::services::credentials::CredentialVerifier;

#[derive(Default)]
struct IdentityState {
    users: BTreeMap<UserId, User>,
    handles: HashMap<String, UserId>,
    profiles: BTreeMap<UserId, Profile>,
    last_id: UserId,
}

/// In-memory account and profile store
///
/// Users are keyed by a sequential id and looked up at signin by their
/// unique handle. Every user owns exactly one profile.
pub struct IdentityStore {
    state: RwLock<IdentityState>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl IdentityStore {
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            state: RwLock::new(IdentityState::default()),
            verifier,
        }
    }

    /// Create an account and its empty profile
    pub async fn register(
        &self,
        handle: &str,
        secret: &str,
        display_name: &str,
    ) -> Result<UserId, ApiError> {
        if self.state.read().await.handles.contains_key(handle) {
            return Err(ApiError::Conflict(handle.to_string()));
        }

        let verifier = self.verifier.clone();
        let owned_secret = secret.to_string();
        let credential_hash = tokio::task::spawn_blocking(move || verifier.hash(&owned_secret))
            .await
            .map_err(|e| {
                tracing::error!("Credential hashing task failed: {}", e);
                ApiError::Internal("Credential processing failed".to_string())
            })??;

        let mut state = self.state.write().await;
        // Another signup may have claimed the handle while hashing
        if state.handles.contains_key(handle) {
            return Err(ApiError::Conflict(handle.to_string()));
        }

        state.last_id += 1;
        let id = state.last_id;

        state.handles.insert(handle.to_string(), id);
        state.users.insert(
            id,
            User {
                id,
                handle: handle.to_string(),
                credential_hash,
                display_name: display_name.to_string(),
            },
        );
        state.profiles.insert(id, Profile::empty(id));

        tracing::info!("Registered user {} ({})", id, display_name);
        Ok(id)
    }

    /// Resolve a handle and secret to a user id
    pub async fn authenticate(&self, handle: &str, secret: &str) -> Result<UserId, ApiError> {
        let (id, credential_hash) = {
            let state = self.state.read().await;
            let user = state
                .handles
                .get(handle)
                .and_then(|id| state.users.get(id))
                .ok_or(ApiError::InvalidCredentials)?;
            (user.id, user.credential_hash.clone())
        };

        let verifier = self.verifier.clone();
        let owned_secret = secret.to_string();
        let verified = tokio::task::spawn_blocking(move || verifier.verify(&owned_secret, &credential_hash))
            .await
            .map_err(|e| {
                tracing::error!("Credential verification task failed: {}", e);
                ApiError::Internal("Credential processing failed".to_string())
            })?;

        if !verified {
            tracing::warn!("Failed signin for user {}", id);
            return Err(ApiError::InvalidCredentials);
        }

        Ok(id)
    }

    pub async fn get_profile(&self, user_id: UserId) -> Result<Profile, ApiError> {
        self.state
            .read()
            .await
            .profiles
            .get(&user_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("profile for user {}", user_id)))
    }

    /// Replace the caller's profile wholesale
    pub async fn replace_profile(&self, caller: UserId, profile: Profile) -> Result<Profile, ApiError> {
        if profile.user_id != caller {
            return Err(ApiError::Forbidden(format!(
                "user {} cannot modify the profile of user {}",
                caller, profile.user_id
            )));
        }

        let mut state = self.state.write().await;
        let slot = state
            .profiles
            .get_mut(&caller)
            .ok_or_else(|| ApiError::NotFound(format!("profile for user {}", caller)))?;
        *slot = profile.clone();

        tracing::debug!("Replaced profile for user {}", caller);
        Ok(profile)
    }

    pub async fn exists(&self, user_id: UserId) -> bool {
        self.state.read().await.users.contains_key(&user_id)
    }

    pub async fn display_name(&self, user_id: UserId) -> Option<String> {
        self.state
            .read()
            .await
            .users
            .get(&user_id)
            .map(|user| user.display_name.clone())
    }

    /// Consistent snapshot of every user's display name and profile, by id
    pub async fn directory(&self) -> Vec<DirectoryEntry> {
        let state = self.state.read().await;
        state
            .profiles
            .values()
            .filter_map(|profile| {
                state.users.get(&profile.user_id).map(|user| DirectoryEntry {
                    display_name: user.display_name.clone(),
                    profile: profile.clone(),
                })
            })
            .collect()
    }

    pub async fn user_count(&self) -> usize {
        self.state.read().await.users.len()
    }
}
