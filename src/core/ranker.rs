use crate::models::{CandidateCard, DirectoryEntry, Profile, UserId};
use crate::core::scoring::compatibility_score;

/// Ranks other users' profiles by compatibility with the requester
///
/// # Pipeline Stages
/// 1. Drop the requester's own entry
/// 2. Score every remaining profile against the requester
/// 3. Sort by score (descending), then user id (ascending)
/// 4. Truncate to the requested limit
#[derive(Debug, Clone)]
pub struct CandidateRanker {
    default_limit: usize,
    max_limit: usize,
}

impl CandidateRanker {
    pub fn new(default_limit: usize, max_limit: usize) -> Self {
        Self {
            default_limit,
            max_limit: max_limit.max(1),
        }
    }

    /// Resolve a client-supplied limit: missing means the default, and
    /// anything above the maximum is capped
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }

    /// Rank every directory entry except the requester's own
    ///
    /// # Arguments
    /// * `requester_id` - The user asking for candidates
    /// * `directory` - All registered users, the requester included
    /// * `limit` - Maximum number of cards to return
    ///
    /// # Returns
    /// At most `limit` cards, best match first
    pub fn rank(
        &self,
        requester_id: UserId,
        directory: Vec<DirectoryEntry>,
        limit: usize,
    ) -> Vec<CandidateCard> {
        let requester = directory
            .iter()
            .find(|entry| entry.profile.user_id == requester_id)
            .map(|entry| entry.profile.clone())
            .unwrap_or_else(|| Profile::empty(requester_id));

        let mut cards: Vec<CandidateCard> = directory
            .into_iter()
            .filter(|entry| entry.profile.user_id != requester_id)
            .map(|entry| {
                let score = compatibility_score(&requester, &entry.profile);
                CandidateCard {
                    user_id: entry.profile.user_id,
                    display_name: entry.display_name,
                    city: entry.profile.city,
                    interests: entry.profile.interests,
                    age: None,
                    score,
                }
            })
            .collect();

        cards.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        cards.truncate(limit);
        cards
    }
}

impl Default for CandidateRanker {
    fn default() -> Self {
        Self::new(10, 100)
    }
}
