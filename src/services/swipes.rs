use std::collections::{BTreeSet, HashSet};
use tokio::sync::RwLock;
use crate::models::{LikeEdge, MatchPair, SwipeAction, SwipeOutcome, UserId};

#[derive(Default)]
struct SwipeState {
    likes: HashSet<LikeEdge>,
    matches: BTreeSet<MatchPair>,
}

/// Records likes and maintains the derived match relation
///
/// Likes and matches live behind one lock, so inserting an edge and
/// promoting the pair to a match is a single atomic step. Passes are
/// never stored.
#[derive(Default)]
pub struct SwipeEngine {
    state: RwLock<SwipeState>,
}

impl SwipeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a swipe from `actor` on `target`
    ///
    /// A like is idempotent. When the reverse like already exists the pair
    /// becomes a match, and every like from either side after that keeps
    /// reporting the match.
    pub async fn swipe(&self, actor: UserId, target: UserId, action: SwipeAction) -> SwipeOutcome {
        if action == SwipeAction::Pass {
            tracing::debug!("User {} passed on {}", actor, target);
            return SwipeOutcome::Recorded;
        }

        let edge = LikeEdge::new(actor, target);
        let mut state = self.state.write().await;
        state.likes.insert(edge);

        if !state.likes.contains(&edge.reversed()) {
            tracing::debug!("User {} liked {}", actor, target);
            return SwipeOutcome::Recorded;
        }

        if state.matches.insert(MatchPair::new(actor, target)) {
            tracing::info!("Users {} and {} matched", actor, target);
        }

        SwipeOutcome::Matched { with: target }
    }

    pub async fn is_matched(&self, a: UserId, b: UserId) -> bool {
        self.state.read().await.matches.contains(&MatchPair::new(a, b))
    }

    /// The other member of every match containing `user_id`, ascending
    pub async fn list_matches(&self, user_id: UserId) -> Vec<UserId> {
        let mut others: Vec<UserId> = self
            .state
            .read()
            .await
            .matches
            .iter()
            .filter_map(|pair| pair.other(user_id))
            .collect();
        others.sort_unstable();
        others
    }

    pub async fn like_count(&self) -> usize {
        self.state.read().await.likes.len()
    }

    pub async fn match_count(&self) -> usize {
        self.state.read().await.matches.len()
    }
}
