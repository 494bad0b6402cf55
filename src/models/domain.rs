use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Internal numeric user identifier, assigned sequentially on signup
pub type UserId = u64;

/// Registered account
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub handle: String,
    pub credential_hash: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookingFor {
    Male,
    Female,
    Everyone,
}

/// User profile, owned 1:1 by a [`User`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(alias = "userId")]
    pub user_id: UserId,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub interests: BTreeSet<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(alias = "lookingFor", default)]
    pub looking_for: Option<LookingFor>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub birthdate: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub verified: bool,
}

impl Profile {
    /// Empty profile created alongside a new account
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            bio: String::new(),
            interests: BTreeSet::new(),
            gender: None,
            looking_for: None,
            city: None,
            birthdate: None,
            verified: false,
        }
    }

    /// City, if set to something non-empty
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.is_empty())
    }
}

/// Swipe direction chosen by the actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Like,
    Pass,
}

/// Directed like from `actor` to `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LikeEdge {
    pub actor: UserId,
    pub target: UserId,
}

impl LikeEdge {
    pub fn new(actor: UserId, target: UserId) -> Self {
        Self { actor, target }
    }

    pub fn reversed(self) -> Self {
        Self {
            actor: self.target,
            target: self.actor,
        }
    }
}

/// Unordered match between two users, stored with the lower id first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchPair {
    low: UserId,
    high: UserId,
}

impl MatchPair {
    pub fn new(a: UserId, b: UserId) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// The member of the pair that is not `user_id`, if `user_id` is a member
    pub fn other(&self, user_id: UserId) -> Option<UserId> {
        if self.low == user_id {
            Some(self.high)
        } else if self.high == user_id {
            Some(self.low)
        } else {
            None
        }
    }
}

/// Result of a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Recorded,
    Matched { with: UserId },
}

/// Message exchanged between two matched users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: uuid::Uuid,
    #[serde(rename = "from")]
    pub from_id: UserId,
    #[serde(rename = "to")]
    pub to_id: UserId,
    pub text: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ChatMessage {
    /// Whether this message was exchanged between `a` and `b`, in either direction
    pub fn is_between(&self, a: UserId, b: UserId) -> bool {
        (self.from_id == a && self.to_id == b) || (self.from_id == b && self.to_id == a)
    }
}

/// Discovery card for a ranked candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateCard {
    pub user_id: UserId,
    pub display_name: String,
    pub city: Option<String>,
    pub interests: BTreeSet<String>,
    /// Never derived from the birthdate; always null
    pub age: Option<u8>,
    pub score: f64,
}

/// Display name and profile of one registered user
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub display_name: String,
    pub profile: Profile,
}
