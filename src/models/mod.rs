// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{User, UserId, Profile, Gender, LookingFor, SwipeAction, SwipeOutcome, LikeEdge, MatchPair, ChatMessage, CandidateCard, DirectoryEntry};
pub use requests::{SignupRequest, SigninRequest, CandidatesQuery, SwipeRequest, SendMessageRequest};
pub use responses::{TokenResponse, SwipeResponse, SwipeStatus, MessageReceipt, MessageResponse, HealthResponse, ErrorResponse};
