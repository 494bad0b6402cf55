// Core algorithm exports
pub mod ranker;
pub mod scoring;

pub use ranker::CandidateRanker;
pub use scoring::compatibility_score;
