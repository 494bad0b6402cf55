// Unit tests for Lume API

use lume_api::core::{CandidateRanker, compatibility_score};
use lume_api::models::{DirectoryEntry, Profile, SwipeAction, SwipeOutcome};
use lume_api::services::{MessageRelay, SwipeEngine};
use lume_api::ApiError;
use std::sync::Arc;

fn create_profile(id: u64, interests: &[&str], city: Option<&str>) -> Profile {
    let mut profile = Profile::empty(id);
    profile.interests = interests.iter().map(|i| i.to_string()).collect();
    profile.city = city.map(str::to_string);
    profile
}

fn create_entry(id: u64, interests: &[&str], city: Option<&str>) -> DirectoryEntry {
    DirectoryEntry {
        display_name: format!("User {}", id),
        profile: create_profile(id, interests, city),
    }
}

#[test]
fn test_score_documented_example() {
    let a = create_profile(1, &["hiking", "chess"], Some("NY"));
    let b = create_profile(2, &["chess", "art"], Some("NY"));

    assert_eq!(compatibility_score(&a, &b), 0.43);
}

#[test]
fn test_score_symmetric_across_profiles() {
    let profiles = vec![
        create_profile(1, &["hiking", "chess"], Some("NY")),
        create_profile(2, &["chess", "art", "jazz"], Some("NY")),
        create_profile(3, &[], None),
        create_profile(4, &["jazz"], Some("LA")),
        create_profile(5, &["hiking", "chess", "art", "jazz"], Some("")),
    ];

    for a in &profiles {
        for b in &profiles {
            assert_eq!(
                compatibility_score(a, b),
                compatibility_score(b, a),
                "score({}, {}) is not symmetric",
                a.user_id,
                b.user_id
            );
        }
    }
}

#[test]
fn test_score_within_valid_range() {
    let a = create_profile(1, &["x"], Some("NY"));
    let b = create_profile(2, &["x"], Some("NY"));
    let score = compatibility_score(&a, &b);

    assert!((0.0..=1.0).contains(&score), "Score {} is out of range [0, 1]", score);
    assert_eq!(score, 1.0);
}

#[test]
fn test_candidates_never_exceed_limit_or_include_requester() {
    let ranker = CandidateRanker::default();
    let directory: Vec<DirectoryEntry> = (1..=25)
        .map(|id| create_entry(id, if id % 2 == 0 { &["chess"] } else { &["art"] }, None))
        .collect();

    for limit in [0, 1, 5, 24, 50] {
        let cards = ranker.rank(7, directory.clone(), limit);

        assert!(cards.len() <= limit);
        assert_eq!(cards.len(), limit.min(24));
        assert!(cards.iter().all(|c| c.user_id != 7));
    }
}

#[test]
fn test_candidates_sorted_by_score() {
    let ranker = CandidateRanker::default();
    let directory = vec![
        create_entry(1, &["hiking", "chess"], Some("NY")),
        create_entry(2, &["art"], None),
        create_entry(3, &["chess"], Some("NY")),
        create_entry(4, &["hiking", "chess"], Some("NY")),
    ];

    let cards = ranker.rank(1, directory, 10);

    for i in 1..cards.len() {
        assert!(
            cards[i - 1].score >= cards[i].score,
            "Candidates not sorted by score"
        );
    }
    assert_eq!(cards[0].user_id, 4);
}

#[tokio::test]
async fn test_mutual_like_then_message() {
    let swipes = Arc::new(SwipeEngine::new());
    let relay = MessageRelay::new(swipes.clone());

    let err = relay.send(1, 1, 2, "hello?".to_string()).await.unwrap_err();
    assert!(matches!(err, ApiError::NotMatched(1, 2)));

    assert_eq!(swipes.swipe(1, 2, SwipeAction::Like).await, SwipeOutcome::Recorded);
    assert_eq!(
        swipes.swipe(2, 1, SwipeAction::Like).await,
        SwipeOutcome::Matched { with: 1 }
    );
    assert_eq!(swipes.match_count().await, 1);

    relay.send(1, 1, 2, "hello!".to_string()).await.unwrap();
    let history = relay.history(2, 1).await.unwrap();

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].text, "hello!");
}

#[tokio::test]
async fn test_concurrent_mutual_likes_create_one_match() {
    let swipes = Arc::new(SwipeEngine::new());

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let swipes = swipes.clone();
            let (actor, target) = if i % 2 == 0 { (1, 2) } else { (2, 1) };
            tokio::spawn(async move { swipes.swipe(actor, target, SwipeAction::Like).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(swipes.like_count().await, 2);
    assert_eq!(swipes.match_count().await, 1);
    assert_eq!(swipes.list_matches(1).await, vec![2]);
}
