use crate::models::Profile;

/// Flat bonus for two profiles in the same city
pub const SAME_CITY_BONUS: f64 = 0.1;

/// Calculate a compatibility score (0-1) between two profiles
///
/// Scoring formula:
/// score = round2(clamp(
///     |interests_a ∩ interests_b| / max(|interests_a ∪ interests_b|, 1)
///     + 0.1 if both cities are set and equal
/// ))
///
/// The score is symmetric and depends on nothing but its two arguments.
pub fn compatibility_score(a: &Profile, b: &Profile) -> f64 {
    let shared = a.interests.intersection(&b.interests).count();
    let union = a.interests.union(&b.interests).count().max(1);

    let mut score = shared as f64 / union as f64;

    if same_city(a, b) {
        score += SAME_CITY_BONUS;
    }

    round_to_hundredths(score.clamp(0.0, 1.0))
}

#[inline]
fn same_city(a: &Profile, b: &Profile) -> bool {
    matches!((a.city(), b.city()), (Some(x), Some(y)) if x == y)
}

#[inline]
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profile(user_id: u64, interests: &[&str], city: Option<&str>) -> Profile {
        let mut profile = Profile::empty(user_id);
        profile.interests = interests.iter().map(|i| i.to_string()).collect();
        profile.city = city.map(str::to_string);
        profile
    }

    #[test]
    fn test_shared_interest_and_city() {
        let a = create_test_profile(1, &["hiking", "chess"], Some("NY"));
        let b = create_test_profile(2, &["chess", "art"], Some("NY"));

        assert_eq!(compatibility_score(&a, &b), 0.43);
    }

    #[test]
    fn test_symmetric() {
        let a = create_test_profile(1, &["hiking", "chess", "jazz"], Some("Berlin"));
        let b = create_test_profile(2, &["chess"], None);

        assert_eq!(compatibility_score(&a, &b), compatibility_score(&b, &a));
    }

    #[test]
    fn test_self_similarity() {
        let a = create_test_profile(1, &["tennis"], None);
        assert_eq!(compatibility_score(&a, &a), 1.0);

        // City bonus is clamped away
        let b = create_test_profile(2, &["tennis", "art"], Some("Paris"));
        assert_eq!(compatibility_score(&b, &b), 1.0);
    }

    #[test]
    fn test_empty_interests() {
        let a = create_test_profile(1, &[], None);
        let b = create_test_profile(2, &[], None);

        assert_eq!(compatibility_score(&a, &b), 0.0);
    }

    #[test]
    fn test_city_bonus_only() {
        let a = create_test_profile(1, &[], Some("Oslo"));
        let b = create_test_profile(2, &[], Some("Oslo"));

        assert_eq!(compatibility_score(&a, &b), 0.1);
    }

    #[test]
    fn test_empty_city_gets_no_bonus() {
        let a = create_test_profile(1, &["chess"], Some(""));
        let b = create_test_profile(2, &["art"], Some(""));

        assert_eq!(compatibility_score(&a, &b), 0.0);
    }

    #[test]
    fn test_different_cities() {
        let a = create_test_profile(1, &["chess", "art"], Some("NY"));
        let b = create_test_profile(2, &["chess", "art"], Some("LA"));

        assert_eq!(compatibility_score(&a, &b), 1.0);

        let c = create_test_profile(3, &["chess"], Some("LA"));
        assert_eq!(compatibility_score(&a, &c), 0.5);
    }
}
