use super::CheckResult;
use core::fmt::{Display, Formatter};
use serde::Serialize;

/// Qualitative bucket a rating falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Poor,
    Fair,
    Good,
}

impl Tier {
    /// Classify a score in 0..100 given the lower bounds of the fair and good tiers.
    #[must_use]
    pub fn from_score(score: f64, fair_threshold: f64, good_threshold: f64) -> Self {
        if score >= good_threshold {
            Self::Good
        } else if score >= fair_threshold {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
        };
        write!(f, "{s}")
    }
}

/// The outcome of running the whole suite against one repository.
#[derive(Debug, Clone)]
pub struct Rating {
    pub name: String,
    pub results: Vec<CheckResult>,
    pub available_points: u32,
    pub awarded_points: u32,
    pub score: f64,
    pub tier: Tier,
}

impl Rating {
    #[must_use]
    pub fn new(name: String, results: Vec<CheckResult>, fair_threshold: f64, good_threshold: f64) -> Self {
        let available_points: u32 = results.iter().map(|r| r.points).sum();
        let awarded_points: u32 = results.iter().map(CheckResult::awarded_points).sum();
        let score = if available_points == 0 {
            0.0
        } else {
            f64::from(awarded_points) / f64::from(available_points) * 100.0
        };

        Self {
            name,
            results,
            available_points,
            awarded_points,
            score,
            tier: Tier::from_score(score, fair_threshold, good_threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, points: u32, passed: bool) -> CheckResult {
        CheckResult {
            name: name.to_string(),
            description: String::new(),
            points,
            passed,
            detail: None,
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::from_score(75.0, 40.0, 75.0), Tier::Good);
        assert_eq!(Tier::from_score(74.9, 40.0, 75.0), Tier::Fair);
        assert_eq!(Tier::from_score(40.0, 40.0, 75.0), Tier::Fair);
        assert_eq!(Tier::from_score(39.9, 40.0, 75.0), Tier::Poor);
    }

    #[test]
    fn test_rating_score() {
        let rating = Rating::new(
            "owner/repo".to_string(),
            vec![result("a", 5, true), result("b", 5, false), result("c", 10, true)],
            40.0,
            75.0,
        );

        assert_eq!(rating.available_points, 20);
        assert_eq!(rating.awarded_points, 15);
        assert!((rating.score - 75.0).abs() < f64::EPSILON);
        assert_eq!(rating.tier, Tier::Good);
    }

    #[test]
    fn test_rating_without_points_scores_zero() {
        let rating = Rating::new("owner/repo".to_string(), vec![result("a", 0, true)], 40.0, 75.0);
        assert!(rating.score.abs() < f64::EPSILON);
        assert_eq!(rating.tier, Tier::Poor);
    }

    #[test]
    fn test_tier_display_and_serialize() {
        assert_eq!(Tier::Fair.to_string(), "Fair");
        assert_eq!(serde_json::to_string(&Tier::Good).unwrap(), "\"good\"");
    }
}
