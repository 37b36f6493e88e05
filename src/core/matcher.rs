use crate::core::scoring::calculate_match_score;
use crate::models::{CandidateProfile, JobListing, MatchCategory, MatchWeights, ScoredJob};

/// Rounded scores at or below this value are dropped from recommendations
const MIN_RELEVANCE_SCORE: f64 = 0.2;

/// Result of the ranking process
#[derive(Debug)]
pub struct MatchResult {
    pub recommendations: Vec<ScoredJob>,
    pub total_jobs: usize,
}

/// Main matching orchestrator
///
/// # Pipeline stages
/// 1. Score every job against the candidate profile
/// 2. Drop jobs with no meaningful relevance (score <= 0.2)
/// 3. Sort descending by score, then truncate to the requested limit
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: MatchWeights,
}

impl Matcher {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: MatchWeights::default(),
        }
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Rank job listings for a candidate profile
    ///
    /// Every job is scored independently; listings scoring at or below the
    /// relevance cutoff are excluded. The sort is stable, so jobs with equal
    /// scores keep their input order. The input is consumed, never mutated
    /// in place.
    ///
    /// # Arguments
    /// * `profile` - The candidate's skills, bio, and location
    /// * `jobs` - All job listings under consideration
    /// * `limit` - Maximum number of recommendations to return
    ///
    /// # Returns
    /// MatchResult containing scored and ranked recommendations
    pub fn rank_jobs(
        &self,
        profile: &CandidateProfile,
        jobs: Vec<JobListing>,
        limit: usize,
    ) -> MatchResult {
        let total_jobs = jobs.len();

        let mut recommendations: Vec<ScoredJob> = jobs
            .into_iter()
            .filter_map(|job| {
                let (score, shared_skills) = calculate_match_score(profile, &job, &self.weights);

                // Strict cutoff: a score of exactly 0.2 is excluded
                if score > MIN_RELEVANCE_SCORE {
                    Some(ScoredJob {
                        id: job.id,
                        title: job.title,
                        company: job.company,
                        required_skills: job.required_skills,
                        description: job.description,
                        location: job.location,
                        remote_allowed: job.remote_allowed,
                        match_score: score,
                        category: MatchCategory::for_score(score),
                        shared_skills,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stable sort by score (descending)
        recommendations.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        recommendations.truncate(limit);

        MatchResult {
            recommendations,
            total_jobs,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_profile(skills: &[&str], location: &str) -> CandidateProfile {
        CandidateProfile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            bio: None,
            location: if location.is_empty() { None } else { Some(location.to_string()) },
        }
    }

    fn create_job(id: &str, skills: &[&str], location: &str, remote: bool) -> JobListing {
        JobListing {
            id: id.to_string(),
            title: format!("Job {}", id),
            company: "Acme".to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            description: None,
            location: if location.is_empty() { None } else { Some(location.to_string()) },
            remote_allowed: remote,
            posted_at: None,
        }
    }

    #[test]
    fn test_rank_jobs_sorted_descending() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile(&["rust", "python"], "Austin, TX");

        let jobs = vec![
            // 0.5 * 1/3 + 0.2 * 1.0 = 0.37
            create_job("partial", &["rust", "go"], "", true),
            // 0.5 * 1.0 + 0.2 * 1.0 = 0.7
            create_job("full", &["rust", "python"], "", true),
        ];

        let result = matcher.rank_jobs(&profile, jobs, 10);

        assert_eq!(result.total_jobs, 2);
        assert_eq!(result.recommendations.len(), 2);
        assert_eq!(result.recommendations[0].id, "full");
        assert_eq!(result.recommendations[1].id, "partial");
    }

    #[test]
    fn test_rank_jobs_drops_irrelevant() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile(&["rust"], "Berlin");

        let jobs = vec![
            // No overlap anywhere: 0.2 * 0.2 = 0.04
            create_job("unrelated", &["figma"], "Tokyo", false),
            // 0.5 * 1.0 + 0.2 * 0.2 = 0.54
            create_job("relevant", &["rust"], "Tokyo", false),
        ];

        let result = matcher.rank_jobs(&profile, jobs, 10);

        assert_eq!(result.total_jobs, 2);
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].id, "relevant");
    }

    #[test]
    fn test_rank_jobs_cutoff_is_strict() {
        let matcher = Matcher::with_default_weights();
        // No skills, no bio: the score reduces to 0.2 * location_affinity
        let profile = create_profile(&[], "Austin");

        // Exact location match scores exactly 0.2 and must be excluded
        let jobs = vec![create_job("boundary", &["rust"], "Austin", false)];

        let result = matcher.rank_jobs(&profile, jobs, 10);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_rank_jobs_ties_keep_input_order() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile(&["rust"], "");

        let jobs = vec![
            create_job("first", &["rust"], "", true),
            create_job("second", &["rust"], "", true),
            create_job("third", &["rust"], "", true),
        ];

        let result = matcher.rank_jobs(&profile, jobs, 10);

        let ids: Vec<&str> = result.recommendations.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rank_jobs_respects_limit() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile(&["rust"], "");

        let jobs: Vec<JobListing> = (0..20)
            .map(|i| create_job(&i.to_string(), &["rust"], "", true))
            .collect();

        let result = matcher.rank_jobs(&profile, jobs, 5);

        assert_eq!(result.total_jobs, 20);
        assert_eq!(result.recommendations.len(), 5);
    }

    #[test]
    fn test_rank_jobs_empty_input() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile(&["rust"], "Austin");

        let result = matcher.rank_jobs(&profile, vec![], 10);

        assert_eq!(result.total_jobs, 0);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_rank_jobs_annotates_category() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile(&["rust", "python"], "");

        let jobs = vec![create_job("full", &["rust", "python"], "", true)];

        let result = matcher.rank_jobs(&profile, jobs, 10);
        // 0.5 + 0.2 = 0.7 -> Good Match
        assert_eq!(result.recommendations[0].match_score, 0.7);
        assert_eq!(result.recommendations[0].category, MatchCategory::Good);
    }
}
