use crate::models::domain::{CandidateProfile, JobListing};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank job listings for a candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendJobsRequest {
    pub profile: CandidateProfile,
    #[serde(default)]
    pub jobs: Vec<JobListing>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    20
}

/// Request to score a single profile/job pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScoreRequest {
    pub profile: CandidateProfile,
    pub job: JobListing,
}

/// Request to extract known skills from free text
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExtractSkillsRequest {
    #[validate(length(min = 1, max = 20000))]
    pub text: String,
}
