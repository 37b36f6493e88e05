use crate::models::domain::{MatchCategory, ScoredJob};
use serde::{Deserialize, Serialize};

/// Response for the job recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendJobsResponse {
    pub recommendations: Vec<ScoredJob>,
    pub total_jobs: usize,
}

/// Per-component breakdown of a match score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skill_overlap: f64,
    pub text_overlap: f64,
    pub location_affinity: f64,
}

/// Response for the single-pair scoring endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScoreResponse {
    pub score: f64,
    pub category: MatchCategory,
    pub label: String,
    pub description: String,
    pub breakdown: MatchBreakdown,
    pub shared_skills: Vec<String>,
}

/// Response for the skill extraction endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractSkillsResponse {
    pub skills: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
