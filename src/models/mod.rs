// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CandidateProfile, JobListing, MatchCategory, MatchWeights, ScoredJob};
pub use requests::{ExtractSkillsRequest, MatchScoreRequest, RecommendJobsRequest};
pub use responses::{
    ErrorResponse, ExtractSkillsResponse, HealthResponse, MatchBreakdown, MatchScoreResponse,
    RecommendJobsResponse,
};
