use serde::{Deserialize, Serialize};

/// Candidate profile data relevant to matching
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl CandidateProfile {
    /// Helper to get the bio as a str, defaulting to empty
    pub fn bio_text(&self) -> &str {
        self.bio.as_deref().unwrap_or("")
    }

    /// Helper to get the location as a str, defaulting to empty
    pub fn location_text(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }
}

/// Job listing data relevant to matching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub remote_allowed: bool,
    #[serde(default)]
    pub posted_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl JobListing {
    /// Helper to get the description as a str, defaulting to empty
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Helper to get the location as a str, defaulting to empty
    pub fn location_text(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }
}

/// Job listing annotated with its match score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredJob {
    pub id: String,
    pub title: String,
    pub company: String,
    pub required_skills: Vec<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub remote_allowed: bool,
    pub match_score: f64,
    pub category: MatchCategory,
    pub shared_skills: Vec<String>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct MatchWeights {
    pub skills: f64,
    pub text: f64,
    pub location: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.5,
            text: 0.3,
            location: 0.2,
        }
    }
}

/// Match quality tier derived from the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchCategory {
    Excellent,
    Good,
    Partial,
    Low,
}

impl MatchCategory {
    /// Categorize a match score; each tier is inclusive on its lower bound
    pub fn for_score(score: f64) -> Self {
        if score >= 0.8 {
            MatchCategory::Excellent
        } else if score >= 0.6 {
            MatchCategory::Good
        } else if score >= 0.4 {
            MatchCategory::Partial
        } else {
            MatchCategory::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchCategory::Excellent => "Excellent Match",
            MatchCategory::Good => "Good Match",
            MatchCategory::Partial => "Partial Match",
            MatchCategory::Low => "Low Match",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MatchCategory::Excellent => "Your skills and experience align perfectly with this role",
            MatchCategory::Good => "You have most of the required skills for this position",
            MatchCategory::Partial => "Some of your skills match this role requirements",
            MatchCategory::Low => "Limited alignment with your current profile",
        }
    }
}
