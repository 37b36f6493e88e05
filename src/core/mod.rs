// Core algorithm exports
pub mod matcher;
pub mod scoring;
pub mod skills;
pub mod text;

pub use matcher::{MatchResult, Matcher};
pub use scoring::{calculate_match_score, location_affinity, skill_overlap, text_overlap};
pub use skills::{extract_skills, SKILL_VOCABULARY};
pub use text::{extract_keywords, jaccard_similarity};
