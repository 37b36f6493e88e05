use crate::core::text::{extract_keywords, jaccard_similarity};
use crate::models::{CandidateProfile, JobListing, MatchWeights};
use std::collections::HashSet;

/// Calculate a match score (0-1) for a candidate profile against a job listing
///
/// Scoring formula:
/// score = (
///     skill_overlap * 0.5 +        # Jaccard over skill sets
///     text_overlap * 0.3 +         # Jaccard over bio/description keywords
///     location_affinity * 0.2      # Location proximity, remote overrides
/// )
///
/// The result is rounded to two decimal places. Also returns the skills
/// shared between the candidate and the listing, in candidate order.
pub fn calculate_match_score(
    profile: &CandidateProfile,
    job: &JobListing,
    weights: &MatchWeights,
) -> (f64, Vec<String>) {
    let skill_score = skill_overlap(&profile.skills, &job.required_skills);
    let text_score = text_overlap(profile.bio_text(), job.description_text());
    let location_score = location_affinity(
        profile.location_text(),
        job.location_text(),
        job.remote_allowed,
    );

    let shared_skills = shared_skill_list(&profile.skills, &job.required_skills);

    // Weighted combination
    let total_score = skill_score * weights.skills
        + text_score * weights.text
        + location_score * weights.location;

    (round_two_places(total_score), shared_skills)
}

/// Calculate skill overlap (0-1)
///
/// Skills are compared case-insensitively as sets. Returns 0 when either
/// side has no skills at all.
#[inline]
pub fn skill_overlap(candidate_skills: &[String], required_skills: &[String]) -> f64 {
    if candidate_skills.is_empty() || required_skills.is_empty() {
        return 0.0;
    }

    let candidate: HashSet<String> = candidate_skills.iter().map(|s| s.to_lowercase()).collect();
    let required: HashSet<String> = required_skills.iter().map(|s| s.to_lowercase()).collect();

    jaccard_similarity(&candidate, &required)
}

/// Calculate text overlap (0-1) between a candidate bio and a job description
///
/// Returns 0 when either text is empty; otherwise the Jaccard similarity of
/// the two keyword sets.
#[inline]
pub fn text_overlap(bio: &str, description: &str) -> f64 {
    if bio.is_empty() || description.is_empty() {
        return 0.0;
    }

    let bio_keywords = extract_keywords(bio);
    let description_keywords = extract_keywords(description);

    jaccard_similarity(&bio_keywords, &description_keywords)
}

/// Calculate location affinity (0-1)
///
/// Remote jobs match any location. Missing locations are scored as a
/// neutral 0.5. Otherwise: exact match 1.0, substring containment either
/// way 0.8, shared comma-separated segment (same city or state) 0.6, and a
/// floor of 0.2 for unrelated locations.
pub fn location_affinity(
    candidate_location: &str,
    job_location: &str,
    remote_allowed: bool,
) -> f64 {
    if remote_allowed {
        return 1.0;
    }
    if candidate_location.is_empty() || job_location.is_empty() {
        return 0.5;
    }

    let candidate = candidate_location.to_lowercase();
    let job = job_location.to_lowercase();

    if candidate == job {
        return 1.0;
    }
    if candidate.contains(&job) || job.contains(&candidate) {
        return 0.8;
    }

    // Same city or state, e.g. "Austin, TX" vs "Dallas, TX"
    let candidate_parts: Vec<&str> = candidate.split(',').map(str::trim).collect();
    let job_parts: Vec<&str> = job.split(',').map(str::trim).collect();

    if candidate_parts
        .iter()
        .any(|part| job_parts.contains(part))
    {
        return 0.6;
    }

    0.2
}

/// Skills present on both sides, case-insensitively, in candidate order
fn shared_skill_list(candidate_skills: &[String], required_skills: &[String]) -> Vec<String> {
    let required: HashSet<String> = required_skills.iter().map(|s| s.to_lowercase()).collect();

    candidate_skills
        .iter()
        .filter(|skill| required.contains(&skill.to_lowercase()))
        .cloned()
        .collect()
}

#[inline]
fn round_two_places(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
