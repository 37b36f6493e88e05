use crate::core::{
    scoring::{calculate_match_score, location_affinity, skill_overlap, text_overlap},
    skills::extract_skills,
    Matcher,
};
use crate::models::{
    ErrorResponse, ExtractSkillsRequest, ExtractSkillsResponse, HealthResponse, MatchBreakdown,
    MatchCategory, MatchScoreRequest, MatchScoreResponse, RecommendJobsRequest,
    RecommendJobsResponse,
};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub max_limit: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/jobs/recommend", web::post().to(recommend_jobs))
        .route("/match/score", web::post().to(score_match))
        .route("/skills/extract", web::post().to(extract_skills_from_text));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Job recommendation endpoint
///
/// POST /api/v1/jobs/recommend
///
/// Request body:
/// ```json
/// {
///   "profile": { "skills": ["rust"], "bio": "...", "location": "Austin, TX" },
///   "jobs": [ { "id": "...", "title": "...", "required_skills": ["rust"] } ],
///   "limit": 20
/// }
/// ```
async fn recommend_jobs(
    state: web::Data<AppState>,
    req: web::Json<RecommendJobsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend_jobs request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    // Cap limit to prevent oversized responses
    let limit = (req.limit as usize).min(state.max_limit);

    tracing::info!(
        "Ranking {} jobs for a candidate with {} skills, limit {}",
        req.jobs.len(),
        req.profile.skills.len(),
        limit
    );

    let result = state.matcher.rank_jobs(&req.profile, req.jobs, limit);

    tracing::debug!(
        "Returning {} of {} jobs after relevance cutoff",
        result.recommendations.len(),
        result.total_jobs
    );

    HttpResponse::Ok().json(RecommendJobsResponse {
        recommendations: result.recommendations,
        total_jobs: result.total_jobs,
    })
}

/// Single-pair scoring endpoint with per-component breakdown
///
/// POST /api/v1/match/score
async fn score_match(
    state: web::Data<AppState>,
    req: web::Json<MatchScoreRequest>,
) -> impl Responder {
    let req = req.into_inner();

    let (score, shared_skills) =
        calculate_match_score(&req.profile, &req.job, state.matcher.weights());
    let category = MatchCategory::for_score(score);

    let breakdown = MatchBreakdown {
        skill_overlap: skill_overlap(&req.profile.skills, &req.job.required_skills),
        text_overlap: text_overlap(req.profile.bio_text(), req.job.description_text()),
        location_affinity: location_affinity(
            req.profile.location_text(),
            req.job.location_text(),
            req.job.remote_allowed,
        ),
    };

    tracing::debug!("Scored job {} at {}", req.job.id, score);

    HttpResponse::Ok().json(MatchScoreResponse {
        score,
        category,
        label: category.label().to_string(),
        description: category.description().to_string(),
        breakdown,
        shared_skills,
    })
}

/// Skill extraction endpoint
///
/// POST /api/v1/skills/extract
async fn extract_skills_from_text(req: web::Json<ExtractSkillsRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for skills/extract request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let skills = extract_skills(&req.text);

    tracing::debug!(
        "Extracted {} skills from {} characters of text",
        skills.len(),
        req.text.len()
    );

    HttpResponse::Ok().json(ExtractSkillsResponse { skills })
}
