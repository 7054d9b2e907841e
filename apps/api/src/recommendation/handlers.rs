use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::recommendation::normalize::{normalize, SkillSet};
use crate::recommendation::ranking::rank;
use crate::recommendation::scoring::MatchResult;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RecommendRequest {
    /// Raw comma-separated skills as typed by the user.
    pub skills: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub user_skills: SkillSet,
    pub total_recommendations: usize,
    pub recommendations: Vec<RecommendationEntry>,
}

/// One ranked job, flattened into an owned response row.
#[derive(Debug, Serialize)]
pub struct RecommendationEntry {
    pub job_id: i64,
    pub role: String,
    pub description: String,
    pub match_percent: u32,
    pub matched_skills: SkillSet,
    pub missing_skills: SkillSet,
    /// The job's full requirement set (normalized) for display next to the gaps.
    pub required_skills: SkillSet,
}

impl From<MatchResult<'_>> for RecommendationEntry {
    fn from(result: MatchResult<'_>) -> Self {
        let required_skills = result
            .matched_skills
            .union(&result.missing_skills)
            .cloned()
            .collect();
        Self {
            job_id: result.job.id,
            role: result.job.role.clone(),
            description: result.job.description.clone(),
            match_percent: result.match_percent,
            matched_skills: result.matched_skills,
            missing_skills: result.missing_skills,
            required_skills,
        }
    }
}

/// POST /api/v1/recommend
///
/// Normalizes the raw skill string, rejects input with no usable skills, and
/// ranks the whole catalog against what remains.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let user_skills = normalize(&req.skills);
    if user_skills.is_empty() {
        return Err(AppError::Validation("No valid skills provided".to_string()));
    }

    let recommendations: Vec<RecommendationEntry> =
        rank(&user_skills, state.catalog.jobs(), state.matcher.as_ref())
            .into_iter()
            .map(RecommendationEntry::from)
            .collect();

    Ok(Json(RecommendResponse {
        user_skills,
        total_recommendations: recommendations.len(),
        recommendations,
    }))
}
