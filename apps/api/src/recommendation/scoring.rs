//! Match Scorer — compares one user skill set against one job's requirements.
//!
//! Default: `ExactSkillMatcher` (normalized-string equality, deterministic).
//! Richer equivalence (synonyms, stemming) can be plugged in by implementing
//! `SkillMatcher`; `AppState` holds the active matcher as `Arc<dyn SkillMatcher>`.

use serde::Serialize;

use crate::catalog::JobRecord;
use crate::recommendation::normalize::{normalize, SkillSet};

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of evaluating one (user skills, job) pair. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'a> {
    pub job: &'a JobRecord,
    /// Share of the job's required skills the user covers, 0–100.
    pub match_percent: u32,
    /// Required skills the user already has.
    pub matched_skills: SkillSet,
    /// Required skills the user still needs to learn.
    pub missing_skills: SkillSet,
}

// ────────────────────────────────────────────────────────────────────────────
// Skill equivalence seam
// ────────────────────────────────────────────────────────────────────────────

/// Decides whether one of the user's skills covers a required skill.
/// Both arguments are already-normalized tokens.
pub trait SkillMatcher: Send + Sync {
    fn is_match(&self, user_skill: &str, required_skill: &str) -> bool;
}

/// Exact normalized-string equality. No stemming, no synonyms, no
/// substring matching.
pub struct ExactSkillMatcher;

impl SkillMatcher for ExactSkillMatcher {
    fn is_match(&self, user_skill: &str, required_skill: &str) -> bool {
        user_skill == required_skill
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores `job` against `user_skills`.
///
/// The job's raw `required_skills` string goes through the same normalization
/// rule as user input. Each required skill lands in exactly one of
/// `matched_skills` or `missing_skills`, so the two always partition the job
/// skill set. With `ExactSkillMatcher` they are plain set intersection and
/// set difference.
///
/// `match_percent = round(|matched| / |job skills| * 100)`, rounded half-up.
/// A job whose skill string normalizes to nothing scores 0 by rule, so there
/// is never a division by zero.
pub fn score<'a>(
    user_skills: &SkillSet,
    job: &'a JobRecord,
    matcher: &dyn SkillMatcher,
) -> MatchResult<'a> {
    let job_skills = normalize(&job.required_skills);

    let mut matched_skills = SkillSet::new();
    let mut missing_skills = SkillSet::new();
    for required in &job_skills {
        if user_skills.iter().any(|user| matcher.is_match(user, required)) {
            matched_skills.insert(required.clone());
        } else {
            missing_skills.insert(required.clone());
        }
    }

    let match_percent = if job_skills.is_empty() {
        0
    } else {
        ((matched_skills.len() as f64 / job_skills.len() as f64) * 100.0).round() as u32
    };

    MatchResult {
        job,
        match_percent,
        matched_skills,
        missing_skills,
    }
}
