//! Ranker — turns the job catalog into a descending-sorted recommendation list.

use crate::catalog::JobRecord;
use crate::recommendation::normalize::SkillSet;
use crate::recommendation::scoring::{score, MatchResult, SkillMatcher};

/// Scores every job in `jobs` and returns the full list sorted by
/// `match_percent` descending.
///
/// No job is skipped — 0% matches stay in the list so the caller sees the
/// whole gap landscape. The sort is stable (`sort_by`), so jobs tied on
/// percent keep their catalog order and the output is deterministic for
/// identical input. No truncation here; any "top N" cut is presentation
/// policy.
pub fn rank<'a>(
    user_skills: &SkillSet,
    jobs: &'a [JobRecord],
    matcher: &dyn SkillMatcher,
) -> Vec<MatchResult<'a>> {
    let mut results: Vec<MatchResult<'a>> = jobs
        .iter()
        .map(|job| score(user_skills, job, matcher))
        .collect();

    results.sort_by(|a, b| b.match_percent.cmp(&a.match_percent));
    results
}
