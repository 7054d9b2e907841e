use std::sync::Arc;

use crate::catalog::JobCatalog;
use crate::config::Config;
use crate::recommendation::scoring::SkillMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup, so requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// The job catalog, loaded once from disk.
    pub catalog: Arc<JobCatalog>,
    /// Only read at startup so far.
    #[allow(dead_code)]
    pub config: Config,
    /// Pluggable skill equivalence. Default: ExactSkillMatcher.
    pub matcher: Arc<dyn SkillMatcher>,
}

#[cfg(test)]
pub fn test_state(jobs: Vec<(&str, &str)>) -> AppState {
    use crate::catalog::JobRecord;
    use crate::recommendation::scoring::ExactSkillMatcher;

    let jobs = jobs
        .into_iter()
        .enumerate()
        .map(|(i, (role, required_skills))| JobRecord {
            id: i as i64 + 1,
            role: role.to_string(),
            required_skills: required_skills.to_string(),
            description: String::new(),
        })
        .collect();

    AppState {
        catalog: Arc::new(JobCatalog::from_jobs(jobs).expect("test catalog is valid")),
        config: Config {
            catalog_path: "data/jobs.json".into(),
            port: 8080,
            rust_log: "info".to_string(),
        },
        matcher: Arc::new(ExactSkillMatcher),
    }
}
