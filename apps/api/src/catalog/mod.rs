//! Job catalog — the read-only list of job roles the engine ranks against.
//!
//! Loaded once at startup from a JSON file and shared via `Arc`; nothing in
//! the service mutates it afterwards.

pub mod handlers;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One job role and its requirements. `required_skills` is the raw
/// comma-separated string from the catalog file — the authoritative source,
/// normalized by the scorer on each evaluation. `description` is opaque text
/// passed through to responses unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: i64,
    pub role: String,
    pub required_skills: String,
    #[serde(default)]
    pub description: String,
}

/// Immutable, id-ordered collection of `JobRecord`s.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    jobs: Vec<JobRecord>,
}

impl JobCatalog {
    /// Reads and validates the catalog file. Ids must be unique and roles
    /// non-empty. Jobs are ordered by ascending id so that ranking
    /// tie-breaks fall back to a deterministic catalog order.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job catalog at {}", path.display()))?;
        let jobs: Vec<JobRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("Job catalog at {} is not valid JSON", path.display()))?;

        let catalog = Self::from_jobs(jobs)?;
        info!(
            "Job catalog loaded: {} roles from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Builds a catalog from already-deserialized records, applying the same
    /// validation and ordering as `load`.
    pub fn from_jobs(mut jobs: Vec<JobRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for job in &jobs {
            if !seen.insert(job.id) {
                bail!("Duplicate job id {} in catalog", job.id);
            }
            if job.role.trim().is_empty() {
                bail!("Job {} has an empty role name", job.id);
            }
        }
        jobs.sort_by_key(|job| job.id);
        Ok(Self { jobs })
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn get(&self, id: i64) -> Option<&JobRecord> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_job(id: i64, role: &str) -> JobRecord {
        JobRecord {
            id,
            role: role.to_string(),
            required_skills: "python".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_from_jobs_orders_by_ascending_id() {
        let catalog = JobCatalog::from_jobs(vec![
            make_job(3, "C"),
            make_job(1, "A"),
            make_job(2, "B"),
        ])
        .unwrap();
        let ids: Vec<i64> = catalog.jobs().iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = JobCatalog::from_jobs(vec![make_job(1, "A"), make_job(1, "B")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_role_rejected() {
        let result = JobCatalog::from_jobs(vec![make_job(1, "  ")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = JobCatalog::from_jobs(vec![make_job(1, "A"), make_job(7, "B")]).unwrap();
        assert_eq!(catalog.get(7).map(|j| j.role.as_str()), Some("B"));
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = JobCatalog::from_jobs(vec![]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_deserializes_catalog_json() {
        let raw = r#"[
            {
                "id": 1,
                "role": "Software Developer",
                "required_skills": "python,java,sql",
                "description": "Develops software applications"
            },
            {
                "id": 2,
                "role": "Data Analyst",
                "required_skills": "python,sql,excel"
            }
        ]"#;
        let jobs: Vec<JobRecord> = serde_json::from_str(raw).unwrap();
        let catalog = JobCatalog::from_jobs(jobs).unwrap();
        assert_eq!(catalog.len(), 2);
        // description is optional in the file
        assert_eq!(catalog.get(2).unwrap().description, "");
    }
}
