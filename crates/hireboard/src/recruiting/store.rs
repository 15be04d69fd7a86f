use std::collections::HashMap;
use std::sync::Mutex;

use tracing::info;

use super::domain::{Applicant, Job, JobId, JobStatus, Report};
use super::generator::{generate_applicants, generate_jobs, generate_reports};
use super::sampler::Sampler;
use crate::config::DatasetConfig;

/// Process-lifetime holder of the generated session dataset.
///
/// Jobs and reports are generated once in `generate` and never mutated
/// afterwards, so a `DatasetStore` behind an `Arc` can be read from any
/// number of threads. The two `Mutex`es guard the only interior state: the
/// shared entropy stream and the applicant memo the relationship resolver
/// fills in on first use.
#[derive(Debug)]
pub struct DatasetStore {
    jobs: Vec<Job>,
    reports: Vec<Report>,
    applicants: Mutex<HashMap<JobId, Vec<Applicant>>>,
    sampler: Mutex<Sampler>,
}

impl DatasetStore {
    /// Build the session dataset. With `config.seed` set the dataset is
    /// reproducible across processes.
    pub fn generate(config: &DatasetConfig) -> Self {
        let sampler = match config.seed {
            Some(seed) => Sampler::with_seed(seed),
            None => Sampler::new(),
        };
        Self::generate_with(config, sampler)
    }

    /// Variant taking a pre-built sampler so tests can pin the anchor
    /// instant as well as the seed.
    pub fn generate_with(config: &DatasetConfig, mut sampler: Sampler) -> Self {
        let jobs = generate_jobs(&mut sampler, config.job_count);
        let reports = generate_reports(&mut sampler, config.report_count);

        info!(
            jobs = jobs.len(),
            reports = reports.len(),
            seed = ?config.seed,
            "session dataset generated"
        );

        Self {
            jobs,
            reports,
            applicants: Mutex::new(HashMap::new()),
            sampler: Mutex::new(sampler),
        }
    }

    /// Assemble a store from pre-built collections. Callers own the field
    /// invariants; the generators remain the only validated producer.
    pub fn from_parts(jobs: Vec<Job>, reports: Vec<Report>, sampler: Sampler) -> Self {
        Self {
            jobs,
            reports,
            applicants: Mutex::new(HashMap::new()),
            sampler: Mutex::new(sampler),
        }
    }

    pub fn all_jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job_by_id(&self, id: &JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == *id)
    }

    /// Postings currently accepting applications.
    pub fn active_jobs(&self) -> Vec<Job> {
        self.jobs
            .iter()
            .filter(|job| job.status == JobStatus::Published)
            .cloned()
            .collect()
    }

    pub fn all_reports(&self) -> &[Report] {
        &self.reports
    }

    /// Resolve the applicant set for a posting.
    ///
    /// Exactly `job.applicants_count` applicants are materialized on the
    /// first call and memoized, so drill-in flows see a stable set for the
    /// rest of the session. An unknown id yields an empty set; at this layer
    /// "unknown job" and "no applicants" are indistinguishable.
    pub fn applicants_for_job(&self, job_id: &JobId) -> Vec<Applicant> {
        let Some(job) = self.job_by_id(job_id) else {
            return Vec::new();
        };

        let mut cache = self.applicants.lock().expect("applicant cache mutex poisoned");
        cache
            .entry(job.id)
            .or_insert_with(|| {
                let mut sampler = self.sampler.lock().expect("sampler mutex poisoned");
                generate_applicants(&mut sampler, job.applicants_count as usize, &job.id)
            })
            .clone()
    }

    /// Sum of the authoritative per-job counters. With memoized resolution
    /// this equals the number of applicants that would ever materialize.
    pub fn total_applicant_count(&self) -> u32 {
        self.jobs.iter().map(|job| job.applicants_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn store() -> DatasetStore {
        let config = DatasetConfig {
            seed: Some(17),
            job_count: 12,
            report_count: 5,
        };
        let sampler = Sampler::with_seed(17)
            .anchored_at(Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap());
        DatasetStore::generate_with(&config, sampler)
    }

    #[test]
    fn generates_configured_collection_sizes() {
        let store = store();
        assert_eq!(store.all_jobs().len(), 12);
        assert_eq!(store.all_reports().len(), 5);
    }

    #[test]
    fn job_lookup_finds_stored_postings() {
        let store = store();
        let first = &store.all_jobs()[0];
        assert_eq!(store.job_by_id(&first.id), Some(first));
        assert!(store.job_by_id(&JobId(Uuid::nil())).is_none());
    }

    #[test]
    fn active_jobs_are_the_published_subset() {
        let store = store();
        let active = store.active_jobs();
        let expected = store
            .all_jobs()
            .iter()
            .filter(|job| job.status == JobStatus::Published)
            .count();
        assert_eq!(active.len(), expected);
        assert!(active.iter().all(|job| job.status == JobStatus::Published));
    }

    #[test]
    fn resolver_materializes_the_authoritative_count() {
        let store = store();
        for job in store.all_jobs() {
            let applicants = store.applicants_for_job(&job.id);
            assert_eq!(applicants.len(), job.applicants_count as usize);
            assert!(applicants.iter().all(|a| a.job_id == job.id));
        }
    }

    #[test]
    fn resolver_memoizes_per_job() {
        let store = store();
        let job = &store.all_jobs()[0];
        let first = store.applicants_for_job(&job.id);
        let second = store.applicants_for_job(&job.id);
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_job_resolves_to_empty_not_error() {
        let store = store();
        assert!(store.applicants_for_job(&JobId(Uuid::nil())).is_empty());
    }

    #[test]
    fn total_counter_sums_per_job_counts() {
        let store = store();
        let expected: u32 = store.all_jobs().iter().map(|j| j.applicants_count).sum();
        assert_eq!(store.total_applicant_count(), expected);
    }

    #[test]
    fn seeded_stores_replay_identical_jobs() {
        let anchor = Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap();
        let config = DatasetConfig {
            seed: Some(23),
            job_count: 12,
            report_count: 5,
        };
        let first =
            DatasetStore::generate_with(&config, Sampler::with_seed(23).anchored_at(anchor));
        let second =
            DatasetStore::generate_with(&config, Sampler::with_seed(23).anchored_at(anchor));

        assert_eq!(first.all_jobs(), second.all_jobs());
        assert_eq!(first.all_reports(), second.all_reports());
    }
}
