use serde::Serialize;

use super::domain::{Applicant, Job};
use super::query::{sort_by_date, upcoming_deadlines, SortOrder};
use super::store::DatasetStore;

/// How many recently-posted jobs feed the recent-applications panel.
pub const RECENT_JOB_WINDOW: usize = 5;
/// How many entries the recent-applications panel keeps after merging.
pub const RECENT_APPLICATION_LIMIT: usize = 5;

/// Everything the dashboard landing screen renders, recomputed from store
/// state on every request.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_jobs: usize,
    pub active_jobs: usize,
    pub total_applicants: u32,
    pub upcoming_deadlines: Vec<Job>,
    pub recent_applications: Vec<Applicant>,
}

/// Compose the dashboard reductions: collection counts, the authoritative
/// applicant total, the deadline preview, and the cross-job application feed.
pub fn dashboard_summary(store: &DatasetStore) -> DashboardSummary {
    let all_jobs = store.all_jobs();

    DashboardSummary {
        total_jobs: all_jobs.len(),
        active_jobs: store.active_jobs().len(),
        total_applicants: store.total_applicant_count(),
        upcoming_deadlines: upcoming_deadlines(all_jobs),
        recent_applications: recent_applications(store),
    }
}

/// Applicants across the most recently posted jobs, merged and re-sorted:
/// newest five postings, their resolved applicant sets flattened, applied
/// date descending, first five kept.
pub fn recent_applications(store: &DatasetStore) -> Vec<Applicant> {
    let mut recent_jobs = sort_by_date(
        store.all_jobs().to_vec(),
        |job| job.posted_date,
        SortOrder::Descending,
    );
    recent_jobs.truncate(RECENT_JOB_WINDOW);

    let merged: Vec<Applicant> = recent_jobs
        .iter()
        .flat_map(|job| store.applicants_for_job(&job.id))
        .collect();

    let mut feed = sort_by_date(merged, |applicant| applicant.applied_date, SortOrder::Descending);
    feed.truncate(RECENT_APPLICATION_LIMIT);
    feed
}
