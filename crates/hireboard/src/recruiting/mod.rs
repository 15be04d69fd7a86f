//! Entity model, synthetic generators, session store, and the derived-view
//! query engine behind every dashboard screen.

pub mod dashboard;
pub mod domain;
pub mod generator;
pub mod query;
pub mod router;
pub mod sampler;
pub mod store;

pub use dashboard::{dashboard_summary, recent_applications, DashboardSummary};
pub use domain::{
    Applicant, ApplicantId, ApplicantStatus, Job, JobCategory, JobId, JobStatus, JobType, Report,
    ReportId, ReportStatus, ReportType, SalaryRange, SKILL_VOCABULARY,
};
pub use generator::{generate_applicants, generate_jobs, generate_reports};
pub use query::{
    filter_applicants, filter_jobs, filter_reports, sort_by_date, upcoming_deadlines,
    ApplicantBuckets, ApplicantFilter, JobBuckets, JobFilter, ReportBuckets, ReportFilter,
    SortOrder, UnknownFilterValue,
};
pub use router::recruiting_router;
pub use sampler::Sampler;
pub use store::DatasetStore;
