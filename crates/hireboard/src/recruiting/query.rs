use std::str::FromStr;

use serde::Serialize;

use super::domain::{
    Applicant, ApplicantStatus, Job, JobCategory, JobStatus, JobType, Report, ReportStatus,
    ReportType,
};
use chrono::{DateTime, Utc};

/// How many postings the deadline preview keeps.
pub const DEADLINE_PREVIEW_LIMIT: usize = 5;

/// Raised when a filter string from the query surface names no known
/// variant. "not found" and "no matches" stay empty results; this is the one
/// place untrusted input reaches the core.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognized {kind} `{value}`")]
pub struct UnknownFilterValue {
    pub kind: &'static str,
    pub value: String,
}

fn unknown(kind: &'static str, value: &str) -> UnknownFilterValue {
    UnknownFilterValue {
        kind,
        value: value.to_string(),
    }
}

impl FromStr for JobStatus {
    type Err = UnknownFilterValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "closed" => Ok(Self::Closed),
            "filled" => Ok(Self::Filled),
            _ => Err(unknown("job status", value)),
        }
    }
}

impl FromStr for JobType {
    type Err = UnknownFilterValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "full-time" | "full_time" | "full time" => Ok(Self::FullTime),
            "part-time" | "part_time" | "part time" => Ok(Self::PartTime),
            "contract" => Ok(Self::Contract),
            "temporary" => Ok(Self::Temporary),
            "internship" => Ok(Self::Internship),
            _ => Err(unknown("job type", value)),
        }
    }
}

impl FromStr for JobCategory {
    type Err = UnknownFilterValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        JobCategory::ordered()
            .into_iter()
            .find(|category| category.label().to_ascii_lowercase() == normalized)
            .ok_or_else(|| unknown("job category", value))
    }
}

impl FromStr for ApplicantStatus {
    type Err = UnknownFilterValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "reviewed" => Ok(Self::Reviewed),
            "shortlisted" => Ok(Self::Shortlisted),
            "rejected" => Ok(Self::Rejected),
            "hired" => Ok(Self::Hired),
            _ => Err(unknown("applicant status", value)),
        }
    }
}

impl FromStr for ReportStatus {
    type Err = UnknownFilterValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Self::New),
            "in progress" | "in_progress" | "in-progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(unknown("report status", value)),
        }
    }
}

impl FromStr for ReportType {
    type Err = UnknownFilterValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "technical issue" | "technical_issue" | "technical-issue" => Ok(Self::TechnicalIssue),
            "feature request" | "feature_request" | "feature-request" => Ok(Self::FeatureRequest),
            "candidate issue" | "candidate_issue" | "candidate-issue" => Ok(Self::CandidateIssue),
            "other" => Ok(Self::Other),
            _ => Err(unknown("report type", value)),
        }
    }
}

/// Parse an optional `string|"all"` filter option into a typed one. `None`,
/// the empty string, and the literal `all` all mean "no filtering".
fn parse_option<T>(raw: Option<&str>) -> Result<Option<T>, UnknownFilterValue>
where
    T: FromStr<Err = UnknownFilterValue>,
{
    match raw {
        None => Ok(None),
        Some(value) if value.trim().is_empty() || value.trim().eq_ignore_ascii_case("all") => {
            Ok(None)
        }
        Some(value) => value.parse().map(Some),
    }
}

fn matches_search(query: &str, haystacks: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .any(|text| text.to_lowercase().contains(&needle))
}

/// Conjunction of the job-list screen's active filters. Every absent option
/// matches everything, so the empty filter is the identity.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub search: Option<String>,
    pub category: Option<JobCategory>,
    pub status: Option<JobStatus>,
    pub job_type: Option<JobType>,
}

impl JobFilter {
    pub fn from_params(
        search: Option<String>,
        category: Option<String>,
        status: Option<String>,
        job_type: Option<String>,
    ) -> Result<Self, UnknownFilterValue> {
        Ok(Self {
            search,
            category: parse_option(category.as_deref())?,
            status: parse_option(status.as_deref())?,
            job_type: parse_option(job_type.as_deref())?,
        })
    }

    /// All active predicates must hold; the conjunction makes filter order
    /// irrelevant.
    pub fn matches(&self, job: &Job) -> bool {
        let matches_text = self
            .search
            .as_deref()
            .map(|query| matches_search(query, &[job.title.as_str(), job.company.as_str()]))
            .unwrap_or(true);

        matches_text
            && self.category.map_or(true, |category| job.category == category)
            && self.status.map_or(true, |status| job.status == status)
            && self.job_type.map_or(true, |job_type| job.job_type == job_type)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApplicantFilter {
    pub search: Option<String>,
    pub status: Option<ApplicantStatus>,
}

impl ApplicantFilter {
    pub fn from_params(
        search: Option<String>,
        status: Option<String>,
    ) -> Result<Self, UnknownFilterValue> {
        Ok(Self {
            search,
            status: parse_option(status.as_deref())?,
        })
    }

    pub fn matches(&self, applicant: &Applicant) -> bool {
        let matches_text = self
            .search
            .as_deref()
            .map(|query| matches_search(query, &[applicant.name.as_str()]))
            .unwrap_or(true);

        matches_text && self.status.map_or(true, |status| applicant.status == status)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub search: Option<String>,
    pub status: Option<ReportStatus>,
    pub report_type: Option<ReportType>,
}

impl ReportFilter {
    pub fn from_params(
        search: Option<String>,
        status: Option<String>,
        report_type: Option<String>,
    ) -> Result<Self, UnknownFilterValue> {
        Ok(Self {
            search,
            status: parse_option(status.as_deref())?,
            report_type: parse_option(report_type.as_deref())?,
        })
    }

    pub fn matches(&self, report: &Report) -> bool {
        let matches_text = self
            .search
            .as_deref()
            .map(|query| matches_search(query, &[report.title.as_str()]))
            .unwrap_or(true);

        matches_text
            && self.status.map_or(true, |status| report.status == status)
            && self
                .report_type
                .map_or(true, |report_type| report.report_type == report_type)
    }
}

pub fn filter_jobs(jobs: &[Job], filter: &JobFilter) -> Vec<Job> {
    jobs.iter().filter(|job| filter.matches(job)).cloned().collect()
}

pub fn filter_applicants(applicants: &[Applicant], filter: &ApplicantFilter) -> Vec<Applicant> {
    applicants
        .iter()
        .filter(|applicant| filter.matches(applicant))
        .cloned()
        .collect()
}

pub fn filter_reports(reports: &[Report], filter: &ReportFilter) -> Vec<Report> {
    reports
        .iter()
        .filter(|report| filter.matches(report))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Stable sort on a timestamp key. Descending compares the keys reversed
/// rather than reversing the result, so equal keys keep their input order in
/// both directions.
pub fn sort_by_date<T, K>(mut records: Vec<T>, key: K, order: SortOrder) -> Vec<T>
where
    K: Fn(&T) -> DateTime<Utc>,
{
    match order {
        SortOrder::Ascending => records.sort_by(|a, b| key(a).cmp(&key(b))),
        SortOrder::Descending => records.sort_by(|a, b| key(b).cmp(&key(a))),
    }
    records
}

/// The job-list screen's tab partition: one bucket per status, plus the
/// unpartitioned `all` bucket every record also lands in.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobBuckets {
    pub all: Vec<Job>,
    pub draft: Vec<Job>,
    pub published: Vec<Job>,
    pub closed: Vec<Job>,
    pub filled: Vec<Job>,
}

impl JobBuckets {
    pub fn group(jobs: Vec<Job>) -> Self {
        let mut buckets = Self::default();
        for job in jobs {
            match job.status {
                JobStatus::Draft => buckets.draft.push(job.clone()),
                JobStatus::Published => buckets.published.push(job.clone()),
                JobStatus::Closed => buckets.closed.push(job.clone()),
                JobStatus::Filled => buckets.filled.push(job.clone()),
            }
            buckets.all.push(job);
        }
        buckets
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplicantBuckets {
    pub all: Vec<Applicant>,
    pub pending: Vec<Applicant>,
    pub reviewed: Vec<Applicant>,
    pub shortlisted: Vec<Applicant>,
    pub rejected: Vec<Applicant>,
    pub hired: Vec<Applicant>,
}

impl ApplicantBuckets {
    pub fn group(applicants: Vec<Applicant>) -> Self {
        let mut buckets = Self::default();
        for applicant in applicants {
            match applicant.status {
                ApplicantStatus::Pending => buckets.pending.push(applicant.clone()),
                ApplicantStatus::Reviewed => buckets.reviewed.push(applicant.clone()),
                ApplicantStatus::Shortlisted => buckets.shortlisted.push(applicant.clone()),
                ApplicantStatus::Rejected => buckets.rejected.push(applicant.clone()),
                ApplicantStatus::Hired => buckets.hired.push(applicant.clone()),
            }
            buckets.all.push(applicant);
        }
        buckets
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportBuckets {
    pub all: Vec<Report>,
    pub new: Vec<Report>,
    pub in_progress: Vec<Report>,
    pub resolved: Vec<Report>,
    pub closed: Vec<Report>,
}

impl ReportBuckets {
    pub fn group(reports: Vec<Report>) -> Self {
        let mut buckets = Self::default();
        for report in reports {
            match report.status {
                ReportStatus::New => buckets.new.push(report.clone()),
                ReportStatus::InProgress => buckets.in_progress.push(report.clone()),
                ReportStatus::Resolved => buckets.resolved.push(report.clone()),
                ReportStatus::Closed => buckets.closed.push(report.clone()),
            }
            buckets.all.push(report);
        }
        buckets
    }
}

/// Published postings with the nearest deadlines, soonest first, capped at
/// [`DEADLINE_PREVIEW_LIMIT`].
pub fn upcoming_deadlines(jobs: &[Job]) -> Vec<Job> {
    let published: Vec<Job> = jobs
        .iter()
        .filter(|job| job.status == JobStatus::Published)
        .cloned()
        .collect();

    let mut sorted = sort_by_date(published, |job| job.deadline, SortOrder::Ascending);
    sorted.truncate(DEADLINE_PREVIEW_LIMIT);
    sorted
}
