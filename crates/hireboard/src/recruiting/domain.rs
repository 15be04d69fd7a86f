use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub Uuid);

/// Identifier wrapper for applicants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicantId(pub Uuid);

/// Identifier wrapper for issue reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(pub Uuid);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Closed set of posting categories shown in the category filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    SoftwareDevelopment,
    Design,
    Marketing,
    Sales,
    CustomerService,
    Finance,
    HumanResources,
    Administration,
    Engineering,
    ProductManagement,
}

impl JobCategory {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::SoftwareDevelopment,
            Self::Design,
            Self::Marketing,
            Self::Sales,
            Self::CustomerService,
            Self::Finance,
            Self::HumanResources,
            Self::Administration,
            Self::Engineering,
            Self::ProductManagement,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SoftwareDevelopment => "Software Development",
            Self::Design => "Design",
            Self::Marketing => "Marketing",
            Self::Sales => "Sales",
            Self::CustomerService => "Customer Service",
            Self::Finance => "Finance",
            Self::HumanResources => "Human Resources",
            Self::Administration => "Administration",
            Self::Engineering => "Engineering",
            Self::ProductManagement => "Product Management",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Temporary,
    Internship,
}

impl JobType {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::FullTime,
            Self::PartTime,
            Self::Contract,
            Self::Temporary,
            Self::Internship,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Temporary => "Temporary",
            Self::Internship => "Internship",
        }
    }
}

/// Lifecycle of a posting. Transitions happen outside the core; the store
/// only ever filters on the sampled value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Draft,
    Published,
    Closed,
    Filled,
}

impl JobStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Draft, Self::Published, Self::Closed, Self::Filled]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
            Self::Closed => "Closed",
            Self::Filled => "Filled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicantStatus {
    Pending,
    Reviewed,
    Shortlisted,
    Rejected,
    Hired,
}

impl ApplicantStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Pending,
            Self::Reviewed,
            Self::Shortlisted,
            Self::Rejected,
            Self::Hired,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Reviewed => "Reviewed",
            Self::Shortlisted => "Shortlisted",
            Self::Rejected => "Rejected",
            Self::Hired => "Hired",
        }
    }

    /// Whether the consuming UI may still accept or reject this applicant.
    pub const fn is_actionable(self) -> bool {
        matches!(self, Self::Pending | Self::Reviewed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    TechnicalIssue,
    FeatureRequest,
    CandidateIssue,
    Other,
}

impl ReportType {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::TechnicalIssue,
            Self::FeatureRequest,
            Self::CandidateIssue,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TechnicalIssue => "Technical Issue",
            Self::FeatureRequest => "Feature Request",
            Self::CandidateIssue => "Candidate Issue",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    New,
    InProgress,
    Resolved,
    Closed,
}

impl ReportStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::New, Self::InProgress, Self::Resolved, Self::Closed]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }
}

/// Advertised compensation band. Generators derive `max` from `min` plus a
/// positive offset, so `min < max` holds for every stored posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

/// A job posting as the dashboard, list, and pipeline screens consume it.
///
/// `applicants_count` is the authoritative size of the applicant set the
/// relationship resolver materializes for this posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub category: JobCategory,
    pub job_type: JobType,
    pub location: String,
    pub remote: bool,
    pub description: String,
    pub requirements: Vec<String>,
    pub salary: SalaryRange,
    pub posted_by: String,
    pub posted_date: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    pub status: JobStatus,
    pub applicants_count: u32,
}

/// An applicant materialized for a single posting. `skills` keeps sampling
/// duplicates; the vocabulary draw is with replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,
    pub job_id: JobId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub resume: String,
    pub cover_letter: String,
    pub skills: Vec<String>,
    pub experience: u8,
    pub applied_date: DateTime<Utc>,
    pub status: ApplicantStatus,
}

/// An issue report in the support queue. Standalone; no relation to jobs or
/// applicants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub title: String,
    pub description: String,
    pub report_type: ReportType,
    pub status: ReportStatus,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

/// Fixed vocabulary applicant skills are drawn from.
pub const SKILL_VOCABULARY: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Vue",
    "Angular",
    "Node.js",
    "Python",
    "Java",
    "C#",
    "PHP",
    "Ruby",
    "Go",
    "Swift",
    "Kotlin",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Firebase",
    "AWS",
    "Azure",
    "Google Cloud",
    "Docker",
    "Kubernetes",
    "UI/UX Design",
    "Figma",
    "Adobe XD",
    "Sketch",
    "Marketing",
    "SEO",
    "Content Writing",
    "Social Media",
    "Sales",
    "CRM",
    "Lead Generation",
    "Customer Service",
    "Help Desk",
    "Support",
    "Finance",
    "Accounting",
    "Budgeting",
    "HR",
    "Recruitment",
    "Onboarding",
    "Project Management",
    "Agile",
    "Scrum",
    "Kanban",
    "Communication",
    "Team Management",
    "Leadership",
];
