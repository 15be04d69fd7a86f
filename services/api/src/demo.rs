use crate::infra::{build_store, dataset_config};
use clap::Args;
use hireboard::error::AppError;
use hireboard::recruiting::{
    dashboard_summary, ApplicantBuckets, DatasetStore, Job, JobBuckets, JobStatus, ReportBuckets,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed the session dataset for a reproducible demo
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Number of job postings to generate
    #[arg(long)]
    pub(crate) jobs: Option<usize>,
    /// Number of issue reports to generate
    #[arg(long)]
    pub(crate) reports: Option<usize>,
    /// List every applicant in the drill-in section
    #[arg(long)]
    pub(crate) show_applicants: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// Seed the session dataset for a reproducible summary
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Number of job postings to generate
    #[arg(long)]
    pub(crate) jobs: Option<usize>,
    /// Number of issue reports to generate
    #[arg(long)]
    pub(crate) reports: Option<usize>,
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let config = dataset_config(args.seed, args.jobs, args.reports)?;
    let store = build_store(&config);
    let summary = dashboard_summary(&store);

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("dashboard summary unavailable: {err}"),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        seed,
        jobs,
        reports,
        show_applicants,
    } = args;

    let config = dataset_config(seed, jobs, reports)?;
    let store = build_store(&config);

    println!("Recruitment dashboard demo");
    match config.seed {
        Some(seed) => println!(
            "Dataset: {} postings, {} reports (seed {})",
            config.job_count, config.report_count, seed
        ),
        None => println!(
            "Dataset: {} postings, {} reports (unseeded)",
            config.job_count, config.report_count
        ),
    }

    render_dashboard(&store);
    render_job_pipeline(&store);
    render_applications(&store, show_applicants);
    render_report_queue(&store);

    Ok(())
}

fn render_dashboard(store: &DatasetStore) {
    let summary = dashboard_summary(store);

    println!("\nDashboard");
    println!(
        "- {} job postings | {} active | {} applicants across all postings",
        summary.total_jobs, summary.active_jobs, summary.total_applicants
    );

    if summary.upcoming_deadlines.is_empty() {
        println!("\nUpcoming deadlines: none");
    } else {
        println!("\nUpcoming deadlines");
        for job in &summary.upcoming_deadlines {
            println!(
                "- {}  {} at {} ({})",
                job.deadline.format("%Y-%m-%d"),
                job.title,
                job.company,
                job.location
            );
        }
    }

    if summary.recent_applications.is_empty() {
        println!("\nRecent applications: none");
    } else {
        println!("\nRecent applications");
        for applicant in &summary.recent_applications {
            let posting = store
                .job_by_id(&applicant.job_id)
                .map(|job| job.title.clone())
                .unwrap_or_else(|| "unknown posting".to_string());
            println!(
                "- {} -> {} ({}, applied {})",
                applicant.name,
                posting,
                applicant.status.label(),
                applicant.applied_date.format("%Y-%m-%d")
            );
        }
    }
}

fn render_job_pipeline(store: &DatasetStore) {
    let buckets = JobBuckets::group(store.all_jobs().to_vec());
    println!("\nJob pipeline");
    println!(
        "- All {} | Draft {} | Published {} | Closed {} | Filled {}",
        buckets.all.len(),
        buckets.draft.len(),
        buckets.published.len(),
        buckets.closed.len(),
        buckets.filled.len()
    );
}

fn render_applications(store: &DatasetStore, show_applicants: bool) {
    let Some(posting) = featured_posting(store) else {
        println!("\nApplications: no postings in the session dataset");
        return;
    };

    let applicants = store.applicants_for_job(&posting.id);
    println!(
        "\nApplications for \"{}\" ({} applicants)",
        posting.title,
        applicants.len()
    );

    let buckets = ApplicantBuckets::group(applicants);
    println!(
        "- Pending {} | Reviewed {} | Shortlisted {} | Rejected {} | Hired {}",
        buckets.pending.len(),
        buckets.reviewed.len(),
        buckets.shortlisted.len(),
        buckets.rejected.len(),
        buckets.hired.len()
    );

    if show_applicants {
        for applicant in &buckets.all {
            let action_note = if applicant.status.is_actionable() {
                " | awaiting decision"
            } else {
                ""
            };
            println!(
                "  - {} ({} yrs exp) -> {}{}",
                applicant.name,
                applicant.experience,
                applicant.status.label(),
                action_note
            );
        }
    }
}

/// The posting the drill-in section opens: first published, else first.
fn featured_posting(store: &DatasetStore) -> Option<&Job> {
    store
        .all_jobs()
        .iter()
        .find(|job| job.status == JobStatus::Published)
        .or_else(|| store.all_jobs().first())
}

fn render_report_queue(store: &DatasetStore) {
    let buckets = ReportBuckets::group(store.all_reports().to_vec());
    println!("\nReport queue");
    println!(
        "- All {} | New {} | In Progress {} | Resolved {} | Closed {}",
        buckets.all.len(),
        buckets.new.len(),
        buckets.in_progress.len(),
        buckets.resolved.len(),
        buckets.closed.len()
    );

    for report in &buckets.all {
        println!(
            "- [{}] {} ({}, updated {})",
            report.report_type.label(),
            report.title,
            report.status.label(),
            report.updated_date.format("%Y-%m-%d")
        );
    }
}
