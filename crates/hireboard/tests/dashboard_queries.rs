use chrono::{DateTime, Duration, TimeZone, Utc};
use hireboard::config::DatasetConfig;
use hireboard::recruiting::{
    dashboard_summary, filter_jobs, generate_jobs, upcoming_deadlines, DatasetStore, Job,
    JobCategory, JobFilter, JobId, JobStatus, JobType, SalaryRange, Sampler,
};
use uuid::Uuid;

fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap()
}

fn seeded_store(seed: u64) -> DatasetStore {
    let config = DatasetConfig {
        seed: Some(seed),
        job_count: 12,
        report_count: 5,
    };
    DatasetStore::generate_with(&config, Sampler::with_seed(seed).anchored_at(anchor()))
}

fn posting(index: u128, title: &str, status: JobStatus, applicants_count: u32) -> Job {
    let posted_date = anchor() - Duration::days(index as i64 + 1);
    Job {
        id: JobId(Uuid::from_u128(index + 1)),
        title: title.to_string(),
        company: format!("Company {index}"),
        category: JobCategory::Engineering,
        job_type: JobType::FullTime,
        location: "Des Moines".to_string(),
        remote: false,
        description: String::new(),
        requirements: Vec::new(),
        salary: SalaryRange {
            min: 45_000,
            max: 70_000,
            currency: "USD".to_string(),
        },
        posted_by: "Recruiting".to_string(),
        posted_date,
        deadline: posted_date + Duration::days(45),
        status,
        applicants_count,
    }
}

/// Twelve postings, statuses evenly distributed, three per status.
fn even_status_postings() -> Vec<Job> {
    let statuses = JobStatus::ordered();
    (0..12u128)
        .map(|index| {
            posting(
                index,
                &format!("Posting {index}"),
                statuses[(index % 4) as usize],
                index as u32,
            )
        })
        .collect()
}

#[test]
fn generated_jobs_honor_every_field_invariant() {
    let mut sampler = Sampler::with_seed(3).anchored_at(anchor());
    for job in generate_jobs(&mut sampler, 200) {
        assert!(job.salary.min < job.salary.max);
        assert!(job.deadline > job.posted_date);
        assert!((3..=8).contains(&job.requirements.len()));
    }
}

#[test]
fn status_filter_returns_exactly_the_published_postings() {
    let jobs = even_status_postings();
    let filter = JobFilter {
        status: Some(JobStatus::Published),
        ..JobFilter::default()
    };

    let published = filter_jobs(&jobs, &filter);
    let manual_count = jobs
        .iter()
        .filter(|job| job.status == JobStatus::Published)
        .count();

    assert_eq!(published.len(), manual_count);
    assert_eq!(published.len(), 3);
    assert!(published
        .iter()
        .all(|job| job.status == JobStatus::Published));
}

#[test]
fn search_finds_the_engineer_posting_case_insensitively() {
    let mut jobs: Vec<Job> = (0..9u128)
        .map(|index| posting(index, &format!("Coordinator {index}"), JobStatus::Published, 0))
        .collect();
    jobs.push(posting(
        9,
        "Senior Software Engineer",
        JobStatus::Published,
        4,
    ));

    let filter = JobFilter {
        search: Some("engineer".to_string()),
        ..JobFilter::default()
    };
    let hits = filter_jobs(&jobs, &filter);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Senior Software Engineer");
}

#[test]
fn zero_applicant_posting_resolves_to_an_empty_sequence() {
    let quiet = posting(0, "Quiet Posting", JobStatus::Published, 0);
    let busy = posting(1, "Busy Posting", JobStatus::Published, 6);
    let store = DatasetStore::from_parts(
        vec![quiet.clone(), busy.clone()],
        Vec::new(),
        Sampler::with_seed(5).anchored_at(anchor()),
    );

    assert!(store.applicants_for_job(&quiet.id).is_empty());
    assert_eq!(store.applicants_for_job(&busy.id).len(), 6);
}

#[test]
fn active_listing_is_the_published_subset_of_the_full_listing() {
    let store = seeded_store(101);
    let all = store.all_jobs();
    let active = store.active_jobs();

    let expected: Vec<&Job> = all
        .iter()
        .filter(|job| job.status == JobStatus::Published)
        .collect();

    assert_eq!(active.len(), expected.len());
    for (returned, manual) in active.iter().zip(expected) {
        assert_eq!(returned, manual);
    }
}

#[test]
fn dashboard_total_matches_the_sum_of_authoritative_counters() {
    let store = seeded_store(103);
    let summary = dashboard_summary(&store);

    let expected: u32 = store.all_jobs().iter().map(|job| job.applicants_count).sum();
    assert_eq!(summary.total_applicants, expected);
    assert_eq!(summary.total_jobs, 12);
}

#[test]
fn dashboard_deadline_preview_is_published_soonest_first() {
    let store = seeded_store(107);
    let summary = dashboard_summary(&store);

    assert_eq!(
        summary.upcoming_deadlines,
        upcoming_deadlines(store.all_jobs())
    );
    assert!(summary
        .upcoming_deadlines
        .iter()
        .all(|job| job.status == JobStatus::Published));
    assert!(summary
        .upcoming_deadlines
        .windows(2)
        .all(|pair| pair[0].deadline <= pair[1].deadline));
}

#[test]
fn recent_applications_come_from_the_materialized_sets() {
    let store = seeded_store(109);
    let summary = dashboard_summary(&store);

    for applicant in &summary.recent_applications {
        let owner = store
            .job_by_id(&applicant.job_id)
            .expect("feed entries reference stored postings");
        let resolved = store.applicants_for_job(&owner.id);
        assert!(resolved.contains(applicant));
    }
}

#[test]
fn same_seed_reproduces_the_session_dataset() {
    let first = seeded_store(211);
    let second = seeded_store(211);

    assert_eq!(first.all_jobs(), second.all_jobs());
    assert_eq!(first.all_reports(), second.all_reports());
    for job in first.all_jobs() {
        assert_eq!(
            first.applicants_for_job(&job.id),
            second.applicants_for_job(&job.id)
        );
    }
}
