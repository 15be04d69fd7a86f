use super::domain::{
    Applicant, ApplicantId, ApplicantStatus, Job, JobCategory, JobId, JobStatus, JobType, Report,
    ReportId, ReportStatus, ReportType, SalaryRange, SKILL_VOCABULARY,
};
use super::sampler::Sampler;

const POSTED_WINDOW_DAYS: i64 = 30;
const DEADLINE_HORIZON_DAYS: i64 = 180;
const APPLIED_WINDOW_DAYS: i64 = 14;
const REPORT_WINDOW_DAYS: i64 = 30;

const SALARY_MIN_FLOOR: u32 = 30_000;
const SALARY_MIN_CEIL: u32 = 70_000;
const SALARY_SPREAD_MIN: u32 = 10_000;
const SALARY_SPREAD_MAX: u32 = 50_000;

const REQUIREMENTS_RANGE: (usize, usize) = (3, 8);
const SKILLS_RANGE: (usize, usize) = (3, 8);
const MAX_APPLICANTS_PER_JOB: u32 = 50;
const MAX_EXPERIENCE_YEARS: u8 = 15;

/// Generate `count` internally-consistent job postings.
///
/// Dependent fields are derived from already-sampled ones rather than sampled
/// independently and checked: `salary.max` is `salary.min` plus a positive
/// spread, and `deadline` is a future offset from `posted_date`, so the
/// `min < max` and `deadline > posted_date` invariants hold structurally.
pub fn generate_jobs(sampler: &mut Sampler, count: usize) -> Vec<Job> {
    (0..count).map(|_| generate_job(sampler)).collect()
}

fn generate_job(sampler: &mut Sampler) -> Job {
    let requirement_count = sampler.pick(REQUIREMENTS_RANGE.0, REQUIREMENTS_RANGE.1);
    let requirements = (0..requirement_count)
        .map(|_| sampler.sentence())
        .collect();

    let salary_min = sampler.pick(SALARY_MIN_FLOOR, SALARY_MIN_CEIL);
    let salary_max = salary_min + sampler.pick(SALARY_SPREAD_MIN, SALARY_SPREAD_MAX);

    let posted_date = sampler.past_timestamp(POSTED_WINDOW_DAYS);
    let deadline = sampler.future_timestamp(posted_date, DEADLINE_HORIZON_DAYS);

    let remote = sampler.chance(0.5);
    let location = if remote {
        "Remote".to_string()
    } else {
        sampler.city()
    };

    Job {
        id: JobId(sampler.next_id()),
        title: sampler.job_title(),
        company: sampler.company_name(),
        category: *sampler.choice(&JobCategory::ordered()),
        job_type: *sampler.choice(&JobType::ordered()),
        location,
        remote,
        description: sampler.paragraphs(3),
        requirements,
        salary: SalaryRange {
            min: salary_min,
            max: salary_max,
            currency: "USD".to_string(),
        },
        posted_by: sampler.full_name(),
        posted_date,
        deadline,
        status: *sampler.choice(&JobStatus::ordered()),
        applicants_count: sampler.pick(0, MAX_APPLICANTS_PER_JOB),
    }
}

/// Generate exactly `count` applicants, all referencing `job_id`.
///
/// `applied_date` falls within the 14 days preceding generation. It is not
/// clamped to the owning job's `posted_date`; consumers sort on
/// `applied_date` alone.
pub fn generate_applicants(sampler: &mut Sampler, count: usize, job_id: &JobId) -> Vec<Applicant> {
    (0..count).map(|_| generate_applicant(sampler, job_id)).collect()
}

fn generate_applicant(sampler: &mut Sampler, job_id: &JobId) -> Applicant {
    let name = sampler.full_name();
    let email = sampler.email_for(&name);

    // Drawn with replacement; duplicate skills are intentional.
    let skill_count = sampler.pick(SKILLS_RANGE.0, SKILLS_RANGE.1);
    let skills = (0..skill_count)
        .map(|_| (*sampler.choice(SKILL_VOCABULARY)).to_string())
        .collect();

    Applicant {
        id: ApplicantId(sampler.next_id()),
        job_id: *job_id,
        name,
        email,
        phone: sampler.phone_number(),
        resume: "resume.pdf".to_string(),
        cover_letter: sampler.paragraphs(2),
        skills,
        experience: sampler.pick(0, MAX_EXPERIENCE_YEARS),
        applied_date: sampler.recent_timestamp(APPLIED_WINDOW_DAYS),
        status: *sampler.choice(&ApplicantStatus::ordered()),
    }
}

/// Generate `count` issue reports. `updated_date` is sampled from the
/// interval between `created_date` and now, preserving `updated >= created`.
pub fn generate_reports(sampler: &mut Sampler, count: usize) -> Vec<Report> {
    (0..count).map(|_| generate_report(sampler)).collect()
}

fn generate_report(sampler: &mut Sampler) -> Report {
    let created_date = sampler.recent_timestamp(REPORT_WINDOW_DAYS);
    let updated_date = sampler.between(created_date, sampler.now());

    Report {
        id: ReportId(sampler.next_id()),
        title: sampler.sentence(),
        description: sampler.paragraphs(2),
        report_type: *sampler.choice(&ReportType::ordered()),
        status: *sampler.choice(&ReportStatus::ordered()),
        created_by: sampler.full_name(),
        created_date,
        updated_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn sampler() -> Sampler {
        Sampler::with_seed(7).anchored_at(Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap())
    }

    #[test]
    fn jobs_satisfy_field_invariants() {
        let mut sampler = sampler();
        for job in generate_jobs(&mut sampler, 100) {
            assert!(job.salary.min < job.salary.max, "salary band must widen");
            assert!(job.salary.min > 0);
            assert!(job.deadline > job.posted_date);
            assert!(job.applicants_count <= 50);
            assert!((3..=8).contains(&job.requirements.len()));
            if job.remote {
                assert_eq!(job.location, "Remote");
            } else {
                assert_ne!(job.location, "Remote");
            }
        }
    }

    #[test]
    fn applicants_reference_job_and_stay_in_bounds() {
        let mut sampler = sampler();
        let job_id = JobId(sampler.next_id());
        let applicants = generate_applicants(&mut sampler, 40, &job_id);

        assert_eq!(applicants.len(), 40);
        for applicant in &applicants {
            assert_eq!(applicant.job_id, job_id);
            assert!(applicant.experience <= 15);
            assert!((3..=8).contains(&applicant.skills.len()));
            assert!(sampler.now() - applicant.applied_date <= Duration::days(14));
            assert!(applicant.applied_date < sampler.now());
            assert!(applicant
                .skills
                .iter()
                .all(|skill| SKILL_VOCABULARY.contains(&skill.as_str())));
        }
    }

    #[test]
    fn reports_keep_update_after_creation() {
        let mut sampler = sampler();
        for report in generate_reports(&mut sampler, 50) {
            assert!(report.updated_date >= report.created_date);
            assert!(report.updated_date <= sampler.now());
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let anchor = Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap();
        let mut first = Sampler::with_seed(21).anchored_at(anchor);
        let mut second = Sampler::with_seed(21).anchored_at(anchor);

        assert_eq!(generate_jobs(&mut first, 12), generate_jobs(&mut second, 12));
        assert_eq!(
            generate_reports(&mut first, 5),
            generate_reports(&mut second, 5)
        );
    }
}
