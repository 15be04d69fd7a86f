use chrono::{DateTime, Duration, Utc};
use rand::distributions::uniform::SampleUniform;
use rand::{rngs::StdRng, Rng, SeedableRng};
use uuid::Uuid;

const FIRST_NAMES: &[&str] = &[
    "Ava", "Liam", "Maya", "Noah", "Priya", "Elena", "Marcus", "Sofia", "Jamal", "Ingrid", "Diego",
    "Hana", "Victor", "Amara", "Felix", "Nadia", "Owen", "Leila", "Hugo", "Wren",
];

const LAST_NAMES: &[&str] = &[
    "Johnson", "Okafor", "Lindqvist", "Ramirez", "Chen", "Novak", "Haddad", "Kowalski", "Silva",
    "Fontaine", "Adeyemi", "Petrov", "Tanaka", "Moreau", "Castillo", "Bergström",
];

const COMPANY_SUFFIXES: &[&str] = &[
    "Labs", "Group", "Systems", "Technologies", "Partners", "Holdings", "Collective", "Works",
];

const CITIES: &[&str] = &[
    "Austin",
    "Des Moines",
    "Portland",
    "Raleigh",
    "Denver",
    "Columbus",
    "Minneapolis",
    "Atlanta",
    "Pittsburgh",
    "Boise",
    "Tucson",
    "Madison",
];

const TITLE_LEVELS: &[&str] = &["Junior", "Senior", "Lead", "Staff", "Principal", "Associate"];

const TITLE_AREAS: &[&str] = &[
    "Software", "Product", "Marketing", "Sales", "Data", "Support", "Operations", "Brand", "HR",
    "Finance",
];

const TITLE_ROLES: &[&str] = &[
    "Engineer",
    "Designer",
    "Manager",
    "Analyst",
    "Specialist",
    "Coordinator",
    "Developer",
    "Consultant",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.net", "example.org"];

const WORDS: &[&str] = &[
    "team", "product", "platform", "customers", "delivery", "quality", "process", "growth",
    "experience", "stakeholders", "roadmap", "tooling", "systems", "support", "ownership",
    "collaboration", "results", "standards", "features", "feedback", "reliability", "pipelines",
    "metrics", "documentation", "initiatives", "improvements", "releases", "workflows",
];

/// Seedable source of identifiers and pseudo-random values for the entity
/// generators.
///
/// Every generated value, identifiers included, is drawn from one `StdRng`
/// stream, so `with_seed` reproduces an entire dataset. Timestamp helpers are
/// relative to the instant captured at construction; `anchored_at` pins that
/// instant for fully reproducible test runs.
#[derive(Debug)]
pub struct Sampler {
    rng: StdRng,
    now: DateTime<Utc>,
}

impl Sampler {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            now: Utc::now(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            now: Utc::now(),
        }
    }

    /// Pin the reference instant the timestamp helpers sample around.
    pub fn anchored_at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Session-unique identifier, drawn from the RNG stream rather than OS
    /// entropy so seeded runs reproduce ids too.
    pub fn next_id(&mut self) -> Uuid {
        Uuid::from_u128(self.rng.gen())
    }

    /// Uniform integer in `[low, high]`, bounds inclusive.
    pub fn pick<T>(&mut self, low: T, high: T) -> T
    where
        T: SampleUniform + PartialOrd + Copy,
    {
        self.rng.gen_range(low..=high)
    }

    /// Uniform pick from a non-empty slice. Callers must not pass an empty
    /// slice.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        debug_assert!(!items.is_empty(), "choice requires a non-empty slice");
        &items[self.rng.gen_range(0..items.len())]
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    /// Timestamp strictly before the reference instant, at most `within_days`
    /// back.
    pub fn past_timestamp(&mut self, within_days: i64) -> DateTime<Utc> {
        let offset = self.pick(1, within_days * 86_400);
        self.now - Duration::seconds(offset)
    }

    /// Timestamp strictly after `base`, at most `horizon_days` ahead of it.
    pub fn future_timestamp(&mut self, base: DateTime<Utc>, horizon_days: i64) -> DateTime<Utc> {
        let offset = self.pick(1, horizon_days * 86_400);
        base + Duration::seconds(offset)
    }

    /// Like [`Self::past_timestamp`] but named for the short activity windows
    /// (applications, report submissions) it samples.
    pub fn recent_timestamp(&mut self, within_days: i64) -> DateTime<Utc> {
        self.past_timestamp(within_days)
    }

    /// Uniform timestamp in `[start, end]`, both bounds inclusive. Returns
    /// `start` when the interval is empty.
    pub fn between(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> DateTime<Utc> {
        let span = (end - start).num_seconds();
        if span <= 0 {
            return start;
        }
        start + Duration::seconds(self.pick(0, span))
    }

    pub fn full_name(&mut self) -> String {
        format!(
            "{} {}",
            self.choice(FIRST_NAMES),
            self.choice(LAST_NAMES)
        )
    }

    pub fn email_for(&mut self, name: &str) -> String {
        let local: String = name
            .chars()
            .filter_map(|c| match c {
                ' ' => Some('.'),
                c if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
                _ => None,
            })
            .collect();
        format!(
            "{}{}@{}",
            local,
            self.pick(1u32, 99),
            self.choice(EMAIL_DOMAINS)
        )
    }

    pub fn phone_number(&mut self) -> String {
        format!(
            "({}) {}-{:04}",
            self.pick(200u32, 989),
            self.pick(200u32, 999),
            self.pick(0u32, 9_999)
        )
    }

    pub fn company_name(&mut self) -> String {
        format!(
            "{} {}",
            self.choice(LAST_NAMES),
            self.choice(COMPANY_SUFFIXES)
        )
    }

    pub fn city(&mut self) -> String {
        (*self.choice(CITIES)).to_string()
    }

    pub fn job_title(&mut self) -> String {
        format!(
            "{} {} {}",
            self.choice(TITLE_LEVELS),
            self.choice(TITLE_AREAS),
            self.choice(TITLE_ROLES)
        )
    }

    /// One filler sentence, 6 to 11 words, capitalized and terminated.
    pub fn sentence(&mut self) -> String {
        let count = self.pick(6usize, 11);
        let mut words = Vec::with_capacity(count);
        for _ in 0..count {
            words.push(*self.choice(WORDS));
        }
        let mut sentence = words.join(" ");
        if let Some(first) = sentence.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        sentence.push('.');
        sentence
    }

    /// `count` paragraphs of filler prose separated by blank lines.
    pub fn paragraphs(&mut self, count: usize) -> String {
        let mut blocks = Vec::with_capacity(count);
        for _ in 0..count {
            let sentences = self.pick(3usize, 5);
            let mut paragraph = Vec::with_capacity(sentences);
            for _ in 0..sentences {
                paragraph.push(self.sentence());
            }
            blocks.push(paragraph.join(" "));
        }
        blocks.join("\n\n")
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}
