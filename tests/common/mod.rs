//! Common test utilities and fixtures

#![allow(dead_code)]

use std::hash::{Hash, Hasher};
use tracing_subscriber::EnvFilter;

/// Student record used across the integration tests
///
/// Equality and hashing consider only `id`, so two records with the same id
/// collapse in set-valued results.
#[derive(Debug, Clone)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub courses: Vec<String>,
}

impl Student {
    pub fn new(id: u32, name: &str, age: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
            courses: Vec::new(),
        }
    }

    pub fn choose_course(mut self, course: &str) -> Self {
        self.courses.push(course.to_string());
        self
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// The five students enrolled in the sample class
pub fn students() -> Vec<Student> {
    vec![
        Student::new(1, "Alice", 18).choose_course("Ma").choose_course("Ph"),
        Student::new(2, "Bob", 19)
            .choose_course("Ph")
            .choose_course("Bi")
            .choose_course("Ma"),
        Student::new(3, "Carol", 20)
            .choose_course("Ma")
            .choose_course("Ch")
            .choose_course("Bi"),
        Student::new(4, "Dave", 18).choose_course("Bi"),
        Student::new(5, "Eve", 17).choose_course("Ma").choose_course("Ch"),
    ]
}

/// Route library diagnostics to the test output for the current thread
///
/// Honors `RUST_LOG`; defaults to `trace` for this crate.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("common_utils=trace"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}
