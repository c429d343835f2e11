use criterion::Criterion;
use std::time::Duration;

// ============================================================================
// Test Data & Domain Types
// ============================================================================

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct UserData {
    pub user_id: u64,
    pub username: String,
    pub email: String,
}

impl UserData {
    pub fn new(id: u64) -> Self {
        Self { user_id: id, username: format!("user_{id}"), email: format!("user{id}@company.com") }
    }
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
        .sample_size(50)
}
