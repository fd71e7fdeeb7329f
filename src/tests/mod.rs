mod api_tests;
mod attribution_tests;

use crate::core::models::Roster;
use crate::core::services::LedgerService;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> LedgerService<InMemoryLogging, InMemoryStorage> {
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    LedgerService::new(storage, logging)
}

pub fn roster(names: &[&str]) -> Roster {
    names.iter().copied().collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} but got {}",
        expected,
        actual
    );
}
