pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::engine::{ReportStyle, SettleOptions, compute_balances, format_report, settle, summarize};
pub use crate::core::errors::LedgerError;
pub use crate::core::services::LedgerService;
pub use infrastructure::logging::in_memory::InMemoryLogging;
pub use infrastructure::storage::in_memory::InMemoryStorage;
pub use infrastructure::storage::json_file::JsonFileStorage;

#[cfg(test)]
mod tests;
