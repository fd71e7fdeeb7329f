pub mod audit;
pub mod payment;
pub mod roster;
pub mod settlement;
pub mod snapshot;

pub use audit::AppLog;
pub use payment::{Attribution, PaymentInput, PaymentRecord, Shares, SplitInput};
pub use roster::Roster;
pub use settlement::{Balances, ParticipantBalance, SettlementSummary, Transfer};
pub use snapshot::LedgerSnapshot;
