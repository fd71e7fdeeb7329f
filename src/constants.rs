pub const MEMBER_ADDED: &str = "MEMBER_ADDED";
pub const PAYMENT_ADDED: &str = "PAYMENT_ADDED";
pub const PAYMENT_REMOVED: &str = "PAYMENT_REMOVED";
pub const LEDGER_RESET: &str = "LEDGER_RESET";
pub const SNAPSHOT_IMPORTED: &str = "SNAPSHOT_IMPORTED";

/// Residue below which a remaining settlement magnitude counts as cleared.
pub const BALANCE_TOLERANCE: f64 = 1e-9;

/// Transfers must exceed this amount to be emitted.
pub const DEFAULT_TRANSFER_THRESHOLD: f64 = 0.0;

pub const DEFAULT_CURRENCY_SUFFIX: &str = "円";

pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_MEMO_LENGTH: usize = 255;
pub const MAX_PAYMENT_AMOUNT: f64 = 10_000_000.0;
