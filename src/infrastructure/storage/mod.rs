pub mod in_memory;
pub mod json_file;

use crate::core::errors::LedgerError;
use crate::core::models::{LedgerSnapshot, PaymentRecord, Roster};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_members(&self) -> Result<Roster, LedgerError>;
    /// Returns `false` when the name is already registered.
    async fn add_member(&self, name: &str) -> Result<bool, LedgerError>;
    async fn list_payments(&self) -> Result<Vec<PaymentRecord>, LedgerError>;
    async fn save_payment(&self, payment: PaymentRecord) -> Result<(), LedgerError>;
    async fn remove_payment(&self, payment_id: &str) -> Result<Option<PaymentRecord>, LedgerError>;
    async fn clear(&self) -> Result<(), LedgerError>;
    async fn load_snapshot(&self) -> Result<LedgerSnapshot, LedgerError>;
    async fn replace_snapshot(&self, snapshot: LedgerSnapshot) -> Result<(), LedgerError>;
}

#[async_trait]
impl<T: Storage + ?Sized> Storage for Box<T> {
    async fn get_members(&self) -> Result<Roster, LedgerError> {
        (**self).get_members().await
    }

    async fn add_member(&self, name: &str) -> Result<bool, LedgerError> {
        (**self).add_member(name).await
    }

    async fn list_payments(&self) -> Result<Vec<PaymentRecord>, LedgerError> {
        (**self).list_payments().await
    }

    async fn save_payment(&self, payment: PaymentRecord) -> Result<(), LedgerError> {
        (**self).save_payment(payment).await
    }

    async fn remove_payment(&self, payment_id: &str) -> Result<Option<PaymentRecord>, LedgerError> {
        (**self).remove_payment(payment_id).await
    }

    async fn clear(&self) -> Result<(), LedgerError> {
        (**self).clear().await
    }

    async fn load_snapshot(&self) -> Result<LedgerSnapshot, LedgerError> {
        (**self).load_snapshot().await
    }

    async fn replace_snapshot(&self, snapshot: LedgerSnapshot) -> Result<(), LedgerError> {
        (**self).replace_snapshot(snapshot).await
    }
}
