use crate::core::errors::LedgerError;
use crate::core::models::{LedgerSnapshot, PaymentRecord, Roster};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    members: Arc<RwLock<Roster>>,
    payments: Arc<RwLock<Vec<PaymentRecord>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            members: Arc::new(RwLock::new(Roster::new())),
            payments: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn from_snapshot(snapshot: LedgerSnapshot) -> Self {
        InMemoryStorage {
            members: Arc::new(RwLock::new(Roster::from(snapshot.members))),
            payments: Arc::new(RwLock::new(snapshot.payments)),
        }
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn get_members(&self) -> Result<Roster, LedgerError> {
        Ok(self.members.read().await.clone())
    }

    async fn add_member(&self, name: &str) -> Result<bool, LedgerError> {
        Ok(self.members.write().await.insert(name))
    }

    async fn list_payments(&self) -> Result<Vec<PaymentRecord>, LedgerError> {
        Ok(self.payments.read().await.clone())
    }

    async fn save_payment(&self, payment: PaymentRecord) -> Result<(), LedgerError> {
        self.payments.write().await.push(payment);
        Ok(())
    }

    async fn remove_payment(&self, payment_id: &str) -> Result<Option<PaymentRecord>, LedgerError> {
        let mut payments = self.payments.write().await;
        Ok(payments
            .iter()
            .position(|p| p.id == payment_id)
            .map(|idx| payments.remove(idx)))
    }

    async fn clear(&self) -> Result<(), LedgerError> {
        // Lock order matches load_snapshot: members, then payments.
        let mut members = self.members.write().await;
        let mut payments = self.payments.write().await;
        members.clear();
        payments.clear();
        Ok(())
    }

    async fn load_snapshot(&self) -> Result<LedgerSnapshot, LedgerError> {
        let members = self.members.read().await;
        let payments = self.payments.read().await;
        Ok(LedgerSnapshot {
            members: members.names().to_vec(),
            payments: payments.clone(),
        })
    }

    async fn replace_snapshot(&self, snapshot: LedgerSnapshot) -> Result<(), LedgerError> {
        let mut members = self.members.write().await;
        let mut payments = self.payments.write().await;
        *members = Roster::from(snapshot.members);
        *payments = snapshot.payments;
        Ok(())
    }
}
