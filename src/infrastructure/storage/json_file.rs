use crate::core::errors::LedgerError;
use crate::core::models::{LedgerSnapshot, PaymentRecord, Roster};
use crate::infrastructure::storage::Storage;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Keeps the ledger in memory and rewrites a JSON snapshot file after every change.
pub struct JsonFileStorage {
    path: PathBuf,
    inner: InMemoryStorage,
    write_lock: Mutex<()>,
}

impl JsonFileStorage {
    /// Opens the snapshot at `path`, starting empty when the file does not exist yet.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let path = path.as_ref().to_path_buf();
        let snapshot = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<LedgerSnapshot>(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No snapshot at {}, starting with an empty ledger", path.display());
                LedgerSnapshot::default()
            }
            Err(e) => {
                return Err(LedgerError::StorageError(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
        };
        Ok(JsonFileStorage {
            path,
            inner: InMemoryStorage::from_snapshot(snapshot),
            write_lock: Mutex::new(()),
        })
    }

    async fn persist(&self) -> Result<(), LedgerError> {
        let snapshot = self.inner.load_snapshot().await?;
        let bytes = serde_json::to_vec_pretty(&snapshot)?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| LedgerError::StorageError(format!("Failed to write {}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| LedgerError::StorageError(format!("Failed to replace {}: {}", self.path.display(), e)))?;

        debug!("Snapshot written to {}", self.path.display());
        Ok(())
    }

    /// Writes the mutated ledger, restoring `before` in memory when the write fails.
    async fn commit(&self, before: LedgerSnapshot) -> Result<(), LedgerError> {
        if let Err(e) = self.persist().await {
            warn!("Rolling back in-memory ledger: {}", e);
            self.inner.replace_snapshot(before).await?;
            return Err(e);
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for JsonFileStorage {
    async fn get_members(&self) -> Result<Roster, LedgerError> {
        self.inner.get_members().await
    }

    async fn add_member(&self, name: &str) -> Result<bool, LedgerError> {
        let _guard = self.write_lock.lock().await;
        let before = self.inner.load_snapshot().await?;
        let added = self.inner.add_member(name).await?;
        if added {
            self.commit(before).await?;
        }
        Ok(added)
    }

    async fn list_payments(&self) -> Result<Vec<PaymentRecord>, LedgerError> {
        self.inner.list_payments().await
    }

    async fn save_payment(&self, payment: PaymentRecord) -> Result<(), LedgerError> {
        let _guard = self.write_lock.lock().await;
        let before = self.inner.load_snapshot().await?;
        self.inner.save_payment(payment).await?;
        self.commit(before).await
    }

    async fn remove_payment(&self, payment_id: &str) -> Result<Option<PaymentRecord>, LedgerError> {
        let _guard = self.write_lock.lock().await;
        let before = self.inner.load_snapshot().await?;
        let removed = self.inner.remove_payment(payment_id).await?;
        if removed.is_some() {
            self.commit(before).await?;
        }
        Ok(removed)
    }

    async fn clear(&self) -> Result<(), LedgerError> {
        let _guard = self.write_lock.lock().await;
        let before = self.inner.load_snapshot().await?;
        self.inner.clear().await?;
        self.commit(before).await
    }

    async fn load_snapshot(&self) -> Result<LedgerSnapshot, LedgerError> {
        self.inner.load_snapshot().await
    }

    async fn replace_snapshot(&self, snapshot: LedgerSnapshot) -> Result<(), LedgerError> {
        let _guard = self.write_lock.lock().await;
        let before = self.inner.load_snapshot().await?;
        self.inner.replace_snapshot(snapshot).await?;
        self.commit(before).await
    }
}
