pub mod blob;

use crate::error::{LoanError, Result};
use crate::types::application::LoanApplication;
use crate::types::history::HistoryItem;
use crate::types::prediction::PredictionResult;
use blob::BlobStore;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

pub const HISTORY_KEY: &str = "loan_application_history";
pub const HISTORY_CAPACITY: usize = 50;

/// Result of [`HistoryStore::save`]. The item exists even when the write
/// failed, so callers never lose a decision to a storage fault.
#[derive(Debug)]
pub struct SaveOutcome {
    pub item: HistoryItem,
    pub persisted: Result<()>,
}

/// Most-recent-first log of evaluations, capped at [`HISTORY_CAPACITY`].
pub struct HistoryStore<B> {
    blobs: B,
}

impl<B: BlobStore> HistoryStore<B> {
    pub fn new(blobs: B) -> Self {
        Self { blobs }
    }

    pub fn save(&mut self, application: &LoanApplication, result: &PredictionResult) -> SaveOutcome {
        let item = HistoryItem {
            id: Uuid::new_v4().to_string(),
            applicant_name: application.applicant_name.clone(),
            application: application.clone(),
            result: result.clone(),
            timestamp: Utc::now(),
        };

        let mut items = self.list();
        items.insert(0, item.clone());
        items.truncate(HISTORY_CAPACITY);

        let persisted = self.write_all(&items);
        match &persisted {
            Ok(()) => info!(id = %item.id, retained = items.len(), "saved history item"),
            Err(error) => warn!(id = %item.id, %error, "history item was not persisted"),
        }

        SaveOutcome { item, persisted }
    }

    /// Returns the stored items, or an empty list when the stored history is
    /// missing or unreadable.
    pub fn list(&self) -> Vec<HistoryItem> {
        match self.load() {
            Ok(items) => items,
            Err(error) => {
                warn!(%error, key = HISTORY_KEY, "discarding unreadable history");
                Vec::new()
            }
        }
    }

    pub fn clear(&mut self) -> Result<()> {
        self.blobs
            .remove(HISTORY_KEY)
            .map_err(|error| LoanError::PersistenceWrite(error.to_string()))?;
        info!(key = HISTORY_KEY, "history cleared");
        Ok(())
    }

    fn load(&self) -> Result<Vec<HistoryItem>> {
        let stored = self
            .blobs
            .read(HISTORY_KEY)
            .map_err(|error| LoanError::PersistenceRead(error.to_string()))?;
        match stored {
            Some(content) => serde_json::from_str(&content)
                .map_err(|error| LoanError::PersistenceRead(error.to_string())),
            None => Ok(Vec::new()),
        }
    }

    fn write_all(&mut self, items: &[HistoryItem]) -> Result<()> {
        let json = serde_json::to_string(items)
            .map_err(|error| LoanError::PersistenceWrite(error.to_string()))?;
        self.blobs
            .write(HISTORY_KEY, &json)
            .map_err(|error| LoanError::PersistenceWrite(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::blob::{FileBlobStore, MemoryBlobStore};
    use super::*;
    use crate::types::application::{
        CreditHistory, Education, MaritalStatus, PropertyArea, SelfEmployed,
    };
    use crate::types::history::HistorySummary;
    use crate::types::prediction::FactorScores;
    use tempfile::TempDir;

    struct ReadOnlyBlobs {
        inner: MemoryBlobStore,
    }

    impl BlobStore for ReadOnlyBlobs {
        fn read(&self, key: &str) -> Result<Option<String>> {
            self.inner.read(key)
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(LoanError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    fn application(name: &str) -> LoanApplication {
        LoanApplication {
            applicant_name: name.to_string(),
            applicant_income: 60_000.0,
            coapplicant_income: 5_000.0,
            loan_amount: 500_000.0,
            loan_term: 240,
            credit_history: CreditHistory::Good,
            dependents: 1,
            education: Education::Graduate,
            self_employed: SelfEmployed::No,
            property_area: PropertyArea::Urban,
            marital_status: MaritalStatus::Married,
        }
    }

    fn result(approved: bool) -> PredictionResult {
        PredictionResult {
            approved,
            confidence: 70,
            risk_score: 30,
            factors: FactorScores {
                income: 65,
                credit_history: 100,
                loan_to_income: 0,
                overall: 70,
            },
            recommendations: vec!["Your application looks strong!".to_string()],
        }
    }

    #[test]
    fn save_then_list_returns_item_at_head() {
        let mut store = HistoryStore::new(MemoryBlobStore::new());
        store.save(&application("first"), &result(true));
        let outcome = store.save(&application("second"), &result(false));
        assert!(outcome.persisted.is_ok());

        let items = store.list();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], outcome.item);
        assert_eq!(items[0].applicant_name, "second");
        assert_eq!(items[0].application, application("second"));
        assert_eq!(items[0].result, result(false));
        assert_eq!(items[1].applicant_name, "first");
    }

    #[test]
    fn saved_items_have_distinct_ids() {
        let mut store = HistoryStore::new(MemoryBlobStore::new());
        let first = store.save(&application("a"), &result(true)).item;
        let second = store.save(&application("a"), &result(true)).item;
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn fifty_first_save_evicts_the_oldest_item() {
        let mut store = HistoryStore::new(MemoryBlobStore::new());
        for index in 0..=HISTORY_CAPACITY {
            store.save(&application(&format!("applicant-{index}")), &result(true));
        }

        let items = store.list();
        assert_eq!(items.len(), HISTORY_CAPACITY);
        assert_eq!(items[0].applicant_name, "applicant-50");
        assert_eq!(items[HISTORY_CAPACITY - 1].applicant_name, "applicant-1");
        assert!(items
            .iter()
            .all(|item| item.applicant_name != "applicant-0"));
    }

    #[test]
    fn clear_then_list_is_empty_until_next_save() {
        let mut store = HistoryStore::new(MemoryBlobStore::new());
        store.save(&application("a"), &result(true));
        store.clear().expect("clear should succeed");
        assert!(store.list().is_empty());

        store.save(&application("b"), &result(true));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn corrupt_history_reads_as_empty() {
        let mut blobs = MemoryBlobStore::new();
        blobs
            .write(HISTORY_KEY, "{not json")
            .expect("write should succeed");
        let mut store = HistoryStore::new(blobs);
        assert!(store.list().is_empty());

        let outcome = store.save(&application("fresh"), &result(true));
        assert!(outcome.persisted.is_ok());
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn write_failure_still_returns_the_item() {
        let mut store = HistoryStore::new(ReadOnlyBlobs {
            inner: MemoryBlobStore::new(),
        });
        let outcome = store.save(&application("kept"), &result(true));

        assert_eq!(outcome.item.applicant_name, "kept");
        assert!(matches!(
            outcome.persisted,
            Err(LoanError::PersistenceWrite(_))
        ));
        assert!(store.list().is_empty());
    }

    #[test]
    fn timestamps_round_trip_through_file_store() {
        let dir = TempDir::new().expect("temp dir should be created");
        let mut store = HistoryStore::new(FileBlobStore::new(dir.path()));
        let saved = store.save(&application("disk"), &result(true));
        assert!(saved.persisted.is_ok());

        let reopened = HistoryStore::new(FileBlobStore::new(dir.path()));
        let items = reopened.list();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].timestamp, saved.item.timestamp);
        assert_eq!(items[0].id, saved.item.id);
    }

    #[test]
    fn summary_counts_decisions() {
        let mut store = HistoryStore::new(MemoryBlobStore::new());
        store.save(&application("a"), &result(true));
        store.save(&application("b"), &result(false));
        store.save(&application("c"), &result(true));

        let summary = HistorySummary::from_items(&store.list());
        assert_eq!(summary.total, 3);
        assert_eq!(summary.approved, 2);
        assert_eq!(summary.declined, 1);
    }
}
