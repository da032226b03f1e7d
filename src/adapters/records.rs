use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::domain::model::{Content, Principal, Publication, RecordKind, Ticket};
use crate::domain::ports::{ContentStore, PrincipalStore, PublicationStore, TicketStore};
use crate::utils::error::{Result, SyncError};

/// Record stores backed by a one-file JSON export of the OA system, keyed by
/// record id. Loaded once at startup; all lookups are in-memory reads.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct JsonRecordStore {
    #[serde(default)]
    tickets: HashMap<String, Ticket>,
    #[serde(default)]
    publications: HashMap<String, Publication>,
    #[serde(default)]
    contents: HashMap<String, Content>,
    #[serde(default)]
    principals: HashMap<String, Principal>,
}

impl JsonRecordStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read(path.as_ref())?;
        let store: JsonRecordStore = serde_json::from_slice(&data)?;
        tracing::debug!(
            "Loaded record export: {} tickets, {} publications, {} contents, {} principals",
            store.tickets.len(),
            store.publications.len(),
            store.contents.len(),
            store.principals.len()
        );
        Ok(store)
    }

    fn lookup<T: Clone>(records: &HashMap<String, T>, kind: RecordKind, id: &str) -> Result<T> {
        records
            .get(id)
            .cloned()
            .ok_or_else(|| SyncError::NotFoundError {
                kind,
                id: id.to_string(),
            })
    }
}

impl TicketStore for JsonRecordStore {
    async fn get_ticket(&self, id: &str) -> Result<Ticket> {
        Self::lookup(&self.tickets, RecordKind::Ticket, id)
    }
}

impl PublicationStore for JsonRecordStore {
    async fn get_publication(&self, id: &str) -> Result<Publication> {
        Self::lookup(&self.publications, RecordKind::Publication, id)
    }
}

impl ContentStore for JsonRecordStore {
    async fn get_content(&self, id: &str) -> Result<Content> {
        Self::lookup(&self.contents, RecordKind::Content, id)
    }
}

impl PrincipalStore for JsonRecordStore {
    async fn get_principal(&self, id: &str) -> Result<Principal> {
        Self::lookup(&self.principals, RecordKind::Principal, id)
    }
}
