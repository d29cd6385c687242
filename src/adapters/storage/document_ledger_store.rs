//! Document-based Ledger Store Adapter
//!
//! Keeps the whole ledger in one JSON document on disk. Inside it, every
//! group carries its own ledger keyed by person, each person holding the
//! list of their records.
//!
//! Writers hold a shared mutex for the full load-modify-save cycle and the
//! new document replaces the old one through a rename, so readers only ever
//! see a complete document.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::domain::foundation::{GroupId, Money, PaymentId, PersonId};
use crate::domain::ledger::{
    sort_history, validate_name, Group, LedgerError, NewPayment, PaymentEntry, PaymentRecord,
    PaymentsByGroup, Person,
};
use crate::ports::{LedgerStore, LedgerStoreFactory};

/// On-disk layout of the ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LedgerDocument {
    #[serde(default)]
    last_person_id: i64,
    #[serde(default)]
    last_group_id: i64,
    #[serde(default)]
    last_payment_id: i64,
    #[serde(default)]
    persons: Vec<PersonEntry>,
    #[serde(default)]
    groups: Vec<GroupDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersonEntry {
    id: PersonId,
    name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GroupDocument {
    id: GroupId,
    name: String,
    #[serde(default)]
    members: Vec<MemberLedger>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MemberLedger {
    name: String,
    #[serde(default)]
    records: Vec<RecordEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecordEntry {
    id: PaymentId,
    amount: Money,
    time: String,
}

impl GroupDocument {
    fn to_group(&self) -> Group {
        Group {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

impl LedgerDocument {
    fn group_index(&self, id: GroupId) -> Result<usize, LedgerError> {
        self.groups
            .iter()
            .position(|g| g.id == id)
            .ok_or(LedgerError::GroupNotFound(id))
    }

    fn group_by_name(&self, name: &str) -> Option<&GroupDocument> {
        self.groups.iter().find(|g| g.name == name)
    }

    fn insert_group(&mut self, name: &str) -> usize {
        self.last_group_id += 1;
        self.groups.push(GroupDocument {
            id: GroupId::new(self.last_group_id),
            name: name.to_string(),
            members: Vec::new(),
        });
        self.groups.len() - 1
    }

    fn upsert_person(&mut self, name: &str) {
        if !self.persons.iter().any(|p| p.name == name) {
            self.last_person_id += 1;
            self.persons.push(PersonEntry {
                id: PersonId::new(self.last_person_id),
                name: name.to_string(),
            });
        }
    }
}

/// File-based ledger storage.
#[derive(Debug, Clone)]
pub struct DocumentLedgerStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl DocumentLedgerStore {
    /// Create a store handle over the document at `path`.
    ///
    /// Handles that write the same file must share `write_lock`.
    pub fn new<P: AsRef<Path>>(path: P, write_lock: Arc<Mutex<()>>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next document version is written to before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn load(&self) -> Result<LedgerDocument, LedgerError> {
        if !self.path.exists() {
            return Ok(LedgerDocument::default());
        }

        let json = fs::read_to_string(&self.path)
            .await
            .map_err(|e| LedgerError::storage(format!("Failed to read ledger: {}", e)))?;

        if json.trim().is_empty() {
            return Ok(LedgerDocument::default());
        }

        serde_json::from_str(&json)
            .map_err(|e| LedgerError::storage(format!("Corrupt ledger document: {}", e)))
    }

    async fn save(&self, document: &LedgerDocument) -> Result<(), LedgerError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).await.map_err(|e| {
                    LedgerError::storage(format!("Failed to create data directory: {}", e))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(document)
            .map_err(|e| LedgerError::storage(format!("Failed to serialize ledger: {}", e)))?;

        let staging = self.staging_path();
        fs::write(&staging, json)
            .await
            .map_err(|e| LedgerError::storage(format!("Failed to write ledger: {}", e)))?;

        fs::rename(&staging, &self.path).await.map_err(|e| {
            error!(path = %self.path.display(), "Ledger commit failed: {}", e);
            LedgerError::storage(format!("Failed to commit ledger: {}", e))
        })?;

        debug!(path = %self.path.display(), "Ledger document committed");
        Ok(())
    }

    /// Runs `apply` against the current document and commits the result.
    ///
    /// Nothing is written when `apply` fails.
    async fn mutate<T, F>(&self, apply: F) -> Result<T, LedgerError>
    where
        F: FnOnce(&mut LedgerDocument) -> Result<T, LedgerError> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut document = self.load().await?;
        let output = apply(&mut document)?;
        self.save(&document).await?;
        Ok(output)
    }
}

#[async_trait]
impl LedgerStore for DocumentLedgerStore {
    async fn create_group(&self, name: &str) -> Result<Group, LedgerError> {
        validate_name("name", name)?;

        let group = self
            .mutate(|doc| {
                if doc.group_by_name(name).is_some() {
                    return Err(LedgerError::duplicate_group(name));
                }
                let index = doc.insert_group(name);
                Ok(doc.groups[index].to_group())
            })
            .await?;

        info!(group_id = %group.id, name = %group.name, "Group created");
        Ok(group)
    }

    async fn get_group(&self, id: GroupId) -> Result<Group, LedgerError> {
        let doc = self.load().await?;
        let index = doc.group_index(id)?;
        Ok(doc.groups[index].to_group())
    }

    async fn find_group_by_name(&self, name: &str) -> Result<Option<Group>, LedgerError> {
        let doc = self.load().await?;
        Ok(doc.group_by_name(name).map(GroupDocument::to_group))
    }

    async fn list_groups(&self) -> Result<Vec<Group>, LedgerError> {
        let doc = self.load().await?;
        let mut groups: Vec<Group> = doc.groups.iter().map(GroupDocument::to_group).collect();
        groups.sort_by_key(|g| g.id);
        Ok(groups)
    }

    async fn rename_group(&self, id: GroupId, new_name: &str) -> Result<Group, LedgerError> {
        validate_name("name", new_name)?;

        let group = self
            .mutate(|doc| {
                let index = doc.group_index(id)?;
                if doc.groups.iter().any(|g| g.id != id && g.name == new_name) {
                    return Err(LedgerError::duplicate_group(new_name));
                }
                doc.groups[index].name = new_name.to_string();
                Ok(doc.groups[index].to_group())
            })
            .await?;

        info!(group_id = %id, name = %group.name, "Group renamed");
        Ok(group)
    }

    async fn remove_group(&self, id: GroupId) -> Result<(), LedgerError> {
        let removed = self
            .mutate(|doc| {
                let index = doc.group_index(id)?;
                Ok(doc.groups.remove(index))
            })
            .await?;

        let payments: usize = removed.members.iter().map(|m| m.records.len()).sum();
        info!(group_id = %id, payments, "Group removed");
        Ok(())
    }

    async fn record_payment(&self, payment: &NewPayment) -> Result<PaymentRecord, LedgerError> {
        let record = self
            .mutate(|doc| {
                doc.upsert_person(payment.person());

                let index = match doc.groups.iter().position(|g| g.name == payment.group()) {
                    Some(index) => index,
                    None => doc.insert_group(payment.group()),
                };

                doc.last_payment_id += 1;
                let id = PaymentId::new(doc.last_payment_id);
                let entry = RecordEntry {
                    id,
                    amount: payment.amount(),
                    time: payment.time().to_string(),
                };

                let group = &mut doc.groups[index];
                match group.members.iter_mut().find(|m| m.name == payment.person()) {
                    Some(member) => member.records.push(entry),
                    None => group.members.push(MemberLedger {
                        name: payment.person().to_string(),
                        records: vec![entry],
                    }),
                }

                Ok(PaymentRecord {
                    id,
                    person: payment.person().to_string(),
                    group: payment.group().to_string(),
                    amount: payment.amount(),
                    time: payment.time().to_string(),
                })
            })
            .await?;

        info!(
            payment_id = %record.id,
            person = %record.person,
            group = %record.group,
            amount = %record.amount,
            "Payment recorded"
        );
        Ok(record)
    }

    async fn remove_payment(&self, id: PaymentId) -> Result<(), LedgerError> {
        self.mutate(|doc| {
            for group in &mut doc.groups {
                for member in &mut group.members {
                    if let Some(pos) = member.records.iter().position(|r| r.id == id) {
                        member.records.remove(pos);
                        return Ok(());
                    }
                }
            }
            Err(LedgerError::PaymentNotFound(id))
        })
        .await?;

        info!(payment_id = %id, "Payment removed");
        Ok(())
    }

    async fn list_persons(&self) -> Result<Vec<Person>, LedgerError> {
        let doc = self.load().await?;
        let mut persons: Vec<Person> = doc
            .persons
            .into_iter()
            .map(|p| Person {
                id: p.id,
                name: p.name,
            })
            .collect();
        persons.sort_by_key(|p| p.id);
        Ok(persons)
    }

    async fn list_all_payments(&self) -> Result<PaymentsByGroup, LedgerError> {
        let doc = self.load().await?;
        let mut result = PaymentsByGroup::new();

        for group in doc.groups {
            let mut entries: Vec<PaymentEntry> = group
                .members
                .into_iter()
                .flat_map(|member| {
                    let person = member.name;
                    member.records.into_iter().map(move |r| PaymentEntry {
                        id: r.id,
                        person: person.clone(),
                        amount: r.amount,
                        time: r.time,
                    })
                })
                .collect();

            if entries.is_empty() {
                continue;
            }
            sort_history(&mut entries);
            result.insert(group.name, entries);
        }

        Ok(result)
    }
}

/// Hands out [`DocumentLedgerStore`] handles that share one writer lock.
#[derive(Debug, Clone)]
pub struct DocumentStoreFactory {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl DocumentStoreFactory {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}

impl LedgerStoreFactory for DocumentStoreFactory {
    fn open(&self) -> Arc<dyn LedgerStore> {
        Arc::new(DocumentLedgerStore::new(&self.path, self.write_lock.clone()))
    }

    fn backend_name(&self) -> &'static str {
        "document"
    }
}
