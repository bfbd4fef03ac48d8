//! # In-Memory Repository
//!
//! A `Vec` behind an `RwLock`. Records keep the position of their first
//! save, so lists come back in the order a table would show them.

use std::sync::RwLock;

use tracing::debug;

use super::{Entity, Repository};
use crate::error::{StoreError, StoreResult};

#[derive(Debug)]
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        InMemoryRepository {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Builds a repository pre-filled with `records`, checking keys as
    /// [`Repository::save`] would.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> StoreResult<Self> {
        let repo = InMemoryRepository::new();
        for record in records {
            repo.save(record)?;
        }
        Ok(repo)
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Vec<T>>> {
        self.records
            .read()
            .map_err(|_| StoreError::LockPoisoned(T::KIND))
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn find_by_id(&self, id: &str) -> StoreResult<Option<T>> {
        Ok(self.read()?.iter().find(|r| r.id() == id).cloned())
    }

    fn list(&self) -> StoreResult<Vec<T>> {
        Ok(self.read()?.clone())
    }

    fn save(&self, entity: T) -> StoreResult<T> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned(T::KIND))?;

        if records
            .iter()
            .any(|r| r.key() == entity.key() && r.id() != entity.id())
        {
            return Err(StoreError::duplicate(T::KEY_FIELD, entity.key()));
        }

        match records.iter_mut().find(|r| r.id() == entity.id()) {
            Some(existing) => {
                debug!(kind = T::KIND, id = %entity.id(), "Replacing record");
                *existing = entity.clone();
            }
            None => {
                debug!(kind = T::KIND, id = %entity.id(), "Inserting record");
                records.push(entity.clone());
            }
        }

        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockdesk_core::{Invoice, InvoiceStatus};

    fn invoice(number: &str) -> Invoice {
        Invoice::draft(number, "Acme", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    }

    #[test]
    fn test_save_and_find() {
        let repo = InMemoryRepository::new();
        let saved = repo.save(invoice("INV-1")).unwrap();

        let found = repo.find_by_id(&saved.id).unwrap().unwrap();
        assert_eq!(found, saved);
        assert!(repo.find_by_id("missing").unwrap().is_none());
        assert!(matches!(repo.get("missing"), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_save_replaces_in_place() {
        let repo = InMemoryRepository::new();
        let first = repo.save(invoice("INV-1")).unwrap();
        repo.save(invoice("INV-2")).unwrap();

        let mut updated = first.clone();
        updated.status = InvoiceStatus::Sent;
        repo.save(updated).unwrap();

        let listed = repo.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[0].status, InvoiceStatus::Sent);
    }

    #[test]
    fn test_duplicate_number_rejected() {
        let repo = InMemoryRepository::new();
        repo.save(invoice("INV-1")).unwrap();
        let err = repo.save(invoice("INV-1")).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_find_by_key() {
        let repo = InMemoryRepository::with_records([invoice("INV-7"), invoice("INV-8")]).unwrap();
        let found = repo.find_by_key("INV-8").unwrap().unwrap();
        assert_eq!(found.number, "INV-8");
        assert!(repo.find_by_key("INV-9").unwrap().is_none());
    }
}
