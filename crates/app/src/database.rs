//! Shared store handle

use std::sync::{Arc, Mutex, MutexGuard};

use abwarehouse::{
    fixtures::{CompanyCodesFixture, FixtureError},
    store::CompanyCodeStore,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("company code store lock poisoned")]
    Poisoned,
}

/// Process-wide company code store behind one coarse lock.
///
/// Every operation runs to completion while holding the lock, so readers
/// never observe a partially applied write.
#[derive(Debug, Clone, Default)]
pub struct Db {
    store: Arc<Mutex<CompanyCodeStore>>,
}

impl Db {
    #[must_use]
    pub fn new(store: CompanyCodeStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with shared access to the store.
    ///
    /// # Errors
    ///
    /// Returns an error when a previous holder of the lock panicked.
    pub fn read<R>(&self, f: impl FnOnce(&CompanyCodeStore) -> R) -> Result<R, DatabaseError> {
        let guard = self.lock()?;

        Ok(f(&*guard))
    }

    /// Run `f` with exclusive access to the store.
    ///
    /// # Errors
    ///
    /// Returns an error when a previous holder of the lock panicked.
    pub fn write<R>(
        &self,
        f: impl FnOnce(&mut CompanyCodeStore) -> R,
    ) -> Result<R, DatabaseError> {
        let mut guard = self.lock()?;

        Ok(f(&mut *guard))
    }

    fn lock(&self) -> Result<MutexGuard<'_, CompanyCodeStore>, DatabaseError> {
        self.store.lock().map_err(|_poisoned| DatabaseError::Poisoned)
    }
}

/// Open an in-memory store, optionally seeded with a fixture set.
///
/// # Errors
///
/// Returns an error if the fixtures cannot be parsed or are rejected by the store.
pub fn open(fixtures: Option<CompanyCodesFixture>) -> Result<Db, FixtureError> {
    let store = match fixtures {
        Some(fixtures) => fixtures.into_store()?,
        None => CompanyCodeStore::new(),
    };

    Ok(Db::new(store))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn writes_are_visible_to_clones() -> TestResult {
        let db = open(Some(CompanyCodesFixture::bundled()?))?;
        let clone = db.clone();

        let removed = db.write(|store| {
            store
                .find_by_company_code("US01")
                .is_some_and(|record| store.delete(record.id))
        })?;

        assert!(removed);
        assert_eq!(clone.read(CompanyCodeStore::len)?, 4);

        Ok(())
    }

    #[test]
    fn empty_database_has_no_records() -> TestResult {
        let db = open(None)?;

        assert!(db.read(CompanyCodeStore::is_empty)?);

        Ok(())
    }
}
