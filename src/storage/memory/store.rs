//! Keyed in-memory store for a single entity type.

use crate::domain::error::{LibraryError, LibraryResult};
use crate::domain::model::{Entity, EntityId};
use crate::storage::memory::IdAllocator;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Read-only view over the records of a store, handed to validators while
/// the store's write lock is held.
pub struct RecordsView<'a, T> {
    records: &'a BTreeMap<EntityId, T>,
}

impl<'a, T> RecordsView<'a, T> {
    pub fn contains(&self, id: EntityId) -> bool {
        self.records.contains_key(&id)
    }
}

/// In-memory store mapping identifiers to records of one entity type.
///
/// Records are keyed in a `BTreeMap`. Since identifiers are only ever issued in
/// increasing order, iteration order is insertion order.
///
/// All mutations hold the write lock across check, allocation and insert, so
/// each one is atomic with respect to every reader of the same store.
pub struct MemoryStore<T: Entity> {
    records: RwLock<BTreeMap<EntityId, T>>,
    allocator: IdAllocator,
}

impl<T: Entity> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            allocator: IdAllocator::new(),
        }
    }

    /// All records in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.records.read().await.values().cloned().collect()
    }

    /// Records matching `predicate`, in insertion order.
    pub async fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .read()
            .await
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: EntityId) -> Option<T> {
        self.records.read().await.get(&id).cloned()
    }

    pub async fn contains(&self, id: EntityId) -> bool {
        self.records.read().await.contains_key(&id)
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Highest identifier this store has issued or observed.
    pub fn last_issued_id(&self) -> EntityId {
        self.allocator.last_issued()
    }

    /// Validates `candidate`, assigns it a fresh identifier and stores it.
    ///
    /// Nothing is allocated or stored when `validate` fails.
    pub async fn insert<F>(&self, mut candidate: T, validate: F) -> LibraryResult<T>
    where
        F: FnOnce(&T, &RecordsView<'_, T>) -> LibraryResult<()>,
    {
        let mut records = self.records.write().await;
        validate(&candidate, &RecordsView { records: &*records })?;

        let id = self.allocator.next_id();
        candidate.set_id(id);
        records.insert(id, candidate.clone());
        Ok(candidate)
    }

    /// Replaces the record stored under `id`, keeping its identifier.
    pub async fn replace<F>(&self, id: EntityId, mut candidate: T, validate: F) -> LibraryResult<T>
    where
        F: FnOnce(&T) -> LibraryResult<()>,
    {
        let mut records = self.records.write().await;
        let Some(slot) = records.get_mut(&id) else {
            return Err(not_found::<T>(id));
        };
        validate(&candidate)?;

        candidate.set_id(id);
        *slot = candidate.clone();
        Ok(candidate)
    }

    /// Removes and returns the record stored under `id`.
    pub async fn remove(&self, id: EntityId) -> LibraryResult<T> {
        self.records
            .write()
            .await
            .remove(&id)
            .ok_or_else(|| not_found::<T>(id))
    }

    /// Loads records that already carry identifiers, e.g. a bootstrap catalogue.
    ///
    /// Seeded ids must be positive and above every id issued so far, including
    /// ids whose records were since removed. The allocator is advanced past each
    /// seeded id. Fails on the first offending record; records before it stay
    /// loaded.
    pub async fn seed(&self, seeded: impl IntoIterator<Item = T>) -> LibraryResult<usize> {
        let mut records = self.records.write().await;
        let mut loaded = 0;
        for record in seeded {
            let id = record.id();
            if id <= 0 {
                return Err(LibraryError::invalid_id(id));
            }
            if id <= self.allocator.last_issued() {
                return Err(LibraryError::DuplicateId { id });
            }
            self.allocator.observe(id);
            records.insert(id, record);
            loaded += 1;
        }
        Ok(loaded)
    }
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found<T: Entity>(id: EntityId) -> LibraryError {
    LibraryError::NotFound { entity: T::KIND, id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorKind;
    use crate::domain::model::Author;
    use std::sync::Arc;

    fn author(first: &str) -> Author {
        Author::new(first, "Paul", "01-08-2001", None)
    }

    async fn insert_ok(store: &MemoryStore<Author>, first: &str) -> Author {
        store.insert(author(first), |_, _| Ok(())).await.unwrap()
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store: MemoryStore<Author> = MemoryStore::new();
        assert!(store.list().await.is_empty());
        assert!(store.is_empty().await);
        assert_eq!(store.get(1).await, None);
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids_in_insertion_order() {
        let store = MemoryStore::new();
        let a = insert_ok(&store, "a").await;
        let b = insert_ok(&store, "b").await;
        assert_eq!((a.id, b.id), (1, 2));

        let names: Vec<_> = store.list().await.into_iter().map(|a| a.first_name).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(store.get(2).await, Some(b));
    }

    #[tokio::test]
    async fn failed_validation_leaves_store_and_allocator_untouched() {
        let store = MemoryStore::new();
        insert_ok(&store, "a").await;

        let err = store
            .insert(author("b"), |_, _| {
                Err(LibraryError::MissingField { field: "lastName" })
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(store.len().await, 1);
        assert_eq!(store.last_issued_id(), 1);
        assert_eq!(insert_ok(&store, "c").await.id, 2);
    }

    #[tokio::test]
    async fn validator_sees_current_records() {
        let store = MemoryStore::new();
        insert_ok(&store, "a").await;
        store
            .insert(author("b"), |_, view| {
                assert!(view.contains(1));
                assert!(!view.contains(2));
                Ok(())
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn replace_preserves_id() {
        let store = MemoryStore::new();
        insert_ok(&store, "a").await;

        let mut update = author("RD");
        update.id = 99;
        let stored = store.replace(1, update, |_| Ok(())).await.unwrap();
        assert_eq!(stored.id, 1);
        assert_eq!(store.get(1).await.unwrap().first_name, "RD");
        assert_eq!(store.get(99).await, None);
    }

    #[tokio::test]
    async fn replace_missing_id_is_not_found_before_validation() {
        let store: MemoryStore<Author> = MemoryStore::new();
        let err = store
            .replace(5, author("a"), |_| {
                Err(LibraryError::MissingField { field: "firstName" })
            })
            .await
            .unwrap_err();
        assert_eq!(err, LibraryError::NotFound { entity: "author", id: 5 });
    }

    #[tokio::test]
    async fn removed_ids_are_never_reissued() {
        let store = MemoryStore::new();
        for name in ["a", "b", "c"] {
            insert_ok(&store, name).await;
        }
        store.remove(3).await.unwrap();
        assert_eq!(
            store.remove(3).await.unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(insert_ok(&store, "d").await.id, 4);
    }

    #[tokio::test]
    async fn seed_advances_allocator_and_rejects_collisions() {
        let store = MemoryStore::new();
        let mut first = author("seed");
        first.id = 7;
        assert_eq!(store.seed(vec![first.clone()]).await.unwrap(), 1);
        assert_eq!(insert_ok(&store, "next").await.id, 8);

        assert_eq!(
            store.seed(vec![first]).await,
            Err(LibraryError::DuplicateId { id: 7 })
        );
        assert_eq!(
            store.seed(vec![author("zero")]).await.unwrap_err().kind(),
            ErrorKind::InvalidId
        );
    }

    #[tokio::test]
    async fn seed_cannot_bring_back_a_removed_id() {
        let store = MemoryStore::new();
        let created = insert_ok(&store, "a").await;
        store.remove(created.id).await.unwrap();

        let mut reseeded = author("seed");
        reseeded.id = created.id;
        assert_eq!(
            store.seed(vec![reseeded]).await,
            Err(LibraryError::DuplicateId { id: 1 })
        );
        assert_eq!(store.get(1).await, None);
        assert_eq!(insert_ok(&store, "b").await.id, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_get_distinct_ids() {
        let store = Arc::new(MemoryStore::new());
        let tasks: Vec<_> = (0..50)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .insert(author(&format!("a{i}")), |_, _| Ok(()))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=50).collect::<Vec<_>>());
        assert_eq!(store.len().await, 50);
    }
}
