use std::collections::BTreeMap;

use parking_lot::Mutex;

use crate::{store::StoreError, Patch, Record};

/// Keyed in-memory storage for a single record type.
///
/// Every operation takes the collection lock for its whole duration, so the id
/// counter and read-merge-write sequences of [`Collection::update`] never
/// interleave between callers. Records are handed out as clones; nothing outside
/// the collection holds a mutable reference to a stored record.
pub struct Collection<M: Record> {
    inner: Mutex<Inner<M>>,
}

struct Inner<M> {
    next_id: i32,
    records: BTreeMap<i32, M>,
}

impl<M: Record> Inner<M> {
    fn insert(&mut self, new: M::New) -> M {
        let id = self.next_id;
        self.next_id += 1;

        let record = M::from_new(id, new);
        self.records.insert(id, record.clone());

        record
    }
}

impl<M: Record> Default for Collection<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Record> Collection<M> {
    /// Creates an empty collection whose first assigned id is 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }

    /// Stores a new record under the next sequential id and returns it.
    pub fn create(&self, new: M::New) -> M {
        self.inner.lock().insert(new)
    }

    /// Stores a new record unless an existing record conflicts with it.
    ///
    /// The conflict check and the insert happen under the same lock. No id is
    /// consumed when a conflict is found.
    ///
    /// # Returns
    /// - `Some(M)` - The stored record
    /// - `None` - An existing record matched `conflict`
    pub fn create_unless<F>(&self, new: M::New, conflict: F) -> Option<M>
    where
        F: Fn(&M) -> bool,
    {
        let mut inner = self.inner.lock();

        if inner.records.values().any(conflict) {
            return None;
        }

        Some(inner.insert(new))
    }

    pub fn get_by_id(&self, id: i32) -> Option<M> {
        self.inner.lock().records.get(&id).cloned()
    }

    /// All records in ascending id order.
    pub fn list(&self) -> Vec<M> {
        self.inner.lock().records.values().cloned().collect()
    }

    /// Records matching `predicate` in ascending id order.
    pub fn filter<F>(&self, predicate: F) -> Vec<M>
    where
        F: Fn(&M) -> bool,
    {
        self.inner
            .lock()
            .records
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// The lowest-id record matching `predicate`.
    pub fn find<F>(&self, predicate: F) -> Option<M>
    where
        F: Fn(&M) -> bool,
    {
        self.inner
            .lock()
            .records
            .values()
            .find(|record| predicate(record))
            .cloned()
    }

    /// Merges `patch` over the record at `id` and returns the merged record.
    ///
    /// # Returns
    /// - `Ok(M)` - The record after the patch was applied
    /// - `Err(StoreError::NotFound)` - No record exists at `id`
    pub fn update<P>(&self, id: i32, patch: P) -> Result<M, StoreError>
    where
        P: Patch<M>,
    {
        let mut inner = self.inner.lock();

        let record = inner.records.get_mut(&id).ok_or(StoreError::NotFound {
            collection: M::COLLECTION,
            id,
        })?;
        patch.apply(record);

        Ok(record.clone())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
