use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Record, Repository};

/// In-memory keyed store. Cloning hands out another handle to the same
/// records, so one handle sits in the server state and handlers clone it
/// per request.
#[derive(Debug)]
pub struct MemoryRepository<R> {
    inner: Arc<Inner<R>>,
}

#[derive(Debug)]
struct Inner<R> {
    records: RwLock<HashMap<i64, R>>,
    next_id: AtomicI64,
}

impl<R> MemoryRepository<R> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                records: RwLock::new(HashMap::new()),
                next_id: AtomicI64::new(1),
            }),
        }
    }
}

impl<R> Default for MemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for MemoryRepository<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl<R: Record> Repository<R> for MemoryRepository<R> {
    async fn count(&self) -> usize {
        self.inner.records.read().await.len()
    }

    async fn next_id(&self) -> i64 {
        self.inner.next_id.fetch_add(1, Ordering::Relaxed)
    }

    async fn create(&self, record: R) {
        self.inner
            .records
            .write()
            .await
            .insert(record.id(), record);
    }

    async fn find(&self, id: i64) -> Option<R> {
        self.inner.records.read().await.get(&id).cloned()
    }

    async fn update(&self, record: R) {
        self.inner
            .records
            .write()
            .await
            .insert(record.id(), record);
    }
}

#[cfg(test)]
mod tests {
    use fake::{Fake, Faker};

    use super::*;
    use crate::models::Artist;

    #[tokio::test]
    async fn test_empty_repository() {
        let repo = MemoryRepository::<Artist>::new();
        assert_eq!(repo.count().await, 0);
        assert_eq!(repo.find(1).await, None);
    }

    #[tokio::test]
    async fn test_next_id_is_sequential() {
        let repo = MemoryRepository::<Artist>::new();
        assert_eq!(repo.next_id().await, 1);
        assert_eq!(repo.next_id().await, 2);
        assert_eq!(repo.next_id().await, 3);
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let repo = MemoryRepository::new();
        let artist = Artist {
            id: 1,
            ..Faker.fake()
        };
        repo.create(artist.clone()).await;

        assert_eq!(repo.count().await, 1);
        assert_eq!(repo.find(1).await, Some(artist));
        assert_eq!(repo.find(2).await, None);
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let repo = MemoryRepository::new();
        let artist = Artist {
            id: 1,
            ..Faker.fake()
        };
        repo.create(artist.clone()).await;

        let updated = Artist {
            albums: vec![1, 2],
            ..artist
        };
        repo.update(updated.clone()).await;

        assert_eq!(repo.count().await, 1);
        assert_eq!(repo.find(1).await, Some(updated));
    }

    #[tokio::test]
    async fn test_clone_shares_records() {
        let repo = MemoryRepository::new();
        let handle = repo.clone();

        let artist = Artist {
            id: 1,
            ..Faker.fake()
        };
        repo.create(artist.clone()).await;

        assert_eq!(handle.count().await, 1);
        assert_eq!(handle.find(1).await, Some(artist));

        // the id sequence is shared as well
        assert_eq!(handle.next_id().await, 1);
        assert_eq!(repo.next_id().await, 2);
    }
}
