mod memory;

pub use memory::MemoryRepository;

use async_trait::async_trait;

/// A record that can live in a keyed store.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
}

/// Keyed store consumed by the logic layer. Methods are infallible: the
/// backing store is process memory and never partially fails.
///
/// `next_id` hands out ids from a monotonic sequence. Nothing is ever
/// deleted, so `next_id() == count() + 1` holds at all times.
#[async_trait]
pub trait Repository<R: Record>: Send + Sync {
    async fn count(&self) -> usize;
    async fn next_id(&self) -> i64;
    async fn create(&self, record: R);
    async fn find(&self, id: i64) -> Option<R>;
    async fn update(&self, record: R);
}
