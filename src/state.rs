use crate::models::{Album, Artist};
use crate::repository::MemoryRepository;

/// Handles to the in-memory stores, cloned into every handler.
#[derive(Debug, Clone, Default)]
pub struct ServerState {
    pub artists: MemoryRepository<Artist>,
    pub albums: MemoryRepository<Album>,
}

impl ServerState {
    pub fn new() -> Self {
        Self::default()
    }
}
