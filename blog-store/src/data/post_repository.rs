use std::sync::Arc;

use tracing::{debug, error};

use crate::data::substrate::{KeyValueStore, POSTS_KEY};
use crate::domain::error::StoreError;
use crate::domain::post::Post;

/// Whole-collection access to the stored post sequence.
pub trait PostRepository: Send + Sync {
    /// `None` when the collection has never been written.
    fn load(&self) -> Result<Option<Vec<Post>>, StoreError>;
    fn store(&self, posts: &[Post]) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct KvPostRepository<S: KeyValueStore> {
    substrate: Arc<S>,
}

impl<S: KeyValueStore> KvPostRepository<S> {
    pub fn new(substrate: Arc<S>) -> Self {
        Self { substrate }
    }
}

impl<S: KeyValueStore> PostRepository for KvPostRepository<S> {
    fn load(&self) -> Result<Option<Vec<Post>>, StoreError> {
        let Some(raw) = self
            .substrate
            .get(POSTS_KEY)?
            .filter(|raw| !raw.trim().is_empty())
        else {
            debug!("post collection absent");
            return Ok(None);
        };
        let posts: Vec<Post> = serde_json::from_str(&raw).map_err(|e| {
            error!("failed to decode post collection: {}", e);
            StoreError::from(e)
        })?;
        Ok(Some(posts))
    }

    fn store(&self, posts: &[Post]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(posts)?;
        self.substrate.set(POSTS_KEY, &raw).map_err(|e| {
            error!("failed to write post collection: {}", e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::memory_store::MemoryStore;

    #[test]
    fn test_blank_value_reads_as_absent() {
        let substrate = Arc::new(MemoryStore::new());
        let repo = KvPostRepository::new(Arc::clone(&substrate));

        substrate.set(POSTS_KEY, "").unwrap();
        assert_eq!(repo.load().unwrap(), None);

        substrate.set(POSTS_KEY, "  \n").unwrap();
        assert_eq!(repo.load().unwrap(), None);

        substrate.set(POSTS_KEY, "[]").unwrap();
        assert_eq!(repo.load().unwrap(), Some(Vec::new()));
    }
}
