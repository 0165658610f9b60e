use std::sync::Arc;

use tracing::error;

use crate::data::substrate::{KeyValueStore, SESSION_KEY};
use crate::domain::error::StoreError;
use crate::domain::user::User;

/// The single persisted session slot.
pub trait SessionRepository: Send + Sync {
    fn current(&self) -> Result<Option<User>, StoreError>;
    fn store(&self, user: &User) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct KvSessionRepository<S: KeyValueStore> {
    substrate: Arc<S>,
}

impl<S: KeyValueStore> KvSessionRepository<S> {
    pub fn new(substrate: Arc<S>) -> Self {
        Self { substrate }
    }
}

impl<S: KeyValueStore> SessionRepository for KvSessionRepository<S> {
    fn current(&self) -> Result<Option<User>, StoreError> {
        self.substrate
            .get(SESSION_KEY)?
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| {
                serde_json::from_str(&raw).map_err(|e| {
                    error!("failed to decode session: {}", e);
                    StoreError::from(e)
                })
            })
            .transpose()
    }

    fn store(&self, user: &User) -> Result<(), StoreError> {
        let raw = serde_json::to_string(user)?;
        self.substrate.set(SESSION_KEY, &raw)
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.substrate.remove(SESSION_KEY)
    }
}
