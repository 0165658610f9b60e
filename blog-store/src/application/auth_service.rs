use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::data::session_repository::SessionRepository;
use crate::domain::{error::StoreError, user::User};
use crate::infrastructure::seed::admin_user;

/// Shared password that unlocks the authoring views. This gates the UI only
/// and carries no security weight.
pub const ADMIN_PASSWORD: &str = "admin123";

#[derive(Clone)]
pub struct AuthService<R: SessionRepository + 'static> {
    repo: Arc<R>,
}

impl<R> AuthService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Persists and returns the built-in admin when `password` matches.
    /// A wrong password yields `Ok(None)` and leaves any session in place.
    #[instrument(skip(self, password))]
    pub async fn login(&self, password: &str) -> Result<Option<User>, StoreError> {
        if password != ADMIN_PASSWORD {
            warn!("login rejected");
            return Ok(None);
        }

        let user = admin_user();
        self.repo.store(&user)?;
        info!(user_id = %user.id, "user logged in");
        Ok(Some(user))
    }

    #[instrument(skip(self))]
    pub fn logout(&self) -> Result<(), StoreError> {
        self.repo.clear()?;
        info!("session cleared");
        Ok(())
    }

    pub fn current_user(&self) -> Result<Option<User>, StoreError> {
        self.repo.current()
    }
}
