use std::sync::Arc;

use tracing::warn;

use crate::data::substrate::{KeyValueStore, THEME_KEY};
use crate::domain::error::StoreError;
use crate::domain::theme::Theme;

/// Presentation preferences. Not consulted by the content store itself.
pub trait PreferenceRepository: Send + Sync {
    fn theme(&self) -> Result<Option<Theme>, StoreError>;
    fn set_theme(&self, theme: Theme) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct KvPreferenceRepository<S: KeyValueStore> {
    substrate: Arc<S>,
}

impl<S: KeyValueStore> KvPreferenceRepository<S> {
    pub fn new(substrate: Arc<S>) -> Self {
        Self { substrate }
    }
}

impl<S: KeyValueStore> PreferenceRepository for KvPreferenceRepository<S> {
    fn theme(&self) -> Result<Option<Theme>, StoreError> {
        let Some(raw) = self.substrate.get(THEME_KEY)? else {
            return Ok(None);
        };
        // Older front ends wrote the bare word instead of a JSON string.
        let theme = serde_json::from_str::<Theme>(&raw)
            .ok()
            .or_else(|| raw.parse().ok());
        if theme.is_none() {
            warn!(value = %raw, "ignoring unrecognised theme preference");
        }
        Ok(theme)
    }

    fn set_theme(&self, theme: Theme) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&theme)?;
        self.substrate.set(THEME_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::memory_store::MemoryStore;

    #[test]
    fn test_theme_round_trip_and_bare_word() {
        let substrate = Arc::new(MemoryStore::new());
        let repo = KvPreferenceRepository::new(Arc::clone(&substrate));
        assert_eq!(repo.theme().unwrap(), None);

        repo.set_theme(Theme::Dark).unwrap();
        assert_eq!(repo.theme().unwrap(), Some(Theme::Dark));

        substrate.set(THEME_KEY, "light").unwrap();
        assert_eq!(repo.theme().unwrap(), Some(Theme::Light));

        substrate.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(repo.theme().unwrap(), None);
    }
}
