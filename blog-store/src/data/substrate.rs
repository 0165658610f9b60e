use crate::domain::error::StoreError;

/// Key under which the ordered post collection is stored.
pub const POSTS_KEY: &str = "lumina_posts";
/// Key holding the current session's user, absent when logged out.
pub const SESSION_KEY: &str = "lumina_user";
/// Key holding the reader's theme preference.
pub const THEME_KEY: &str = "lumina_theme";

/// Persistent string key-value storage backing every repository.
///
/// Values are whole serialized records; implementations replace a value in a
/// single write so readers never observe a partially written record.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
