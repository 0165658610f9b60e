//! Content and session store for the Lumina blog.
//!
//! All persistence goes through a [`KeyValueStore`] substrate: an in-memory
//! map for tests, a JSON file for the CLI, or browser `localStorage` on wasm.
//!
//! ```no_run
//! use std::sync::Arc;
//! use blog_store::{BlogStore, MemoryStore};
//!
//! # async fn demo() -> Result<(), blog_store::StoreError> {
//! let store = BlogStore::open(Arc::new(MemoryStore::new()))?;
//! let admin = store.login("admin123").await?;
//! assert!(admin.is_some());
//! let first = store.list_posts()?.into_iter().next();
//! # let _ = first;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;

pub use application::auth_service::ADMIN_PASSWORD;
pub use application::editor::{DraftEdits, PostDraft};
pub use application::feed::FeedQuery;
pub use application::store::{BlogStore, PostView};
#[cfg(target_arch = "wasm32")]
pub use data::browser_store::BrowserStore;
pub use data::file_store::FileStore;
pub use data::memory_store::MemoryStore;
pub use data::substrate::KeyValueStore;
pub use domain::error::{EditorError, StoreError};
pub use domain::post::{Post, PostStatus};
pub use domain::theme::Theme;
pub use domain::user::{Role, User};
