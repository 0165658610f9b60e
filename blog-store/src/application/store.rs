use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::instrument;

use crate::application::auth_service::AuthService;
use crate::application::editor::PostDraft;
use crate::application::feed::{FeedQuery, all_tags};
use crate::application::post_service::PostService;
use crate::data::post_repository::KvPostRepository;
use crate::data::preference_repository::{KvPreferenceRepository, PreferenceRepository};
use crate::data::session_repository::KvSessionRepository;
use crate::data::substrate::KeyValueStore;
use crate::domain::error::{EditorError, StoreError};
use crate::domain::post::{Post, PostStatus};
use crate::domain::theme::Theme;
use crate::domain::user::User;
use crate::infrastructure::analytics::{AnalyticsEvent, track_event};
use crate::infrastructure::seed::seed_posts;

/// A post opened on the detail page, with the analytics event it produced.
#[derive(Debug, Clone)]
pub struct PostView {
    pub post: Post,
    pub event: AnalyticsEvent,
}

/// Content and session store over a single key-value substrate.
///
/// Every mutation reads the whole collection, changes it in memory and
/// writes it back; concurrent writers from other processes are last-write-wins.
pub struct BlogStore<S: KeyValueStore + 'static> {
    substrate: Arc<S>,
    posts: PostService<KvPostRepository<S>>,
    auth: AuthService<KvSessionRepository<S>>,
    preferences: KvPreferenceRepository<S>,
}

impl<S> BlogStore<S>
where
    S: KeyValueStore + 'static,
{
    /// Wraps `substrate` without touching it.
    pub fn new(substrate: Arc<S>) -> Self {
        Self {
            posts: PostService::new(Arc::new(KvPostRepository::new(Arc::clone(&substrate)))),
            auth: AuthService::new(Arc::new(KvSessionRepository::new(Arc::clone(&substrate)))),
            preferences: KvPreferenceRepository::new(Arc::clone(&substrate)),
            substrate,
        }
    }

    /// Opens the store, seeding the default posts into an empty substrate.
    pub fn open(substrate: Arc<S>) -> Result<Self, StoreError> {
        let store = Self::new(substrate);
        store.initialize()?;
        Ok(store)
    }

    /// Opens the store, seeding `seed` into an empty substrate.
    pub fn open_with_seed(substrate: Arc<S>, seed: Vec<Post>) -> Result<Self, StoreError> {
        let store = Self::new(substrate);
        store.posts.initialize(|| seed)?;
        Ok(store)
    }

    /// Seeds the default posts unless a collection already exists.
    pub fn initialize(&self) -> Result<bool, StoreError> {
        self.posts.initialize(|| seed_posts(Utc::now()))
    }

    /// Releases the store and hands back its substrate.
    pub fn close(self) -> Arc<S> {
        self.substrate
    }

    pub fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        self.posts.list_posts()
    }

    pub fn get_post_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        self.posts.get_post_by_slug(slug)
    }

    pub fn save_post(&self, post: Post) -> Result<(), StoreError> {
        self.posts.save_post(post)
    }

    pub fn delete_post(&self, id: &str) -> Result<(), StoreError> {
        self.posts.delete_post(id)
    }

    pub async fn login(&self, password: &str) -> Result<Option<User>, StoreError> {
        self.auth.login(password).await
    }

    pub fn logout(&self) -> Result<(), StoreError> {
        self.auth.logout()
    }

    pub fn current_user(&self) -> Result<Option<User>, StoreError> {
        self.auth.current_user()
    }

    /// Published posts filtered by the feed's search and tag selection.
    pub fn feed(&self, query: &FeedQuery) -> Result<Vec<Post>, StoreError> {
        Ok(query.apply(self.list_posts()?))
    }

    /// Tag cloud of the published feed.
    pub fn tags(&self) -> Result<Vec<String>, StoreError> {
        Ok(all_tags(&FeedQuery::default().apply(self.list_posts()?)))
    }

    /// Detail-page lookup; records a `view_post` event when the post exists.
    #[instrument(skip(self))]
    pub fn view_post(&self, slug: &str) -> Result<Option<PostView>, StoreError> {
        let Some(post) = self.get_post_by_slug(slug)? else {
            return Ok(None);
        };
        let event = track_event(
            "view_post",
            Some(json!({ "slug": post.slug, "title": post.title })),
        );
        Ok(Some(PostView { post, event }))
    }

    /// Composes a new post from the editor form and saves it.
    #[instrument(skip(self, draft, author), fields(author_id = %author.id))]
    pub fn publish_draft(
        &self,
        draft: &PostDraft,
        author: &User,
        status: PostStatus,
    ) -> Result<Post, EditorError> {
        let post = draft.compose(author, status, Utc::now())?;
        self.save_post(post.clone())?;
        Ok(post)
    }

    /// Re-saves `existing` with the editor form applied, keeping its position.
    #[instrument(skip(self, draft, existing), fields(post_id = %existing.id))]
    pub fn revise_post(
        &self,
        existing: &Post,
        draft: &PostDraft,
        status: PostStatus,
    ) -> Result<Post, EditorError> {
        let post = draft.revise(existing, status, Utc::now())?;
        self.save_post(post.clone())?;
        Ok(post)
    }

    pub fn theme(&self) -> Result<Option<Theme>, StoreError> {
        self.preferences.theme()
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.preferences.set_theme(theme)
    }
}
