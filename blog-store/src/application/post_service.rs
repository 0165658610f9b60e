use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::data::post_repository::PostRepository;
use crate::domain::{error::StoreError, post::Post};

#[derive(Clone)]
pub struct PostService<R: PostRepository + 'static> {
    repo: Arc<R>,
}

impl<R> PostService<R>
where
    R: PostRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Writes `seed` only when no collection exists yet. An existing
    /// collection, even an empty one, is never replaced. Returns whether
    /// seeding happened.
    #[instrument(skip(self, seed))]
    pub fn initialize<F>(&self, seed: F) -> Result<bool, StoreError>
    where
        F: FnOnce() -> Vec<Post>,
    {
        if self.repo.load()?.is_some() {
            debug!("post collection present, skipping seed");
            return Ok(false);
        }

        let posts = seed();
        self.repo.store(&posts)?;
        info!(count = posts.len(), "post collection seeded");
        Ok(true)
    }

    /// All posts in stored order; empty when nothing was ever written.
    pub fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.repo.load()?.unwrap_or_default())
    }

    /// First post whose slug matches exactly (case-sensitive).
    pub fn get_post_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        let post = self.list_posts()?.into_iter().find(|p| p.slug == slug);
        debug!(slug, found = post.is_some(), "post lookup by slug");
        Ok(post)
    }

    /// Replaces the post with the same id in place, or inserts it at the front.
    #[instrument(skip(self, post), fields(post_id = %post.id, slug = %post.slug))]
    pub fn save_post(&self, post: Post) -> Result<(), StoreError> {
        let mut posts = self.list_posts()?;

        match posts.iter().position(|p| p.id == post.id) {
            Some(index) => {
                posts[index] = post;
                self.repo.store(&posts)?;
                info!(index, "post updated");
            }
            None => {
                posts.insert(0, post);
                self.repo.store(&posts)?;
                info!("post created");
            }
        }

        Ok(())
    }

    /// Removes the post with `id`; a missing id leaves the collection as is.
    #[instrument(skip(self))]
    pub fn delete_post(&self, id: &str) -> Result<(), StoreError> {
        let mut posts = self.list_posts()?;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        self.repo.store(&posts)?;

        if posts.len() < before {
            info!(post_id = %id, "post deleted");
        } else {
            debug!(post_id = %id, "delete of unknown post ignored");
        }
        Ok(())
    }
}
