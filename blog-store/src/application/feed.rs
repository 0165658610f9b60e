//! Reader-facing filtering of the post collection.

use crate::domain::post::Post;

/// Search box and tag selection of the home feed.
#[derive(Debug, Clone, Default)]
pub struct FeedQuery {
    pub search: Option<String>,
    pub tag: Option<String>,
}

impl FeedQuery {
    pub fn matches(&self, post: &Post) -> bool {
        let matches_search = match self.search.as_deref().map(str::to_lowercase) {
            Some(needle) => {
                post.title.to_lowercase().contains(&needle)
                    || post.excerpt.to_lowercase().contains(&needle)
            }
            None => true,
        };
        let matches_tag = self.tag.as_deref().is_none_or(|tag| post.has_tag(tag));
        matches_search && matches_tag
    }

    /// Published posts that match, in stored order.
    pub fn apply(&self, posts: Vec<Post>) -> Vec<Post> {
        posts
            .into_iter()
            .filter(|p| p.is_published() && self.matches(p))
            .collect()
    }
}

/// Distinct tags across `posts`, in order of first appearance.
pub fn all_tags(posts: &[Post]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in posts.iter().flat_map(|p| p.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}
