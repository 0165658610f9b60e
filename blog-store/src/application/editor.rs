//! Turns the authoring form into a `Post` ready for the store.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::error::EditorError;
use crate::domain::post::{Post, PostStatus, read_time_minutes};
use crate::domain::user::User;

/// Raw form fields as typed by the author.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    /// Left empty to derive one from the title.
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    /// Comma separated, e.g. `"React, Design, Tech"`.
    pub tags: String,
    pub cover_image: String,
}

impl PostDraft {
    /// Builds a brand new post with a fresh id, authored by a snapshot of `author`.
    pub fn compose(
        &self,
        author: &User,
        status: PostStatus,
        now: DateTime<Utc>,
    ) -> Result<Post, EditorError> {
        let title = self.checked_title()?;
        Ok(Post {
            id: format!("p_{}", Uuid::new_v4().simple()),
            title: title.to_string(),
            slug: self.resolve_slug(title, now),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            cover_image: self.cover_image(),
            tags: parse_tags(&self.tags),
            status,
            author: author.clone(),
            created_at: now,
            updated_at: now,
            read_time_minutes: read_time_minutes(&self.content),
        })
    }

    /// Applies the form to `existing`, keeping its id, author and creation time.
    pub fn revise(
        &self,
        existing: &Post,
        status: PostStatus,
        now: DateTime<Utc>,
    ) -> Result<Post, EditorError> {
        let title = self.checked_title()?;
        Ok(Post {
            id: existing.id.clone(),
            title: title.to_string(),
            slug: self.resolve_slug(title, now),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            cover_image: self.cover_image(),
            tags: parse_tags(&self.tags),
            status,
            author: existing.author.clone(),
            created_at: existing.created_at,
            updated_at: now,
            read_time_minutes: read_time_minutes(&self.content),
        })
    }

    /// Prefills the form from a stored post.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            slug: post.slug.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            tags: post.tags.join(", "),
            cover_image: post.cover_image.clone().unwrap_or_default(),
        }
    }

    fn checked_title(&self) -> Result<&str, EditorError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(EditorError::TitleRequired);
        }
        Ok(title)
    }

    fn resolve_slug(&self, title: &str, now: DateTime<Utc>) -> String {
        let slug = self.slug.trim();
        if !slug.is_empty() {
            return slug.to_string();
        }
        let derived = slugify(title);
        if derived.is_empty() {
            format!("post-{}", now.timestamp_millis())
        } else {
            derived
        }
    }

    fn cover_image(&self) -> Option<String> {
        let url = self.cover_image.trim();
        (!url.is_empty()).then(|| url.to_string())
    }
}

/// Partial form input: `None` keeps whatever the draft already holds.
#[derive(Debug, Clone, Default)]
pub struct DraftEdits {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
    pub cover_image: Option<String>,
}

impl DraftEdits {
    /// Overlays the given fields on `draft`.
    pub fn apply(self, mut draft: PostDraft) -> PostDraft {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(slug) = self.slug {
            draft.slug = slug;
        }
        if let Some(excerpt) = self.excerpt {
            draft.excerpt = excerpt;
        }
        if let Some(content) = self.content {
            draft.content = content;
        }
        if let Some(tags) = self.tags {
            draft.tags = tags;
        }
        if let Some(cover_image) = self.cover_image {
            draft.cover_image = cover_image;
        }
        draft
    }

    /// Form for a new post, unset fields left blank.
    pub fn into_draft(self) -> PostDraft {
        self.apply(PostDraft::default())
    }
}

/// Lowercases `title` and collapses every run of characters outside
/// `[a-z0-9]` into a single dash, trimming dashes at either end.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::seed::admin_user;

    fn draft(title: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            content: "Some words here".to_string(),
            tags: " Rust, , Web ,Rust".to_string(),
            ..PostDraft::default()
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  --Rust 2024 édition-- "), "rust-2024-dition");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_parse_tags_trims_and_keeps_duplicates() {
        assert_eq!(parse_tags(" Rust, , Web ,Rust"), vec!["Rust", "Web", "Rust"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_compose_requires_title() {
        let err = draft("   ")
            .compose(&admin_user(), PostStatus::Draft, Utc::now())
            .unwrap_err();
        assert!(matches!(err, EditorError::TitleRequired));
    }

    #[test]
    fn test_compose_derives_fields() {
        let now = Utc::now();
        let post = draft("Hello World")
            .compose(&admin_user(), PostStatus::Published, now)
            .unwrap();

        assert!(post.id.starts_with("p_"));
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.tags, vec!["Rust", "Web", "Rust"]);
        assert_eq!(post.cover_image, None);
        assert_eq!(post.read_time_minutes, 1);
        assert_eq!(post.created_at, now);
        assert_eq!(post.updated_at, now);
        assert_eq!(post.author, admin_user());
    }

    #[test]
    fn test_compose_falls_back_when_title_has_no_slug_chars() {
        let now = Utc::now();
        let post = draft("???")
            .compose(&admin_user(), PostStatus::Draft, now)
            .unwrap();
        assert_eq!(post.slug, format!("post-{}", now.timestamp_millis()));
    }

    #[test]
    fn test_revise_keeps_identity() {
        let created = Utc::now() - chrono::Duration::days(1);
        let original = draft("First")
            .compose(&admin_user(), PostStatus::Draft, created)
            .unwrap();

        let mut form = PostDraft::from_post(&original);
        form.title = "Second".to_string();
        let now = Utc::now();
        let revised = form.revise(&original, PostStatus::Published, now).unwrap();

        assert_eq!(revised.id, original.id);
        assert_eq!(revised.slug, "first");
        assert_eq!(revised.created_at, created);
        assert_eq!(revised.updated_at, now);
        assert_eq!(revised.status, PostStatus::Published);
    }

    #[test]
    fn test_title_only_edit_keeps_stored_fields() {
        let created = Utc::now() - chrono::Duration::days(2);
        let mut form = draft("Original Title");
        form.slug = "original-url".to_string();
        form.excerpt = "Short summary".to_string();
        form.cover_image = "https://example.com/c.png".to_string();
        let original = form
            .compose(&admin_user(), PostStatus::Published, created)
            .unwrap();

        let edits = DraftEdits {
            title: Some("A Better Title".to_string()),
            ..DraftEdits::default()
        };
        let merged = edits.apply(PostDraft::from_post(&original));
        let revised = merged
            .revise(&original, PostStatus::Published, Utc::now())
            .unwrap();

        assert_eq!(revised.title, "A Better Title");
        assert_eq!(revised.slug, "original-url");
        assert_eq!(revised.excerpt, original.excerpt);
        assert_eq!(revised.content, original.content);
        assert_eq!(revised.tags, original.tags);
        assert_eq!(revised.cover_image, original.cover_image);
    }

    #[test]
    fn test_edits_into_draft_leaves_unset_fields_blank() {
        let form = DraftEdits {
            title: Some("Fresh".to_string()),
            tags: Some("a, b".to_string()),
            ..DraftEdits::default()
        }
        .into_draft();

        assert_eq!(form.title, "Fresh");
        assert_eq!(form.tags, "a, b");
        assert!(form.slug.is_empty());
        assert!(form.content.is_empty());
    }
}
