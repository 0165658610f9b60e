//! Built-in identity and the default posts written into an empty substrate.

use chrono::{DateTime, Duration, Utc};

use crate::domain::post::{Post, PostStatus};
use crate::domain::user::{Role, User};

pub const ADMIN_ID: &str = "u_1";

/// The single author identity shipped with the blog.
pub fn admin_user() -> User {
    User {
        id: ADMIN_ID.to_string(),
        name: "Alex Dev".to_string(),
        email: "alex@lumina.dev".to_string(),
        avatar: Some("https://picsum.photos/200".to_string()),
        role: Role::Admin,
    }
}

const RSC_CONTENT: &str = r#"# The Future of React Server Components

React Server Components (RSC) represent a paradigm shift in how we build React applications. By moving component rendering to the server, we can reduce bundle sizes and improve initial load performance.

## Why RSC?

1. **Zero Bundle Size**: Server components don't add to your JS bundle.
2. **Direct Database Access**: Query your DB directly inside your component.
3. **Automatic Code Splitting**: The framework handles it for you.

```tsx
// Example of a Server Component
async function Notes() {
  const notes = await db.notes.getAll();
  return (
    <div>
      {notes.map(note => (
        <Note key={note.id} note={note} />
      ))}
    </div>
  );
}
```

## Conclusion

The transition might be tricky, but the performance gains are undeniable.
"#;

const DARK_MODE_CONTENT: &str = r#"# Designing for Dark Mode

Dark mode is more than just inverting colors. It requires careful consideration of contrast, saturation, and depth.

> "Dark mode isn't just about black backgrounds. It's about reducing luminance while maintaining hierarchy."

## Key Principles

- **Avoid Pure Black**: Use dark greys (e.g., #121212) to reduce eye strain.
- **Desaturate Colors**: Bright colors vibrate against dark backgrounds.
- **Elevation**: Use lighter shades of grey to show depth instead of shadows.

## CSS Variables Strategy

Using CSS variables makes switching themes seamless.

```css
:root {
  --bg-primary: #ffffff;
  --text-primary: #121212;
}

[data-theme="dark"] {
  --bg-primary: #121212;
  --text-primary: #ffffff;
}
```
"#;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

/// Default collection, newest first, with timestamps relative to `now`.
pub fn seed_posts(now: DateTime<Utc>) -> Vec<Post> {
    let author = admin_user();
    let two_days_ago = now - Duration::days(2);
    let five_days_ago = now - Duration::days(5);

    vec![
        Post {
            id: "p_1".to_string(),
            title: "The Future of React Server Components".to_string(),
            slug: "future-react-server-components".to_string(),
            excerpt: "Exploring how RSCs are changing the landscape of frontend development and what it means for the next generation of web apps.".to_string(),
            content: RSC_CONTENT.to_string(),
            cover_image: Some("https://picsum.photos/800/400?random=1".to_string()),
            tags: tags(&["React", "Frontend", "Performance"]),
            status: PostStatus::Published,
            author: author.clone(),
            created_at: two_days_ago,
            updated_at: two_days_ago,
            read_time_minutes: 5,
        },
        Post {
            id: "p_2".to_string(),
            title: "Designing for Dark Mode".to_string(),
            slug: "designing-for-dark-mode".to_string(),
            excerpt: "Best practices for implementing accessible and visually appealing dark themes in modern web applications.".to_string(),
            content: DARK_MODE_CONTENT.to_string(),
            cover_image: Some("https://picsum.photos/800/400?random=2".to_string()),
            tags: tags(&["Design", "UI/UX", "CSS"]),
            status: PostStatus::Published,
            author: author.clone(),
            created_at: five_days_ago,
            updated_at: five_days_ago,
            read_time_minutes: 3,
        },
        Post {
            id: "p_3".to_string(),
            title: "My Draft on Microservices".to_string(),
            slug: "draft-microservices".to_string(),
            excerpt: "Thoughts on when to split the monolith...".to_string(),
            content: "# Microservices\n\nTo be written...".to_string(),
            cover_image: None,
            tags: tags(&["Backend", "Architecture"]),
            status: PostStatus::Draft,
            author,
            created_at: now,
            updated_at: now,
            read_time_minutes: 1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique_and_attributed_to_admin() {
        let posts = seed_posts(Utc::now());
        let ids: HashSet<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), posts.len());
        assert!(posts.iter().all(|p| p.author == admin_user()));
    }

    #[test]
    fn test_seed_mixes_published_and_draft() {
        let posts = seed_posts(Utc::now());
        assert_eq!(posts.iter().filter(|p| p.is_published()).count(), 2);
        assert_eq!(posts[2].status, PostStatus::Draft);
    }
}
