use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use blog_store::infrastructure::config::AppConfig;
use blog_store::infrastructure::logging::init_logging;
use blog_store::{
    BlogStore, DraftEdits, FeedQuery, FileStore, PostDraft, PostStatus, PostView, Theme, User,
};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(about = "Read and author posts of a Lumina blog")]
struct Cli {
    /// Store file, overrides BLOG_DATA_PATH.
    #[clap(short, long)]
    data: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the feed.
    List {
        #[clap(long)]
        search: Option<String>,
        #[clap(long)]
        tag: Option<String>,
        /// Include drafts (requires login).
        #[clap(long)]
        all: bool,
    },
    Tags,
    Show {
        slug: String,
    },
    Login {
        #[clap(long)]
        password: String,
    },
    Logout,
    Whoami,
    /// Create a post, or update the one at --id. When updating, omitted
    /// flags keep the stored values.
    Write {
        #[clap(long)]
        id: Option<String>,
        #[clap(long)]
        title: Option<String>,
        #[clap(long)]
        content: Option<String>,
        #[clap(long, conflicts_with = "content")]
        content_file: Option<PathBuf>,
        #[clap(long)]
        slug: Option<String>,
        #[clap(long)]
        excerpt: Option<String>,
        /// Comma separated.
        #[clap(long)]
        tags: Option<String>,
        #[clap(long)]
        cover_image: Option<String>,
        #[clap(long)]
        publish: bool,
    },
    Delete {
        id: String,
    },
    /// Print the theme, or set it.
    Theme {
        theme: Option<Theme>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(path) = args.data {
        config = config.with_data_path(path);
    }

    let substrate = Arc::new(FileStore::new(&config.data_path));
    let store = if config.seed {
        BlogStore::open(substrate)
    } else {
        Ok(BlogStore::new(substrate))
    }
    .with_context(|| format!("failed to open {}", config.data_path.display()))?;

    match args.command {
        Command::List { search, tag, all } => {
            let posts = if all {
                require_admin(&store)?;
                store.list_posts()?
            } else {
                store.feed(&FeedQuery { search, tag })?
            };
            if posts.is_empty() {
                println!("No posts found. Try a different search.");
            }
            for post in posts {
                println!(
                    "- [{}] {} ({}, {} min) /post/{}",
                    post.id, post.title, post.status, post.read_time_minutes, post.slug
                );
            }
        }
        Command::Tags => {
            for tag in store.tags()? {
                println!("{}", tag);
            }
        }
        Command::Show { slug } => match store.view_post(&slug)? {
            Some(PostView { post, .. }) => {
                println!("{}", post.title);
                println!(
                    "by {} on {} | {}",
                    post.author.name,
                    post.created_at.format("%Y-%m-%d"),
                    post.tags.join(", ")
                );
                println!();
                println!("{}", post.content);
            }
            None => bail!("post not found: {}", slug),
        },
        Command::Login { password } => match store.login(&password).await? {
            Some(user) => println!("Successfully logged in as {}", user),
            None => bail!("invalid password"),
        },
        Command::Logout => {
            store.logout()?;
            println!("Logged out.");
        }
        Command::Whoami => match store.current_user()? {
            Some(user) => println!("{} ({})", user, user.role),
            None => println!("Not logged in."),
        },
        Command::Write {
            id,
            title,
            content,
            content_file,
            slug,
            excerpt,
            tags,
            cover_image,
            publish,
        } => {
            let author = require_admin(&store)?;
            let content = match (content, content_file) {
                (Some(text), _) => Some(text),
                (None, Some(path)) => Some(
                    std::fs::read_to_string(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?,
                ),
                (None, None) => None,
            };
            let edits = DraftEdits {
                title,
                slug,
                excerpt,
                content,
                tags,
                cover_image,
            };
            let status = if publish {
                PostStatus::Published
            } else {
                PostStatus::Draft
            };

            let post = match id {
                Some(id) => {
                    let existing = store
                        .list_posts()?
                        .into_iter()
                        .find(|p| p.id == id)
                        .with_context(|| format!("post not found: {}", id))?;
                    let draft = edits.apply(PostDraft::from_post(&existing));
                    store.revise_post(&existing, &draft, status)?
                }
                None => store.publish_draft(&edits.into_draft(), &author, status)?,
            };
            println!("Saved: {}", post);
        }
        Command::Delete { id } => {
            require_admin(&store)?;
            store.delete_post(&id)?;
            println!("Post deleted!");
        }
        Command::Theme { theme } => match theme {
            Some(theme) => {
                store.set_theme(theme)?;
                println!("Theme set to {}", theme);
            }
            None => println!("{}", store.theme()?.unwrap_or_default()),
        },
    }

    Ok(())
}

fn require_admin(store: &BlogStore<FileStore>) -> anyhow::Result<User> {
    match store.current_user()? {
        Some(user) if user.is_admin() => Ok(user),
        _ => bail!("login required: run `blog-cli login --password <password>`"),
    }
}
