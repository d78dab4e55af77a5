//! One-shot seeder: fetch a JSON feed of posts and insert them into
//! the blog database.
//!
//! The feed's `author` field is a plain string, so each distinct
//! author is found-or-created as a real user row under a synthetic
//! `@seed.invalid` email. Records whose title already exists are
//! skipped, which makes re-runs harmless.

use serde::Deserialize;

use migration::{Migrator, MigratorTrait};
use quill_core::domain::{NewPost, NewUser, User};
use quill_core::error::RepoError;
use quill_core::ports::{AuthError, PasswordService, PostRepository, UserRepository};
use quill_infra::auth::Argon2PasswordService;
use quill_infra::database::{self, DatabaseConfig, SeaOrmPostRepository, SeaOrmUserRepository};

const DEFAULT_FEED_URL: &str = "https://api.npoint.io/2cf48b7cb1b51c287265";

/// One record of the external feed.
#[derive(Debug, Deserialize)]
struct FeedPost {
    title: String,
    subtitle: String,
    date: String,
    body: String,
    author: String,
    image_url: String,
}

#[derive(Debug, thiserror::Error)]
enum SeedError {
    #[error("feed fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("database error: {0}")]
    Connect(#[from] sea_orm::DbErr),

    #[error("repository error: {0}")]
    Repo(#[from] RepoError),

    #[error("password hashing error: {0}")]
    Hash(#[from] AuthError),
}

/// Synthetic email for a feed author, stable across runs so re-seeding
/// reuses the same user row.
fn author_email(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("author");
    }
    format!("{slug}@seed.invalid")
}

async fn find_or_create_author(
    users: &SeaOrmUserRepository,
    passwords: &Argon2PasswordService,
    name: &str,
) -> Result<User, SeedError> {
    let email = author_email(name);

    if let Some(existing) = users.find_by_email(&email).await? {
        return Ok(existing);
    }

    // Nobody ever logs in as a feed author; give the row an
    // unguessable throwaway password.
    let throwaway = format!("{:032x}{:032x}", rand::random::<u128>(), rand::random::<u128>());
    let user = users
        .insert(NewUser {
            name: name.to_string(),
            email,
            password_hash: passwords.hash(&throwaway)?,
            is_admin: false,
        })
        .await?;

    tracing::info!(user_id = user.id, author = name, "Created feed author");
    Ok(user)
}

async fn run() -> Result<(), SeedError> {
    let feed_url =
        std::env::var("SEED_FEED_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string());

    let db_config = DatabaseConfig {
        url: std::env::var("DATABASE_URL").unwrap_or_else(|_| DatabaseConfig::default().url),
        ..DatabaseConfig::default()
    };

    let db = database::connect(&db_config).await?;
    Migrator::up(&db, None).await?;

    tracing::info!(url = %feed_url, "Fetching feed");
    let records: Vec<FeedPost> = reqwest::get(&feed_url)
        .await?
        .error_for_status()?
        .json()
        .await?;
    tracing::info!(count = records.len(), "Feed fetched");

    let users = SeaOrmUserRepository::new(db.clone());
    let posts = SeaOrmPostRepository::new(db);
    let passwords = Argon2PasswordService::new();

    let mut inserted = 0usize;
    let mut skipped = 0usize;

    for record in records {
        if posts.find_by_title(&record.title).await?.is_some() {
            tracing::warn!(title = %record.title, "Title already present, skipping");
            skipped += 1;
            continue;
        }

        let author = find_or_create_author(&users, &passwords, &record.author).await?;

        let post = posts
            .insert(NewPost {
                author_id: author.id,
                title: record.title,
                subtitle: record.subtitle,
                // Feed dates are stored verbatim.
                date: record.date,
                body: record.body,
                img_url: record.image_url,
            })
            .await?;

        tracing::info!(post_id = post.id, title = %post.title, "Post seeded");
        inserted += 1;
    }

    tracing::info!(inserted, skipped, "Seeding complete");
    Ok(())
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,seeder=debug")),
        )
        .init();

    match run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Seeding failed: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_emails_are_stable_slugs() {
        assert_eq!(author_email("Angela Yu"), "angela-yu@seed.invalid");
        assert_eq!(author_email("  J. R. R. Tolkien "), "j-r-r-tolkien@seed.invalid");
        assert_eq!(author_email("Angela Yu"), author_email("angela yu"));
        assert_eq!(author_email("!!!"), "author@seed.invalid");
    }

    #[test]
    fn feed_records_decode() {
        let json = r#"[{
            "title": "The Life of Cactus",
            "subtitle": "Who knew that cacti lived such interesting lives.",
            "date": "October 20, 2020",
            "body": "Cacti are adapted to live in very dry environments.",
            "author": "Angela Yu",
            "image_url": "https://example.com/cactus.jpg"
        }]"#;

        let records: Vec<FeedPost> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "The Life of Cactus");
        assert_eq!(records[0].image_url, "https://example.com/cactus.jpg");
        assert_eq!(records[0].date, "October 20, 2020");
    }
}
