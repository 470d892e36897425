//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Users are seeded
//! directly into the database because provisioning belongs to the
//! external identity provider, not this API. Tokens are minted locally
//! with the shared test secret.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use blog_common::Claims;
use blog_core::Role;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A seeded user together with a valid bearer token
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub token: String,
}

/// Seed a user row and mint a matching token
pub async fn seed_user(pool: &PgPool, role: Role) -> Result<TestUser> {
    let suffix = unique_suffix();
    // High bit pattern keeps test ids clear of generated snowflakes
    let id = 0x7000_0000_0000_0000_i64 + i64::try_from(suffix)?;
    let username = format!("testuser{suffix}");
    let email = format!("test{suffix}@example.com");

    sqlx::query(
        r#"
        INSERT INTO users (id, username, email, role, verified, created_at, updated_at)
        VALUES ($1, $2, $3, $4, TRUE, NOW(), NOW())
        "#,
    )
    .bind(id)
    .bind(&username)
    .bind(&email)
    .bind(role.as_str())
    .execute(pool)
    .await?;

    let token = mint_token(id, role)?;

    Ok(TestUser {
        id,
        username,
        role,
        token,
    })
}

/// Remove a seeded user and everything cascading from it
pub async fn delete_user(pool: &PgPool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Mint a token the way the identity provider would
pub fn mint_token(user_id: i64, role: Role) -> Result<String> {
    let secret = std::env::var("TOKEN_SECRET")?;
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        role,
        iat: now,
        exp: now + 900,
    };
    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

// ============================================================================
// Request fixtures
// ============================================================================

/// Create blog request
#[derive(Debug, Serialize)]
pub struct CreateBlogRequest {
    pub title: String,
    pub content: String,
}

impl CreateBlogRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Blog {suffix}"),
            content: "Some test content".to_string(),
        }
    }
}

/// Update blog request (partial)
#[derive(Debug, Serialize)]
pub struct UpdateBlogRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Create or update comment request
#[derive(Debug, Serialize)]
pub struct CommentRequest {
    pub content: String,
}

impl CommentRequest {
    pub fn simple(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

/// Upsert reaction request
#[derive(Debug, Serialize)]
pub struct ReactionRequest {
    pub emoji: String,
}

impl ReactionRequest {
    pub fn emoji(kind: &str) -> Self {
        Self {
            emoji: kind.to_string(),
        }
    }
}

// ============================================================================
// Response fixtures
// ============================================================================

/// Generic data envelope
#[derive(Debug, Deserialize)]
pub struct Data<T> {
    pub data: T,
}

/// Per-emoji reaction count
#[derive(Debug, Deserialize)]
pub struct EmojiCountResponse {
    pub emoji: String,
    pub count: i64,
}

/// Aggregated reaction state
#[derive(Debug, Deserialize)]
pub struct ReactionSummaryResponse {
    pub counts: Vec<EmojiCountResponse>,
    pub total: i64,
}

/// Blog view response
#[derive(Debug, Deserialize)]
pub struct BlogViewResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub comment_count: i64,
    pub reactions: ReactionSummaryResponse,
    #[serde(default)]
    pub current_user_reaction: Option<String>,
    pub is_owner: bool,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub verified: bool,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub blog_id: String,
    pub user_id: String,
    pub content: String,
    #[serde(default)]
    pub author: Option<UserResponse>,
}

/// Reaction response
#[derive(Debug, Deserialize)]
pub struct ReactionResponse {
    pub id: String,
    pub blog_id: String,
    pub user_id: String,
    pub emoji: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
