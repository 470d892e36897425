//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the migrations applied
//! - Environment variables: DATABASE_URL, TOKEN_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::collections::HashMap;

use blog_core::Role;
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, test_pool, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Blog Tests
// ============================================================================

#[tokio::test]
async fn test_create_blog() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let writer = seed_user(&pool, Role::Writer).await.unwrap();

    let request = CreateBlogRequest::unique();
    let response = server
        .post_auth("/api/v2/blogs", &writer.token, &request)
        .await
        .unwrap();
    let blog: Data<BlogViewResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(blog.data.title, request.title);
    assert_eq!(blog.data.user_id, writer.id.to_string());
    assert_eq!(blog.data.comment_count, 0);
    assert_eq!(blog.data.reactions.total, 0);
    assert!(blog.data.is_owner);

    delete_user(&pool, writer.id).await.unwrap();
}

#[tokio::test]
async fn test_create_blog_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateBlogRequest::unique();

    let response = server.post("/api/v2/blogs", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_create_blog_reader_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let reader = seed_user(&pool, Role::Reader).await.unwrap();

    let request = CreateBlogRequest::unique();
    let response = server
        .post_auth("/api/v2/blogs", &reader.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    delete_user(&pool, reader.id).await.unwrap();
}

#[tokio::test]
async fn test_get_blog_anonymous() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let writer = seed_user(&pool, Role::Writer).await.unwrap();

    let response = server
        .post_auth("/api/v2/blogs", &writer.token, &CreateBlogRequest::unique())
        .await
        .unwrap();
    let created: Data<BlogViewResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Anonymous readers see the view with no ownership or own-reaction state
    let response = server
        .get(&format!("/api/v2/blogs/{}", created.data.id))
        .await
        .unwrap();
    let view: Data<BlogViewResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!view.data.is_owner);
    assert!(view.data.current_user_reaction.is_none());

    delete_user(&pool, writer.id).await.unwrap();
}

#[tokio::test]
async fn test_get_blog_invalid_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v2/blogs/not-a-number").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_blog_by_other_writer_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let owner = seed_user(&pool, Role::Writer).await.unwrap();
    let other = seed_user(&pool, Role::Writer).await.unwrap();

    let response = server
        .post_auth("/api/v2/blogs", &owner.token, &CreateBlogRequest::unique())
        .await
        .unwrap();
    let created: Data<BlogViewResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();

    let update = UpdateBlogRequest {
        title: Some("Hijacked".to_string()),
        content: None,
    };
    let response = server
        .put_auth(
            &format!("/api/v2/blogs/{}", created.data.id),
            &other.token,
            &update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    delete_user(&pool, owner.id).await.unwrap();
    delete_user(&pool, other.id).await.unwrap();
}

#[tokio::test]
async fn test_delete_blog_hides_it() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let writer = seed_user(&pool, Role::Writer).await.unwrap();

    let response = server
        .post_auth("/api/v2/blogs", &writer.token, &CreateBlogRequest::unique())
        .await
        .unwrap();
    let created: Data<BlogViewResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v2/blogs/{}", created.data.id), &writer.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v2/blogs/{}", created.data.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    delete_user(&pool, writer.id).await.unwrap();
}

#[tokio::test]
async fn test_list_blogs_with_search() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let writer = seed_user(&pool, Role::Writer).await.unwrap();

    let marker = format!("needle{}", unique_suffix());
    let request = CreateBlogRequest {
        title: format!("A {marker} in a haystack"),
        content: "searchable".to_string(),
    };
    server
        .post_auth("/api/v2/blogs", &writer.token, &request)
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/v2/blogs?search={marker}"))
        .await
        .unwrap();
    let listing: Data<Vec<BlogViewResponse>> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(listing.data.len(), 1);
    assert!(listing.data[0].title.contains(&marker));

    delete_user(&pool, writer.id).await.unwrap();
}

#[tokio::test]
async fn test_list_blogs_unknown_sort_key() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v2/blogs?sort=loudest").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let writer = seed_user(&pool, Role::Writer).await.unwrap();
    let reader = seed_user(&pool, Role::Reader).await.unwrap();

    let response = server
        .post_auth("/api/v2/blogs", &writer.token, &CreateBlogRequest::unique())
        .await
        .unwrap();
    let blog: Data<BlogViewResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let blog_id = blog.data.id.clone();

    // Readers may comment
    let response = server
        .post_auth(
            &format!("/api/v2/blogs/{blog_id}/comments"),
            &reader.token,
            &CommentRequest::simple("First!"),
        )
        .await
        .unwrap();
    let comment: Data<CommentResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.data.content, "First!");
    assert_eq!(
        comment.data.author.as_ref().map(|a| a.username.clone()),
        Some(reader.username.clone())
    );

    // Comment count shows up in the view
    let response = server
        .get(&format!("/api/v2/blogs/{blog_id}"))
        .await
        .unwrap();
    let view: Data<BlogViewResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(view.data.comment_count, 1);

    // Author may edit
    let response = server
        .put_auth(
            &format!("/api/v2/blogs/{blog_id}/comments/{}", comment.data.id),
            &reader.token,
            &CommentRequest::simple("First! (edited)"),
        )
        .await
        .unwrap();
    let edited: Data<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(edited.data.content, "First! (edited)");

    // Deleting drops it from the count
    let response = server
        .delete_auth(
            &format!("/api/v2/blogs/{blog_id}/comments/{}", comment.data.id),
            &reader.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v2/blogs/{blog_id}"))
        .await
        .unwrap();
    let view: Data<BlogViewResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(view.data.comment_count, 0);

    delete_user(&pool, writer.id).await.unwrap();
    delete_user(&pool, reader.id).await.unwrap();
}

#[tokio::test]
async fn test_comment_blank_body_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let writer = seed_user(&pool, Role::Writer).await.unwrap();

    let response = server
        .post_auth("/api/v2/blogs", &writer.token, &CreateBlogRequest::unique())
        .await
        .unwrap();
    let blog: Data<BlogViewResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Whitespace-only passes length validation but fails the trim check
    let response = server
        .post_auth(
            &format!("/api/v2/blogs/{}/comments", blog.data.id),
            &writer.token,
            &CommentRequest::simple("   "),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    delete_user(&pool, writer.id).await.unwrap();
}

#[tokio::test]
async fn test_update_comment_by_other_user_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let writer = seed_user(&pool, Role::Writer).await.unwrap();
    let other = seed_user(&pool, Role::Reader).await.unwrap();

    let response = server
        .post_auth("/api/v2/blogs", &writer.token, &CreateBlogRequest::unique())
        .await
        .unwrap();
    let blog: Data<BlogViewResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v2/blogs/{}/comments", blog.data.id),
            &writer.token,
            &CommentRequest::simple("mine"),
        )
        .await
        .unwrap();
    let comment: Data<CommentResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/v2/blogs/{}/comments/{}", blog.data.id, comment.data.id),
            &other.token,
            &CommentRequest::simple("not yours"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    delete_user(&pool, writer.id).await.unwrap();
    delete_user(&pool, other.id).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_upsert_replaces() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let writer = seed_user(&pool, Role::Writer).await.unwrap();
    let reader = seed_user(&pool, Role::Reader).await.unwrap();

    let response = server
        .post_auth("/api/v2/blogs", &writer.token, &CreateBlogRequest::unique())
        .await
        .unwrap();
    let blog: Data<BlogViewResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let blog_id = blog.data.id.clone();

    let response = server
        .put_auth(
            &format!("/api/v2/blogs/{blog_id}/reactions"),
            &reader.token,
            &ReactionRequest::emoji("love"),
        )
        .await
        .unwrap();
    let first: Data<ReactionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.data.emoji, "love");

    // Second upsert replaces the emoji without growing the total
    let response = server
        .put_auth(
            &format!("/api/v2/blogs/{blog_id}/reactions"),
            &reader.token,
            &ReactionRequest::emoji("wow"),
        )
        .await
        .unwrap();
    let second: Data<ReactionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second.data.emoji, "wow");
    assert_eq!(second.data.id, first.data.id);

    let response = server
        .get_auth(&format!("/api/v2/blogs/{blog_id}"), &reader.token)
        .await
        .unwrap();
    let view: Data<BlogViewResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(view.data.reactions.total, 1);
    assert_eq!(view.data.current_user_reaction.as_deref(), Some("wow"));

    delete_user(&pool, writer.id).await.unwrap();
    delete_user(&pool, reader.id).await.unwrap();
}

#[tokio::test]
async fn test_reaction_unknown_emoji_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let writer = seed_user(&pool, Role::Writer).await.unwrap();

    let response = server
        .post_auth("/api/v2/blogs", &writer.token, &CreateBlogRequest::unique())
        .await
        .unwrap();
    let blog: Data<BlogViewResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/v2/blogs/{}/reactions", blog.data.id),
            &writer.token,
            &ReactionRequest::emoji("grin"),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(error.error.code, "INVALID_EMOJI");

    delete_user(&pool, writer.id).await.unwrap();
}

#[tokio::test]
async fn test_reaction_remove_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let writer = seed_user(&pool, Role::Writer).await.unwrap();

    let response = server
        .post_auth("/api/v2/blogs", &writer.token, &CreateBlogRequest::unique())
        .await
        .unwrap();
    let blog: Data<BlogViewResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v2/blogs/{}/reactions", blog.data.id);

    server
        .put_auth(&path, &writer.token, &ReactionRequest::emoji("like"))
        .await
        .unwrap();

    let response = server.delete_auth(&path, &writer.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Removing again still succeeds
    let response = server.delete_auth(&path, &writer.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    delete_user(&pool, writer.id).await.unwrap();
}

// ============================================================================
// Bulk Tests
// ============================================================================

#[tokio::test]
async fn test_bulk_blogs_drops_unknown_ids() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let writer = seed_user(&pool, Role::Writer).await.unwrap();

    let response = server
        .post_auth("/api/v2/blogs", &writer.token, &CreateBlogRequest::unique())
        .await
        .unwrap();
    let blog: Data<BlogViewResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/v2/blogs/bulk?ids={}&ids=999", blog.data.id))
        .await
        .unwrap();
    let views: Data<Vec<BlogViewResponse>> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(views.data.len(), 1);
    assert_eq!(views.data[0].id, blog.data.id);

    delete_user(&pool, writer.id).await.unwrap();
}

#[tokio::test]
async fn test_bulk_comments_includes_commentless_blogs() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let writer = seed_user(&pool, Role::Writer).await.unwrap();

    let response = server
        .post_auth("/api/v2/blogs", &writer.token, &CreateBlogRequest::unique())
        .await
        .unwrap();
    let blog: Data<BlogViewResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/v2/blogs/bulk-comments?ids={}", blog.data.id))
        .await
        .unwrap();
    let grouped: Data<HashMap<String, Vec<CommentResponse>>> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(grouped.data.len(), 1);
    assert!(grouped.data.get(&blog.data.id).unwrap().is_empty());

    delete_user(&pool, writer.id).await.unwrap();
}

#[tokio::test]
async fn test_bulk_over_cap_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let ids: Vec<String> = (1..=101).map(|i| format!("ids={i}")).collect();
    let response = server
        .get(&format!("/api/v2/blogs/bulk?{}", ids.join("&")))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(error.error.code, "BULK_SET_TOO_LARGE");
}

#[tokio::test]
async fn test_bulk_invalid_id_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v2/blogs/bulk?ids=abc").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
