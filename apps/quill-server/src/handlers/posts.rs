//! Post handlers: listing, detail, create/edit/remove, drafts, publish.

use actix_web::{HttpResponse, web};

use quill_core::domain::{Permission, Post};
use quill_core::ports::{BaseRepository, PostRepository};
use quill_shared::dto::{
    FormField, FormResponse, PostDetailResponse, PostListResponse, PostResponse,
};
use quill_shared::forms::PostForm;

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult, redirect};
use crate::state::AppState;

use super::comments::comment_response;

pub(crate) fn detail_url(id: i64) -> String {
    format!("/post/{id}/")
}

pub(crate) fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        author_id: post.author_id,
        title: post.title,
        text: post.text,
        created_date: post.created_date.to_rfc3339(),
        published_date: post.published_date.map(|d| d.to_rfc3339()),
    }
}

pub(crate) async fn load_post(state: &AppState, id: i64) -> Result<Post, AppError> {
    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {id} not found")))
}

fn post_form_fields(post: Option<&Post>) -> Vec<FormField> {
    match post {
        Some(post) => vec![
            FormField::required("title").with_value(post.title.clone()),
            FormField::required("text").with_value(post.text.clone()),
        ],
        None => vec![FormField::required("title"), FormField::required("text")],
    }
}

/// GET /
///
/// Published posts only, newest publication first. Drafts never appear here.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_published().await?;

    Ok(HttpResponse::Ok().json(PostListResponse {
        posts: posts.into_iter().map(post_response).collect(),
    }))
}

/// GET /post/{id}/
///
/// The post plus its own comments, oldest first. Unapproved comments are
/// included with `approved_comment = false` so callers can filter.
pub async fn detail(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = load_post(&state, id).await?;
    let comments = state.comments.find_by_post(id).await?;

    Ok(HttpResponse::Ok().json(PostDetailResponse {
        post: post_response(post),
        comments: comments.into_iter().map(comment_response).collect(),
    }))
}

/// GET /post/new/
pub async fn new_form(identity: OptionalIdentity) -> AppResult<HttpResponse> {
    identity.require(Permission::AddPost)?;

    Ok(HttpResponse::Ok().json(FormResponse::new("post", post_form_fields(None))))
}

/// POST /post/new/
///
/// The author is always the session user; client input never sets it.
pub async fn create(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    body: web::Json<PostForm>,
) -> AppResult<HttpResponse> {
    let author = identity.require(Permission::AddPost)?;
    let input = body.validate()?;

    let post = state
        .posts
        .save(Post::new(author.user_id, input.title, input.text))
        .await?;

    tracing::info!(post_id = post.id, author = %author.username, "Post created");
    Ok(redirect(&detail_url(post.id)))
}

/// GET /post/{id}/edit/
pub async fn edit_form(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    identity.require(Permission::ChangePost)?;
    let post = load_post(&state, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(FormResponse::new("post", post_form_fields(Some(&post)))))
}

/// POST /post/{id}/edit/
///
/// Only title and text change; attribution and the creation timestamp stay
/// with the original author.
pub async fn update(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<i64>,
    body: web::Json<PostForm>,
) -> AppResult<HttpResponse> {
    let editor = identity.require(Permission::ChangePost)?;
    let mut post = load_post(&state, path.into_inner()).await?;
    let input = body.validate()?;

    post.title = input.title;
    post.text = input.text;
    let post = state.posts.save(post).await?;

    tracing::info!(post_id = post.id, editor = %editor.username, "Post updated");
    Ok(redirect(&detail_url(post.id)))
}

/// GET,POST /post/{id}/remove/
///
/// Deletes immediately, comments included; there is no confirmation step.
pub async fn remove(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    identity.require(Permission::DeletePost)?;
    let id = path.into_inner();

    state.posts.delete(id).await?;

    tracing::info!(post_id = id, "Post deleted");
    Ok(redirect("/"))
}

/// GET /drafts/
///
/// Any logged-in user may see drafts, oldest creation first.
pub async fn draft_list(
    state: web::Data<AppState>,
    _identity: Identity,
) -> AppResult<HttpResponse> {
    let posts = state.posts.list_drafts().await?;

    Ok(HttpResponse::Ok().json(PostListResponse {
        posts: posts.into_iter().map(post_response).collect(),
    }))
}

/// GET /post/{id}/publish/
///
/// Stamps the publication time. Gated on `change_post`: publishing mutates
/// the post, so it takes the same permission as editing.
pub async fn publish(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let moderator = identity.require(Permission::ChangePost)?;
    let mut post = load_post(&state, path.into_inner()).await?;

    post.publish();
    let post = state.posts.save(post).await?;

    tracing::info!(post_id = post.id, moderator = %moderator.username, "Post published");
    Ok(redirect(&detail_url(post.id)))
}
