//! Comment handlers: public submission, moderator approval and removal.

use actix_web::{HttpResponse, web};

use quill_core::domain::Comment;
use quill_core::ports::{BaseRepository, CommentRepository};
use quill_shared::dto::{CommentResponse, FormField, FormResponse};
use quill_shared::forms::CommentForm;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult, redirect};
use crate::state::AppState;

use super::posts::{detail_url, load_post};

pub(crate) fn comment_response(comment: Comment) -> CommentResponse {
    CommentResponse {
        id: comment.id,
        post_id: comment.post_id,
        author: comment.author,
        text: comment.text,
        created_date: comment.created_date.to_rfc3339(),
        approved_comment: comment.approved_comment,
    }
}

async fn load_comment(state: &AppState, id: i64) -> Result<Comment, AppError> {
    state
        .comments
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Comment {id} not found")))
}

/// GET /post/{id}/comment/
///
/// Open to everyone; commenting needs no account.
pub async fn new_form(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    load_post(&state, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(FormResponse::new(
        "comment",
        vec![FormField::required("author"), FormField::required("text")],
    )))
}

/// POST /post/{id}/comment/
///
/// The parent post comes from the path, never from the body. New comments
/// start unapproved.
pub async fn create(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<CommentForm>,
) -> AppResult<HttpResponse> {
    let post = load_post(&state, path.into_inner()).await?;
    let input = body.validate()?;

    let comment = state
        .comments
        .save(Comment::new(post.id, input.author, input.text))
        .await?;

    tracing::info!(comment_id = comment.id, post_id = post.id, "Comment added");
    Ok(redirect(&detail_url(post.id)))
}

/// GET /comment/{id}/approve/
///
/// Login required. Approving twice is harmless.
pub async fn approve(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let mut comment = load_comment(&state, path.into_inner()).await?;

    comment.approve();
    let comment = state.comments.save(comment).await?;

    tracing::info!(
        comment_id = comment.id,
        moderator = %identity.username,
        "Comment approved"
    );
    Ok(redirect(&detail_url(comment.post_id)))
}

/// GET /comment/{id}/remove/
///
/// Login required.
pub async fn remove(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let comment = load_comment(&state, path.into_inner()).await?;

    state.comments.delete(comment.id).await?;

    tracing::info!(
        comment_id = comment.id,
        moderator = %identity.username,
        "Comment removed"
    );
    Ok(redirect(&detail_url(comment.post_id)))
}
