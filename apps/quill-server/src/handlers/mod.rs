//! HTTP handlers and route configuration.

mod accounts;
mod comments;
mod pages;
mod posts;

use actix_web::web;

/// Configure all application routes.
///
/// Routes are matched in registration order, so the literal `/post/new/`
/// must come before the `/post/{id}/...` patterns.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Posts
        .route("/", web::get().to(posts::list))
        .route("/drafts/", web::get().to(posts::draft_list))
        .route("/post/new/", web::get().to(posts::new_form))
        .route("/post/new/", web::post().to(posts::create))
        .route("/post/{id}/", web::get().to(posts::detail))
        .route("/post/{id}/edit/", web::get().to(posts::edit_form))
        .route("/post/{id}/edit/", web::post().to(posts::update))
        .route("/post/{id}/remove/", web::get().to(posts::remove))
        .route("/post/{id}/remove/", web::post().to(posts::remove))
        .route("/post/{id}/publish/", web::get().to(posts::publish))
        // Comments
        .route("/post/{id}/comment/", web::get().to(comments::new_form))
        .route("/post/{id}/comment/", web::post().to(comments::create))
        .route("/comment/{id}/approve/", web::get().to(comments::approve))
        .route("/comment/{id}/remove/", web::get().to(comments::remove))
        // Accounts
        .route("/user/new/", web::get().to(accounts::register_form))
        .route("/user/new/", web::post().to(accounts::register))
        .route("/accounts/login/", web::get().to(accounts::login_form))
        .route("/accounts/login/", web::post().to(accounts::login))
        .route("/accounts/logout/", web::get().to(accounts::logout))
        .route("/accounts/logout/", web::post().to(accounts::logout))
        // Pages
        .route("/access_denied/", web::get().to(pages::access_denied))
        .route("/health/", web::get().to(pages::health));
}
