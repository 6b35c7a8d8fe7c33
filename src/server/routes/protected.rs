//! Handlers behind the route guard
//!
//! None of these check roles themselves. They rely on
//! `RouteGuardMiddleware` having authorized the request and stored the
//! caller's [`Principal`].

use crate::auth::rbac::Principal;
use crate::server::routes::ApiResponse;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Configure protected routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin/dashboard", web::get().to(admin_dashboard))
        .service(
            web::resource("/posts")
                .route(web::get().to(list_posts))
                .route(web::post().to(create_post)),
        );
}

/// New post payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Post as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    pub title: String,
    pub body: String,
    pub author: Option<String>,
}

/// Admin landing page data
async fn admin_dashboard(principal: Principal) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(serde_json::json!({
        "section": "admin",
        "principal": principal,
    })))
}

async fn list_posts(principal: Principal) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(serde_json::json!({
        "posts": Vec::<PostView>::new(),
        "viewer": principal.subject,
    })))
}

async fn create_post(principal: Principal, post: web::Json<NewPost>) -> HttpResponse {
    let post = post.into_inner();
    info!(title = %post.title, "Post created");

    HttpResponse::Created().json(ApiResponse::success(PostView {
        title: post.title,
        body: post.body,
        author: principal.subject,
    }))
}
