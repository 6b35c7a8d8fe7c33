//! Full application tests
//!
//! Builds the app exactly as `HttpServer` serves it and drives it with
//! actix's test harness.

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test::{call_service, init_service, read_body_json, TestRequest};
    use actix_web::web;
    use role_guard::config::Config;
    use role_guard::server::middleware::{ActorResolver, HeaderActorResolver};
    use role_guard::server::{AppState, HttpServer, ServerBuilder};
    use std::sync::Arc;

    use crate::common::{assert_unauthorized, sample_config, ROLES_HEADER};

    fn app_parts(config: Config) -> (web::Data<AppState>, Arc<dyn ActorResolver>) {
        let resolver: Arc<dyn ActorResolver> =
            Arc::new(HeaderActorResolver::new(&config.guard.actor_header).unwrap());
        (web::Data::new(AppState::new(config)), resolver)
    }

    fn request(method: &str, uri: &str, roles: Option<&str>) -> TestRequest {
        let req = match method {
            "POST" => TestRequest::post(),
            _ => TestRequest::get(),
        }
        .uri(uri);
        match roles {
            Some(roles) => req.insert_header((ROLES_HEADER, roles)),
            None => req,
        }
    }

    #[test]
    fn test_builder_requires_config() {
        assert!(ServerBuilder::new().build().is_err());
        assert!(ServerBuilder::new().with_config(sample_config()).build().is_ok());
    }

    #[test]
    fn test_server_rejects_invalid_config() {
        let mut config = sample_config();
        config.guard.actor_header = "bad header".to_string();

        assert!(HttpServer::new(&config).is_err());
    }

    #[actix_web::test]
    async fn test_health_is_public() {
        let (state, resolver) = app_parts(sample_config());
        let app = init_service(HttpServer::create_app(state, resolver)).await;

        let resp = call_service(&app, request("GET", "/health", None).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "healthy");
        assert_eq!(body["data"]["guarded_routes"], 2);
    }

    #[actix_web::test]
    async fn test_version_is_public() {
        let (state, resolver) = app_parts(sample_config());
        let app = init_service(HttpServer::create_app(state, resolver)).await;

        let resp = call_service(&app, request("GET", "/version", None).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = read_body_json(resp).await;
        assert_eq!(body["data"]["version"], role_guard::VERSION);
    }

    #[actix_web::test]
    async fn test_admin_dashboard_requires_admin() {
        let (state, resolver) = app_parts(sample_config());
        let app = init_service(HttpServer::create_app(state, resolver)).await;

        let resp = call_service(
            &app,
            request("GET", "/admin/dashboard", Some("admin")).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = call_service(
            &app,
            request("GET", "/admin/dashboard", Some("editor")).to_request(),
        )
        .await;
        assert_unauthorized(resp).await;

        let resp =
            call_service(&app, request("GET", "/admin/dashboard", None).to_request()).await;
        assert_unauthorized(resp).await;
    }

    #[actix_web::test]
    async fn test_posts_accept_admin_or_editor() {
        let (state, resolver) = app_parts(sample_config());
        let app = init_service(HttpServer::create_app(state, resolver)).await;

        for roles in ["admin", "editor", "viewer, editor"] {
            let resp =
                call_service(&app, request("GET", "/posts", Some(roles)).to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK, "roles: {}", roles);
        }

        let resp =
            call_service(&app, request("GET", "/posts", Some("viewer")).to_request()).await;
        assert_unauthorized(resp).await;
    }

    #[actix_web::test]
    async fn test_create_post_result_passes_through() {
        let (state, resolver) = app_parts(sample_config());
        let app = init_service(HttpServer::create_app(state, resolver)).await;

        let req = request("POST", "/posts", Some("editor"))
            .set_json(serde_json::json!({"title": "Hello", "body": "World"}))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = read_body_json(resp).await;
        assert_eq!(body["data"]["title"], "Hello");
        assert_eq!(body["data"]["body"], "World");
    }

    #[actix_web::test]
    async fn test_denied_post_is_not_processed() {
        let (state, resolver) = app_parts(sample_config());
        let app = init_service(HttpServer::create_app(state, resolver)).await;

        // An invalid body would yield 400 if the handler ran.
        let req = request("POST", "/posts", Some("viewer"))
            .set_payload("not json")
            .to_request();
        let resp = call_service(&app, req).await;
        assert_unauthorized(resp).await;
    }

    #[actix_web::test]
    async fn test_unknown_path_is_not_guarded() {
        let (state, resolver) = app_parts(sample_config());
        let app = init_service(HttpServer::create_app(state, resolver)).await;

        let resp =
            call_service(&app, request("GET", "/administrator", None).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_encoded_paths_are_guarded_like_plain_ones() {
        let (state, resolver) = app_parts(sample_config());
        let app = init_service(HttpServer::create_app(state, resolver)).await;

        let resp = call_service(
            &app,
            request("GET", "/%61dmin/dashboard", Some("editor")).to_request(),
        )
        .await;
        assert_unauthorized(resp).await;

        let resp = call_service(
            &app,
            request("GET", "/%61dmin/dashboard", Some("admin")).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = request("POST", "/p%6Fsts", Some("viewer"))
            .set_payload("not json")
            .to_request();
        assert_unauthorized(call_service(&app, req).await).await;

        let resp = call_service(
            &app,
            request("GET", "/admin%2Fdashboard", Some("admin")).to_request(),
        )
        .await;
        assert_unauthorized(resp).await;
    }
}
