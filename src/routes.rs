// src/routes.rs
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{admin_web, page::serve, web};
use crate::templates::{
    ambulance::AmbulancePage, camp::CampPage, cancer_day::CancerDayPage,
    community_kitchen::CommunityKitchenPage, compassion_home::CompassionHomePage,
    contact::ContactPage, documents::DocumentsPage, donate::DonatePage, gallery::GalleryPage,
    media::MediaCoveragePage, mfi::MfiPage, programs::ProgramsPage, team::TeamPage,
    testimonials::TestimonialsPage, ContentPage,
};
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(state.config.asset_dir.join("assets"));

    Router::new()
        .route("/", get(web::home))
        .route("/about", get(web::about))
        .route("/programs/:id", get(web::program))
        .route("/program/:id", get(web::program_detail))
        // Data-driven pages
        .route(ProgramsPage::PATH, get(serve::<ProgramsPage>))
        .route(DonatePage::PATH, get(serve::<DonatePage>))
        .route(TestimonialsPage::PATH, get(serve::<TestimonialsPage>))
        .route(TeamPage::PATH, get(serve::<TeamPage>))
        .route(ContactPage::PATH, get(serve::<ContactPage>))
        .route(GalleryPage::PATH, get(serve::<GalleryPage>))
        .route(DocumentsPage::PATH, get(serve::<DocumentsPage>))
        .route(MediaCoveragePage::PATH, get(serve::<MediaCoveragePage>))
        // Program pages
        .route(CampPage::PATH, get(serve::<CampPage>))
        .route(AmbulancePage::PATH, get(serve::<AmbulancePage>))
        .route(CompassionHomePage::PATH, get(serve::<CompassionHomePage>))
        .route(CommunityKitchenPage::PATH, get(serve::<CommunityKitchenPage>))
        .route(CancerDayPage::PATH, get(serve::<CancerDayPage>))
        .route(MfiPage::PATH, get(serve::<MfiPage>))
        // Admin
        .route(
            "/admin",
            get(admin_web::login_page).post(admin_web::login_submit),
        )
        .route("/health", get(web::health))
        // Static files
        .nest_service("/assets", assets)
        .fallback(web::not_found)
        .with_state(state)
        .layer(axum::middleware::from_fn(
            crate::middleware::security::security_headers,
        ))
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::storage::testing::MemorySource;
    use crate::services::resources;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use std::time::Duration;
    use tower::ServiceExt;

    const PROGRAMS_JSON: &str = r#"{
        "programs": [{
            "id": "ambulance-services",
            "title": "Ambulance Services",
            "shortDescription": "Free emergency transport",
            "fullDescription": "Round the clock.",
            "icon": "ambulance",
            "image": "/assets/images/ambulance.jpg",
            "features": ["24x7"],
            "stats": [{"value": "1200+", "label": "Trips"}],
            "contactPerson": "Asha",
            "contactEmail": "asha@karuna.org"
        }]
    }"#;

    const FOOTER_JSON: &str = r#"{
        "organization": "Karuna Foundation",
        "phone": "+91 98765 43210",
        "email": "hello@karuna.org",
        "addresses": [{"label": "Head office", "lines": ["12 Temple Road"]}],
        "social": []
    }"#;

    const AMBULANCE_JSON: &str = r#"{
        "title": "Ambulance Services",
        "description": "Free transport",
        "stats": [],
        "cars": [{
            "id": "unit-1",
            "name": "Unit One",
            "registration": "KL-07-1234",
            "images": ["/a.jpg", "/b.jpg", "/c.jpg"]
        }]
    }"#;

    const AMBULANCE_DETAIL_JSON: &str = r#"{
        "id": "ambulance-services",
        "title": "Ambulance Services",
        "tagline": "Help on the way",
        "description": "Free emergency transport.",
        "heroImage": "/assets/images/ambulance.jpg",
        "sections": [{
            "id": "fleet",
            "title": "Fleet",
            "body": "Three vehicles.",
            "images": ["/f1.jpg", "/f2.jpg"]
        }]
    }"#;

    fn app(source: MemorySource) -> Router {
        let config = Config {
            load_deadline: Duration::from_secs(2),
            ..Config::default()
        };
        create_router(Arc::new(AppState::new(config, Arc::new(source))))
    }

    fn fixtures() -> MemorySource {
        MemorySource::new()
            .with_json(resources::PROGRAMS, PROGRAMS_JSON)
            .with_json(resources::FOOTER, FOOTER_JSON)
            .with_json(resources::AMBULANCE, AMBULANCE_JSON)
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_known_program_renders_title() {
        let response = get(app(fixtures()), "/programs/ambulance-services").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Ambulance Services"));
        assert!(html.contains("tel:+919876543210"));
    }

    #[tokio::test]
    async fn test_unknown_program_redirects_to_listing() {
        let response = get(app(fixtures()), "/programs/does-not-exist").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/programs-services");
    }

    #[tokio::test]
    async fn test_missing_detail_document_redirects() {
        let response = get(app(fixtures()), "/program/ambulance-services").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = get(app(fixtures()), "/program/..%2Fsecrets").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_detail_document_renders() {
        let source = fixtures().with_json(
            &resources::program_detail("ambulance-services"),
            AMBULANCE_DETAIL_JSON,
        );
        let response = get(app(source), "/program/ambulance-services?gallery=fleet&image=1").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Help on the way"));
        assert!(html.contains("2 / 2"));
    }

    #[tokio::test]
    async fn test_failed_resource_renders_error_only() {
        let source = fixtures().with_status(resources::TEAM_MEMBERS, 500);
        let response = get(app(source), "/team").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Error loading"));
        assert!(!html.contains("team-grid"));
    }

    #[tokio::test]
    async fn test_failed_contact_info_keeps_page() {
        let source = MemorySource::new()
            .with_json(resources::AMBULANCE, AMBULANCE_JSON)
            .with_status(resources::FOOTER, 500);
        let html = body_text(get(app(source), "/ambulance").await).await;
        assert!(html.contains("Unit One"));
        assert!(!html.contains("tel:"));
    }

    #[tokio::test]
    async fn test_gallery_query_opens_modal() {
        let html = body_text(get(app(fixtures()), "/ambulance?gallery=unit-1&image=2").await).await;
        assert!(html.contains("gallery-modal"));
        assert!(html.contains("3 / 3"));
    }

    #[tokio::test]
    async fn test_malformed_query_uses_default_view() {
        let response = get(app(fixtures()), "/ambulance?page=lots").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Unit One"));
    }

    #[tokio::test]
    async fn test_slow_resource_renders_loading_placeholder() {
        let source = fixtures().with_delay(Duration::from_millis(300));
        let config = Config {
            load_deadline: Duration::from_millis(20),
            ..Config::default()
        };
        let app = create_router(Arc::new(AppState::new(config, Arc::new(source))));
        let html = body_text(get(app, "/ambulance").await).await;
        assert!(html.contains("Loading ambulance"));
        assert!(html.contains(r#"http-equiv="refresh""#));
    }

    #[tokio::test]
    async fn test_health() {
        let response = get(app(fixtures()), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "healthy");
    }

    async fn login(app: Router, form: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri("/admin")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_admin_login() {
        let response = login(app(fixtures()), "username=admin&password=nope").await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body_text(response).await.contains("Invalid username or password"));

        let response = login(app(fixtures()), "username=admin&password=admin123").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Admin Dashboard"));
        assert!(html.contains("/assets/data/programs.json"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404_page() {
        let response = get(app(fixtures()), "/no/such/page").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("/no/such/page"));
    }

    #[tokio::test]
    async fn test_security_headers_on_pages() {
        let response = get(app(fixtures()), "/about").await;
        assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
    }
}
