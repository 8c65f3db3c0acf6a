//! Integration tests for the site backend.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use reqwest::Client;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::config::{Config, LogFormat};
use crate::session::Credentials;
use crate::store::ContentStore;
use crate::{create_router, AppState};

fn test_config() -> Config {
    Config {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        log_level: "warn".to_string(),
        log_format: LogFormat::Pretty,
        admin: Credentials {
            username: "admin".to_string(),
            password: "test-password".to_string(),
        },
        seed_path: None,
    }
}

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
}

impl TestFixture {
    async fn new() -> Self {
        let state = AppState::new(ContentStore::seeded(), test_config());
        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
        }
    }

    /// Fixture with the operator already logged in.
    async fn logged_in() -> Self {
        let fixture = Self::new().await;
        let resp = fixture
            .client
            .post(fixture.url("/api/session/login"))
            .json(&json!({ "username": "admin", "password": "test-password" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        fixture
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> (u16, Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn post(&self, path: &str, body: Value) -> (u16, Value) {
        let resp = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn put(&self, path: &str, body: Value) -> (u16, Value) {
        let resp = self
            .client
            .put(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn delete(&self, path: &str) -> (u16, Value) {
        let resp = self.client.delete(self.url(path)).send().await.unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = create_router(AppState::new(ContentStore::seeded(), test_config()));

    let resp = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_datastore_get() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/datastore").await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["revisionId"], 0);
    assert_eq!(body["data"]["news"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["gallery"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"]["events"][0]["type"], "upcoming");
    assert_eq!(body["data"]["news"][0]["publishDate"], "2024-01-15");
}

#[tokio::test]
async fn test_admin_routes_require_login() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/admin/dashboard").await;
    assert_eq!(status, 401);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let (status, _) = fixture
        .post("/api/admin/programs", json!({ "title": "Sneaky" }))
        .await;
    assert_eq!(status, 401);
}

#[tokio::test]
async fn test_login_logout_flow() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post(
            "/api/session/login",
            json!({ "username": "admin", "password": "wrong" }),
        )
        .await;
    assert_eq!(status, 401);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let (status, body) = fixture
        .post(
            "/api/session/login",
            json!({ "username": "admin", "password": "test-password" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["authenticated"], true);

    let (status, _) = fixture.get("/api/admin/dashboard").await;
    assert_eq!(status, 200);

    let (_, body) = fixture.post("/api/session/logout", json!({})).await;
    assert_eq!(body["data"]["authenticated"], false);

    let (status, _) = fixture.get("/api/admin/dashboard").await;
    assert_eq!(status, 401);
}

#[tokio::test]
async fn test_news_crud_and_public_visibility() {
    let fixture = TestFixture::logged_in().await;

    // Create a draft; the submitted slug is ignored
    let (status, body) = fixture
        .post(
            "/api/admin/news",
            json!({
                "title": "Girls in ICT Day 2024!",
                "slug": "custom-slug",
                "content": "Celebrating young women in tech.",
                "excerpt": "Celebrating young women in tech.",
                "author": "Sarah Mensah",
                "publishDate": "2024-04-25",
                "published": false
            }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["slug"], "girls-in-ict-day-2024");
    assert_eq!(body["revisionId"], 1);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    // Newest first in the admin list
    let (_, body) = fixture.get("/api/admin/news").await;
    assert_eq!(body["data"][0]["id"], id.as_str());
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    // Drafts are hidden from the public
    let (_, body) = fixture.get("/api/news").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    let (status, _) = fixture.get("/api/news/girls-in-ict-day-2024").await;
    assert_eq!(status, 404);

    // Publish it
    let (_, body) = fixture
        .post(&format!("/api/admin/news/{}/toggle-published", id), json!({}))
        .await;
    assert_eq!(body["data"]["published"], true);

    let (status, body) = fixture.get("/api/news/girls-in-ict-day-2024").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["post"]["id"], id.as_str());
    assert_eq!(body["data"]["related"].as_array().unwrap().len(), 2);

    // Title edits keep the slug
    let (_, body) = fixture
        .put(
            &format!("/api/admin/news/{}", id),
            json!({ "title": "Girls in ICT Day" }),
        )
        .await;
    assert_eq!(body["data"]["title"], "Girls in ICT Day");
    assert_eq!(body["data"]["slug"], "girls-in-ict-day-2024");

    let (_, body) = fixture.get("/api/news/latest?limit=1").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["id"], id.as_str());

    // Delete, then delete again as a no-op
    let (_, body) = fixture.delete(&format!("/api/admin/news/{}", id)).await;
    assert_eq!(body["data"]["removed"], true);
    let revision = body["revisionId"].as_u64().unwrap();

    let (status, body) = fixture.delete(&format!("/api/admin/news/{}", id)).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["removed"], false);
    assert_eq!(body["revisionId"].as_u64().unwrap(), revision);
}

#[tokio::test]
async fn test_update_unknown_id_is_noop() {
    let fixture = TestFixture::logged_in().await;

    let (status, body) = fixture
        .put("/api/admin/events/missing", json!({ "title": "Ghost" }))
        .await;
    assert_eq!(status, 200);
    assert!(body["data"].is_null());
    assert_eq!(body["revisionId"], 0);
}

#[tokio::test]
async fn test_create_requires_title() {
    let fixture = TestFixture::logged_in().await;

    let (status, body) = fixture
        .post(
            "/api/admin/programs",
            json!({ "title": "   ", "date": "2024-05-01", "status": "upcoming" }),
        )
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_rejects_blank_title() {
    let fixture = TestFixture::logged_in().await;

    for path in [
        "/api/admin/news/1",
        "/api/admin/programs/1",
        "/api/admin/events/1",
    ] {
        let (status, body) = fixture.put(path, json!({ "title": "  " })).await;
        assert_eq!(status, 400, "{}", path);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["revisionId"], 0);
    }

    let (_, body) = fixture.get("/api/admin/programs").await;
    assert_eq!(body["data"][0]["title"], "Robotics Bootcamp");
}

#[tokio::test]
async fn test_empty_patch_keeps_revision() {
    let fixture = TestFixture::logged_in().await;

    let (status, body) = fixture.put("/api/admin/news/1", json!({})).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["id"], "1");
    assert_eq!(body["revisionId"], 0);
}

#[tokio::test]
async fn test_programs_filter_scenario() {
    let fixture = TestFixture::logged_in().await;

    let (status, body) = fixture.get("/api/programs").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["total"], 3);
    assert_eq!(
        body["data"]["categories"],
        json!(["all", "Robotics", "Programming", "Exhibition"])
    );
    assert_eq!(
        body["data"]["statuses"],
        json!(["all", "ongoing", "completed", "upcoming"])
    );

    let (_, body) = fixture.get("/api/programs?status=upcoming&q=").await;
    assert_eq!(body["data"]["total"], 1);
    let id = body["data"]["programs"][0]["id"].as_str().unwrap().to_string();

    let (_, body) = fixture
        .get("/api/programs?q=SCRATCH&category=Programming&status=all")
        .await;
    assert_eq!(body["data"]["programs"][0]["title"], "Coding for Kids");

    fixture.delete(&format!("/api/admin/programs/{}", id)).await;

    let (_, body) = fixture.get("/api/programs?status=upcoming").await;
    assert_eq!(body["data"]["total"], 0);
    assert_eq!(
        body["data"]["categories"],
        json!(["all", "Robotics", "Programming"])
    );

    let (status, body) = fixture.get("/api/programs?status=paused").await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_events_tabs() {
    let fixture = TestFixture::logged_in().await;

    let (_, body) = fixture.get("/api/events").await;
    assert_eq!(body["data"]["tab"], "upcoming");
    assert_eq!(body["data"]["events"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["events"][0]["isSoon"], false);

    let (_, body) = fixture.get("/api/events?tab=past").await;
    assert!(body["data"]["events"].as_array().unwrap().is_empty());

    // Move an event to the past tab; its date is untouched
    fixture
        .put("/api/admin/events/1", json!({ "type": "past" }))
        .await;
    let (_, body) = fixture.get("/api/events?tab=past").await;
    assert_eq!(body["data"]["events"][0]["id"], "1");
    assert_eq!(body["data"]["events"][0]["date"], "2024-02-20");

    let (status, _) = fixture.get("/api/events?tab=someday").await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_gallery_lightbox_flow() {
    let fixture = TestFixture::new().await;

    let (_, body) = fixture.get("/api/gallery").await;
    assert_eq!(body["data"]["selectedProgram"], "all");
    assert_eq!(body["data"]["images"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"]["lightbox"]["state"], "closed");
    let last_url = body["data"]["images"][2]["url"].as_str().unwrap().to_string();

    // Open the last image and wrap forward
    let (_, body) = fixture
        .post("/api/gallery/lightbox/open", json!({ "url": last_url }))
        .await;
    assert_eq!(body["data"]["index"], 2);
    assert_eq!(body["data"]["position"], 3);

    let (_, body) = fixture.post("/api/gallery/lightbox/next", json!({})).await;
    assert_eq!(body["data"]["index"], 0);

    let (_, body) = fixture
        .post("/api/gallery/lightbox/key", json!({ "key": "ArrowLeft" }))
        .await;
    assert_eq!(body["data"]["index"], 2);

    // Changing the filter closes the lightbox
    let (_, body) = fixture
        .put(
            "/api/gallery/filter",
            json!({ "program": "Coding for Kids" }),
        )
        .await;
    assert_eq!(body["data"]["images"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["lightbox"]["state"], "closed");

    // The last image is filtered out now
    let (status, body) = fixture
        .post("/api/gallery/lightbox/open", json!({ "url": last_url }))
        .await;
    assert_eq!(status, 422);
    assert_eq!(body["error"]["code"], "INVALID_OPEN_TARGET");

    let (_, body) = fixture
        .post("/api/gallery/lightbox/key", json!({ "key": "Escape" }))
        .await;
    assert_eq!(body["data"]["state"], "closed");
}

#[tokio::test]
async fn test_dashboard_stats() {
    let fixture = TestFixture::logged_in().await;

    fixture
        .post("/api/admin/news/1/toggle-published", json!({}))
        .await;

    let (_, body) = fixture.get("/api/admin/dashboard").await;
    assert_eq!(body["data"]["stats"]["totalNews"], 2);
    assert_eq!(body["data"]["stats"]["publishedNews"], 1);
    assert_eq!(body["data"]["stats"]["totalPrograms"], 3);
    assert_eq!(body["data"]["stats"]["upcomingEvents"], 2);
}

#[tokio::test]
async fn test_revision_reflects_writes() {
    let fixture = TestFixture::logged_in().await;

    let (_, body) = fixture.get("/api/datastore/revision").await;
    assert_eq!(body["data"]["revisionId"], 0);

    fixture
        .post(
            "/api/admin/events",
            json!({
                "title": "Coding Club",
                "date": "2024-08-01",
                "type": "upcoming"
            }),
        )
        .await;

    let (_, body) = fixture.get("/api/datastore/revision").await;
    assert_eq!(body["data"]["revisionId"], 1);

    let (_, body) = fixture.get("/api/team").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["revisionId"], 1);
}
