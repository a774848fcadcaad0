// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides temp environments, mock Blogger endpoints, and post fixtures

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use blogwright::blogger::{BloggerClient, Credentials, RetryPolicy};

pub const BLOG_ID: &str = "4242";
pub const ACCESS_TOKEN: &str = "test-access-token";

pub fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-09-20T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub fn post_json(id: &str, title: &str, label: &str, days_ago: i64) -> Value {
    json!({
        "kind": "blogger#post",
        "id": id,
        "title": title,
        "url": format!("https://example.blogspot.com/{}.html", id),
        "published": (fixed_now() - Duration::days(days_ago)).to_rfc3339(),
        "labels": [label]
    })
}

pub fn credentials() -> Credentials {
    Credentials {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        refresh_token: "refresh-token".to_string(),
    }
}

pub fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        initial_delay_ms: 1,
        backoff_multiplier: 1.0,
        max_delay_ms: 5,
    }
}

pub fn posts_path() -> String {
    format!("/v3/blogs/{}/posts", BLOG_ID)
}

/// A client pointed at the mock server.
pub fn client_for(server: &MockServer) -> BloggerClient {
    BloggerClient::new(BLOG_ID, credentials())
        .with_api_base_url(format!("{}/v3", server.uri()))
        .with_token_url(format!("{}/token", server.uri()))
        .with_retry(fast_retry())
}

pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": ACCESS_TOKEN,
            "expires_in": 3599,
            "token_type": "Bearer"
        })))
        .mount(server)
        .await;
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let file = self.path().join(name);
        std::fs::write(&file, contents).expect("Failed to write test file");
        file
    }

    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).expect("Failed to read test file")
    }
}
