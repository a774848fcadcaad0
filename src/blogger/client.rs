// ABOUTME: HTTP client for the Blogger v3 API
// ABOUTME: Refreshes an OAuth access token, pages through recent posts, and inserts new posts

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use std::fmt;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use super::error::{BloggerError, Result};
use super::retry::RetryPolicy;
use super::types::{window_start, BlogPost, NewPost, PostList, TokenResponse};
use super::BlogApi;

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/blogger/v3";
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

const READ_TIMEOUT: Duration = Duration::from_secs(30);
const INSERT_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_ERROR_BODY: usize = 500;

#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

pub struct BloggerClient {
    http_client: Client,
    api_base_url: String,
    token_url: String,
    blog_id: String,
    credentials: Credentials,
    retry: RetryPolicy,
    access_token: OnceCell<String>,
}

impl BloggerClient {
    pub fn new(blog_id: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            http_client: Client::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            blog_id: blog_id.into(),
            credentials,
            retry: RetryPolicy::default(),
            access_token: OnceCell::new(),
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn blog_id(&self) -> &str {
        &self.blog_id
    }

    /// Access token from the refresh-token grant, fetched once per client.
    pub async fn access_token(&self) -> Result<&str> {
        let token = self
            .access_token
            .get_or_try_init(|| self.retry.run("token refresh", || self.request_token()))
            .await?;
        Ok(token.as_str())
    }

    async fn request_token(&self) -> Result<String> {
        debug!("Requesting access token from {}", self.token_url);
        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("refresh_token", self.credentials.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ];
        let response = self
            .http_client
            .post(&self.token_url)
            .form(&params)
            .timeout(READ_TIMEOUT)
            .send()
            .await?;
        let response = check_status(response, "token refresh").await?;
        let token: TokenResponse = response.json().await?;
        if token.access_token.is_empty() {
            return Err(BloggerError::InvalidResponse {
                operation: "token refresh".to_string(),
                message: "empty access_token".to_string(),
            });
        }
        Ok(token.access_token)
    }

    fn posts_url(&self) -> String {
        format!("{}/blogs/{}/posts", self.api_base_url, self.blog_id)
    }

    async fn fetch_page(
        &self,
        token: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<PostList> {
        let mut query = vec![
            ("orderBy", "published".to_string()),
            ("fetchBodies", "false".to_string()),
            ("maxResults", max_results.to_string()),
        ];
        if let Some(page_token) = page_token {
            query.push(("pageToken", page_token.to_string()));
        }

        let response = self
            .http_client
            .get(self.posts_url())
            .query(&query)
            .bearer_auth(token)
            .timeout(READ_TIMEOUT)
            .send()
            .await?;
        let response = check_status(response, "list posts").await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl BlogApi for BloggerClient {
    async fn recent_posts(
        &self,
        days: i64,
        max_results: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<BlogPost>> {
        let token = self.access_token().await?;
        let cutoff = window_start(now, days);

        let mut recent = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0;

        loop {
            let page = self
                .retry
                .run("list posts", || {
                    self.fetch_page(token, max_results, page_token.as_deref())
                })
                .await?;
            pages += 1;

            let mut reached_cutoff = false;
            for post in page.items.unwrap_or_default() {
                match post.published_at() {
                    Some(published) if published >= cutoff => recent.push(post),
                    Some(_) => reached_cutoff = true,
                    None => debug!("Skipping post with unreadable publish date: {:?}", post.id),
                }
            }

            match page.next_page_token {
                Some(next) if !reached_cutoff => page_token = Some(next),
                _ => break,
            }
        }

        info!(
            "Found {} post(s) from the last {} day(s) across {} page(s)",
            recent.len(),
            days,
            pages
        );
        Ok(recent)
    }

    async fn insert_post(
        &self,
        title: &str,
        html: &str,
        labels: &[String],
        is_draft: bool,
    ) -> Result<BlogPost> {
        let token = self.access_token().await?;
        let url = format!("{}/", self.posts_url());

        // Not retried: a lost response could otherwise publish the post twice.
        let response = self
            .http_client
            .post(&url)
            .query(&[("isDraft", is_draft.to_string())])
            .bearer_auth(token)
            .json(&NewPost::new(title, html, labels))
            .timeout(INSERT_TIMEOUT)
            .send()
            .await?;
        let response = check_status(response, "insert post").await?;
        let post: BlogPost = response.json().await?;

        info!(
            "Inserted {} '{}' as post {}",
            if is_draft { "draft" } else { "post" },
            title,
            post.id.as_deref().unwrap_or("<unknown>")
        );
        Ok(post)
    }
}

async fn check_status(response: Response, operation: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let mut body = response.text().await.unwrap_or_default();
    if body.len() > MAX_ERROR_BODY {
        let cut = (0..=MAX_ERROR_BODY)
            .rev()
            .find(|i| body.is_char_boundary(*i))
            .unwrap_or(0);
        body.truncate(cut);
    }
    Err(BloggerError::Status {
        operation: operation.to_string(),
        status: status.as_u16(),
        body,
    })
}
