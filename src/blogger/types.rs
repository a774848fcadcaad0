// ABOUTME: Blogger v3 API payload types
// ABOUTME: Posts, post listings, new-post bodies, and OAuth token responses

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Start of a look-back window of `days` ending at `now`. Negative windows
/// are empty and windows reaching past the calendar start saturate.
pub fn window_start(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    Duration::try_days(days.max(0))
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
}

impl BlogPost {
    /// Publication time, if present and valid RFC 3339.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        let published = self.published.as_deref()?;
        DateTime::parse_from_rfc3339(published)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn labels(&self) -> &[String] {
        self.labels.as_deref().unwrap_or(&[])
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels().iter().any(|l| l == label)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostList {
    #[serde(default)]
    pub items: Option<Vec<BlogPost>>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPost<'a> {
    pub kind: &'static str,
    pub title: &'a str,
    pub content: &'a str,
    pub labels: &'a [String],
}

impl<'a> NewPost<'a> {
    pub fn new(title: &'a str, content: &'a str, labels: &'a [String]) -> Self {
        Self {
            kind: "blogger#post",
            title,
            content,
            labels,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}
