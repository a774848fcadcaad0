// ABOUTME: End-to-end publishing run against a blog
// ABOUTME: Reads recent posts, picks a fresh category and title, then inserts the new post

use chrono::{DateTime, Local, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use super::error::Result;
use crate::blogger::BlogApi;
use crate::content::{is_rotation_category, PostBuilder};
use crate::freshness::{choose_category, dedupe_title, DEFAULT_MAX_SIMILARITY};

#[derive(Debug, Clone)]
pub struct PublishSettings {
    pub recent_window_days: i64,
    pub max_results: u32,
    pub cooldown_days: i64,
    pub max_similarity: f64,
    pub publish_immediately: bool,
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            recent_window_days: 30,
            max_results: 50,
            cooldown_days: 7,
            max_similarity: DEFAULT_MAX_SIMILARITY,
            publish_immediately: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    pub category: Option<String>,
    pub dry_run: bool,
    pub force_draft: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublishOutcome {
    pub posted_id: Option<String>,
    pub url: Option<String>,
    pub title: String,
    pub labels: Vec<String>,
    #[serde(skip)]
    pub category: String,
    #[serde(skip)]
    pub is_draft: bool,
    #[serde(skip)]
    pub dry_run: bool,
}

pub struct Publisher<A: BlogApi> {
    api: A,
    builder: PostBuilder,
    settings: PublishSettings,
}

impl<A: BlogApi> Publisher<A> {
    pub fn new(api: A, builder: PostBuilder, settings: PublishSettings) -> Self {
        Self {
            api,
            builder,
            settings,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn run<R>(
        &self,
        now: DateTime<Utc>,
        options: &PublishOptions,
        rng: &mut R,
    ) -> Result<PublishOutcome>
    where
        R: Rng + ?Sized,
    {
        let recent = self
            .api
            .recent_posts(
                self.settings.recent_window_days,
                self.settings.max_results,
                now,
            )
            .await?;
        let recent_titles: Vec<&str> = recent
            .iter()
            .filter_map(|post| post.title.as_deref())
            .filter(|title| !title.is_empty())
            .collect();

        let category = match &options.category {
            Some(category) => {
                if !is_rotation_category(category) {
                    warn!("Category '{}' is not part of the rotation", category);
                }
                category.clone()
            }
            None => choose_category(&recent, self.settings.cooldown_days, now).to_string(),
        };
        info!("Selected category: {}", category);

        let date = now.with_timezone(&Local).date_naive();
        let draft = self.builder.build(&category, date)?;
        let title = dedupe_title(
            &draft.title,
            &recent_titles,
            self.settings.max_similarity,
            rng,
        );

        let is_draft = options.force_draft || !self.settings.publish_immediately;

        if options.dry_run {
            info!("Dry run - not inserting '{}'", title);
            return Ok(PublishOutcome {
                posted_id: None,
                url: None,
                title,
                labels: draft.labels,
                category,
                is_draft,
                dry_run: true,
            });
        }

        let post = self
            .api
            .insert_post(&title, &draft.html, &draft.labels, is_draft)
            .await?;

        Ok(PublishOutcome {
            posted_id: post.id,
            url: post.url,
            title: post.title.unwrap_or(title),
            labels: draft.labels,
            category,
            is_draft,
            dry_run: false,
        })
    }
}
