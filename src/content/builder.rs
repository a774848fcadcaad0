// ABOUTME: Builds long-form posts for a content category
// ABOUTME: Produces the HTML body for publishing and placeholder values for the article skeleton

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use super::categories::title_for_category;
use crate::article::{self, ArticleTemplate, MissingPolicy};
use crate::template::{self, ImageInfo, PostContext, TemplateEngine};

pub const CHECKLIST: [&str; 5] = [
    "State today’s outcome in one sentence.",
    "Time-box work into 20–40 minute blocks.",
    "Split tasks to fit the block length.",
    "End with one written next action.",
    "Track one metric for seven days.",
];

const TAKEAWAYS: [&str; 3] = [
    "Decide once, then reuse: a framework removes repeated guesswork.",
    "Adopt in small slices and measure the gains before expanding.",
    "Short feedback loops surface problems while they are still cheap.",
];

const INTRODUCTION: &str = "In the fast-changing world of everyday work and personal projects, a simple framework can turn scattered effort into reliable progress. This long-form guide walks through clear steps and examples so readers can apply the ideas today, not someday, without new tools or steep learning curves.";

const CONCLUSION: &str = "Small, reliable structures beat bursts of motivation. With a simple loop of clear outcome, short focused work, and one next action, progress compounds. Keep it lightweight, adjust once a week, and let the routine do the heavy lifting.";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub category: String,
    pub labels: Vec<String>,
    pub html: String,
}

pub struct PostBuilder {
    engine: TemplateEngine,
    author: String,
    image: ImageInfo,
}

impl PostBuilder {
    pub fn new(engine: TemplateEngine) -> Self {
        Self {
            engine,
            author: "Automation Bot".to_string(),
            image: ImageInfo::default(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image.url = url.into();
        self
    }

    pub fn build(&self, category: &str, date: NaiveDate) -> template::Result<PostDraft> {
        let title = title_for_category(category);
        debug!("Building post '{}' for category '{}'", title, category);

        let context = PostContext::new(title.clone(), category, date)
            .with_byline(self.author.clone())
            .with_image(self.image.clone())
            .with_checklist(CHECKLIST.iter().map(|item| item.to_string()).collect());
        let html = self.engine.render_post(&context)?;

        Ok(PostDraft {
            title,
            category: category.to_string(),
            labels: vec![category.to_string()],
            html,
        })
    }

    /// A value for every placeholder of the article skeleton.
    pub fn article_values(&self, category: &str, date: NaiveDate) -> HashMap<String, String> {
        let title = title_for_category(category);
        let topic_lower = category.to_lowercase();

        let mut values = HashMap::new();
        let mut set = |key: &str, value: String| {
            values.insert(key.to_string(), value);
        };

        set("title", title.clone());
        set("date", date.format("%Y-%m-%d").to_string());
        set("topic", category.to_string());
        set("angle", format!("A practical framework for {}", topic_lower));
        set("meta_title", title);
        set(
            "meta_description",
            format!(
                "A step-by-step guide to {} with a short checklist you can use today.",
                topic_lower
            ),
        );
        set("image_alt", self.image.alt.clone());
        set("image_url", self.image.url.clone());
        set("image_caption", self.image.caption.clone());
        set("image_credit", self.image.credit.clone());
        for (i, item) in CHECKLIST.iter().take(4).enumerate() {
            set(&format!("bullet_point_{}", i + 1), item.to_string());
        }
        set("introduction", INTRODUCTION.to_string());
        set("main_content", main_content(&topic_lower));
        for (i, item) in TAKEAWAYS.iter().enumerate() {
            set(&format!("takeaway_{}", i + 1), item.to_string());
        }
        set("conclusion", CONCLUSION.to_string());

        values
    }

    /// Render the article skeleton for a category as markdown.
    pub fn render_article(
        &self,
        template: &ArticleTemplate,
        category: &str,
        date: NaiveDate,
    ) -> article::Result<String> {
        let values = self.article_values(category, date);
        Ok(template.render(&values, MissingPolicy::Strict)?.text)
    }
}

fn main_content(topic_lower: &str) -> String {
    format!(
        "### Understanding The Framework\n\n\
         Think of a framework as a practical set of decisions made once, then reused. \
         For {}, that means simple steps, clear roles, and visible outcomes.\n\n\
         ### Advantages\n\n\
         Pre-made building blocks remove busywork, consistency lowers the learning curve, \
         and shared conventions make growth easier.\n\n\
         ### Challenges And Considerations\n\n\
         New structures feel slower at first. Adopt in small slices and measure the gains.",
        topic_lower
    )
}
