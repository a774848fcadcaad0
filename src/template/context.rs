// ABOUTME: Rendering context for HTML posts
// ABOUTME: Carries the title, topic, byline, hero image, and checklist into templates

use chrono::NaiveDate;
use serde::Serialize;

use super::error::{Result, TemplateError};

#[derive(Debug, Clone, Serialize)]
pub struct PostContext {
    pub title: String,
    pub topic: String,
    pub date: String,
    pub byline: String,
    pub image: ImageInfo,
    pub checklist: Vec<String>,
    pub generator: GeneratorInfo,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ImageInfo {
    pub url: String,
    pub alt: String,
    pub caption: String,
    pub credit: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratorInfo {
    pub name: String,
    pub version: String,
}

impl PostContext {
    pub fn new(title: impl Into<String>, topic: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            topic: topic.into(),
            date: date.format("%Y-%m-%d").to_string(),
            byline: "Automation Bot".to_string(),
            image: ImageInfo::default(),
            checklist: Vec::new(),
            generator: GeneratorInfo::default(),
        }
    }

    pub fn with_byline(mut self, byline: impl Into<String>) -> Self {
        self.byline = byline.into();
        self
    }

    pub fn with_image(mut self, image: ImageInfo) -> Self {
        self.image = image;
        self
    }

    pub fn with_checklist(mut self, items: Vec<String>) -> Self {
        self.checklist = items;
        self
    }

    /// Convert context to JSON for handlebars rendering
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(TemplateError::JsonError)
    }
}

impl Default for ImageInfo {
    fn default() -> Self {
        Self {
            url: "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?w=1200&q=80"
                .to_string(),
            alt: "Context image framing the article topic".to_string(),
            caption: "A contextual visual that frames the topic without distracting from the content."
                .to_string(),
            credit: "Unsplash (CC0/Link)".to_string(),
        }
    }
}

impl Default for GeneratorInfo {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: crate::VERSION.to_string(),
        }
    }
}
