// ABOUTME: Main library module for blogwright
// ABOUTME: Exports all core modules and provides the public API

pub mod article;
pub mod blogger;
pub mod cli;
pub mod content;
pub mod freshness;
pub mod publish;
pub mod template;

// Re-export commonly used types
pub use article::{ArticleTemplate, MissingPolicy};
pub use blogger::{BlogApi, BloggerClient};
pub use cli::{App, Args, Config};
pub use content::{PostBuilder, PostDraft};
pub use publish::{PublishOutcome, Publisher};
pub use template::TemplateEngine;

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
