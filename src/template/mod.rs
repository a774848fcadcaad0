// ABOUTME: Template engine module for HTML post rendering
// ABOUTME: Provides the Handlebars engine, helpers, and post rendering context

pub mod context;
pub mod engine;
pub mod error;
pub mod helpers;

pub use context::{GeneratorInfo, ImageInfo, PostContext};
pub use engine::{TemplateEngine, BUILTIN_POST, POST_TEMPLATE_NAME};
pub use error::{Result, TemplateError};
