// ABOUTME: Error types for the publishing pipeline
// ABOUTME: Wraps Blogger API and template rendering failures

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Blogger error: {0}")]
    BloggerError(#[from] crate::blogger::BloggerError),

    #[error("Template error: {0}")]
    TemplateError(#[from] crate::template::TemplateError),
}

pub type Result<T> = std::result::Result<T, PublishError>;
