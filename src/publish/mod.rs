// ABOUTME: Publishing pipeline module
// ABOUTME: Chooses a category, builds the post, dedupes the title, and inserts it

pub mod error;
pub mod pipeline;

pub use error::{PublishError, Result};
pub use pipeline::{PublishOptions, PublishOutcome, PublishSettings, Publisher};
