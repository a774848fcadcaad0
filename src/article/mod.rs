// ABOUTME: Article skeleton module with named {placeholder} tokens
// ABOUTME: Parses, renders, and structurally checks article templates

pub mod error;
pub mod layout;
pub mod template;
pub mod values;

pub use error::{ArticleError, Result};
pub use layout::{LayoutReport, EXPECTED_HEADERS, EXPECTED_PLACEHOLDERS};
pub use template::{ArticleTemplate, MissingPolicy, Rendered, Segment, BUILTIN_ARTICLE};
pub use values::load_values;
