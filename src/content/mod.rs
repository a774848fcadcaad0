// ABOUTME: Content generation module for long-form blog posts
// ABOUTME: Exposes the category rotation, title presets, and the post builder

pub mod builder;
pub mod categories;

pub use builder::{PostBuilder, PostDraft, CHECKLIST};
pub use categories::{
    clamp_words, is_rotation_category, rotation_index, title_for_category, CATEGORY_ROTATION,
};
