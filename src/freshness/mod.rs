// ABOUTME: Freshness rules for choosing what to post next
// ABOUTME: Category rotation with cooldown and near-duplicate title detection

pub mod rotation;
pub mod similarity;

pub use rotation::{category_used_within, choose_category, last_used_category, next_category};
pub use similarity::{
    dedupe_title, is_duplicate_title, jaccard, normalize_title, DEFAULT_MAX_SIMILARITY,
    TITLE_FALLBACK_SUFFIXES,
};
