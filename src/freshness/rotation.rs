// ABOUTME: Category rotation over recently published posts
// ABOUTME: Picks the successor of the last used category, skipping categories in cooldown

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::blogger::{window_start, BlogPost};
use crate::content::{rotation_index, CATEGORY_ROTATION};

/// First rotation category found on the posts, which are ordered newest first.
pub fn last_used_category(posts: &[BlogPost]) -> Option<&'static str> {
    posts
        .iter()
        .flat_map(|post| post.labels())
        .find_map(|label| rotation_index(label).map(|idx| CATEGORY_ROTATION[idx]))
}

/// Successor of the last used category, or the first category when none was used.
pub fn next_category(posts: &[BlogPost]) -> &'static str {
    match last_used_category(posts).and_then(rotation_index) {
        Some(idx) => CATEGORY_ROTATION[(idx + 1) % CATEGORY_ROTATION.len()],
        None => CATEGORY_ROTATION[0],
    }
}

pub fn category_used_within(
    category: &str,
    posts: &[BlogPost],
    days: i64,
    now: DateTime<Utc>,
) -> bool {
    let cutoff = window_start(now, days);
    posts.iter().any(|post| {
        post.has_label(category)
            && post
                .published_at()
                .is_some_and(|published| published >= cutoff)
    })
}

/// Walks the rotation from `next_category`, skipping categories posted within
/// the cooldown window. Stops after one full lap.
pub fn choose_category(posts: &[BlogPost], cooldown_days: i64, now: DateTime<Utc>) -> &'static str {
    let mut category = next_category(posts);
    let mut spins = 0;

    while spins < CATEGORY_ROTATION.len()
        && category_used_within(category, posts, cooldown_days, now)
    {
        debug!("Category '{}' is in cooldown, skipping", category);
        let idx = rotation_index(category).unwrap_or(0);
        category = CATEGORY_ROTATION[(idx + 1) % CATEGORY_ROTATION.len()];
        spins += 1;
    }

    category
}
