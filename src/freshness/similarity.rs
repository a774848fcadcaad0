// ABOUTME: Title similarity based on word-set Jaccard overlap
// ABOUTME: Flags near-duplicate titles and appends a fallback suffix to them

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::info;

pub const DEFAULT_MAX_SIMILARITY: f64 = 0.8;

pub const TITLE_FALLBACK_SUFFIXES: [&str; 4] = [" Guide", " Essentials", " Explained", " In Practice"];

/// Lowercased words longer than two characters, punctuation treated as space.
pub fn normalize_title(title: &str) -> Vec<String> {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.len() > 2)
        .map(str::to_string)
        .collect()
}

/// Jaccard index of the normalized word sets; 0.0 when either set is empty.
pub fn jaccard(a: &str, b: &str) -> f64 {
    let a: HashSet<String> = normalize_title(a).into_iter().collect();
    let b: HashSet<String> = normalize_title(b).into_iter().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.intersection(&b).count() as f64;
    let total = a.union(&b).count() as f64;
    shared / total
}

pub fn is_duplicate_title<S: AsRef<str>>(title: &str, recent: &[S], threshold: f64) -> bool {
    let wanted = title.trim().to_lowercase();
    recent.iter().any(|existing| {
        let existing = existing.as_ref();
        existing.trim().to_lowercase() == wanted || jaccard(title, existing) >= threshold
    })
}

/// Returns the title unchanged unless it duplicates a recent one, in which
/// case a random fallback suffix is appended.
pub fn dedupe_title<S, R>(title: &str, recent: &[S], threshold: f64, rng: &mut R) -> String
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if !is_duplicate_title(title, recent, threshold) {
        return title.to_string();
    }
    let suffix = TITLE_FALLBACK_SUFFIXES
        .choose(rng)
        .copied()
        .unwrap_or(TITLE_FALLBACK_SUFFIXES[0]);
    info!("Title '{}' is too close to a recent post, adding '{}'", title, suffix.trim());
    format!("{}{}", title, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_normalize_title() {
        assert_eq!(
            normalize_title("Hands-On Test Of Budget ANC Headphones: Worth It?"),
            vec!["hands", "test", "budget", "anc", "headphones", "worth"]
        );
        assert!(normalize_title("a an of").is_empty());
    }

    #[test]
    fn test_jaccard() {
        assert_eq!(jaccard("Morning Coffee Ritual", "morning coffee ritual!"), 1.0);
        assert_eq!(jaccard("", "anything here"), 0.0);
        let half = jaccard("alpha beta", "alpha gamma");
        assert!((half - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_duplicate_detection() {
        let recent = vec!["Nine Free Tools To Automate Repetitive Daily Tasks".to_string()];
        assert!(is_duplicate_title(
            "  nine free tools to automate repetitive daily tasks ",
            &recent,
            DEFAULT_MAX_SIMILARITY
        ));
        // 7 of 8 words shared
        assert!(is_duplicate_title(
            "Nine Free Tools To Automate Repetitive Weekly Tasks Daily",
            &recent,
            DEFAULT_MAX_SIMILARITY
        ));
        assert!(!is_duplicate_title(
            "A Weeknight Paneer Stir-Fry You Can Master Fast",
            &recent,
            DEFAULT_MAX_SIMILARITY
        ));
        let empty: Vec<String> = Vec::new();
        assert!(!is_duplicate_title("Anything", &empty, DEFAULT_MAX_SIMILARITY));
    }

    #[test]
    fn test_dedupe_title() {
        let mut rng = StdRng::seed_from_u64(7);
        let recent = ["Beat Afternoon Slumps With A 20-Minute Reset Guide"];

        let fresh = dedupe_title("Something Else Entirely", &recent, 0.8, &mut rng);
        assert_eq!(fresh, "Something Else Entirely");

        let deduped = dedupe_title(recent[0], &recent, 0.8, &mut rng);
        assert!(deduped.starts_with(recent[0]));
        let suffix = &deduped[recent[0].len()..];
        assert!(TITLE_FALLBACK_SUFFIXES.contains(&suffix));
    }
}
