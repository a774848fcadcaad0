// ABOUTME: Content category rotation and per-category title presets
// ABOUTME: Titles are clamped to a fixed word range before use

/// Categories in posting order. The rotation wraps around.
pub const CATEGORY_ROTATION: [&str; 10] = [
    "Personal Life and Stories",
    "Food and Recipes",
    "Travel",
    "How-To Guides and Tutorials",
    "Product Reviews",
    "Money and Finance",
    "Productivity",
    "Health and Fitness",
    "Fashion",
    "Lists and Roundups",
];

pub const TITLE_MIN_WORDS: usize = 8;
pub const TITLE_MAX_WORDS: usize = 14;

pub fn rotation_index(category: &str) -> Option<usize> {
    CATEGORY_ROTATION.iter().position(|c| *c == category)
}

pub fn is_rotation_category(category: &str) -> bool {
    rotation_index(category).is_some()
}

/// Preset headline for a category, clamped to the title word range.
pub fn title_for_category(category: &str) -> String {
    let base = match category {
        "Personal Life and Stories" => "A Micro-Story About Small Wins And Big Weeks".to_string(),
        "Food and Recipes" => "A Weeknight Paneer Stir-Fry You Can Master Fast".to_string(),
        "Travel" => "A 48-Hour Itinerary For Monsoon Goa That Works".to_string(),
        "How-To Guides and Tutorials" => {
            "A Practical Framework To Reach Inbox Zero This Week".to_string()
        }
        "Product Reviews" => "Hands-On Test Of Budget ANC Headphones: Worth It?".to_string(),
        "Money and Finance" => "A Simple Plan To Cut Monthly Bills Without Pain".to_string(),
        "Productivity" => "Beat Afternoon Slumps With A 20-Minute Reset".to_string(),
        "Health and Fitness" => "A Beginner’s Mobility Routine You’ll Actually Keep".to_string(),
        "Fashion" => "Late-Monsoon Wardrobe: Seven Picks That Make Sense".to_string(),
        "Lists and Roundups" => "Nine Free Tools To Automate Repetitive Daily Tasks".to_string(),
        other => format!("Fresh Notes On {}", other),
    };
    clamp_words(&base, TITLE_MIN_WORDS, TITLE_MAX_WORDS)
}

/// Pads with "Guide" up to `min` words and truncates to `max` words.
pub fn clamp_words(text: &str, min: usize, max: usize) -> String {
    let mut words: Vec<&str> = text.split_whitespace().collect();
    while words.len() < min {
        words.push("Guide");
    }
    words.truncate(max);
    words.join(" ")
}
