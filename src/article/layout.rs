// ABOUTME: Structural checks for article templates
// ABOUTME: Verifies the expected placeholder set and section header order

use std::fmt;

use super::template::ArticleTemplate;

pub const EXPECTED_PLACEHOLDERS: [&str; 20] = [
    "title",
    "date",
    "topic",
    "angle",
    "meta_title",
    "meta_description",
    "image_alt",
    "image_url",
    "image_caption",
    "image_credit",
    "bullet_point_1",
    "bullet_point_2",
    "bullet_point_3",
    "bullet_point_4",
    "introduction",
    "main_content",
    "takeaway_1",
    "takeaway_2",
    "takeaway_3",
    "conclusion",
];

pub const EXPECTED_HEADERS: [&str; 6] = [
    "## TL;DR",
    "## Introduction",
    "## Main Content",
    "## Key Takeaways",
    "## Conclusion",
    "## What to Read Next",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutReport {
    pub missing_placeholders: Vec<String>,
    pub unexpected_placeholders: Vec<String>,
    pub missing_headers: Vec<String>,
    pub out_of_order_headers: Vec<String>,
}

impl LayoutReport {
    pub fn is_ok(&self) -> bool {
        self.missing_placeholders.is_empty()
            && self.unexpected_placeholders.is_empty()
            && self.missing_headers.is_empty()
            && self.out_of_order_headers.is_empty()
    }
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return write!(f, "layout ok");
        }
        let sections = [
            ("missing placeholders", &self.missing_placeholders),
            ("unexpected placeholders", &self.unexpected_placeholders),
            ("missing headers", &self.missing_headers),
            ("headers out of order", &self.out_of_order_headers),
        ];
        let parts: Vec<String> = sections
            .iter()
            .filter(|(_, names)| !names.is_empty())
            .map(|(label, names)| format!("{}: {}", label, names.join(", ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Check a template against the expected article layout.
pub fn check(template: &ArticleTemplate) -> LayoutReport {
    let found = template.placeholders();

    let missing_placeholders = EXPECTED_PLACEHOLDERS
        .iter()
        .filter(|name| !found.contains(name))
        .map(|name| name.to_string())
        .collect();

    let unexpected_placeholders = found
        .iter()
        .filter(|name| !EXPECTED_PLACEHOLDERS.contains(name))
        .map(|name| name.to_string())
        .collect();

    let skeleton = template.skeleton();
    let lines: Vec<&str> = skeleton.lines().map(str::trim_end).collect();

    let mut missing_headers = Vec::new();
    let mut out_of_order_headers = Vec::new();
    let mut last_position: Option<usize> = None;

    for header in EXPECTED_HEADERS {
        match lines.iter().position(|line| *line == header) {
            None => missing_headers.push(header.to_string()),
            Some(position) => {
                if last_position.is_some_and(|last| position < last) {
                    out_of_order_headers.push(header.to_string());
                } else {
                    last_position = Some(position);
                }
            }
        }
    }

    LayoutReport {
        missing_placeholders,
        unexpected_placeholders,
        missing_headers,
        out_of_order_headers,
    }
}
