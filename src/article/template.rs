// ABOUTME: Article template parsing and literal placeholder substitution
// ABOUTME: A template is an ordered list of text segments and named placeholders

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use super::error::{ArticleError, Result};

/// The article skeleton shipped with the crate.
pub const BUILTIN_ARTICLE: &str = include_str!("../../templates/article.md");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Placeholder(String),
}

/// What to do when a placeholder has no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Fail and name every placeholder without a value
    #[default]
    Strict,
    /// Leave the `{name}` token in the output
    Keep,
    /// Substitute the empty string
    Blank,
}

impl FromStr for MissingPolicy {
    type Err = ArticleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "keep" => Ok(Self::Keep),
            "blank" => Ok(Self::Blank),
            other => Err(ArticleError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for MissingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Strict => "strict",
            Self::Keep => "keep",
            Self::Blank => "blank",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct Rendered {
    pub text: String,
    /// Placeholders that had no value, in order of first appearance
    pub missing: Vec<String>,
    /// Supplied values that no placeholder used, sorted
    pub unused: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTemplate {
    segments: Vec<Segment>,
}

impl ArticleTemplate {
    /// Parse template source. Braces that do not form a valid `{identifier}`
    /// token are kept as literal text, and `{{` / `}}` escape a single brace.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut rest = source;

        while let Some(idx) = rest.find(['{', '}']) {
            text.push_str(&rest[..idx]);
            let tail = &rest[idx..];

            if tail.starts_with("{{") {
                text.push('{');
                rest = &tail[2..];
                continue;
            }
            if tail.starts_with("}}") {
                text.push('}');
                rest = &tail[2..];
                continue;
            }
            if tail.starts_with('{') {
                if let Some(name) = placeholder_name(&tail[1..]) {
                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    segments.push(Segment::Placeholder(name.to_string()));
                    rest = &tail[name.len() + 2..];
                    continue;
                }
            }

            text.push_str(&tail[..1]);
            rest = &tail[1..];
        }

        text.push_str(rest);
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Self { segments }
    }

    pub fn builtin() -> Self {
        Self::parse(BUILTIN_ARTICLE)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Unique placeholder names in order of first appearance
    pub fn placeholders(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) if seen.insert(name.as_str()) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The template text with every placeholder left as a `{name}` token.
    pub fn skeleton(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => text.clone(),
                Segment::Placeholder(name) => format!("{{{}}}", name),
            })
            .collect()
    }

    /// Substitute values into the template. Values are inserted literally and
    /// never re-expanded.
    pub fn render(
        &self,
        values: &HashMap<String, String>,
        policy: MissingPolicy,
    ) -> Result<Rendered> {
        let mut text = String::new();
        let mut missing: Vec<String> = Vec::new();
        let mut used = HashSet::new();

        for segment in &self.segments {
            match segment {
                Segment::Text(literal) => text.push_str(literal),
                Segment::Placeholder(name) => match values.get(name) {
                    Some(value) => {
                        used.insert(name.as_str());
                        text.push_str(value);
                    }
                    None => {
                        if !missing.iter().any(|m| m == name) {
                            missing.push(name.clone());
                        }
                        match policy {
                            MissingPolicy::Keep => text.push_str(&format!("{{{}}}", name)),
                            MissingPolicy::Blank | MissingPolicy::Strict => {}
                        }
                    }
                },
            }
        }

        if policy == MissingPolicy::Strict && !missing.is_empty() {
            return Err(ArticleError::MissingValues { names: missing });
        }
        if !missing.is_empty() {
            warn!(
                "{} placeholder(s) without a value ({} policy): {}",
                missing.len(),
                policy,
                missing.join(", ")
            );
        }

        let mut unused: Vec<String> = values
            .keys()
            .filter(|key| !used.contains(key.as_str()))
            .cloned()
            .collect();
        unused.sort();
        if !unused.is_empty() {
            debug!("Unused values: {}", unused.join(", "));
        }

        Ok(Rendered {
            text,
            missing,
            unused,
        })
    }
}

/// Returns the identifier if `s` starts with `identifier}`.
fn placeholder_name(s: &str) -> Option<&str> {
    let end = s.find('}')?;
    let name = &s[..end];
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return None,
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Some(name)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_segments() {
        let template = ArticleTemplate::parse("# {title}\n\nBy {author}.");
        assert_eq!(
            template.segments(),
            &[
                Segment::Text("# ".to_string()),
                Segment::Placeholder("title".to_string()),
                Segment::Text("\n\nBy ".to_string()),
                Segment::Placeholder("author".to_string()),
                Segment::Text(".".to_string()),
            ]
        );
    }

    #[test]
    fn test_malformed_braces_are_text() {
        let template = ArticleTemplate::parse("a { b } {1x} {ok} {open and } close}");
        assert_eq!(template.placeholders(), vec!["ok"]);
        let rendered = template
            .render(&values(&[("ok", "yes")]), MissingPolicy::Strict)
            .unwrap();
        assert_eq!(rendered.text, "a { b } {1x} yes {open and } close}");
    }

    #[test]
    fn test_escaped_braces() {
        let template = ArticleTemplate::parse("{{title}} is {title}");
        assert_eq!(template.placeholders(), vec!["title"]);
        let rendered = template
            .render(&values(&[("title", "T")]), MissingPolicy::Strict)
            .unwrap();
        assert_eq!(rendered.text, "{title} is T");
    }

    #[test]
    fn test_placeholders_unique_in_order() {
        let template = ArticleTemplate::parse("{b} {a} {b} {c} {a}");
        assert_eq!(template.placeholders(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_render_repeated_and_literal_values() {
        let template = ArticleTemplate::parse("{x}-{x}-{y}");
        let rendered = template
            .render(&values(&[("x", "{y}"), ("y", "2")]), MissingPolicy::Strict)
            .unwrap();
        assert_eq!(rendered.text, "{y}-{y}-2");
        assert!(rendered.missing.is_empty());
    }

    #[test]
    fn test_strict_policy_lists_all_missing() {
        let template = ArticleTemplate::parse("{a} {b} {a} {c}");
        let err = template
            .render(&values(&[("b", "B")]), MissingPolicy::Strict)
            .unwrap_err();
        match err {
            ArticleError::MissingValues { names } => assert_eq!(names, vec!["a", "c"]),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_keep_and_blank_policies() {
        let template = ArticleTemplate::parse("[{a}] [{b}]");
        let vals = values(&[("a", "A"), ("extra", "E")]);

        let kept = template.render(&vals, MissingPolicy::Keep).unwrap();
        assert_eq!(kept.text, "[A] [{b}]");
        assert_eq!(kept.missing, vec!["b"]);
        assert_eq!(kept.unused, vec!["extra"]);

        let blank = template.render(&vals, MissingPolicy::Blank).unwrap();
        assert_eq!(blank.text, "[A] []");
    }

    #[test]
    fn test_skeleton_preserves_tokens() {
        let template = ArticleTemplate::parse("Hi {name}!");
        assert_eq!(template.skeleton(), "Hi {name}!");
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("strict".parse::<MissingPolicy>().unwrap(), MissingPolicy::Strict);
        assert_eq!("KEEP".parse::<MissingPolicy>().unwrap(), MissingPolicy::Keep);
        assert_eq!("blank".parse::<MissingPolicy>().unwrap(), MissingPolicy::Blank);
        assert!("loose".parse::<MissingPolicy>().is_err());
    }

    #[test]
    fn test_builtin_line_count() {
        assert_eq!(BUILTIN_ARTICLE.lines().count(), 42);
    }
}
