// ABOUTME: Main template engine implementation using Handlebars
// ABOUTME: Renders HTML posts with escaping enabled and the built-in helpers registered

use handlebars::Handlebars;

use super::context::PostContext;
use super::error::{Result, TemplateError};
use super::helpers;

/// The long-form HTML post layout shipped with the crate.
pub const BUILTIN_POST: &str = include_str!("../../templates/post.html.hbs");

pub const POST_TEMPLATE_NAME: &str = "post";

#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in post layout
    pub fn new() -> Result<Self> {
        let mut engine = Self::bare();
        engine.register_post_template(BUILTIN_POST)?;
        Ok(engine)
    }

    /// Create an engine using a custom post layout
    pub fn with_post_template(source: &str) -> Result<Self> {
        let mut engine = Self::bare();
        engine.register_post_template(source)?;
        Ok(engine)
    }

    fn bare() -> Self {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(false);
        handlebars.set_dev_mode(false);
        // Output is HTML, so keep the default escaping for interpolated values
        handlebars.register_escape_fn(handlebars::html_escape);

        helpers::register_helpers(&mut handlebars);

        Self { handlebars }
    }

    /// Replace the post layout
    pub fn register_post_template(&mut self, source: &str) -> Result<()> {
        self.handlebars
            .register_template_string(POST_TEMPLATE_NAME, source)?;
        Ok(())
    }

    /// Render the post layout with the given context
    pub fn render_post(&self, context: &PostContext) -> Result<String> {
        let json_context = context.to_json()?;
        self.handlebars
            .render(POST_TEMPLATE_NAME, &json_context)
            .map_err(TemplateError::HandlebarsError)
    }

    /// Validate template syntax without rendering
    pub fn validate_template(&self, template: &str) -> Result<()> {
        handlebars::Template::compile(template)
            .map(|_| ())
            .map_err(|e| TemplateError::SyntaxError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::ImageInfo;
    use chrono::NaiveDate;

    fn context() -> PostContext {
        PostContext::new(
            "Beat Afternoon Slumps",
            "Productivity",
            NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
        )
        .with_checklist(vec![
            "State today’s outcome in one sentence.".to_string(),
            "Track one metric for seven days.".to_string(),
        ])
    }

    #[test]
    fn test_render_builtin_post() {
        let engine = TemplateEngine::new().unwrap();
        let html = engine.render_post(&context()).unwrap();

        assert!(html.starts_with("<h1>Beat Afternoon Slumps</h1>"));
        assert!(html.contains("By Automation Bot • 2024-09-02"));
        assert!(html.contains("For productivity, that means"));
        assert!(html.contains("<li>Track one metric for seven days.</li>"));
        assert!(html.contains("<h2>Conclusion</h2>"));
    }

    #[test]
    fn test_post_sections_in_order() {
        let engine = TemplateEngine::new().unwrap();
        let html = engine.render_post(&context()).unwrap();

        let headings = [
            "<h2>The Evolution Of Practical Frameworks</h2>",
            "<h2>Understanding The Framework</h2>",
            "<h2>Advantages</h2>",
            "<h2>Challenges And Considerations</h2>",
            "<h2>Improved Outcomes</h2>",
            "<h2>Cost-Effectiveness</h2>",
            "<h2>The Road Ahead</h2>",
            "<h2>Quick Checklist</h2>",
            "<h2>Conclusion</h2>",
        ];
        let positions: Vec<usize> = headings
            .iter()
            .map(|h| html.find(h).unwrap_or_else(|| panic!("missing {}", h)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_values_are_html_escaped() {
        let engine = TemplateEngine::new().unwrap();
        let context = PostContext::new(
            "Tips & <Tricks>",
            "Food and Recipes",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .with_image(ImageInfo {
            url: "https://example.com/a.jpg?x=1&y=2".to_string(),
            ..ImageInfo::default()
        });
        let html = engine.render_post(&context).unwrap();

        assert!(html.contains("<h1>Tips &amp; &lt;Tricks&gt;</h1>"));
        assert!(html.contains("&amp;y"));
        assert!(!html.contains("&y="));
    }

    #[test]
    fn test_helper_values_are_html_escaped() {
        let engine = TemplateEngine::new().unwrap();
        let context = PostContext::new(
            "Tips & <b>",
            "Food & <script>",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .with_image(ImageInfo {
            credit: "<i>Studio</i>".to_string(),
            ..ImageInfo::default()
        });
        let html = engine.render_post(&context).unwrap();

        assert!(html.contains("For food &amp; &lt;script&gt;, that means"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;i&gt;Studio&lt;/i&gt;"));
    }

    #[test]
    fn test_custom_post_template() {
        let engine = TemplateEngine::with_post_template("<h1>{{upper title}}</h1>").unwrap();
        let html = engine.render_post(&context()).unwrap();
        assert_eq!(html, "<h1>BEAT AFTERNOON SLUMPS</h1>");
    }

    #[test]
    fn test_template_validation() {
        let engine = TemplateEngine::new().unwrap();
        assert!(engine.validate_template("Hello {{name}}").is_ok());
        assert!(engine.validate_template("Hello {{name}").is_err());
        assert!(engine
            .validate_template("{{#if condition}}true{{else}}false{{/if}}")
            .is_ok());
        assert!(TemplateEngine::with_post_template("{{#each x}}").is_err());
    }
}
