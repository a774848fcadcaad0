// ABOUTME: Command implementations for the blogwright CLI
// ABOUTME: Handles render, check, placeholders, categories, preview, publish, and init

use anyhow::Result;
use chrono::{Local, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::args::{Args, PreviewFormat};
use super::config::Config;
use crate::article::{layout, load_values, ArticleTemplate, MissingPolicy};
use crate::blogger::BloggerClient;
use crate::content::{PostBuilder, CATEGORY_ROTATION};
use crate::publish::{PublishOptions, Publisher};
use crate::template::TemplateEngine;

/// Render an article template with values from config, a values file, and --var flags
pub fn render_article(
    template_path: Option<PathBuf>,
    values_path: Option<PathBuf>,
    vars: Vec<String>,
    missing: String,
    output: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let template = load_article_template(template_path.as_deref())?;
    let policy: MissingPolicy = missing.parse()?;

    // Later sources win: config, then values file, then --var
    let mut values: HashMap<String, String> = config.template_vars.clone();
    if let Some(path) = values_path {
        let file_values = load_values(&path)?;
        info!("Loaded {} value(s) from {}", file_values.len(), path.display());
        values.extend(file_values);
    }
    values.extend(Args::parse_variables(&vars)?);

    let rendered = template.render(&values, policy)?;
    if !rendered.unused.is_empty() {
        warn!(
            "Values not used by the template: {}",
            rendered.unused.join(", ")
        );
    }

    write_output(output.as_deref(), &rendered.text)
}

/// Check the article layout and fail when it deviates
pub fn check_article(template_path: Option<PathBuf>) -> Result<()> {
    let template = load_article_template(template_path.as_deref())?;
    let report = layout::check(&template);

    if report.is_ok() {
        println!(
            "✓ Article template is valid ({} placeholders, {} headers)",
            template.placeholders().len(),
            layout::EXPECTED_HEADERS.len()
        );
        Ok(())
    } else {
        Err(anyhow::anyhow!("Article template check failed: {}", report))
    }
}

pub fn list_placeholders(template_path: Option<PathBuf>) -> Result<()> {
    let template = load_article_template(template_path.as_deref())?;
    for name in template.placeholders() {
        println!("{}", name);
    }
    Ok(())
}

pub fn list_categories() -> Result<()> {
    for (idx, category) in CATEGORY_ROTATION.iter().enumerate() {
        println!("{:>2}. {}", idx + 1, category);
    }
    Ok(())
}

/// Build a post locally, as HTML or through the article skeleton
pub fn preview_post(
    category: String,
    format: PreviewFormat,
    template_path: Option<PathBuf>,
    output: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let date = Local::now().date_naive();

    let content = match format {
        PreviewFormat::Html => {
            let engine = match template_path {
                Some(path) => TemplateEngine::with_post_template(&std::fs::read_to_string(path)?)?,
                None => post_engine(config)?,
            };
            let draft = post_builder(engine, config).build(&category, date)?;
            info!("Previewing '{}'", draft.title);
            draft.html
        }
        PreviewFormat::Markdown => {
            let template = load_article_template(template_path.as_deref())?;
            post_builder(post_engine(config)?, config).render_article(&template, &category, date)?
        }
    };

    write_output(output.as_deref(), &content)
}

/// Generate the next post and publish it to Blogger
pub async fn publish_post(
    dry_run: bool,
    draft: bool,
    category: Option<String>,
    config: &Config,
) -> Result<()> {
    let (blog_id, credentials) = config.credentials()?;

    let client = BloggerClient::new(blog_id, credentials)
        .with_api_base_url(config.blogger.api_base_url.clone())
        .with_token_url(config.blogger.token_url.clone())
        .with_retry(config.retry.clone());

    let builder = post_builder(post_engine(config)?, config);
    let publisher = Publisher::new(client, builder, config.publish_settings());

    let options = PublishOptions {
        category,
        dry_run,
        force_draft: draft,
    };
    let mut rng = StdRng::from_entropy();

    let outcome = publisher
        .run(Utc::now(), &options, &mut rng)
        .await
        .map_err(|e| anyhow::anyhow!("Publishing failed: {}", e))?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    info!(
        "Publish run completed for category '{}'{}",
        outcome.category,
        if outcome.dry_run { " (dry run)" } else { "" }
    );
    Ok(())
}

/// Write a starter configuration file
pub fn init_config(output_dir: PathBuf, force: bool, _config: &Config) -> Result<()> {
    if !output_dir.exists() {
        std::fs::create_dir_all(&output_dir)?;
    }

    let config_file = output_dir.join("blogwright.yaml");
    if config_file.exists() && !force {
        return Err(anyhow::anyhow!(
            "Configuration file already exists: {}",
            config_file.display()
        ));
    }

    std::fs::write(&config_file, Config::default().to_yaml()?)?;
    info!("Created configuration file: {}", config_file.display());
    println!("Created {}", config_file.display());
    Ok(())
}

fn load_article_template(path: Option<&Path>) -> Result<ArticleTemplate> {
    match path {
        Some(path) => {
            let source = std::fs::read_to_string(path).map_err(|e| {
                anyhow::anyhow!("Failed to read template '{}': {}", path.display(), e)
            })?;
            Ok(ArticleTemplate::parse(&source))
        }
        None => Ok(ArticleTemplate::builtin()),
    }
}

fn post_engine(config: &Config) -> Result<TemplateEngine> {
    match &config.content.post_template {
        Some(path) => {
            let source = std::fs::read_to_string(path).map_err(|e| {
                anyhow::anyhow!("Failed to read post template '{}': {}", path.display(), e)
            })?;
            Ok(TemplateEngine::with_post_template(&source)?)
        }
        None => Ok(TemplateEngine::new()?),
    }
}

fn post_builder(engine: TemplateEngine, config: &Config) -> PostBuilder {
    let builder = PostBuilder::new(engine).with_author(config.content.author.clone());
    match &config.content.image_url {
        Some(url) => builder.with_image_url(url.clone()),
        None => builder,
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content).map_err(|e| {
                anyhow::anyhow!("Failed to write output file '{}': {}", path.display(), e)
            })?;
            info!("Output written to: {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
