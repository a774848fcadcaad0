// ABOUTME: Main application orchestration for the blogwright CLI
// ABOUTME: Coordinates between CLI arguments, configuration, and command execution

use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::commands;
use super::{Args, Commands, Config};

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let log_level = log_directives(&self.config.logging.level, verbose, rust_log.as_deref());
        let env_filter = EnvFilter::new(&log_level);

        // Logs go to stderr so rendered output on stdout stays clean
        match self.config.logging.format.as_str() {
            "compact" => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .try_init()
                    .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
            }
            _ => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .try_init()
                    .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
            }
        }

        debug!("Logging initialized with level: {}", log_level);
        Ok(())
    }

    /// Run the application with parsed arguments
    pub async fn run(&mut self, args: Args) -> Result<()> {
        self.init_logging(args.verbose, args.no_color)?;

        info!("Starting blogwright v{}", crate::VERSION);
        debug!("Configuration loaded from: {:?}", args.config);

        match args.command {
            Commands::Render {
                template,
                values,
                vars,
                missing,
                output,
            } => commands::render_article(template, values, vars, missing, output, &self.config),

            Commands::Check { template } => commands::check_article(template),

            Commands::Placeholders { template } => commands::list_placeholders(template),

            Commands::Categories => commands::list_categories(),

            Commands::Preview {
                category,
                format,
                template,
                output,
            } => commands::preview_post(category, format, template, output, &self.config),

            Commands::Publish {
                dry_run,
                draft,
                category,
            } => commands::publish_post(dry_run, draft, category, &self.config).await,

            Commands::Init { output_dir, force } => {
                commands::init_config(output_dir, force, &self.config)
            }
        }
    }

    /// Create application from an optional configuration file path
    pub fn from_config_path(path: Option<PathBuf>) -> Result<Self> {
        let config = Config::load(path)?;
        Ok(Self::new(config))
    }
}

/// Filter directives for the subscriber. A valid `RUST_LOG` wins over
/// `--verbose`, which wins over the configured level.
fn log_directives(configured: &str, verbose: bool, rust_log: Option<&str>) -> String {
    match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() && EnvFilter::try_new(directives).is_ok() => {
            directives.to_string()
        }
        _ if verbose => "debug".to_string(),
        _ => configured.to_string(),
    }
}
