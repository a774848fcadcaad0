// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for blogwright

use clap::{Parser, Subcommand, ValueEnum};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blogwright")]
#[command(about = "Render article templates and publish generated posts to Blogger")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill an article template's placeholders with values
    Render {
        #[arg(short, long, help = "Article template file (defaults to the built-in skeleton)")]
        template: Option<PathBuf>,

        #[arg(long, help = "YAML or JSON file of placeholder values")]
        values: Option<PathBuf>,

        #[arg(short = 'V', long = "var", help = "Placeholder value (key=value)")]
        vars: Vec<String>,

        #[arg(
            long,
            default_value = "strict",
            help = "What to do with placeholders that have no value (strict, keep, blank)"
        )]
        missing: String,

        #[arg(short, long, help = "Output file (defaults to stdout)")]
        output: Option<PathBuf>,
    },

    /// Check that an article template has the expected placeholders and headers
    Check {
        #[arg(short, long, help = "Article template file (defaults to the built-in skeleton)")]
        template: Option<PathBuf>,
    },

    /// List the placeholders of an article template in order of appearance
    Placeholders {
        #[arg(short, long, help = "Article template file (defaults to the built-in skeleton)")]
        template: Option<PathBuf>,
    },

    /// List the content category rotation
    Categories,

    /// Build a post locally without contacting the blog
    Preview {
        #[arg(long, help = "Content category", default_value = "Personal Life and Stories")]
        category: String,

        #[arg(long, value_enum, default_value_t = PreviewFormat::Html)]
        format: PreviewFormat,

        #[arg(short, long, help = "Custom template for the chosen format")]
        template: Option<PathBuf>,

        #[arg(short, long, help = "Output file (defaults to stdout)")]
        output: Option<PathBuf>,
    },

    /// Generate the next post and publish it to Blogger
    Publish {
        #[arg(long, help = "Choose and build the post without inserting it")]
        dry_run: bool,

        #[arg(long, help = "Insert as a draft regardless of configuration")]
        draft: bool,

        #[arg(long, help = "Use this category instead of the rotation")]
        category: Option<String>,
    },

    /// Write a starter configuration file
    Init {
        #[arg(short, long, help = "Output directory", default_value = ".")]
        output_dir: PathBuf,

        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PreviewFormat {
    Html,
    Markdown,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse variables from key=value format
    pub fn parse_variables(vars: &[String]) -> anyhow::Result<HashMap<String, String>> {
        let mut variables = HashMap::new();

        for var in vars {
            if let Some((key, value)) = var.split_once('=') {
                variables.insert(key.to_string(), value.to_string());
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid variable format '{}'. Expected 'key=value'",
                    var
                ));
            }
        }

        Ok(variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variables() {
        let vars = vec![
            "title=Hello".to_string(),
            "meta_description=a=b".to_string(),
            "empty=".to_string(),
        ];

        let parsed = Args::parse_variables(&vars).unwrap();

        assert_eq!(parsed.get("title"), Some(&"Hello".to_string()));
        assert_eq!(parsed.get("meta_description"), Some(&"a=b".to_string()));
        assert_eq!(parsed.get("empty"), Some(&String::new()));
    }

    #[test]
    fn test_parse_variables_invalid() {
        let vars = vec!["invalid_format".to_string()];
        assert!(Args::parse_variables(&vars).is_err());
    }

    #[test]
    fn test_parse_render_command() {
        let args = Args::try_parse_from([
            "blogwright",
            "render",
            "-V",
            "title=Hi",
            "--var",
            "date=2024-01-01",
            "--missing",
            "keep",
        ])
        .unwrap();

        match args.command {
            Commands::Render { vars, missing, .. } => {
                assert_eq!(vars, vec!["title=Hi", "date=2024-01-01"]);
                assert_eq!(missing, "keep");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_publish_flags() {
        let args =
            Args::try_parse_from(["blogwright", "--verbose", "publish", "--dry-run", "--draft"])
                .unwrap();
        assert!(args.verbose);
        match args.command {
            Commands::Publish {
                dry_run,
                draft,
                category,
            } => {
                assert!(dry_run);
                assert!(draft);
                assert!(category.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_preview_format_values() {
        let args =
            Args::try_parse_from(["blogwright", "preview", "--format", "markdown"]).unwrap();
        match args.command {
            Commands::Preview { format, category, .. } => {
                assert_eq!(format, PreviewFormat::Markdown);
                assert_eq!(category, "Personal Life and Stories");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
