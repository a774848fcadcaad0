// ABOUTME: Integration tests for the CLI application
// ABOUTME: Drives the built binary for rendering, checking, previewing, and publishing

use std::process::{Command, Output};

mod common;
use common::TestEnvironment;

/// Runs the binary in an isolated directory with no config or secrets in scope.
fn blogwright(env: &TestEnvironment, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_blogwright"))
        .args(args)
        .current_dir(env.path())
        .env("HOME", env.path())
        .env_remove("BLOG_ID")
        .env_remove("CLIENT_ID")
        .env_remove("CLIENT_SECRET")
        .env_remove("REFRESH_TOKEN")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_help_command() {
    let env = TestEnvironment::new();
    let output = blogwright(&env, &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("render"));
    assert!(stdout.contains("publish"));
}

#[test]
fn test_cli_version_command() {
    let env = TestEnvironment::new();
    let output = blogwright(&env, &["--version"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_placeholders_lists_builtin_names() {
    let env = TestEnvironment::new();
    let output = blogwright(&env, &["placeholders"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names.len(), 20);
    assert_eq!(names[0], "title");
    assert_eq!(names[19], "conclusion");
}

#[test]
fn test_cli_check_builtin_and_broken() {
    let env = TestEnvironment::new();
    assert!(blogwright(&env, &["check"]).status.success());

    env.write_file("broken.md", "# {title}\n\n## Introduction\n");
    let output = blogwright(&env, &["check", "--template", "broken.md"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing placeholders"));
}

#[test]
fn test_cli_render_with_vars_and_keep_policy() {
    let env = TestEnvironment::new();
    env.write_file("post.md", "# {title}\n\n{introduction}\n");

    let output = blogwright(
        &env,
        &[
            "render",
            "--template",
            "post.md",
            "-V",
            "title=Hello World",
            "--missing",
            "keep",
        ],
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "# Hello World\n\n{introduction}\n"
    );
}

#[test]
fn test_cli_render_strict_fails_on_missing() {
    let env = TestEnvironment::new();
    let output = blogwright(&env, &["render", "-V", "title=Only"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Missing values for placeholders"));
}

#[test]
fn test_cli_preview_html_to_file() {
    let env = TestEnvironment::new();
    let output = blogwright(
        &env,
        &["preview", "--category", "Fashion", "--output", "preview.html"],
    );

    assert!(output.status.success());
    let html = env.read_file("preview.html");
    assert!(html.starts_with("<h1>Late-Monsoon Wardrobe: Seven Picks That Make Sense Guide</h1>"));
}

#[test]
fn test_cli_publish_without_secrets_fails() {
    let env = TestEnvironment::new();
    let output = blogwright(&env, &["publish", "--dry-run"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Missing required secret: BLOG_ID"));
}

#[test]
fn test_cli_init_writes_config() {
    let env = TestEnvironment::new();
    let output = blogwright(&env, &["init"]);

    assert!(output.status.success());
    let config = env.read_file("blogwright.yaml");
    assert!(config.contains("blogger:"));
    assert!(config.contains("cooldown_days: 7"));

    assert!(!blogwright(&env, &["init"]).status.success());
}
