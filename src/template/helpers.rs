// ABOUTME: Handlebars helper functions for post rendering
// ABOUTME: Implements timestamps, environment lookups, case changes, defaults, and word truncation

use chrono::Utc;
use handlebars::{Context, Handlebars, Helper, Output, RenderContext, RenderError};
use std::env;

/// Timestamp helper - formats current time with optional format string
pub fn timestamp_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let format = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .unwrap_or("%Y-%m-%d %H:%M:%S");

    out.write(&Utc::now().format(format).to_string())?;
    Ok(())
}

/// Environment variable helper with an optional default
pub fn env_helper(
    h: &Helper,
    r: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let var_name = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("env helper requires variable name parameter"))?;

    let default_value = h.param(1).and_then(|v| v.value().as_str()).unwrap_or("");

    let value = env::var(var_name).unwrap_or_else(|_| default_value.to_string());
    out.write(&r.get_escape_fn()(&value))?;
    Ok(())
}

pub fn upper_helper(
    h: &Helper,
    r: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("upper helper requires input parameter"))?;

    out.write(&r.get_escape_fn()(&input.to_uppercase()))?;
    Ok(())
}

pub fn lower_helper(
    h: &Helper,
    r: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("lower helper requires input parameter"))?;

    out.write(&r.get_escape_fn()(&input.to_lowercase()))?;
    Ok(())
}

/// Default helper - falls back when the value is empty
pub fn default_helper(
    h: &Helper,
    r: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let value = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");

    let fallback = h
        .param(1)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("default helper requires fallback parameter"))?;

    let chosen = if value.is_empty() { fallback } else { value };
    out.write(&r.get_escape_fn()(chosen))?;
    Ok(())
}

/// Keeps the first N words of the input
pub fn truncate_words_helper(
    h: &Helper,
    r: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("truncate_words helper requires input parameter"))?;

    let limit = h
        .param(1)
        .and_then(|v| v.value().as_u64())
        .ok_or_else(|| RenderError::new("truncate_words helper requires a word count"))?;

    let words: Vec<&str> = input.split_whitespace().take(limit as usize).collect();
    out.write(&r.get_escape_fn()(&words.join(" ")))?;
    Ok(())
}

// Helpers write through `out` directly, so they apply the registry's escape
// function themselves.

/// Register all built-in helpers with a Handlebars instance
pub fn register_helpers(handlebars: &mut Handlebars) {
    handlebars.register_helper("timestamp", Box::new(timestamp_helper));
    handlebars.register_helper("env", Box::new(env_helper));
    handlebars.register_helper("upper", Box::new(upper_helper));
    handlebars.register_helper("lower", Box::new(lower_helper));
    handlebars.register_helper("default", Box::new(default_helper));
    handlebars.register_helper("truncate_words", Box::new(truncate_words_helper));
}
