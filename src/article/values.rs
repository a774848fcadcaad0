// ABOUTME: Loading placeholder values from YAML or JSON files
// ABOUTME: Flattens a mapping of scalar values into string values

use serde_yaml::Value;
use std::collections::HashMap;
use std::path::Path;

use super::error::{ArticleError, Result};

/// Load a flat mapping of placeholder values. JSON files parse as YAML.
pub fn load_values(path: &Path) -> Result<HashMap<String, String>> {
    let contents = std::fs::read_to_string(path)?;
    let path_text = path.display().to_string();
    parse_values(&contents).map_err(|e| match e {
        ArticleError::YamlError(err) => ArticleError::InvalidValues {
            path: path_text,
            message: err.to_string(),
        },
        ArticleError::InvalidValues { message, .. } => ArticleError::InvalidValues {
            path: path_text,
            message,
        },
        other => other,
    })
}

pub fn parse_values(contents: &str) -> Result<HashMap<String, String>> {
    let document: Value = serde_yaml::from_str(contents)?;
    let mapping = match document {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Ok(HashMap::new()),
        _ => {
            return Err(ArticleError::InvalidValues {
                path: "<inline>".to_string(),
                message: "expected a mapping of placeholder names to values".to_string(),
            })
        }
    };

    let mut values = HashMap::new();
    for (key, value) in mapping {
        let key = match key {
            Value::String(s) => s,
            other => scalar_to_string(&other).ok_or_else(|| ArticleError::InvalidValues {
                path: "<inline>".to_string(),
                message: "keys must be strings".to_string(),
            })?,
        };
        let value = scalar_to_string(&value)
            .ok_or_else(|| ArticleError::NestedValue { key: key.clone() })?;
        values.insert(key, value);
    }
    Ok(values)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}
