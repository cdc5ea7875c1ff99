//! Rendering of serializable results in the selected [`OutputFormat`].

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::OutputFormat;

/// Serialize `value` as JSON or YAML.
///
/// Text output is command-specific, so callers handle
/// [`OutputFormat::Text`] themselves; passing it here falls back to JSON.
pub fn render_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).context("failed to render YAML"),
        OutputFormat::Json | OutputFormat::Text => {
            serde_json::to_string_pretty(value).context("failed to render JSON")
        }
    }
}
