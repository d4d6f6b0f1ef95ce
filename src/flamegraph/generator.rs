//! Flame graph rendering.
//!
//! Encodes the call tree as the JSON document d3-flame-graph consumes and,
//! for HTML output, splices it into the d3-flame-graph page template.

use crate::aggregator::Node;
use crate::utils::config::{OutputFormat, DEFAULT_TEMPLATE_PATH, FLAMEGRAPH_MARKER};
use crate::utils::error::{RenderError, TemplateError};
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::{Path, PathBuf};

/// Flame graph output configuration
///
/// **Public** - allows customization of the rendered output
#[derive(Debug, Clone)]
pub struct FlamegraphConfig {
    /// Serialization mode
    pub format: OutputFormat,

    /// Destination; `None` picks the format's default file name
    pub output: Option<PathBuf>,

    /// JSON indentation width; `None` emits compact JSON
    pub indent: Option<usize>,

    /// d3-flame-graph HTML template
    pub template: PathBuf,
}

impl Default for FlamegraphConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Html,
            output: None,
            indent: None,
            template: PathBuf::from(DEFAULT_TEMPLATE_PATH),
        }
    }
}

impl FlamegraphConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }

    pub fn with_template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = template.into();
        self
    }

    /// Destination after applying the per-format default
    pub fn output_path(&self) -> &Path {
        match &self.output {
            Some(path) => path,
            None => Path::new(self.format.default_output()),
        }
    }
}

/// Fail early when HTML output is requested but the template is missing
///
/// **Public** - run before any event is read
pub fn check_template(config: &FlamegraphConfig) -> Result<(), TemplateError> {
    if config.format == OutputFormat::Html && !config.template.is_file() {
        return Err(TemplateError::Missing(config.template.clone()));
    }
    Ok(())
}

/// Render the call tree in the configured format
///
/// **Public** - main entry point for rendering
///
/// # Errors
/// * `RenderError::SerializationFailed` - JSON encoding failed
/// * `RenderError::Template` - the HTML template could not be read
pub fn render(root: &Node, config: &FlamegraphConfig) -> Result<String, RenderError> {
    let json = render_json(root, config.indent)?;

    match config.format {
        OutputFormat::Json => Ok(json),
        OutputFormat::Html => Ok(render_html(&config.template, &json)?),
    }
}

/// Encode the tree as JSON
///
/// `indent` of `None` produces compact output; `Some(n)` pretty-prints with
/// `n` spaces per level.
pub fn render_json(root: &Node, indent: Option<usize>) -> Result<String, RenderError> {
    let json = match indent {
        None => serde_json::to_string(root)?,
        Some(width) => {
            let indent = " ".repeat(width);
            let mut buf = Vec::new();
            let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
            root.serialize(&mut ser)?;
            String::from_utf8(buf)?
        }
    };

    debug!("Encoded call tree as {} bytes of JSON", json.len());
    Ok(json)
}

/// Splice the JSON tree into the HTML template
///
/// The first occurrence of the marker token is replaced; the rest of the
/// template is copied verbatim.
pub fn render_html(template: &Path, json: &str) -> Result<String, TemplateError> {
    info!("Reading flame graph template: {}", template.display());

    let content = std::fs::read_to_string(template).map_err(|source| TemplateError::ReadFailed {
        path: template.to_path_buf(),
        source,
    })?;

    if !content.contains(FLAMEGRAPH_MARKER) {
        warn!(
            "Template {} has no '{}' marker; output will not contain the call tree",
            template.display(),
            FLAMEGRAPH_MARKER
        );
    }

    Ok(content.replacen(FLAMEGRAPH_MARKER, json, 1))
}
