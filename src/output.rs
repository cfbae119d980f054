//! Output formatting for human and JSON modes
//!
//! Results can be rendered either as plain text or as machine-parseable JSON.

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of running a transform
#[derive(Debug, Serialize)]
pub struct TransformOutput {
    /// The text that was transformed
    pub input: String,
    /// The transformed text
    pub output: String,
    /// Steps applied, in order
    pub steps: Vec<String>,
}

/// Result of the info command
#[derive(Debug, Serialize)]
pub struct InfoOutput {
    /// Config name
    pub name: String,
    /// Config version
    pub version: String,
    /// Formatted `"<name> v<version>"` line
    pub info: String,
}

/// A failed operation
#[derive(Debug, Serialize)]
pub struct ErrorOutput {
    /// Always false
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl ErrorOutput {
    /// Build an error output from any displayable error
    #[must_use]
    pub fn new(err: &impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message: err.to_string(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => eprintln!("error: {}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

impl TransformOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.output),
            OutputMode::Json => render_json(self),
        }
    }
}

impl InfoOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.info),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json(value: &impl Serialize) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
