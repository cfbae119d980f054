//! Error types for transforms, pipelines and configuration loading

use std::path::PathBuf;

use thiserror::Error;

/// Failure variant of [`crate::transform_safe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The input string was empty
    #[error("Input cannot be empty")]
    EmptyInput,
}

/// Errors raised while parsing a pipeline specification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The specification contained no steps
    #[error("empty pipeline")]
    Empty,

    /// A step name was not recognised
    #[error("unknown step: {0:?}. Use: identity, tag, upper, prefix:<text>, suffix:<text>")]
    UnknownStep(String),

    /// A step that takes text was given none
    #[error("step {0:?} requires an argument (e.g. {0}:<text>)")]
    MissingArgument(String),

    /// A step that takes no text was given some
    #[error("step {0:?} takes no argument")]
    UnexpectedArgument(String),
}

/// Errors raised while loading or saving a [`crate::BridgeConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for a config record
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config record could not be written as TOML
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
