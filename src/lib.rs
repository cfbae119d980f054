//! bridge - composable string transforms
//!
//! A handful of pure `&str -> String` transforms, builders for parameterized
//! transforms, a left-to-right composition operator, and runtime pipelines
//! built from them.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod transform;

pub use config::{BridgeConfig, info};
pub use error::{ConfigError, PipelineError, TransformError};
pub use pipeline::{Pipeline, Step};
pub use transform::{compose, identity, prefix, suffix, transform, transform_safe, uppercase};
