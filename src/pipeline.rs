//! Transform pipelines assembled at runtime
//!
//! A pipeline is written as comma-separated steps:
//! - `identity`: leave the text alone
//! - `tag`: prepend the `[bridge] ` tag
//! - `upper` / `uppercase`: uppercase the text
//! - `prefix:<text>`: prepend `<text>`
//! - `suffix:<text>`: append `<text>`
//!
//! Steps run left to right, the same order as [`compose`].
//!
//! # Examples
//!
//! ```
//! use bridge::pipeline::Pipeline;
//!
//! let p = Pipeline::parse("prefix:hello-,suffix:-world,upper").unwrap();
//! assert_eq!(p.apply("test"), "HELLO-TEST-WORLD");
//! ```

use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::error::{PipelineError, TransformError};
use crate::transform::{BoxedTransform, compose, identity, prefix, suffix, transform, uppercase};

/// A single named transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Return the text unchanged
    Identity,
    /// Prepend the `[bridge] ` tag
    Tag,
    /// Uppercase the text
    Uppercase,
    /// Prepend the given text
    Prefix(String),
    /// Append the given text
    Suffix(String),
}

impl Step {
    /// Parse a step from its textual form
    pub fn parse(s: &str) -> Result<Self, PipelineError> {
        s.parse()
    }

    /// Apply this step to `input`
    #[must_use]
    pub fn apply(&self, input: &str) -> String {
        match self {
            Self::Identity => identity(input),
            Self::Tag => transform(input),
            Self::Uppercase => uppercase(input),
            Self::Prefix(pre) => prefix(pre.as_str())(input),
            Self::Suffix(suf) => suffix(suf.as_str())(input),
        }
    }

    /// Turn this step into a standalone transform
    #[must_use]
    pub fn into_transform(self) -> BoxedTransform {
        match self {
            Self::Identity => Box::new(identity),
            Self::Tag => Box::new(transform),
            Self::Uppercase => Box::new(uppercase),
            Self::Prefix(pre) => Box::new(prefix(pre)),
            Self::Suffix(suf) => Box::new(suffix(suf)),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "identity"),
            Self::Tag => write!(f, "tag"),
            Self::Uppercase => write!(f, "upper"),
            Self::Prefix(pre) => write!(f, "prefix:{pre}"),
            Self::Suffix(suf) => write!(f, "suffix:{suf}"),
        }
    }
}

impl FromStr for Step {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The argument after ':' is kept verbatim, spaces included
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg)),
            None => (s.trim(), None),
        };

        match (name.to_lowercase().as_str(), arg) {
            ("identity", None) => Ok(Self::Identity),
            ("tag", None) => Ok(Self::Tag),
            ("upper" | "uppercase", None) => Ok(Self::Uppercase),
            ("prefix", Some(arg)) => Ok(Self::Prefix(arg.to_string())),
            ("suffix", Some(arg)) => Ok(Self::Suffix(arg.to_string())),
            ("prefix" | "suffix", None) => Err(PipelineError::MissingArgument(name.to_string())),
            ("identity" | "tag" | "upper" | "uppercase", Some(_)) => {
                Err(PipelineError::UnexpectedArgument(name.to_string()))
            },
            _ => Err(PipelineError::UnknownStep(s.to_string())),
        }
    }
}

/// An ordered list of steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    /// Create an empty pipeline (behaves as identity)
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step
    #[must_use]
    pub fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Parse a comma-separated pipeline specification
    ///
    /// Step arguments cannot contain commas.
    pub fn parse(spec: &str) -> Result<Self, PipelineError> {
        if spec.trim().is_empty() {
            return Err(PipelineError::Empty);
        }
        let steps = spec.split(',').map(Step::parse).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }

    /// The steps, in application order
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run every step over `input`, left to right
    #[must_use]
    pub fn apply(&self, input: &str) -> String {
        self.steps.iter().fold(input.to_string(), |acc, step| {
            let next = step.apply(&acc);
            trace!("{step}: {acc:?} -> {next:?}");
            next
        })
    }

    /// Like [`Pipeline::apply`], but rejects the empty string up front
    pub fn apply_safe(&self, input: &str) -> Result<String, TransformError> {
        if input.is_empty() {
            return Err(TransformError::EmptyInput);
        }
        Ok(self.apply(input))
    }

    /// Fold the steps into a single transform with [`compose`]
    #[must_use]
    pub fn build(self) -> BoxedTransform {
        let start: BoxedTransform = Box::new(identity);
        self.steps.into_iter().fold(start, |acc, step| {
            Box::new(compose(acc, step.into_transform()))
        })
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.steps.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join(","))
    }
}

impl FromStr for Pipeline {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
