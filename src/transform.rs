//! String transforms and their composition
//!
//! A transform is anything implementing `Fn(&str) -> String`. The built-in
//! transforms are plain functions; [`prefix`] and [`suffix`] build closures.
//!
//! # Examples
//!
//! ```
//! use bridge::transform::{compose, prefix, suffix, transform};
//!
//! assert_eq!(transform("hello"), "[bridge] hello");
//!
//! let wrap = compose(prefix("hello-"), suffix("-world"));
//! assert_eq!(wrap("test"), "hello-test-world");
//! ```

use log::debug;

use crate::error::TransformError;

/// Tag prepended by [`transform`]
pub const TAG: &str = "[bridge] ";

/// A transform collected at runtime
pub type BoxedTransform = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Prefix `input` with [`TAG`]
#[must_use]
pub fn transform(input: &str) -> String {
    format!("{TAG}{input}")
}

/// Like [`transform`], but rejects the empty string
pub fn transform_safe(input: &str) -> Result<String, TransformError> {
    if input.is_empty() {
        debug!("transform_safe: rejecting empty input");
        return Err(TransformError::EmptyInput);
    }
    Ok(transform(input))
}

/// Build a transform that applies `f` and then `g`
///
/// Evaluation is left to right: `compose(f, g)(x) == g(f(x))`.
#[must_use]
pub fn compose<F, G>(f: F, g: G) -> impl Fn(&str) -> String
where
    F: Fn(&str) -> String,
    G: Fn(&str) -> String,
{
    move |input| g(&f(input))
}

/// Return the input unchanged
#[must_use]
pub fn identity(input: &str) -> String {
    input.to_string()
}

/// Uppercase the input
#[must_use]
pub fn uppercase(input: &str) -> String {
    input.to_uppercase()
}

/// Build a transform that prepends `pre`
#[must_use]
pub fn prefix(pre: impl Into<String>) -> impl Fn(&str) -> String {
    let pre = pre.into();
    move |input| format!("{pre}{input}")
}

/// Build a transform that appends `suf`
///
/// Nested suffixes land inside out: `suffix(a)(suffix(b)(x)) == x + b + a`.
#[must_use]
pub fn suffix(suf: impl Into<String>) -> impl Fn(&str) -> String {
    let suf = suf.into();
    move |input| format!("{input}{suf}")
}
