//! Command implementations

mod info;
mod transform;

pub use info::info;
pub use transform::transform;
