//! Design tokens
//!
//! Tokens are the atomic values a resolved theme is made of:
//! - Colors
//! - Typography (fonts, sizes, weights)
//! - Animation durations and easings

mod animation;
mod color;
mod typography;

pub use animation::*;
pub use color::*;
pub use typography::*;
