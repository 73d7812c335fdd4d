//! Hirely platform glue
//!
//! The seam between the preference core and a concrete document
//! environment, plus the idempotent applier that keeps that environment in
//! sync with the resolved theme and active language.

mod applier;
mod document;

pub use applier::StyleApplier;
pub use document::{DocumentHost, HeadlessDocument};
