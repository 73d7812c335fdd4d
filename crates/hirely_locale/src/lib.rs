//! Hirely locale support
//!
//! Goals:
//! - A configured, ordered catalog of supported languages with local keys
//!   and remote culture codes
//! - Drift-tolerant mapping from remote culture codes back to local keys
//! - A process-lifetime cache of remotely localized messages with static
//!   English defaults as the last resort

mod catalog;
mod messages;
mod normalize;

pub use catalog::{
    CatalogError, CultureDescriptor, LanguageSpec, LocaleCatalog, SupportedLanguage,
};
pub use messages::{default_message, MessageCache};
pub use normalize::{culture_fallback_chain, normalize_culture};
