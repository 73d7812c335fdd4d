//! Hirely preference store
//!
//! The durable, subscribable source of truth for the four preference axes:
//! brand variant, theme mode, color profile, and active language.
//!
//! # Architecture
//!
//! - [`PrefAxis`] / [`PrefValue`]: the axis model. Each axis has a closed
//!   value set, a default, and a fixed storage key.
//! - [`PrefStorage`]: the durable key/value seam, with a TOML-file-backed
//!   [`FileStore`] and an in-memory [`MemoryStore`]. Reads validate against
//!   the axis's allowed set and degrade to "no preference" on any mismatch.
//! - [`PreferenceStore`]: in-memory state plus write-through persistence and
//!   synchronous per-axis subscriber notification. Also owns the per-axis
//!   sync flags used to serialize remote synchronization.
//!
//! Resolvers and side-effect appliers are downstream consumers; they never
//! write back into the store.

mod axis;
mod error;
mod storage;
mod store;

pub use axis::{default_axis_value, parse_axis_value, PrefAxis, PrefValue};
pub use error::PreferenceError;
pub use storage::{read_axis, write_axis, FileStore, MemoryStore, PrefStorage};
pub use store::{PreferenceStore, SubscriptionId};
