//! Hirely remote preference sync
//!
//! Best-effort synchronization between the local preference store and the
//! remote preference service. The defining property of this crate is that
//! nothing here can block a local preference change: remote failures are
//! logged, swallowed, and recovered by cache/default fallbacks.
//!
//! - [`RemoteClient`] / [`CultureTransport`]: the HTTP-shaped boundary.
//! - [`CultureSync`]: guards against concurrent language changes, performs
//!   the optimistic local switch, and reconciles remote failures by simply
//!   keeping the local state.
//! - [`MessageService`]: localized error strings with fetch → cache →
//!   static-default degradation.

mod client;
mod coordinator;
mod messages;

pub use client::{CultureTransport, RemoteClient, RemoteCulture, RemoteUnavailable};
pub use coordinator::CultureSync;
pub use messages::MessageService;
