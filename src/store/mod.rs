//! Injectable state containers.
//!
//! The dashboard keeps a handful of small pieces of long-lived state:
//! theme, language, selected forest, list filters, and the signed-in
//! session. Instead of process-wide singletons bound to one storage
//! mechanism, each container owns an injected [`StateBackend`] and follows
//! the same lifecycle: load once, mutate through methods, persist on every
//! change. Tests instantiate isolated containers over a `MemoryBackend`.
//!
//! - `backend.rs` - the `StateBackend` seam + memory and directory backends
//! - `prefs.rs` - display preferences and list filters
//! - `session.rs` - accounts and the signed-in user

pub mod backend;
pub mod prefs;
pub mod session;

pub use backend::{DirBackend, MemoryBackend, StateBackend};
pub use prefs::{FilterSelection, Preferences, Theme};
pub use session::SessionStore;
