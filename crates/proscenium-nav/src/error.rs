//! Navigation error taxonomy.
//!
//! Every failure is local: the navigator logs a diagnostic, returns the
//! error, and leaves its state unchanged. Nothing here is fatal to the
//! host process, and nothing panics across the navigator boundary.
//!
//! Releasing an unregistered key is deliberately *not* in this enum — it
//! is a recoverable bookkeeping slip reported via `log::warn!` only (see
//! [`crate::registry::SceneRegistry::release`]).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// push/replace/jump was called with neither a key nor a descriptor.
    #[error("navigation call needs a scene key, a descriptor, or both")]
    MissingArguments,

    /// A key-only call referenced a scene that was never registered, or
    /// has since been evicted. A descriptor is required to (re)create it.
    #[error("scene '{key}' is not registered and no descriptor was given")]
    UnknownSceneKey { key: String },

    /// The pop would leave the history empty, or exceeds its depth. There
    /// is always at least one current scene.
    #[error("cannot pop {requested} scene(s) from a stack of depth {depth}")]
    InvalidPop { requested: usize, depth: usize },
}
