//! Boundary to the rendering / capture collaborator.
//!
//! The navigator itself renders nothing. After each committed operation it
//! hands the observer a [`StackSnapshot`]; the embedder uses it to decide
//! which mounted views stay, which unmount, and which one is active.
//! Capture and session calls (recording, screenshots, AR) belong entirely
//! to the observer's side of the seam.

use crate::key::SceneKey;

/// Consistent view of the stack after one committed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSnapshot {
    /// Resident scene keys in registry enumeration (mount) order.
    pub resident: Vec<SceneKey>,
    /// The active scene — tail of the history.
    pub current_key: SceneKey,
    /// Ordinal of `current_key` within `resident`.
    pub current_index: usize,
    /// History depth (always ≥ 1).
    pub depth: usize,
}

/// Receives exactly one callback per committed navigation operation.
///
/// Registry and history mutate as a unit before the callback fires, so an
/// observer never sees a half-applied operation; refused operations fire
/// nothing. The navigator treats the callback as fire-and-forget and has
/// no ordering dependency on whatever the observer kicks off.
pub trait StackObserver {
    fn stack_committed(&mut self, snapshot: &StackSnapshot);
}
