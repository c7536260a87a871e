//! Scene identity and key minting.

use std::borrow::Borrow;
use std::fmt;

// ── SceneKey ──────────────────────────────────────────────────────────────

/// Opaque identifier for a scene.
///
/// Keys are unique within a registry at any instant, but a key whose scene
/// has been evicted may be reused later for a brand-new record. Callers
/// supply keys themselves or let the navigator mint one (see [`KeyMint`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneKey(String);

impl SceneKey {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneKey {
    fn from(s: &str) -> Self {
        SceneKey(s.to_owned())
    }
}

impl From<String> for SceneKey {
    fn from(s: String) -> Self {
        SceneKey(s)
    }
}

impl AsRef<str> for SceneKey {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lets `IndexMap<SceneKey, _>` be queried with a plain `&str`.
impl Borrow<str> for SceneKey {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ── KeyMint ───────────────────────────────────────────────────────────────

/// Mints scene keys for calls that omit one.
///
/// Each navigator owns its own mint (instance state, not a process global),
/// so navigators stay independent and testable. A minted key combines a
/// random seed fragment fixed at construction with a monotonic counter:
/// the counter rules out collisions with other keys from the same mint, the
/// seed rules out collisions across mints and with caller-supplied keys.
#[derive(Debug)]
pub struct KeyMint {
    seed: String,
    next: u64,
}

impl KeyMint {
    pub fn new() -> Self {
        let seed = uuid::Uuid::new_v4().simple().to_string();
        Self { seed, next: 0 }
    }

    /// Returns a fresh key never issued by this mint before.
    pub fn mint(&mut self) -> SceneKey {
        let n = self.next;
        self.next += 1;
        SceneKey(format!("scene-{}-{n}", &self.seed[..12]))
    }
}

impl Default for KeyMint {
    fn default() -> Self {
        Self::new()
    }
}
