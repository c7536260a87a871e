//! The navigation façade: push, replace, jump, pop.

use std::fmt;

use log::{debug, warn};

use crate::descriptor::SceneDescriptor;
use crate::error::NavError;
use crate::history::HistoryStack;
use crate::key::{KeyMint, SceneKey};
use crate::observer::{StackObserver, StackSnapshot};
use crate::registry::{SceneRecord, SceneRegistry};

/// Scene-stack navigator.
///
/// Owns the scene registry and the history stack and is the only way to
/// mutate either — there is no external aliasing. Each verb validates its
/// arguments first, then applies all registry and history mutations as one
/// unit, so the two containers never observably diverge between calls;
/// a refused verb returns a [`NavError`] with state byte-for-byte
/// unchanged.
///
/// Single-threaded by design: every verb takes `&mut self` and runs to
/// completion with no suspension. The rendering collaborator hangs off the
/// [`StackObserver`] seam and is notified once per committed operation.
pub struct Navigator<R> {
    registry: SceneRegistry<R>,
    history: HistoryStack,
    mint: KeyMint,
    observer: Option<Box<dyn StackObserver>>,
}

impl<R> Navigator<R> {
    /// Seeds the navigator with its root scene (reference count 1).
    ///
    /// A blank or absent `key` gets a minted one. The root can be replaced
    /// later but never popped: the stack always holds at least one scene.
    pub fn new(key: Option<&str>, descriptor: SceneDescriptor<R>) -> Self {
        let mut mint = KeyMint::new();
        let root = match key {
            Some(k) if !k.trim().is_empty() => SceneKey::from(k),
            _ => mint.mint(),
        };
        let mut registry = SceneRegistry::new();
        registry.ensure(&root, Some(descriptor), false);
        debug!("navigator seeded with root scene '{root}'");
        Self {
            registry,
            history: HistoryStack::new(root),
            mint,
            observer: None,
        }
    }

    /// Attaches the rendering-side observer, replacing any previous one.
    /// The observer is only ever called after a committed operation; it is
    /// not called for the seed state.
    pub fn set_observer(&mut self, observer: Box<dyn StackObserver>) {
        self.observer = Some(observer);
    }

    // ── verbs ─────────────────────────────────────────────────────────────

    /// Pushes a scene onto the stack and makes it current.
    ///
    /// A brand-new key needs a descriptor; a key-only call must name a
    /// resident scene (and adds one more durable reference to it). With a
    /// blank or absent key a fresh one is minted. Returns the resolved key.
    pub fn push(
        &mut self,
        key: Option<&str>,
        descriptor: Option<SceneDescriptor<R>>,
    ) -> Result<SceneKey, NavError> {
        let key = self
            .resolve(key, descriptor.is_some())
            .map_err(|e| refuse("push", e))?;
        self.registry.ensure(&key, descriptor, false);
        self.history.append(key.clone());
        self.commit("push");
        Ok(key)
    }

    /// Swaps the current scene for another one; history depth is unchanged.
    ///
    /// The outgoing tail gives up its reference (and is evicted if that was
    /// the last one). Argument resolution is identical to [`push`](Self::push).
    /// Replacing the root at depth 1 is legal.
    pub fn replace(
        &mut self,
        key: Option<&str>,
        descriptor: Option<SceneDescriptor<R>>,
    ) -> Result<SceneKey, NavError> {
        let key = self
            .resolve(key, descriptor.is_some())
            .map_err(|e| refuse("replace", e))?;
        let outgoing = self.history.current().clone();
        // Retain the incoming scene before releasing the outgoing one, so
        // replacing a scene with itself never bounces through eviction.
        self.registry.ensure(&key, descriptor, false);
        self.registry.release(&outgoing);
        self.history.swap_last(key.clone());
        self.commit("replace");
        Ok(key)
    }

    /// Brings a scene to the top of the stack, reusing its most recent
    /// history slot if it has one.
    ///
    /// The registry contribution is capped at one reference no matter how
    /// often the same scene is jumped to, and only the most recent stale
    /// history occurrence is collapsed — earlier duplicates survive.
    /// Argument resolution is identical to [`push`](Self::push).
    pub fn jump(
        &mut self,
        key: Option<&str>,
        descriptor: Option<SceneDescriptor<R>>,
    ) -> Result<SceneKey, NavError> {
        let key = self
            .resolve(key, descriptor.is_some())
            .map_err(|e| refuse("jump", e))?;
        self.registry.ensure(&key, descriptor, true);
        self.history.remove_last_occurrence_and_append(key.clone());
        self.commit("jump");
        Ok(key)
    }

    /// Pops the current scene. Equivalent to `pop_n(1)`.
    pub fn pop(&mut self) -> Result<(), NavError> {
        self.pop_n(1)
    }

    /// Pops the last `n` history entries, releasing one reference per slot
    /// (duplicate keys occupy distinct slots and are released once each).
    ///
    /// `pop_n(0)` returns immediately without error. Popping the root — or
    /// more entries than exist above it — is refused with
    /// [`NavError::InvalidPop`] and mutates nothing.
    pub fn pop_n(&mut self, n: usize) -> Result<(), NavError> {
        if n == 0 {
            debug!("pop_n(0) is a no-op");
            return Ok(());
        }
        let depth = self.history.depth();
        if n >= depth {
            return Err(refuse("pop", NavError::InvalidPop { requested: n, depth }));
        }
        let departing: Vec<SceneKey> = self.history.tail(n).to_vec();
        for key in &departing {
            self.registry.release(key);
        }
        self.history
            .truncate_last_n(n)
            .expect("pop depth was validated above");
        self.commit("pop");
        Ok(())
    }

    // ── read accessors ────────────────────────────────────────────────────

    /// The active scene — tail of the history.
    #[inline]
    pub fn current_key(&self) -> &SceneKey {
        self.history.current()
    }

    /// Ordinal of the active scene within the resident enumeration.
    ///
    /// Derived from the history tail and the registry's ordinal lookup on
    /// every call, never stored. The tail is always resident (every
    /// history slot is backed by a registry reference), so this cannot
    /// miss.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.registry
            .ordinal(self.history.current().as_str())
            .expect("history tail is always resident")
    }

    /// History depth; ≥ 1 at all times.
    #[inline]
    pub fn depth(&self) -> usize {
        self.history.depth()
    }

    /// Resident scenes in enumeration (mount) order.
    pub fn scenes(&self) -> impl Iterator<Item = &SceneRecord<R>> {
        self.registry.iter()
    }

    /// Read-only view of the registry.
    #[inline]
    pub fn registry(&self) -> &SceneRegistry<R> {
        &self.registry
    }

    /// Read-only view of the history.
    #[inline]
    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// Consistent snapshot of the committed stack state.
    pub fn snapshot(&self) -> StackSnapshot {
        StackSnapshot {
            resident: self.registry.keys().cloned().collect(),
            current_key: self.history.current().clone(),
            current_index: self.current_index(),
            depth: self.history.depth(),
        }
    }

    // ── internals ─────────────────────────────────────────────────────────

    /// Shared key-and-descriptor resolution for push / replace / jump,
    /// evaluated before any mutation:
    ///
    /// 1. neither key nor descriptor → [`NavError::MissingArguments`];
    /// 2. key-only call naming an unregistered scene →
    ///    [`NavError::UnknownSceneKey`];
    /// 3. blank or absent key → a minted one.
    fn resolve(&mut self, key: Option<&str>, has_descriptor: bool) -> Result<SceneKey, NavError> {
        let Some(explicit) = key else {
            if !has_descriptor {
                return Err(NavError::MissingArguments);
            }
            return Ok(self.mint.mint());
        };
        if !has_descriptor && !self.registry.contains(explicit) {
            return Err(NavError::UnknownSceneKey { key: explicit.to_owned() });
        }
        if explicit.trim().is_empty() {
            return Ok(self.mint.mint());
        }
        Ok(SceneKey::from(explicit))
    }

    /// Single commit point: logs the new state and notifies the observer
    /// exactly once, after all mutations of the operation have landed.
    fn commit(&mut self, op: &str) {
        debug!(
            "{op} committed: current='{}' depth={} resident={}",
            self.history.current(),
            self.history.depth(),
            self.registry.len(),
        );
        if self.observer.is_some() {
            let snapshot = self.snapshot();
            if let Some(observer) = self.observer.as_mut() {
                observer.stack_committed(&snapshot);
            }
        }
    }
}

fn refuse(op: &str, err: NavError) -> NavError {
    warn!("{op} refused: {err}");
    err
}

impl<R: fmt::Debug> fmt::Debug for Navigator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("registry", &self.registry)
            .field("history", &self.history)
            .field("mint", &self.mint)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
