//! Navigation history order.

use crate::error::NavError;
use crate::key::SceneKey;

/// Ordered record of visited scene keys, oldest first.
///
/// Duplicates are allowed: each entry is one still-resident reference to
/// its key, so the same scene can sit at several positions at once. The
/// stack is seeded with the root scene and no operation may empty it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStack {
    entries: Vec<SceneKey>,
}

impl HistoryStack {
    /// Seeds the history with the root scene.
    pub fn new(root: SceneKey) -> Self {
        Self { entries: vec![root] }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// The active entry — the tail after the most recent mutation.
    #[inline]
    pub fn current(&self) -> &SceneKey {
        self.entries.last().expect("history is non-empty by construction")
    }

    /// All entries, oldest first.
    #[inline]
    pub fn entries(&self) -> &[SceneKey] {
        &self.entries
    }

    /// The last `n` entries, oldest first. `n` must not exceed the depth.
    #[inline]
    pub(crate) fn tail(&self, n: usize) -> &[SceneKey] {
        &self.entries[self.entries.len() - n..]
    }

    pub fn append(&mut self, key: SceneKey) {
        self.entries.push(key);
    }

    /// Drops the tail entry and appends `key` in its place (replace).
    /// Releasing the old tail's registry reference is the caller's job.
    /// Legal at any depth ≥ 1, including a lone root.
    pub fn swap_last(&mut self, key: SceneKey) {
        self.entries.pop();
        self.entries.push(key);
    }

    /// Removes the most recent occurrence of `key` (if any), then appends
    /// `key` at the tail (jump).
    ///
    /// Only that single occurrence is collapsed; earlier duplicates and
    /// the relative order of every other entry are preserved.
    pub fn remove_last_occurrence_and_append(&mut self, key: SceneKey) {
        if let Some(i) = self.entries.iter().rposition(|k| *k == key) {
            self.entries.remove(i);
        }
        self.entries.push(key);
    }

    /// Removes exactly the last `n` entries.
    ///
    /// Refused with [`NavError::InvalidPop`] when `n` would empty the
    /// stack — there is always at least one current scene — and nothing is
    /// mutated on refusal. `n = 0` succeeds and removes nothing.
    pub fn truncate_last_n(&mut self, n: usize) -> Result<(), NavError> {
        if n >= self.entries.len() {
            return Err(NavError::InvalidPop { requested: n, depth: self.entries.len() });
        }
        self.entries.truncate(self.entries.len() - n);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> SceneKey {
        SceneKey::from(s)
    }

    fn stack(keys: &[&str]) -> HistoryStack {
        let mut h = HistoryStack::new(key(keys[0]));
        for k in &keys[1..] {
            h.append(key(k));
        }
        h
    }

    fn keys(h: &HistoryStack) -> Vec<&str> {
        h.entries().iter().map(SceneKey::as_str).collect()
    }

    // ── append / swap ─────────────────────────────────────────────────────

    #[test]
    fn append_moves_the_tail() {
        let mut h = stack(&["r"]);
        h.append(key("a"));
        assert_eq!(h.current().as_str(), "a");
        assert_eq!(h.depth(), 2);
    }

    #[test]
    fn swap_last_replaces_only_the_tail() {
        let mut h = stack(&["r", "a"]);
        h.swap_last(key("b"));
        assert_eq!(keys(&h), ["r", "b"]);
    }

    #[test]
    fn swap_last_works_on_a_lone_root() {
        let mut h = stack(&["r"]);
        h.swap_last(key("b"));
        assert_eq!(keys(&h), ["b"]);
    }

    // ── remove_last_occurrence_and_append ─────────────────────────────────

    #[test]
    fn jump_reorder_collapses_the_most_recent_occurrence() {
        let mut h = stack(&["r", "a", "r", "b"]);
        h.remove_last_occurrence_and_append(key("r"));
        // The second "r" was collapsed; the first survives.
        assert_eq!(keys(&h), ["r", "a", "b", "r"]);
    }

    #[test]
    fn jump_reorder_with_absent_key_just_appends() {
        let mut h = stack(&["r", "a"]);
        h.remove_last_occurrence_and_append(key("z"));
        assert_eq!(keys(&h), ["r", "a", "z"]);
    }

    #[test]
    fn jump_reorder_on_the_tail_is_idempotent() {
        let mut h = stack(&["r", "a"]);
        h.remove_last_occurrence_and_append(key("a"));
        h.remove_last_occurrence_and_append(key("a"));
        assert_eq!(keys(&h), ["r", "a"]);
    }

    // ── truncate_last_n ───────────────────────────────────────────────────

    #[test]
    fn truncate_removes_the_tail_entries() {
        let mut h = stack(&["r", "a", "b", "c"]);
        h.truncate_last_n(2).unwrap();
        assert_eq!(keys(&h), ["r", "a"]);
    }

    #[test]
    fn truncate_zero_is_a_noop() {
        let mut h = stack(&["r", "a"]);
        h.truncate_last_n(0).unwrap();
        assert_eq!(keys(&h), ["r", "a"]);
    }

    #[test]
    fn truncate_to_empty_is_refused() {
        let mut h = stack(&["r", "a"]);
        let err = h.truncate_last_n(2).unwrap_err();
        assert_eq!(err, NavError::InvalidPop { requested: 2, depth: 2 });
        assert_eq!(keys(&h), ["r", "a"]);
    }

    #[test]
    fn truncate_beyond_depth_is_refused() {
        let mut h = stack(&["r"]);
        assert!(h.truncate_last_n(5).is_err());
        assert_eq!(h.depth(), 1);
    }
}
