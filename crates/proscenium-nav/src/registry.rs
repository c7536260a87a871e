//! Resident scene records and their reference counts.

use indexmap::IndexMap;
use indexmap::map::Entry;
use log::warn;

use crate::descriptor::SceneDescriptor;
use crate::key::SceneKey;

// ── SceneRecord ───────────────────────────────────────────────────────────

/// One resident scene: its key, its descriptor, and the number of history
/// slots currently justifying its residency.
#[derive(Debug, Clone)]
pub struct SceneRecord<R> {
    key: SceneKey,
    descriptor: SceneDescriptor<R>,
    ref_count: usize,
}

impl<R> SceneRecord<R> {
    #[inline]
    pub fn key(&self) -> &SceneKey {
        &self.key
    }

    #[inline]
    pub fn descriptor(&self) -> &SceneDescriptor<R> {
        &self.descriptor
    }

    #[inline]
    pub fn ref_count(&self) -> usize {
        self.ref_count
    }
}

// ── SceneRegistry ─────────────────────────────────────────────────────────

/// Maps scene keys to reference-counted records.
///
/// A record exists iff its count is > 0; hitting zero evicts it on the
/// spot, and a later reference to the same key creates a brand-new record
/// with a reset count.
///
/// Iteration order is insertion order of the *currently resident* records
/// (eviction preserves the order of survivors; a re-created key moves to
/// the back). This is the order the rendering collaborator enumerates
/// mounted scenes in — it is not history order, and callers must not
/// conflate the two.
#[derive(Debug, Clone)]
pub struct SceneRegistry<R> {
    records: IndexMap<SceneKey, SceneRecord<R>>,
}

impl<R> SceneRegistry<R> {
    pub fn new() -> Self {
        Self { records: IndexMap::new() }
    }

    /// Creates the record if `key` is new (count 0, the given descriptor),
    /// then increments the count — unless `limit_one` is set and the count
    /// is already ≥ 1. Returns the count after the call.
    ///
    /// `limit_one` is jump's mode: repeated jumps to the same scene must
    /// not grow its lifetime unboundedly, so jump's registry contribution
    /// is capped at one reference. Push and replace pass `false` and add
    /// one reference per call.
    ///
    /// An already-resident record keeps its original descriptor; the one
    /// passed here is dropped. Descriptors only take effect on creation,
    /// which is why `descriptor` may be `None` for keys the caller has
    /// verified are resident. `None` for an absent key is a caller bug:
    /// logged, nothing mutated, 0 returned.
    pub fn ensure(
        &mut self,
        key: &SceneKey,
        descriptor: Option<SceneDescriptor<R>>,
        limit_one: bool,
    ) -> usize {
        let record = match self.records.entry(key.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let Some(descriptor) = descriptor else {
                    warn!("ensure of absent scene '{key}' without a descriptor ignored");
                    return 0;
                };
                entry.insert(SceneRecord { key: key.clone(), descriptor, ref_count: 0 })
            }
        };
        if !(limit_one && record.ref_count >= 1) {
            record.ref_count += 1;
        }
        record.ref_count
    }

    /// Drops one reference to `key`. At zero the record is evicted
    /// immediately; the enumeration order of the survivors is preserved.
    /// Returns the remaining count, or `None` if `key` was not resident.
    ///
    /// Releasing an unregistered key is a bookkeeping slip in the caller,
    /// not a crash: it is logged and ignored.
    pub fn release(&mut self, key: &SceneKey) -> Option<usize> {
        match self.records.get_mut(key) {
            None => {
                warn!("release of unregistered scene '{key}' ignored");
                None
            }
            Some(record) => {
                record.ref_count -= 1;
                let remaining = record.ref_count;
                if remaining == 0 {
                    // shift_remove keeps the enumeration order stable for
                    // the render side; swap_remove would scramble it.
                    self.records.shift_remove(key);
                }
                Some(remaining)
            }
        }
    }

    /// Position of `key` in the enumeration order, if resident.
    #[inline]
    pub fn ordinal(&self, key: &str) -> Option<usize> {
        self.records.get_index_of(key)
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&SceneRecord<R>> {
        self.records.get(key)
    }

    /// Number of resident scenes.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resident records in enumeration (mount) order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneRecord<R>> {
        self.records.values()
    }

    /// Resident keys in enumeration (mount) order.
    pub fn keys(&self) -> impl Iterator<Item = &SceneKey> {
        self.records.keys()
    }
}

impl<R> Default for SceneRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> SceneKey {
        SceneKey::from(s)
    }

    fn desc(tag: &str) -> SceneDescriptor<String> {
        SceneDescriptor::new(tag.to_owned())
    }

    // ── ensure ────────────────────────────────────────────────────────────

    #[test]
    fn ensure_creates_at_one() {
        let mut reg = SceneRegistry::new();
        assert_eq!(reg.ensure(&key("a"), Some(desc("A")), false), 1);
        assert_eq!(reg.get("a").unwrap().ref_count(), 1);
    }

    #[test]
    fn ensure_increments_existing() {
        let mut reg = SceneRegistry::new();
        reg.ensure(&key("a"), Some(desc("A")), false);
        assert_eq!(reg.ensure(&key("a"), Some(desc("A")), false), 2);
    }

    #[test]
    fn limit_one_caps_existing_count() {
        let mut reg = SceneRegistry::new();
        reg.ensure(&key("a"), Some(desc("A")), false);
        assert_eq!(reg.ensure(&key("a"), Some(desc("A")), true), 1);
        assert_eq!(reg.ensure(&key("a"), Some(desc("A")), true), 1);
    }

    #[test]
    fn limit_one_still_creates_absent_record() {
        let mut reg = SceneRegistry::new();
        assert_eq!(reg.ensure(&key("a"), Some(desc("A")), true), 1);
        assert!(reg.contains("a"));
    }

    #[test]
    fn ensure_absent_without_descriptor_is_a_noop() {
        let mut reg: SceneRegistry<String> = SceneRegistry::new();
        assert_eq!(reg.ensure(&key("a"), None, false), 0);
        assert!(reg.is_empty());
    }

    #[test]
    fn ensure_resident_without_descriptor_increments() {
        let mut reg = SceneRegistry::new();
        reg.ensure(&key("a"), Some(desc("A")), false);
        assert_eq!(reg.ensure(&key("a"), None, false), 2);
    }

    #[test]
    fn first_descriptor_wins_until_eviction() {
        let mut reg = SceneRegistry::new();
        reg.ensure(&key("a"), Some(desc("original")), false);
        reg.ensure(&key("a"), Some(desc("ignored")), false);
        assert_eq!(reg.get("a").unwrap().descriptor().renderable, "original");

        // Evict, then re-create: the new descriptor takes effect.
        reg.release(&key("a"));
        reg.release(&key("a"));
        reg.ensure(&key("a"), Some(desc("fresh")), false);
        assert_eq!(reg.get("a").unwrap().descriptor().renderable, "fresh");
    }

    // ── release ───────────────────────────────────────────────────────────

    #[test]
    fn release_evicts_at_zero() {
        let mut reg = SceneRegistry::new();
        reg.ensure(&key("a"), Some(desc("A")), false);
        assert_eq!(reg.release(&key("a")), Some(0));
        assert!(!reg.contains("a"));
    }

    #[test]
    fn release_absent_is_a_noop() {
        let mut reg: SceneRegistry<String> = SceneRegistry::new();
        assert_eq!(reg.release(&key("ghost")), None);
        assert!(reg.is_empty());
    }

    #[test]
    fn eviction_preserves_enumeration_order() {
        let mut reg = SceneRegistry::new();
        reg.ensure(&key("a"), Some(desc("A")), false);
        reg.ensure(&key("b"), Some(desc("B")), false);
        reg.ensure(&key("c"), Some(desc("C")), false);

        reg.release(&key("b"));
        let order: Vec<&str> = reg.keys().map(SceneKey::as_str).collect();
        assert_eq!(order, ["a", "c"]);
        assert_eq!(reg.ordinal("c"), Some(1));
    }

    #[test]
    fn recreated_key_moves_to_the_back() {
        let mut reg = SceneRegistry::new();
        reg.ensure(&key("a"), Some(desc("A")), false);
        reg.ensure(&key("b"), Some(desc("B")), false);
        reg.release(&key("a"));
        reg.ensure(&key("a"), Some(desc("A2")), false);

        let order: Vec<&str> = reg.keys().map(SceneKey::as_str).collect();
        assert_eq!(order, ["b", "a"]);
    }

    // ── ordinal ───────────────────────────────────────────────────────────

    #[test]
    fn ordinal_tracks_insertion_order() {
        let mut reg = SceneRegistry::new();
        reg.ensure(&key("a"), Some(desc("A")), false);
        reg.ensure(&key("b"), Some(desc("B")), false);
        assert_eq!(reg.ordinal("a"), Some(0));
        assert_eq!(reg.ordinal("b"), Some(1));
        assert_eq!(reg.ordinal("nope"), None);
    }
}
