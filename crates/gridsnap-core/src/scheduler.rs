//! Cancellable one-shot timers keyed by owner.
//!
//! Each key has at most one pending timer. Scheduling again for the same key
//! replaces the previous deadline, which is exactly trailing-edge debounce.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use gridsnap_common::Millis;

/// Identifies one scheduled timer. A replaced or cancelled timer's handle
/// is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug)]
pub struct TimerQueue<K> {
    next_handle: u64,
    /// Ordered by deadline, then by scheduling order.
    deadlines: BTreeMap<(Millis, TimerHandle), K>,
    by_key: HashMap<K, (Millis, TimerHandle)>,
}

impl<K: Clone + Eq + Hash> TimerQueue<K> {
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            deadlines: BTreeMap::new(),
            by_key: HashMap::new(),
        }
    }

    /// Schedule `key` to fire at `due`, superseding any timer already
    /// pending for the same key.
    pub fn schedule(&mut self, key: K, due: Millis) -> TimerHandle {
        self.cancel(&key);
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.deadlines.insert((due, handle), key.clone());
        self.by_key.insert(key, (due, handle));
        handle
    }

    /// Cancel the pending timer for `key`. Returns `false` if none was pending.
    pub fn cancel(&mut self, key: &K) -> bool {
        match self.by_key.remove(key) {
            Some(slot) => {
                self.deadlines.remove(&slot);
                true
            }
            None => false,
        }
    }

    /// Cancel every pending timer whose key matches `predicate`.
    pub fn cancel_where(&mut self, predicate: impl Fn(&K) -> bool) -> usize {
        let doomed: Vec<K> = self
            .by_key
            .keys()
            .filter(|k| predicate(k))
            .cloned()
            .collect();
        for key in &doomed {
            self.cancel(key);
        }
        doomed.len()
    }

    pub fn deadline(&self, key: &K) -> Option<Millis> {
        self.by_key.get(key).map(|(due, _)| *due)
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.by_key.contains_key(key)
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.deadlines.keys().next().map(|(due, _)| *due)
    }

    /// Remove and return the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<(K, TimerHandle)> {
        let (&(due, handle), _) = self.deadlines.iter().next()?;
        if due > now {
            return None;
        }
        let key = self.deadlines.remove(&(due, handle))?;
        self.by_key.remove(&key);
        Some((key, handle))
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

impl<K: Clone + Eq + Hash> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}
