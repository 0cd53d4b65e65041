//! Scope guards for in-flight markers.
//!
//! A controller future can be dropped at any await point (a timeout, or the
//! page unmounting). These guards clear their marker on drop so a cancelled
//! call never leaves a product or form stuck in flight.

use std::collections::HashSet;
use std::hash::Hash;

/// Holds `key` in a pending set until dropped.
pub(crate) struct PendingGuard<'a, K: Eq + Hash> {
    pending: &'a mut HashSet<K>,
    key: K,
}

impl<'a, K: Eq + Hash + Clone> PendingGuard<'a, K> {
    pub(crate) fn insert(pending: &'a mut HashSet<K>, key: K) -> Self {
        pending.insert(key.clone());
        Self { pending, key }
    }
}

impl<K: Eq + Hash> Drop for PendingGuard<'_, K> {
    fn drop(&mut self) {
        self.pending.remove(&self.key);
    }
}

/// Sets a flag for as long as the guard lives.
pub(crate) struct FlagGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> FlagGuard<'a> {
    pub(crate) fn raise(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}
