//! LRU (Least Recently Used) cache engine
//!
//! Two structures kept in lockstep:
//! - **Lookup index**: AHash map from key to (value, locator)
//! - **Recency list**: index-linked list of keys, most recent first
//!
//! Every public method that mutates one of them mutates the other before
//! returning, so `len()` always equals both sizes and no key is orphaned.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::config::LruConfig;
use crate::error::Result;
use crate::list::{Keys, RecencyList};
use crate::policy::{OverwritePolicy, PromotionPolicy};

/// Upper bound on up-front allocation; larger caches grow on demand
const PREALLOC_LIMIT: usize = 1024;

/// Lookup index entry: the value plus its locator in the recency list
struct Slot<V> {
    value: V,
    node: usize,
}

/// Fixed-capacity LRU cache
///
/// Not internally synchronized. Wrap it in a lock (e.g.
/// `parking_lot::Mutex<LruCache<K, V>>`) to share it between threads, or
/// shard keys across several caches.
pub struct LruCache<K, V> {
    map: HashMap<K, Slot<V>, RandomState>,
    order: RecencyList<K>,
    config: LruConfig,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache with the given capacity and default policies
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries, must be >= 1
    ///
    /// # Returns
    /// * `Result<LruCache>` - Empty cache, or `Error::InvalidCapacity`
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(LruConfig::new(capacity))
    }

    /// Create a new LRU cache from a full configuration
    pub fn with_config(config: LruConfig) -> Result<Self> {
        config.validate()?;

        let prealloc = config.capacity.min(PREALLOC_LIMIT);
        debug!(
            capacity = config.capacity,
            overwrite = ?config.overwrite,
            promotion = ?config.promotion,
            "created LRU cache"
        );

        Ok(Self {
            map: HashMap::with_capacity_and_hasher(prealloc, RandomState::new()),
            order: RecencyList::with_capacity(prealloc),
            config,
        })
    }

    /// Maximum number of entries; fixed for the cache's lifetime
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Effective configuration
    pub fn config(&self) -> &LruConfig {
        &self.config
    }

    /// Current number of entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Check if the next insert of a new key will evict
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Membership test; does not promote
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Remove every entry. Capacity and policies are kept.
    pub fn clear(&mut self) {
        let dropped = self.len();
        self.map.clear();
        self.order.clear();
        trace!(dropped, "cleared LRU cache");
    }

    /// Insert a key-value pair using the cache's default overwrite policy
    pub fn insert(&mut self, key: K, value: V) {
        self.insert_with(key, value, self.config.overwrite);
    }

    /// Insert a key-value pair with an explicit overwrite policy
    ///
    /// A new key goes to the most-recently-used position, evicting the
    /// least-recently-used entry first if the cache is full. For a present
    /// key, `Overwrite` replaces the value and promotes it while `Quiet`
    /// leaves the entry untouched and drops `value`.
    pub fn insert_with(&mut self, key: K, value: V, policy: OverwritePolicy) {
        if let Some(slot) = self.map.get_mut(&key) {
            if policy.replaces() {
                slot.value = value;
                self.order.move_to_front(slot.node);
            }
            return;
        }

        if self.is_full() {
            self.evict();
        }

        let node = self.order.push_front(key.clone());
        self.map.insert(key, Slot { value, node });
        debug_assert_eq!(self.map.len(), self.order.len());
    }

    /// Get a value using the cache's default promotion policy
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_with(key, self.config.promotion)
    }

    /// Get a value with an explicit promotion policy
    ///
    /// With `Update` a hit also promotes the key, exactly like [`promote`].
    ///
    /// [`promote`]: LruCache::promote
    pub fn get_with<Q>(&mut self, key: &Q, policy: PromotionPolicy) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.map.get(key)?;
        if policy.promotes() {
            self.order.move_to_front(slot.node);
        }
        Some(&slot.value)
    }

    /// Get a value without promoting it
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).map(|slot| &slot.value)
    }

    /// Move a key to the most-recently-used position. No-op if absent.
    pub fn promote<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some(slot) = self.map.get(key) {
            self.order.move_to_front(slot.node);
        }
    }

    /// The entry the next eviction would remove
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let key = self.order.back()?;
        self.map.get(key).map(|slot| (key, &slot.value))
    }

    /// Keys from most- to least-recently-used
    pub fn keys(&self) -> Keys<'_, K> {
        self.order.iter()
    }

    /// Entries from most- to least-recently-used; does not promote
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            keys: self.order.iter(),
            map: &self.map,
        }
    }

    fn evict(&mut self) {
        if let Some(key) = self.order.pop_back() {
            self.map.remove(&key);
            trace!(capacity = self.config.capacity, "evicted least-recently-used entry");
        }
    }
}

/// Iterator over entries from most- to least-recently-used
pub struct Iter<'a, K, V> {
    keys: Keys<'a, K>,
    map: &'a HashMap<K, Slot<V>, RandomState>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Hash + Eq,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        self.map.get(key).map(|slot| (key, &slot.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K: Hash + Eq, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: Hash + Eq + Clone + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u8, u8, OverwritePolicy),
        Get(u8, PromotionPolicy),
        Promote(u8),
        Clear,
    }

    fn arb_overwrite() -> impl Strategy<Value = OverwritePolicy> {
        prop_oneof![Just(OverwritePolicy::Overwrite), Just(OverwritePolicy::Quiet)]
    }

    fn arb_promotion() -> impl Strategy<Value = PromotionPolicy> {
        prop_oneof![Just(PromotionPolicy::Update), Just(PromotionPolicy::Quiet)]
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => (0u8..8, any::<u8>(), arb_overwrite()).prop_map(|(k, v, p)| Op::Insert(k, v, p)),
            3 => (0u8..8, arb_promotion()).prop_map(|(k, p)| Op::Get(k, p)),
            2 => (0u8..8).prop_map(Op::Promote),
            1 => Just(Op::Clear),
        ]
    }

    /// Reference model: entries front (most recent) to back
    fn to_front(model: &mut Vec<(u8, u8)>, pos: usize) {
        let entry = model.remove(pos);
        model.insert(0, entry);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// For any op sequence the cache matches a naive ordered model:
        /// same entries in the same recency order, len <= capacity, and
        /// `contains` agrees with the recency walk.
        #[test]
        fn prop_lru_matches_model(
            capacity in 1usize..6,
            ops in prop::collection::vec(arb_op(), 0..64),
        ) {
            let mut cache = LruCache::new(capacity).unwrap();
            let mut model: Vec<(u8, u8)> = Vec::new();

            for op in ops {
                match op {
                    Op::Insert(k, v, policy) => {
                        cache.insert_with(k, v, policy);
                        match model.iter().position(|(mk, _)| *mk == k) {
                            Some(pos) => {
                                if policy == OverwritePolicy::Overwrite {
                                    model[pos].1 = v;
                                    to_front(&mut model, pos);
                                }
                            }
                            None => {
                                if model.len() == capacity {
                                    model.pop();
                                }
                                model.insert(0, (k, v));
                            }
                        }
                    }
                    Op::Get(k, policy) => {
                        let got = cache.get_with(&k, policy).copied();
                        let pos = model.iter().position(|(mk, _)| *mk == k);
                        prop_assert_eq!(got, pos.map(|p| model[p].1));
                        if let (Some(p), PromotionPolicy::Update) = (pos, policy) {
                            to_front(&mut model, p);
                        }
                    }
                    Op::Promote(k) => {
                        cache.promote(&k);
                        if let Some(p) = model.iter().position(|(mk, _)| *mk == k) {
                            to_front(&mut model, p);
                        }
                    }
                    Op::Clear => {
                        cache.clear();
                        model.clear();
                    }
                }

                let entries: Vec<(u8, u8)> = cache.iter().map(|(k, v)| (*k, *v)).collect();
                prop_assert_eq!(&entries, &model);
                prop_assert_eq!(cache.len(), model.len());
                prop_assert_eq!(cache.keys().len(), cache.len());
                prop_assert!(cache.len() <= cache.capacity());
                prop_assert_eq!(cache.is_full(), cache.len() == cache.capacity());
                prop_assert_eq!(cache.is_empty(), model.is_empty());
                for k in 0u8..8 {
                    prop_assert_eq!(cache.contains(&k), model.iter().any(|(mk, _)| *mk == k));
                }
            }
        }
    }
}
