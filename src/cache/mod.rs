// ABOUTME: Bounded in-memory cache for generated export artifacts
// ABOUTME: Keyed by a content digest of the assembled plan, LRU eviction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Contributors

//! Export artifact cache
//!
//! Avoids regenerating identical export documents for identical plans.
//! The cache is an auxiliary optimization only: it is consulted after
//! plan assembly and never influences which recipes are selected. Safe
//! for concurrent read/insert across simultaneous requests.

use crate::errors::AppResult;
use crate::models::MealPlan;
use lru::LruCache;
use sha2::{Digest, Sha256};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Capacity used when a zero capacity is requested
const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(256) {
    Some(n) => n,
    None => unreachable!(),
};

/// Bounded LRU cache of rendered export documents
///
/// Cloning shares the underlying store.
#[derive(Clone)]
pub struct ExportCache {
    store: Arc<RwLock<LruCache<String, serde_json::Value>>>,
}

impl ExportCache {
    /// Create a cache holding at most `capacity` artifacts
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(DEFAULT_CAPACITY);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    /// Look up a cached artifact, refreshing its recency
    pub async fn get(&self, key: &str) -> Option<serde_json::Value> {
        let mut store = self.store.write().await;
        store.get(key).cloned()
    }

    /// Store an artifact, evicting the least recently used entry when full
    pub async fn insert(&self, key: String, artifact: serde_json::Value) {
        let mut store = self.store.write().await;
        store.put(key, artifact);
    }

    /// Number of cached artifacts
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// True when nothing is cached
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

/// Content digest of a plan, used as the cache key
///
/// Identical plans produce identical keys; any change to a selected
/// recipe or slot changes the digest.
///
/// # Errors
///
/// Returns an error if the plan cannot be serialized
pub fn plan_digest(plan: &MealPlan) -> AppResult<String> {
    let canonical = serde_json::to_vec(plan)?;
    let digest = Sha256::digest(&canonical);
    Ok(hex::encode(digest))
}

/// Cache key for an export document: plan digest extended with the
/// pantry it was rendered against
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn export_cache_key(plan: &MealPlan, pantry: &[String]) -> AppResult<String> {
    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_vec(plan)?);
    hasher.update(serde_json::to_vec(pantry)?);
    Ok(hex::encode(hasher.finalize()))
}
