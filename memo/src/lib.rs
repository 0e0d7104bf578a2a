//! TTL memoization decorator for the curve engine.
//!
//! Point generation is pure, so identical requests always produce identical
//! bundles; a service layer can sit this cache in front of
//! [`engine::generate`] and skip recomputation of hot requests. Entries are
//! keyed by a canonical 64-bit hash of the full request and expire after a
//! fixed lifetime. The cache is an optional collaborator: nothing in the
//! engine knows it exists.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use log::debug;

use engine::{generate, CurveResult, EngineError, GenerateRequest};

/// Default entry lifetime of a cached response.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

struct Entry {
    stored_at: Instant,
    value: Arc<CurveResult>,
}

/// Thread-safe TTL cache in front of [`engine::generate`].
///
/// Results are shared out as `Arc`s, so a hit never clones the point
/// sequences. Errors are never cached: a failing request is recomputed (and
/// fails again) on every call.
pub struct MemoCache {
    ttl: Duration,
    entries: Mutex<HashMap<u64, Entry>>,
}

impl MemoCache {
    pub fn new(ttl: Duration) -> Self {
        MemoCache {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Cached result for `request`, computing and storing it on a miss or
    /// after expiry.
    pub fn get_or_compute(
        &self,
        request: &GenerateRequest,
    ) -> Result<Arc<CurveResult>, EngineError> {
        let key = request_key(request);

        if let Some(hit) = self.lookup(key) {
            debug!("cache hit for key {key:#018x}");
            return Ok(hit);
        }

        let value = Arc::new(generate(request)?);

        let mut entries = self.lock();
        // Opportunistic purge keeps the map from accumulating dead entries
        // between hits.
        entries.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
        entries.insert(
            key,
            Entry {
                stored_at: Instant::now(),
                value: Arc::clone(&value),
            },
        );
        Ok(value)
    }

    /// Number of live (non-expired) entries.
    pub fn len(&self) -> usize {
        let entries = self.lock();
        entries
            .values()
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry regardless of age.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lookup(&self, key: u64) -> Option<Arc<CurveResult>> {
        let mut entries = self.lock();
        match entries.get(&key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(Arc::clone(&entry.value)),
            Some(_) => {
                entries.remove(&key);
                None
            }
            None => None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<u64, Entry>> {
        // The cache holds no invariants across a panic; recover the guard
        // instead of poisoning every later request.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

/// Canonical 64-bit key over every request field.
///
/// Float coefficients hash by bit pattern, so requests differing only in a
/// signed zero or NaN payload get distinct keys rather than aliasing.
pub fn request_key(request: &GenerateRequest) -> u64 {
    let mut hasher = DefaultHasher::new();
    request.spec.family.hash(&mut hasher);
    request.spec.form.hash(&mut hasher);
    request.spec.a.to_bits().hash(&mut hasher);
    request.spec.b.to_bits().hash(&mut hasher);
    request.spec.d.to_bits().hash(&mut hasher);
    request.mode.hash(&mut hasher);
    request.domain.x_min.to_bits().hash(&mut hasher);
    request.domain.x_max.to_bits().hash(&mut hasher);
    request.domain.resolution.hash(&mut hasher);
    hasher.finish()
}
