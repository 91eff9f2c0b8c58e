//! Type aliases for commonly used complex types.
//!
//! Gives meaningful names to the shared-state and callback types the editor
//! and its embedders pass around, so the same pattern reads the same way in
//! every crate.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use deskhive_core::types::*;
//!
//! // Instead of: Arc<Mutex<Vec<String>>>
//! let log: ThreadSafeVec<String> = thread_safe_vec();
//! ```

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;

// =============================================================================
// THREAD-SAFE SHARED TYPES (Arc<Mutex<Vec<T>>> / Arc<RwLock<HashMap>>)
// =============================================================================

/// A thread-safe vector, typically used to collect notifications in tests
/// and embedders.
pub type ThreadSafeVec<T> = Arc<Mutex<Vec<T>>>;

/// A thread-safe reader-writer hash map.
pub type ThreadSafeRwMap<K, V> = Arc<RwLock<HashMap<K, V>>>;

// =============================================================================
// CALLBACK TYPES
// =============================================================================

/// A callback that receives a single parameter.
///
/// Thread-safe so that an editor holding it stays `Send`.
pub type DataCallback<T> = Box<dyn Fn(T) + Send + Sync>;

/// A map of subscription IDs to callbacks for event bus patterns.
pub type SubscriptionMap<K, V> = ThreadSafeRwMap<K, V>;

// =============================================================================
// CONSTRUCTORS
// =============================================================================

/// Create a new empty `ThreadSafeVec<T>`.
#[inline]
pub fn thread_safe_vec<T>() -> ThreadSafeVec<T> {
    Arc::new(Mutex::new(Vec::new()))
}

/// Create a new empty `ThreadSafeRwMap<K, V>`.
#[inline]
pub fn thread_safe_rw_map<K, V>() -> ThreadSafeRwMap<K, V> {
    Arc::new(RwLock::new(HashMap::new()))
}
