//! Type aliases for shared mutable state.
//!
//! The editor session is owned by the host. Hosts that deliver input from
//! another thread wrap the whole state bundle in one mutex so the
//! press/drag/dispatch sequence stays atomic (see the concurrency notes in
//! the editor crate).

use parking_lot::Mutex;
use std::sync::Arc;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex`. One lock guards the full state bundle; never
/// split the editor state across several of these.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// Creates a [`ThreadSafe`] value.
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
