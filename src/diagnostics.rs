//! Diagnostic side channel.
//!
//! Decorators and adapters report observations (retrieval latency, stored or
//! rejected writes, misses) as [`Diagnostic`] events to an injectable
//! [`DiagnosticSink`]. Sinks are observers only: nothing a sink does can
//! change a cache's result or state.
//!
//! ## Sinks
//!
//! | Sink              | Behaviour                                           |
//! |-------------------|-----------------------------------------------------|
//! | [`TracingSink`]   | Emits `tracing` events (the default everywhere)     |
//! | [`NullSink`]      | Drops every event                                   |
//! | [`RecordingSink`] | Keeps rendered messages in memory for inspection    |
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use evictkit::decorator::TimingDecorator;
//! use evictkit::diagnostics::RecordingSink;
//! use evictkit::policy::lru::LruCache;
//! use evictkit::traits::Cache;
//!
//! let sink = Arc::new(RecordingSink::new());
//! let mut cache = TimingDecorator::with_sink(LruCache::new(4), sink.clone());
//!
//! cache.put("k", 1).unwrap();
//! cache.get(&"k").unwrap();
//!
//! assert_eq!(sink.len(), 1);
//! assert!(sink.messages()[0].starts_with("retrieved value for key \"k\""));
//! ```

use std::fmt;
use std::time::Duration;

use parking_lot::Mutex;

/// An observation reported by a decorator or adapter.
#[derive(Debug, Clone, Copy)]
pub enum Diagnostic<'a> {
    /// A `get` completed.
    Retrieved {
        key: &'a dyn fmt::Debug,
        elapsed: Duration,
        hit: bool,
    },
    /// A `put` was accepted.
    Stored { key: &'a dyn fmt::Debug },
    /// A `get` or `remove` found no entry for the key.
    Missed { key: &'a dyn fmt::Debug },
    /// A `put` of a new key was refused because the cache is full.
    Rejected {
        key: &'a dyn fmt::Debug,
        capacity: usize,
    },
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Retrieved { key, elapsed, hit } => {
                let millis = elapsed.as_nanos() as f64 / 1_000_000.0;
                if *hit {
                    write!(f, "retrieved value for key {key:?} in {millis} ms")
                } else {
                    write!(f, "retrieved value for key {key:?} in {millis} ms (miss)")
                }
            }
            Diagnostic::Stored { key } => write!(f, "stored value for key {key:?}"),
            Diagnostic::Missed { key } => write!(f, "key {key:?} is not in the cache"),
            Diagnostic::Rejected { key, capacity } => write!(
                f,
                "cannot add new key {key:?}: cache reached its capacity of {capacity}"
            ),
        }
    }
}

/// Receiver of [`Diagnostic`] events.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic<'_>);
}

/// Emits every diagnostic as a `tracing` event.
///
/// Retrievals and stores are logged at `DEBUG`, rejections at `WARN`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic<'_>) {
        match diagnostic {
            Diagnostic::Retrieved { key, elapsed, hit } => {
                tracing::debug!(key = ?key, elapsed = ?elapsed, hit, "cache retrieval");
            }
            Diagnostic::Stored { key } => {
                tracing::debug!(key = ?key, "cache store");
            }
            Diagnostic::Missed { key } => {
                tracing::debug!(key = ?key, "cache miss");
            }
            Diagnostic::Rejected { key, capacity } => {
                tracing::warn!(key = ?key, capacity, "cache write rejected at capacity");
            }
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _diagnostic: &Diagnostic<'_>) {}
}

/// Keeps the rendered text of every diagnostic.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    /// Removes and returns all recorded messages.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock())
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, diagnostic: &Diagnostic<'_>) {
        self.messages.lock().push(diagnostic.to_string());
    }
}
