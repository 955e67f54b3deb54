//! Shared sink for render diagnostics.
//!
//! Every actual (non-skipped) render or computation records one event here.
//! The sink is the only observable signal of whether memoization took
//! effect, so the TUI panel, the simulator and the tests all read from it.

use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;

/// Events kept when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderKind {
    /// The counter child recomputed its derived value.
    ExpensiveComputation,
    /// A face component rendered.
    FaceRerender,
}

impl RenderKind {
    pub fn message(&self) -> &'static str {
        match self {
            RenderKind::ExpensiveComputation => "Expensive computation",
            RenderKind::FaceRerender => "** Face component rerender in progress...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderEvent {
    /// 1-based position in the full event stream, including evicted events.
    pub seq: u64,
    pub kind: RenderKind,
    pub message: &'static str,
    /// Props snapshot, e.g. `level=250 class=neither`.
    pub detail: String,
}

#[derive(Debug)]
struct Inner {
    events: VecDeque<RenderEvent>,
    capacity: usize,
    expensive: u64,
    face: u64,
}

/// Cloneable handle; all clones append to the same log.
#[derive(Debug, Clone)]
pub struct RenderLog {
    inner: Arc<Mutex<Inner>>,
}

impl Default for RenderLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl RenderLog {
    /// Create a log retaining at most `capacity` recent events.
    /// Totals keep counting past the capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                events: VecDeque::with_capacity(capacity.min(1024)),
                capacity: capacity.max(1),
                expensive: 0,
                face: 0,
            })),
        }
    }

    pub fn record(&self, kind: RenderKind, detail: impl Into<String>) {
        let detail = detail.into();
        tracing::info!(target: "render", kind = ?kind, detail = %detail, "{}", kind.message());

        let mut inner = self.inner.lock();
        match kind {
            RenderKind::ExpensiveComputation => inner.expensive += 1,
            RenderKind::FaceRerender => inner.face += 1,
        }
        let seq = inner.expensive + inner.face;
        if inner.events.len() == inner.capacity {
            inner.events.pop_front();
        }
        inner.events.push_back(RenderEvent {
            seq,
            kind,
            message: kind.message(),
            detail,
        });
    }

    /// Number of events of `kind` ever recorded.
    pub fn count(&self, kind: RenderKind) -> u64 {
        let inner = self.inner.lock();
        match kind {
            RenderKind::ExpensiveComputation => inner.expensive,
            RenderKind::FaceRerender => inner.face,
        }
    }

    pub fn total(&self) -> u64 {
        let inner = self.inner.lock();
        inner.expensive + inner.face
    }

    /// Retained events, oldest first.
    pub fn events(&self) -> Vec<RenderEvent> {
        self.inner.lock().events.iter().cloned().collect()
    }

    /// The newest `n` retained events, oldest first.
    pub fn tail(&self, n: usize) -> Vec<RenderEvent> {
        let inner = self.inner.lock();
        let skip = inner.events.len().saturating_sub(n);
        inner.events.iter().skip(skip).cloned().collect()
    }
}
