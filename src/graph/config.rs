//! Graph configuration

use serde::{Deserialize, Serialize};

/// Tuning knobs for a [`Graph`](super::Graph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Edge scans over at least this many edges run on the rayon pool.
    /// `0` always scans in parallel, `usize::MAX` never does.
    pub parallel_threshold: usize,
}

impl GraphConfig {
    /// Configuration that keeps every scan on the calling thread
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Whether a scan over `len` edges should run in parallel
    pub(crate) fn use_parallel(&self, len: usize) -> bool {
        len >= self.parallel_threshold
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 4096,
        }
    }
}
