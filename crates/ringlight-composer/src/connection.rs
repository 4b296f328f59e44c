//! Controller attachment flag shared between the network side and the
//! renderer.

use core::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connected,
}

/// Single-writer, single-reader connection flag
///
/// Written by the network layer on attach/detach, sampled once per render
/// cycle. Relaxed ordering is enough: the flag only selects which animation
/// runs, and a stale read is corrected on the next cycle.
#[derive(Debug)]
pub struct ConnectionTracker {
    connected: AtomicBool,
}

impl ConnectionTracker {
    /// Create a tracker in the disconnected state
    pub const fn new() -> Self {
        Self {
            connected: AtomicBool::new(false),
        }
    }

    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::Relaxed);
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    pub fn state(&self) -> ConnectionState {
        if self.is_connected() {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        }
    }
}

impl Default for ConnectionTracker {
    fn default() -> Self {
        Self::new()
    }
}
