//! Data transfer objects for observing the renderer

use crate::channel::ChannelStats;
use crate::state::{AnimationMode, RenderStatus};

/// A snapshot of the renderer for external systems.
///
/// This DTO captures the observable state without exposing engine internals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSnapshot {
    /// Whether a controller is attached
    pub connected: bool,
    /// Current visual mode
    pub mode: AnimationMode,
    /// Frames pushed to the strip
    pub frames: u32,
    /// Commands applied
    pub commands: u32,
    /// Fault pulses played
    pub faults: u32,
    /// Payloads dropped at the channel
    pub dropped: u32,
}

impl RenderSnapshot {
    /// Create a snapshot from the shared status and channel counters
    pub fn capture(connected: bool, status: &RenderStatus, channel: ChannelStats) -> Self {
        Self {
            connected,
            mode: status.mode(),
            frames: status.frames(),
            commands: status.commands(),
            faults: status.faults(),
            dropped: channel.dropped(),
        }
    }
}
