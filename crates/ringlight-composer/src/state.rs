//! Shared render state for external observation
//!
//! Provides a way to observe what the renderer is doing from outside
//! without direct access to the engine instance.

use core::sync::atomic::{AtomicU8, AtomicU32, Ordering};

/// Visual mode of the render loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationMode {
    /// No controller attached; marquee animation
    AmbientIdle = 0,
    /// Controller attached; showing its pixels
    Rendering = 1,
    /// Last payload could not be decoded; fault pulse
    ErrorPulse = 2,
}

impl From<u8> for AnimationMode {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Rendering,
            2 => Self::ErrorPulse,
            _ => Self::AmbientIdle,
        }
    }
}

/// Shared render status that can be observed from outside the engine
///
/// Uses atomics for lock-free thread-safe access.
/// The engine updates this state, and external code can read it.
pub struct RenderStatus {
    mode: AtomicU8,
    frames: AtomicU32,
    commands: AtomicU32,
    faults: AtomicU32,
}

impl RenderStatus {
    pub const fn new() -> Self {
        Self {
            mode: AtomicU8::new(AnimationMode::AmbientIdle as u8),
            frames: AtomicU32::new(0),
            commands: AtomicU32::new(0),
            faults: AtomicU32::new(0),
        }
    }

    // === Read methods (for external observation) ===

    pub fn mode(&self) -> AnimationMode {
        self.mode.load(Ordering::Relaxed).into()
    }

    /// Frames pushed to the strip since boot
    pub fn frames(&self) -> u32 {
        self.frames.load(Ordering::Relaxed)
    }

    /// Commands applied since boot
    pub fn commands(&self) -> u32 {
        self.commands.load(Ordering::Relaxed)
    }

    /// Fault pulses played since boot
    pub fn faults(&self) -> u32 {
        self.faults.load(Ordering::Relaxed)
    }

    // === Write methods (for engine to update) ===

    pub fn set_mode(&self, mode: AnimationMode) {
        self.mode.store(mode as u8, Ordering::Relaxed);
    }

    pub fn record_frame(&self) {
        self.frames.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_command(&self) {
        self.commands.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fault(&self) {
        self.faults.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for RenderStatus {
    fn default() -> Self {
        Self::new()
    }
}
