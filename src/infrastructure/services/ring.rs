use embedded_hal_async::delay::DelayNs;
use ringlight_composer::{
    CommandChannel, ConnectionTracker, EngineConfig, RenderSnapshot, RenderStatus, RingEngine,
    StripSink,
};

use crate::{
    app::RingUsecases,
    config::COMMAND_QUEUE_SIZE,
    domain::ports::RingStatusReader,
    infrastructure::types::{RingEngineImpl, RingUsecasesImpl},
};

/// Payloads from the WebSocket handler to the renderer
static RING_CHANNEL: CommandChannel<COMMAND_QUEUE_SIZE> = CommandChannel::new();

/// Set while a station is attached to the access point
static RING_CONNECTION: ConnectionTracker = ConnectionTracker::new();

/// Global lock-free renderer status
static RING_STATUS: RenderStatus = RenderStatus::new();

/// Usecases for the Wi-Fi event handler and the WebSocket handler
pub fn ring_usecases() -> RingUsecasesImpl {
    RingUsecases::new(RING_CHANNEL.sender(), &RING_CONNECTION, &RING_STATUS)
}

/// Build the render engine over the static channel and flags.
///
/// Must be called once; the engine is the only consumer of the channel.
pub fn init_ring_engine<S, D>(sink: S, delay: D) -> RingEngineImpl<S, D>
where
    S: StripSink,
    D: DelayNs,
{
    RingEngine::new(
        sink,
        delay,
        RING_CHANNEL.receiver(),
        &RING_CONNECTION,
        &EngineConfig::default(),
    )
    .with_status(&RING_STATUS)
}

pub fn snapshot() -> RenderSnapshot {
    ring_usecases().snapshot()
}
