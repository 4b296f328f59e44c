use embedded_hal_async::delay::DelayNs;
use ringlight_composer::StripSink;

use crate::infrastructure::types::RingEngineImpl;

/// Task for running the ring engine
///
/// Plays the ambient marquee while no station is attached and renders
/// commands from the command channel otherwise. Never returns.
pub async fn ring_renderer_task<S, D>(mut engine: RingEngineImpl<S, D>) -> !
where
    S: StripSink,
    D: DelayNs,
{
    log::info!("engine: render task started");
    engine.run().await
}
