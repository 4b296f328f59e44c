//! Ring Engine - render loop state machine
//!
//! The RingEngine is the only owner of the pixel buffer and the strip sink.
//! On every cycle it:
//! - Samples the connection flag once
//! - Plays the ambient marquee while no controller is attached
//! - Otherwise polls the command channel without blocking
//! - Applies decoded commands, or plays the fault pulse on undecodable input
//! - Optionally publishes its status to [`RenderStatus`]

use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

use crate::channel::{COMMAND_CHANNEL_SIZE, PayloadReceiver};
use crate::color::{AMBIENT_RED, FAULT_RED, FAULT_WHITE, Rgb};
use crate::command::parse_lenient;
use crate::connection::{ConnectionState, ConnectionTracker};
use crate::driver::StripSink;
use crate::effect::{EffectSlot, FrameGenerator, PulseEffect, RotateEffect};
use crate::frame::PixelBuffer;
use crate::state::{AnimationMode, RenderStatus};

/// Timings and generator parameters of the render loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Marquee color while disconnected
    pub ambient_color: Rgb,
    /// Lit pixels in the marquee segment
    pub segment_len: usize,
    /// Full turns per ambient run
    pub revolutions: usize,
    /// Frame period of the marquee and the fault pulse
    pub frame_period: Duration,
    /// Brightness steps from off to full in the fault pulse
    pub pulse_steps: u16,
    /// Fault pulse colors, alternated on every fault
    pub fault_accents: [Rgb; 2],
    /// Pause after pushing a command frame
    pub render_period: Duration,
    /// Pause when connected but no command is pending
    pub poll_period: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ambient_color: AMBIENT_RED,
            segment_len: 8,
            revolutions: 2,
            frame_period: Duration::from_millis(20),
            pulse_steps: 50,
            fault_accents: [FAULT_WHITE, FAULT_RED],
            render_period: Duration::from_millis(50),
            poll_period: Duration::from_millis(50),
        }
    }
}

/// What one render cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    /// Played one full ambient marquee run
    Ambient,
    /// Applied a command and pushed the frame
    Rendered {
        /// Updates that landed on the ring
        applied: usize,
        /// Elements dropped by validation
        rejected: usize,
    },
    /// Played one fault pulse in `accent`
    Fault { accent: Rgb },
    /// Connected, nothing queued; no frame produced
    Waiting,
}

impl Cycle {
    /// Visual mode of the cycle; `None` for the scheduling backoff
    pub const fn mode(&self) -> Option<AnimationMode> {
        match self {
            Self::Ambient => Some(AnimationMode::AmbientIdle),
            Self::Rendered { .. } => Some(AnimationMode::Rendering),
            Self::Fault { .. } => Some(AnimationMode::ErrorPulse),
            Self::Waiting => None,
        }
    }
}

/// Ring Engine - the render task
///
/// Generic over `S: StripSink` to support different hardware backends and
/// over `D: DelayNs` for frame pacing (`embassy_time::Delay` on hardware).
pub struct RingEngine<'a, S, D, const N: usize, const K: usize = COMMAND_CHANNEL_SIZE>
where
    S: StripSink,
    D: DelayNs,
{
    /// Hardware sink for LED output
    sink: S,
    /// Frame pacing
    delay: D,
    /// Consuming end of the command channel
    commands: PayloadReceiver<'a, K>,
    /// Controller attachment flag
    connection: &'a ConnectionTracker,
    /// Pixel buffer mirrored to the sink
    frame: PixelBuffer<N>,
    config: EngineConfig,
    /// Index into `config.fault_accents` for the next fault
    next_accent: usize,
    /// Last visual mode, for transition logging
    mode: Option<AnimationMode>,
    /// Optional shared status for external observation
    status: Option<&'a RenderStatus>,
}

impl<'a, S, D, const N: usize, const K: usize> RingEngine<'a, S, D, N, K>
where
    S: StripSink,
    D: DelayNs,
{
    pub fn new(
        sink: S,
        delay: D,
        commands: PayloadReceiver<'a, K>,
        connection: &'a ConnectionTracker,
        config: &EngineConfig,
    ) -> Self {
        Self {
            sink,
            delay,
            commands,
            connection,
            frame: PixelBuffer::new(),
            config: *config,
            next_accent: 0,
            mode: None,
            status: None,
        }
    }

    /// Attach shared status for external observation
    #[must_use]
    pub fn with_status(mut self, status: &'a RenderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn frame(&self) -> &PixelBuffer<N> {
        &self.frame
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Accent the next fault pulse will use
    pub fn next_fault_accent(&self) -> Rgb {
        self.config.fault_accents[self.next_accent]
    }

    /// Run one render cycle
    ///
    /// The connection flag is sampled once, up front. While disconnected the
    /// channel is not touched, so queued commands wait for the next
    /// connection.
    pub async fn tick(&mut self) -> Cycle {
        match self.connection.state() {
            ConnectionState::Disconnected => {
                self.enter(AnimationMode::AmbientIdle);
                self.play(self.ambient()).await;
                Cycle::Ambient
            }
            ConnectionState::Connected => match self.commands.try_dequeue() {
                Some(payload) => self.handle_payload(&payload).await,
                None => {
                    self.pause(self.config.poll_period).await;
                    Cycle::Waiting
                }
            },
        }
    }

    /// Run the engine loop indefinitely
    pub async fn run(&mut self) -> ! {
        loop {
            self.tick().await;
        }
    }

    async fn handle_payload(&mut self, payload: &[u8]) -> Cycle {
        match parse_lenient(payload) {
            Ok(parsed) => {
                let applied = self.frame.apply(&parsed.command);
                if let Some(err) = parsed.first_error {
                    log::info!(
                        "engine: applied {} update(s), rejected {} ({})",
                        applied,
                        parsed.rejected,
                        err
                    );
                }
                self.enter(AnimationMode::Rendering);
                self.push();
                if let Some(status) = self.status {
                    status.record_command();
                }
                self.pause(self.config.render_period).await;
                Cycle::Rendered {
                    applied,
                    rejected: parsed.rejected,
                }
            }
            Err(err) => {
                let accent = self.take_fault_accent();
                log::info!("engine: {}, pulsing fault", err);
                self.enter(AnimationMode::ErrorPulse);
                self.play(EffectSlot::Pulse(PulseEffect::new(
                    accent,
                    self.config.pulse_steps,
                    self.config.frame_period,
                )))
                .await;
                if let Some(status) = self.status {
                    status.record_fault();
                }
                Cycle::Fault { accent }
            }
        }
    }

    fn ambient(&self) -> EffectSlot {
        EffectSlot::Rotate(RotateEffect::new(
            self.config.ambient_color,
            self.config.segment_len,
            self.config.revolutions,
            self.config.frame_period,
        ))
    }

    fn take_fault_accent(&mut self) -> Rgb {
        let accent = self.next_fault_accent();
        self.next_accent = (self.next_accent + 1) % self.config.fault_accents.len();
        accent
    }

    /// Single pacing loop shared by every generator
    async fn play(&mut self, effect: EffectSlot) {
        let period = FrameGenerator::<N>::frame_period(&effect);
        for step in 0..FrameGenerator::<N>::frame_count(&effect) {
            effect.render(step, &mut self.frame);
            self.push();
            self.pause(period).await;
        }
    }

    /// Mirror the pixel buffer to the sink and latch it
    fn push(&mut self) {
        for (index, color) in self.frame.iter().enumerate() {
            self.sink.set_pixel(index, *color);
        }
        self.sink.refresh();
        if let Some(status) = self.status {
            status.record_frame();
        }
    }

    async fn pause(&mut self, duration: Duration) {
        let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        self.delay.delay_ms(ms).await;
    }

    fn enter(&mut self, mode: AnimationMode) {
        if self.mode != Some(mode) {
            log::info!("engine: mode {:?}", mode);
            self.mode = Some(mode);
            if let Some(status) = self.status {
                status.set_mode(mode);
            }
        }
    }
}
