#![cfg_attr(not(test), no_std)]

//! Ring Composer - command routing and animation rendering for an LED ring
//!
//! Architecture layers:
//! - `driver` - Hardware abstraction ([`StripSink`] trait)
//! - `frame` - The fixed-size [`PixelBuffer`] owned by the renderer
//! - `channel` - Bounded, non-blocking payload hand-off from the network side
//! - `command` - Wire decoding and validation of pixel commands
//! - `connection` - Lock-free "controller attached" flag
//! - `effect` - Frame generators (ambient marquee, fault pulse)
//! - `engine` - Render loop state machine
//! - `state` - Shared state for external observation
//!
//! The engine is generic over `StripSink` and over the delay provider,
//! allowing different hardware backends and deterministic tests.

pub mod channel;
pub mod color;
pub mod command;
pub mod connection;
pub mod driver;
pub mod effect;
pub mod engine;
pub mod frame;
pub mod math8;
pub mod models;
pub mod state;

// Channel exports
pub use channel::{
    COMMAND_CHANNEL_SIZE, ChannelStats, CommandChannel, EnqueueError, MAX_PAYLOAD_LEN, Payload,
    PayloadReceiver, PayloadSender,
};

// Command exports
pub use command::{
    BROADCAST_ID, Command, MAX_PIXEL_UPDATES, ParseError, ParsedCommand, PixelField, PixelTarget,
    PixelUpdate, parse, parse_lenient,
};

// Connection exports
pub use connection::{ConnectionState, ConnectionTracker};

// Driver exports
pub use driver::StripSink;

// Effect exports
pub use effect::{EffectSlot, FrameGenerator, PulseEffect, RotateEffect};

// Engine exports
pub use engine::{Cycle, EngineConfig, RingEngine};

// Frame exports
pub use frame::PixelBuffer;

// State exports
pub use state::{AnimationMode, RenderStatus};

pub use color::Rgb;
pub use models::RenderSnapshot;
