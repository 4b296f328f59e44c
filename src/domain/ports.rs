use core::fmt;

use ringlight_composer::{EnqueueError, RenderSnapshot};

use crate::domain::entity::StationInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngressError {
    /// Renderer is behind; the frame was dropped
    Busy,
    /// Frame larger than a command payload may be
    TooLarge { len: usize },
}

impl From<EnqueueError> for IngressError {
    fn from(err: EnqueueError) -> Self {
        match err {
            EnqueueError::Full => Self::Busy,
            EnqueueError::Oversized { len } => Self::TooLarge { len },
        }
    }
}

impl fmt::Display for IngressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => f.write_str("renderer busy, frame dropped"),
            Self::TooLarge { len } => write!(f, "frame of {} bytes too large", len),
        }
    }
}

/// Entry point for WebSocket text frames
pub trait CommandIngress {
    /// Hand a received frame to the renderer without blocking
    fn on_ws_frame(&self, payload: &[u8]) -> Result<(), IngressError>;
}

/// Access point station events
pub trait StationEvents {
    fn on_station_joined(&self, station: StationInfo);
    fn on_station_left(&self, station: StationInfo);
}

/// Reader interface for the renderer status
pub trait RingStatusReader {
    fn snapshot(&self) -> RenderSnapshot;
}

/// Port interface for the ring usecases
pub trait RingUsecasesPort: CommandIngress + StationEvents + RingStatusReader + Sync {}
