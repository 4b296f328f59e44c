use ringlight_composer::{
    COMMAND_CHANNEL_SIZE, ConnectionState, ConnectionTracker, PayloadSender, RenderSnapshot,
    RenderStatus,
};

use crate::domain::{
    entity::StationInfo,
    ports::{CommandIngress, IngressError, RingStatusReader, RingUsecasesPort, StationEvents},
};

/// Network-side usecases of the ring
///
/// Runs in the Wi-Fi and HTTP contexts; never touches the pixels.
pub struct RingUsecases<'a, const K: usize = COMMAND_CHANNEL_SIZE> {
    commands: PayloadSender<'a, K>,
    connection: &'a ConnectionTracker,
    status: &'a RenderStatus,
}

impl<'a, const K: usize> RingUsecases<'a, K> {
    pub fn new(
        commands: PayloadSender<'a, K>,
        connection: &'a ConnectionTracker,
        status: &'a RenderStatus,
    ) -> Self {
        Self {
            commands,
            connection,
            status,
        }
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection.state()
    }
}

impl<const K: usize> CommandIngress for RingUsecases<'_, K> {
    fn on_ws_frame(&self, payload: &[u8]) -> Result<(), IngressError> {
        log::info!("ws: frame len is {}", payload.len());
        if payload.is_empty() {
            return Ok(());
        }
        self.commands.try_enqueue(payload).map_err(|e| {
            log::warn!("ws: {}", e);
            IngressError::from(e)
        })
    }
}

impl<const K: usize> StationEvents for RingUsecases<'_, K> {
    fn on_station_joined(&self, station: StationInfo) {
        log::info!("wifi: station {} join, AID={}", station, station.aid);
        self.connection.set_connected(true);
    }

    fn on_station_left(&self, station: StationInfo) {
        log::info!("wifi: station {} leave, AID={}", station, station.aid);
        self.connection.set_connected(false);
    }
}

impl<const K: usize> RingStatusReader for RingUsecases<'_, K> {
    fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(
            self.connection.is_connected(),
            self.status,
            self.commands.stats(),
        )
    }
}

impl<const K: usize> RingUsecasesPort for RingUsecases<'_, K> {}
