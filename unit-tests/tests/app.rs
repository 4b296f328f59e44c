use embassy_futures::block_on;
use ringlight::app::RingUsecases;
use ringlight::config::{AuthMethod, COMMAND_QUEUE_SIZE, HttpRoutes, LED_COUNT, WifiApConfig};
use ringlight::domain::entity::StationInfo;
use ringlight::domain::ports::{CommandIngress, IngressError, RingStatusReader, StationEvents};
use ringlight::infrastructure::drivers::SmartLedsSink;
use ringlight_composer::{
    AnimationMode, CommandChannel, ConnectionState, ConnectionTracker, Cycle, EngineConfig,
    MAX_PAYLOAD_LEN, RenderStatus, Rgb, RingEngine,
};
use smart_leds::SmartLedsWrite;
use tests::RecordingDelay;

const PHONE: StationInfo = StationInfo::new([0x3c, 0x22, 0xfb, 0x01, 0x02, 0x03], 1);

struct Shared {
    channel: CommandChannel<COMMAND_QUEUE_SIZE>,
    tracker: ConnectionTracker,
    status: RenderStatus,
}

impl Shared {
    fn new() -> Self {
        Self {
            channel: CommandChannel::new(),
            tracker: ConnectionTracker::new(),
            status: RenderStatus::new(),
        }
    }

    fn usecases(&self) -> RingUsecases<'_, COMMAND_QUEUE_SIZE> {
        RingUsecases::new(self.channel.sender(), &self.tracker, &self.status)
    }
}

#[derive(Default)]
struct StripCapture {
    writes: Vec<Vec<Rgb>>,
}

impl SmartLedsWrite for StripCapture {
    type Error = ();
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.writes.push(iterator.into_iter().map(Into::into).collect());
        Ok(())
    }
}

#[test]
fn station_events_toggle_connection() {
    let shared = Shared::new();
    let usecases = shared.usecases();
    assert_eq!(usecases.connection(), ConnectionState::Disconnected);

    usecases.on_station_joined(PHONE);
    assert_eq!(usecases.connection(), ConnectionState::Connected);
    assert!(usecases.snapshot().connected);

    usecases.on_station_left(PHONE);
    assert_eq!(usecases.connection(), ConnectionState::Disconnected);
}

#[test]
fn empty_frames_are_ignored() {
    let shared = Shared::new();
    assert_eq!(shared.usecases().on_ws_frame(b""), Ok(()));
    assert!(shared.channel.is_empty());
}

#[test]
fn ingress_reports_drops() {
    let shared = Shared::new();
    let usecases = shared.usecases();
    for _ in 0..COMMAND_QUEUE_SIZE {
        usecases.on_ws_frame(b"{}").unwrap();
    }

    assert_eq!(usecases.on_ws_frame(b"{}"), Err(IngressError::Busy));
    assert_eq!(
        usecases.on_ws_frame(&[b' '; MAX_PAYLOAD_LEN + 1]),
        Err(IngressError::TooLarge {
            len: MAX_PAYLOAD_LEN + 1
        })
    );
    assert_eq!(usecases.snapshot().dropped, 2);
}

#[test]
fn frames_reach_the_strip() {
    let shared = Shared::new();
    let usecases = shared.usecases();
    let mut engine: RingEngine<'_, _, _, LED_COUNT> = RingEngine::new(
        SmartLedsSink::<_, LED_COUNT>::new(StripCapture::default()),
        RecordingDelay::new(),
        shared.channel.receiver(),
        &shared.tracker,
        &EngineConfig::default(),
    )
    .with_status(&shared.status);

    usecases.on_station_joined(PHONE);
    usecases
        .on_ws_frame(br#"{"pixel":[{"id":-1,"R":0,"G":0,"B":0},{"id":0,"R":40,"G":50,"B":60}]}"#)
        .unwrap();

    assert_eq!(
        block_on(engine.tick()),
        Cycle::Rendered {
            applied: 2,
            rejected: 0
        }
    );

    let writes = &engine.sink().writer().writes;
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].len(), LED_COUNT);
    assert_eq!(writes[0][0], Rgb::new(40, 50, 60));
    assert!(writes[0][1..].iter().all(|p| *p == Rgb::default()));

    let snapshot = usecases.snapshot();
    assert_eq!(snapshot.mode, AnimationMode::Rendering);
    assert_eq!(snapshot.commands, 1);
    assert_eq!(snapshot.frames, 1);
}

#[test]
fn station_mac_is_logged_in_colon_form() {
    assert_eq!(PHONE.to_string(), "3c:22:fb:01:02:03");
}

#[test]
fn access_point_defaults() {
    let config = WifiApConfig::from_parts(Some("ring"), Some(""), None, Some("2"));
    assert_eq!(config.ssid.as_str(), "ring");
    assert_eq!(config.max_connections, 2);
    assert_eq!(config.auth_method(), AuthMethod::Open);
}

#[test]
fn routes_cover_websocket_and_assets() {
    assert_eq!(HttpRoutes::WEBSOCKET, "/ws");
    let uris: Vec<&str> = HttpRoutes::ASSETS.iter().map(|(uri, _)| *uri).collect();
    assert_eq!(uris, vec!["/index.html", "/styles.css", "/script.js"]);
}
