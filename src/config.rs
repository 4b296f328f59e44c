use heapless::String;

/// Pixels on the ring
pub const LED_COUNT: usize = 24;

/// GPIO driving the strip data line
pub const LED_DATA_GPIO: u8 = 44;

/// Payloads buffered between the WebSocket handler and the renderer
pub const COMMAND_QUEUE_SIZE: usize = ringlight_composer::COMMAND_CHANNEL_SIZE;

const DEFAULT_SSID: &str = "ringlight";
const DEFAULT_CHANNEL: u8 = 1;
const DEFAULT_MAX_CONNECTIONS: u8 = 4;

/// Access point security
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    Open,
    Wpa2Personal,
    Wpa3Personal,
}

#[derive(Debug, Clone)]
pub struct WifiApConfig {
    pub ssid: String<32>,
    pub password: String<64>,
    pub channel: u8,
    pub max_connections: u8,
}

impl WifiApConfig {
    /// Build the access point config from build-time environment.
    ///
    /// Reads `RINGLIGHT_WIFI_SSID`, `RINGLIGHT_WIFI_PASSWORD`,
    /// `RINGLIGHT_WIFI_CHANNEL` and `RINGLIGHT_MAX_STA_CONN`.
    pub fn from_env() -> Self {
        Self::from_parts(
            option_env!("RINGLIGHT_WIFI_SSID"),
            option_env!("RINGLIGHT_WIFI_PASSWORD"),
            option_env!("RINGLIGHT_WIFI_CHANNEL"),
            option_env!("RINGLIGHT_MAX_STA_CONN"),
        )
    }

    /// Build the config from raw values, falling back to defaults for
    /// missing or unparsable ones. Overlong strings are truncated.
    pub fn from_parts(
        ssid: Option<&str>,
        password: Option<&str>,
        channel: Option<&str>,
        max_connections: Option<&str>,
    ) -> Self {
        Self {
            ssid: bounded(ssid.unwrap_or(DEFAULT_SSID)),
            password: bounded(password.unwrap_or_default()),
            channel: channel
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(DEFAULT_CHANNEL),
            max_connections: max_connections
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        }
    }

    /// Security mode implied by the password
    pub fn auth_method(&self) -> AuthMethod {
        if self.password.is_empty() {
            AuthMethod::Open
        } else if cfg!(feature = "sae") {
            AuthMethod::Wpa3Personal
        } else {
            AuthMethod::Wpa2Personal
        }
    }
}

impl Default for WifiApConfig {
    fn default() -> Self {
        Self::from_parts(None, None, None, None)
    }
}

fn bounded<const N: usize>(value: &str) -> String<N> {
    let mut out = String::new();
    for c in value.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Endpoints served by the HTTP transport
pub struct HttpRoutes;

impl HttpRoutes {
    pub const WEBSOCKET: &'static str = "/ws";
    pub const INDEX: &'static str = "/index.html";
    pub const STYLES: &'static str = "/styles.css";
    pub const SCRIPT: &'static str = "/script.js";

    /// Static assets, as `(uri, content type)`
    pub const ASSETS: [(&'static str, &'static str); 3] = [
        (Self::INDEX, "text/html"),
        (Self::STYLES, "text/css"),
        (Self::SCRIPT, "application/javascript"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_open_access_point() {
        let config = WifiApConfig::default();
        assert_eq!(config.ssid.as_str(), DEFAULT_SSID);
        assert_eq!(config.channel, DEFAULT_CHANNEL);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.auth_method(), AuthMethod::Open);
    }

    #[test]
    fn password_enables_wpa() {
        let config = WifiApConfig::from_parts(Some("ring"), Some("secret123"), Some("6"), None);
        assert_eq!(config.channel, 6);
        let expected = if cfg!(feature = "sae") {
            AuthMethod::Wpa3Personal
        } else {
            AuthMethod::Wpa2Personal
        };
        assert_eq!(config.auth_method(), expected);
    }

    #[test]
    fn ignores_bad_numbers_and_truncates_ssid() {
        let long = "s".repeat(40);
        let config = WifiApConfig::from_parts(Some(&long), None, Some("x"), Some("300"));
        assert_eq!(config.ssid.len(), 32);
        assert_eq!(config.channel, DEFAULT_CHANNEL);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }
}
