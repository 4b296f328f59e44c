use core::fmt;

/// A Wi-Fi station attached to the access point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationInfo {
    pub mac: [u8; 6],
    /// Association id assigned by the access point
    pub aid: u16,
}

impl StationInfo {
    pub const fn new(mac: [u8; 6], aid: u16) -> Self {
        Self { mac, aid }
    }
}

impl fmt::Display for StationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.mac;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            a, b, c, d, e, g
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_mac_as_lowercase_hex() {
        let station = StationInfo::new([0xAA, 0x0b, 0xc0, 0x01, 0xff, 0x10], 1);
        assert_eq!(station.to_string(), "aa:0b:c0:01:ff:10");
    }
}
