use crate::MacVendorError;
use eui48::MacAddress as Eui48Address;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A six-octet hardware address
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddress(Eui48Address);

impl MacAddress {
    /// Create an address from raw octets
    #[must_use]
    pub fn new(octets: [u8; 6]) -> Self {
        Self(Eui48Address::new(octets))
    }

    /// Raw octets
    #[must_use]
    pub fn octets(&self) -> [u8; 6] {
        self.0.to_array()
    }

    /// Organizationally unique identifier (first three octets)
    #[must_use]
    pub fn oui(&self) -> [u8; 3] {
        let [a, b, c, ..] = self.octets();
        [a, b, c]
    }
}

impl FromStr for MacAddress {
    type Err = MacVendorError;

    /// Parses the canonical `XX:XX:XX:XX:XX:XX` form, hex digits of either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MacVendorError::InvalidMac(s.to_string());

        let mut octets = [0u8; 6];
        let mut parts = s.split(':');

        for octet in &mut octets {
            let part = parts.next().ok_or_else(invalid)?;
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            *octet = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
        }

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(octets))
    }
}

impl fmt::Debug for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacAddress({self})")
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.octets();
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
