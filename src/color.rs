//! Stroke colours.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Reds, blues, greens, yellow/orange, purples, dark neutrals and one brown.
pub const PALETTE: [Rgb; 13] = [
    Rgb(0xe7, 0x4c, 0x3c),
    Rgb(0xc0, 0x39, 0x2b),
    Rgb(0x34, 0x98, 0xdb),
    Rgb(0x29, 0x80, 0xb9),
    Rgb(0x2e, 0xcc, 0x71),
    Rgb(0x27, 0xae, 0x60),
    Rgb(0xf1, 0xc4, 0x0f),
    Rgb(0xf3, 0x9c, 0x12),
    Rgb(0x8e, 0x44, 0xad),
    Rgb(0x9b, 0x59, 0xb6),
    Rgb(0x34, 0x49, 0x5e),
    Rgb(0x2c, 0x3e, 0x50),
    Rgb(0x6b, 0x42, 0x26),
];

/// Ink of the heavy signature strokes.
pub const SIGNATURE_INK: Rgb = Rgb(0x2b, 0x2b, 0x2b);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a colour of the form #rrggbb, got `{0}`")]
pub struct ColorParseError(pub String);

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct RgbVisitor;

impl<'de> Visitor<'de> for RgbVisitor {
    type Value = Rgb;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a hex colour like #2b2b2b")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse::<Rgb>().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Rgb, D::Error> {
        deserializer.deserialize_str(RgbVisitor)
    }
}
