use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// sRGB color with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Default surface color (#bb77ff)
    pub const LAVENDER: Rgb = Rgb::from_bytes(0xbb, 0x77, 0xff);
    pub const WHITE: Rgb = Rgb::from_bytes(0xff, 0xff, 0xff);

    pub const fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb`
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => bail!("expected 3 or 6 hex digits in color {hex:?}"),
        };
        let value = u32::from_str_radix(&expanded, 16)
            .with_context(|| format!("invalid hex color {hex:?}"))?;
        Ok(Self::from_bytes(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ))
    }

    pub fn to_bytes(self) -> [u8; 3] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    /// Linear-light channels for shading into an sRGB target
    pub fn to_linear(self) -> [f32; 3] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        ]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::LAVENDER
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_bytes();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        let c = Rgb::from_hex("#bb77ff").unwrap();
        assert_eq!(c, Rgb::LAVENDER);
        assert_eq!(c.to_bytes(), [0xbb, 0x77, 0xff]);
    }

    #[test]
    fn test_parse_short_form() {
        let c: Rgb = "f0a".parse().unwrap();
        assert_eq!(c.to_bytes(), [0xff, 0x00, 0xaa]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("#gg0000").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        assert_eq!(Rgb::LAVENDER.to_string(), "#bb77ff");
    }

    #[test]
    fn test_linear_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!(srgb_to_linear(0.5) < 0.5);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let c: Rgb = serde_json::from_str("\"#ffffff\"").unwrap();
        assert_eq!(c, Rgb::WHITE);
        assert_eq!(serde_json::to_string(&Rgb::LAVENDER).unwrap(), "\"#bb77ff\"");
    }
}
