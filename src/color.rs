//! Colors and the radial gradient mixer.
//!
//! Channels are stored in linear RGB, 0.0-1.0. Hex strings such as `#ff6030`
//! are treated as sRGB-encoded and decoded on the way in, so every blend runs
//! in linear space no matter where the endpoints came from.
//!
//! # Example
//!
//! ```
//! use galaxy_field::color::{mix, Color};
//!
//! let inside = Color::from_hex("#ff6030").unwrap();
//! let outside = Color::from_hex("#4d39e0").unwrap();
//!
//! assert_eq!(mix(inside, outside, 0.0), inside);
//! assert_eq!(mix(inside, outside, 1.0), outside);
//! ```

use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::GalaxyError;

/// A linear RGB color.
///
/// Laid out as three consecutive `f32`s so a slice of colors can be handed to
/// a vertex buffer directly.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel (linear, 0.0-1.0).
    pub r: f32,
    /// Green channel (linear, 0.0-1.0).
    pub g: f32,
    /// Blue channel (linear, 0.0-1.0).
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    /// Create a color from linear channel values.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse an sRGB hex string: `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    ///
    /// The result is converted to linear RGB.
    pub fn from_hex(hex: &str) -> Result<Self, GalaxyError> {
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if !digits.is_ascii() {
            return Err(GalaxyError::InvalidColor(format!("`{hex}` is not a hex color")));
        }

        let parse = |s: &str| {
            u8::from_str_radix(s, 16)
                .map_err(|_| GalaxyError::InvalidColor(format!("`{hex}` is not a hex color")))
        };

        let (r, g, b) = match digits.len() {
            6 => (parse(&digits[0..2])?, parse(&digits[2..4])?, parse(&digits[4..6])?),
            // #rgb expands each nibble: #f63 == #ff6633
            3 => (
                parse(&digits[0..1])? * 17,
                parse(&digits[1..2])? * 17,
                parse(&digits[2..3])? * 17,
            ),
            _ => {
                return Err(GalaxyError::InvalidColor(format!(
                    "`{hex}` must have 3 or 6 hex digits"
                )))
            }
        };

        Ok(Self::from_srgb8(r, g, b))
    }

    /// Create a color from 8-bit sRGB channels.
    pub fn from_srgb8(r: u8, g: u8, b: u8) -> Self {
        let decode = |c: u8| srgb_to_linear(c as f32 / 255.0);
        Self::new(decode(r), decode(g), decode(b))
    }

    /// Encode back to an sRGB hex string (`#rrggbb`).
    pub fn to_hex(&self) -> String {
        let encode = |c: f32| (linear_to_srgb(c.clamp(0.0, 1.0)) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", encode(self.r), encode(self.g), encode(self.b))
    }

    /// True when every channel is finite and within 0.0-1.0.
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }
}

impl From<Vec3> for Color {
    fn from(v: Vec3) -> Self {
        Color::new(v.x, v.y, v.z)
    }
}

impl From<Color> for Vec3 {
    fn from(c: Color) -> Self {
        c.to_vec3()
    }
}

impl From<[f32; 3]> for Color {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Color::new(r, g, b)
    }
}

impl From<Color> for [f32; 3] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl FromStr for Color {
    type Err = GalaxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = GalaxyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Blend `inside` toward `outside` by `alpha`.
///
/// Evaluated as `inside * (1 - alpha) + outside * alpha`, which equals
/// `inside + (outside - inside) * alpha` but lands exactly on the endpoints
/// at `alpha == 0.0` and `alpha == 1.0`. `alpha` is not clamped.
#[inline]
pub fn mix(inside: Color, outside: Color, alpha: f32) -> Color {
    (inside.to_vec3() * (1.0 - alpha) + outside.to_vec3() * alpha).into()
}

// The transfer functions run in f64 so 0 and 1 survive the round trip exactly.
fn srgb_to_linear(c: f32) -> f32 {
    let c = c as f64;
    let linear = if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    };
    linear as f32
}

fn linear_to_srgb(c: f32) -> f32 {
    let c = c as f64;
    let encoded = if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    };
    encoded as f32
}
