//! Galaxy parameters.
//!
//! [`GalaxyParams`] is the whole input to generation. It serializes to the
//! same camelCase JSON a tuning panel would keep as a preset:
//!
//! ```json
//! {
//!   "particlesCount": 3000,
//!   "particlesSize": 0.02,
//!   "galaxyRadius": 5.0,
//!   "branches": 5,
//!   "spiralAngleInRadians": 1.0,
//!   "insideColor": "#ff6030",
//!   "outsideColor": "#4d39e0"
//! }
//! ```
//!
//! Fields fall into three groups, which decide how much work a change costs
//! (see [`GalaxyParams::diff`]):
//!
//! | Group | Fields | Work |
//! |-------|--------|------|
//! | Structural | count, radius, branches, spiral angle | regenerate |
//! | Color-only | inside / outside color | recolor |
//! | Rendering | particle size | none in this crate |

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{GalaxyError, Result};

/// Input to [`generate`](crate::generate) and [`recolor`](crate::recolor()).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalaxyParams {
    /// Number of points to generate.
    pub particles_count: u32,
    /// Point size for the renderer. Never read by generation.
    pub particles_size: f32,
    /// Maximum radial distance from the center.
    pub galaxy_radius: f32,
    /// Number of spiral arms.
    pub branches: u32,
    /// Twist per unit radius; larger values wind the arms tighter.
    #[serde(rename = "spiralAngleInRadians")]
    pub spiral_angle: f32,
    /// Gradient color at the center.
    pub inside_color: Color,
    /// Gradient color at `galaxy_radius`.
    pub outside_color: Color,
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self {
            particles_count: 3000,
            particles_size: 0.02,
            galaxy_radius: 5.0,
            branches: 5,
            spiral_angle: 1.0,
            // sRGB #ff6030
            inside_color: Color::from_srgb8(0xff, 0x60, 0x30),
            // sRGB #4d39e0
            outside_color: Color::from_srgb8(0x4d, 0x39, 0xe0),
        }
    }
}

/// Slider bounds for an interactive control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ParamRange {
    const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Snap `value` to the nearest step from `min`, then clamp into range.
    pub fn snap(&self, value: f32) -> f32 {
        let steps = ((value - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }
}

impl GalaxyParams {
    pub const PARTICLES_COUNT_RANGE: ParamRange = ParamRange::new(100.0, 10_000.0, 100.0);
    pub const GALAXY_RADIUS_RANGE: ParamRange = ParamRange::new(1.0, 20.0, 1.0);
    pub const BRANCHES_RANGE: ParamRange = ParamRange::new(2.0, 20.0, 1.0);
    pub const SPIRAL_ANGLE_RANGE: ParamRange = ParamRange::new(0.1, 10.0, 0.1);
    pub const PARTICLES_SIZE_RANGE: ParamRange = ParamRange::new(0.001, 0.1, 0.001);

    /// Create parameters with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_particles_count(mut self, count: u32) -> Self {
        self.particles_count = count;
        self
    }

    pub fn with_particles_size(mut self, size: f32) -> Self {
        self.particles_size = size;
        self
    }

    pub fn with_galaxy_radius(mut self, radius: f32) -> Self {
        self.galaxy_radius = radius;
        self
    }

    pub fn with_branches(mut self, branches: u32) -> Self {
        self.branches = branches;
        self
    }

    pub fn with_spiral_angle(mut self, radians: f32) -> Self {
        self.spiral_angle = radians;
        self
    }

    /// Set both gradient endpoints.
    pub fn with_colors(mut self, inside: Color, outside: Color) -> Self {
        self.inside_color = inside;
        self.outside_color = outside;
        self
    }

    /// Check every field generation depends on.
    ///
    /// `particles_size` is rendering-only and is not checked.
    pub fn validate(&self) -> Result<()> {
        if self.particles_count == 0 {
            return Err(GalaxyError::invalid("particlesCount", "must be at least 1"));
        }
        if self.branches == 0 {
            return Err(GalaxyError::invalid("branches", "must be at least 1"));
        }
        if !self.galaxy_radius.is_finite() || self.galaxy_radius <= 0.0 {
            return Err(GalaxyError::invalid(
                "galaxyRadius",
                format!("must be positive and finite, got {}", self.galaxy_radius),
            ));
        }
        if !self.spiral_angle.is_finite() {
            return Err(GalaxyError::invalid(
                "spiralAngleInRadians",
                format!("must be finite, got {}", self.spiral_angle),
            ));
        }
        if !self.inside_color.is_valid() {
            return Err(GalaxyError::invalid(
                "insideColor",
                format!("channels must be within 0-1, got {:?}", self.inside_color),
            ));
        }
        if !self.outside_color.is_valid() {
            return Err(GalaxyError::invalid(
                "outsideColor",
                format!("channels must be within 0-1, got {:?}", self.outside_color),
            ));
        }
        Ok(())
    }

    /// Snap and clamp every ranged field to its slider bounds.
    ///
    /// Hosts feeding raw user input can call this before generating.
    /// A NaN radius or angle stays NaN and is still rejected by [`validate`](Self::validate).
    pub fn clamped(&self) -> Self {
        Self {
            particles_count: Self::PARTICLES_COUNT_RANGE.snap(self.particles_count as f32) as u32,
            particles_size: Self::PARTICLES_SIZE_RANGE.snap(self.particles_size),
            galaxy_radius: Self::GALAXY_RADIUS_RANGE.snap(self.galaxy_radius),
            branches: Self::BRANCHES_RANGE.snap(self.branches as f32) as u32,
            spiral_angle: Self::SPIRAL_ANGLE_RANGE.snap(self.spiral_angle),
            ..*self
        }
    }

    /// Compare against `other` to find out what a switch to `other` costs.
    pub fn diff(&self, other: &GalaxyParams) -> ParamsDiff {
        let needs_regenerate = self.particles_count != other.particles_count
            || self.galaxy_radius != other.galaxy_radius
            || self.branches != other.branches
            || self.spiral_angle != other.spiral_angle;

        let needs_recolor =
            self.inside_color != other.inside_color || self.outside_color != other.outside_color;

        ParamsDiff {
            needs_regenerate,
            needs_recolor,
            size_changed: self.particles_size != other.particles_size,
        }
    }

    /// Parse parameters from a JSON preset. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to a pretty-printed JSON preset.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load parameters from a JSON preset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Result of comparing two [`GalaxyParams`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParamsDiff {
    /// A structural field changed; positions must be regenerated.
    pub needs_regenerate: bool,
    /// A gradient color changed.
    pub needs_recolor: bool,
    /// Only matters to the renderer.
    pub size_changed: bool,
}

impl ParamsDiff {
    /// Returns true if nothing changed.
    pub fn is_empty(&self) -> bool {
        !self.needs_regenerate && !self.needs_recolor && !self.size_changed
    }

    /// The cheapest update that covers every change.
    pub fn update(&self) -> Update {
        if self.needs_regenerate {
            Update::Regenerate
        } else if self.needs_recolor {
            Update::Recolor
        } else if self.size_changed {
            Update::Resize
        } else {
            Update::None
        }
    }
}

/// Work a parameter change requires, cheapest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Update {
    /// Nothing changed.
    None,
    /// Only the rendered point size changed.
    Resize,
    /// Only the color buffer has to be rebuilt.
    Recolor,
    /// Positions, colors and metadata all have to be rebuilt.
    Regenerate,
}
