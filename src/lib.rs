//! # galaxy-field
//!
//! Parametric spiral-galaxy point clouds.
//!
//! Given a handful of numbers and two colors, galaxy-field computes the 3D
//! position and color of every point in a logarithmic-spiral "galaxy" as flat
//! `f32` buffers, ready to be bound as vertex attributes. Windowing, cameras
//! and the render loop are left to whatever engine draws the points.
//!
//! ## Quick Start
//!
//! ```
//! use galaxy_field::prelude::*;
//!
//! let params = GalaxyParams::default()
//!     .with_particles_count(5_000)
//!     .with_branches(3)
//!     .with_spiral_angle(1.5);
//!
//! let mut rng = SmallRng::seed_from_u64(0);
//! let mut field = generate(&params, &mut rng).unwrap();
//!
//! // Color-only change: positions stay, only the color buffer is rebuilt
//! let params = params.with_colors(Color::from_hex("#ffffff").unwrap(), Color::BLACK);
//! field.recolor(&params).unwrap();
//! ```
//!
//! ## Core Concepts
//!
//! ### Generation
//!
//! [`generate`] maps [`GalaxyParams`] to a [`GalaxyField`]: positions, colors
//! and one [`PointInfo`] per point. Point `i` sits on arm `i % branches`, at a
//! random radius, twisted by `radius * spiral_angle`.
//!
//! ### Recoloring
//!
//! [`recolor`] rebuilds only the color buffer from the stored [`PointInfo`]s.
//! It is the cheap path for edits to `inside_color` / `outside_color`.
//!
//! ### Randomness
//!
//! Samples come from a [`UniformSampler`]. Every `rand` RNG is one; tests can
//! use [`SequenceSampler`] or [`ConstantSampler`] to pin exact values.
//!
//! ### Keeping state
//!
//! [`Galaxy`] holds parameters and buffers together and picks regenerate,
//! recolor or nothing for each parameter change (see [`Update`]).
//!
//! | Parameter | Kind | On change |
//! |-----------|------|-----------|
//! | `particles_count`, `galaxy_radius`, `branches`, `spiral_angle` | structural | [`Update::Regenerate`] |
//! | `inside_color`, `outside_color` | color-only | [`Update::Recolor`] |
//! | `particles_size` | rendering | [`Update::Resize`] |

pub mod color;
mod error;
mod galaxy;
mod generator;
pub mod params;
mod recolor;
pub mod sampler;

pub use bytemuck;
pub use color::{mix, Color};
pub use error::{GalaxyError, Result};
pub use galaxy::Galaxy;
pub use generator::{generate, generate_with_rng, GalaxyField, PointInfo, VERTICAL_SPREAD};
pub use glam::Vec3;
pub use params::{GalaxyParams, ParamRange, ParamsDiff, Update};
pub use recolor::recolor;
pub use sampler::{ConstantSampler, SequenceSampler, UniformSampler};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use galaxy_field::prelude::*;
/// ```
///
/// This imports:
/// - [`generate`], [`recolor`] - the two core operations
/// - [`Galaxy`] - parameters and buffers kept together
/// - [`GalaxyParams`], [`Color`] - the inputs
/// - [`GalaxyField`], [`PointInfo`] - the outputs
/// - [`UniformSampler`], `SmallRng`, `SeedableRng` - randomness
pub mod prelude {
    pub use crate::color::{mix, Color};
    pub use crate::error::{GalaxyError, Result};
    pub use crate::galaxy::Galaxy;
    pub use crate::generator::{generate, GalaxyField, PointInfo};
    pub use crate::params::{GalaxyParams, Update};
    pub use crate::recolor::recolor;
    pub use crate::sampler::{ConstantSampler, SequenceSampler, UniformSampler};
    pub use crate::Vec3;
    pub use rand::rngs::SmallRng;
    pub use rand::SeedableRng;
}
