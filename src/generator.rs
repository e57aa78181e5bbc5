//! Spiral galaxy field generation.
//!
//! Every point is pinned to one of `branches` evenly spaced arms by its index,
//! pushed out to a random radius, twisted by `radius * spiral_angle` and then
//! scattered. The output is two flat `f32` buffers (xyz and rgb triples in the
//! same point order) plus one [`PointInfo`] per point that
//! [`recolor`](crate::recolor()) needs later.
//!
//! # Example
//!
//! ```
//! use galaxy_field::{generate, GalaxyParams};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let params = GalaxyParams::default().with_particles_count(500);
//! let mut rng = SmallRng::seed_from_u64(1);
//! let field = generate(&params, &mut rng).unwrap();
//!
//! assert_eq!(field.len(), 500);
//! assert_eq!(field.positions.len(), 1500);
//! assert_eq!(field.colors.len(), 1500);
//! ```

use std::f32::consts::TAU;

use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Result;
use crate::params::GalaxyParams;
use crate::recolor::{radial_color, recolor};
use crate::sampler::UniformSampler;

/// Total height of the band points are scattered in, centered on y = 0.
pub const VERTICAL_SPREAD: f32 = 0.2;

/// Per-point data kept between generation and recoloring.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointInfo {
    /// Sampled radius, before jitter moves the point.
    pub distance: f32,
}

/// A generated point cloud.
///
/// Index `i` of `positions`, `colors` and `points` always describes the same
/// point; every method that touches the field keeps that alignment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalaxyField {
    /// Flat xyz triples, `len() * 3` values.
    pub positions: Vec<f32>,
    /// Flat linear rgb triples, `len() * 3` values in 0.0-1.0.
    pub colors: Vec<f32>,
    /// One entry per point.
    pub points: Vec<PointInfo>,
}

impl GalaxyField {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position of point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[i * 3..i * 3 + 3])
    }

    /// Color of point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn color(&self, i: usize) -> Color {
        let c = &self.colors[i * 3..i * 3 + 3];
        Color::new(c[0], c[1], c[2])
    }

    /// Positions viewed as vectors, without copying.
    pub fn positions_vec3(&self) -> &[Vec3] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colors viewed as [`Color`]s, without copying.
    pub fn colors_rgb(&self) -> &[Color] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Raw bytes of the position buffer, ready for a vertex buffer upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw bytes of the color buffer, ready for a vertex buffer upload.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Replace the color buffer for new gradient colors.
    ///
    /// Positions and metadata are left untouched. On error the field is
    /// unchanged.
    pub fn recolor(&mut self, params: &GalaxyParams) -> Result<()> {
        self.colors = recolor(&self.points, params)?;
        Ok(())
    }
}

/// Generate a galaxy field.
///
/// Draws exactly four samples per point, in this order: radius, jitter base,
/// jitter exponent, height. Fails with
/// [`InvalidParameter`](crate::GalaxyError::InvalidParameter) before
/// allocating anything if `params` does not validate.
pub fn generate<S>(params: &GalaxyParams, sampler: &mut S) -> Result<GalaxyField>
where
    S: UniformSampler + ?Sized,
{
    params.validate()?;

    let count = params.particles_count as usize;
    let branches = params.branches;

    debug!(
        "Generating galaxy: {} points, {} branches, radius {}, spiral {}",
        count, branches, params.galaxy_radius, params.spiral_angle
    );

    let mut positions = Vec::with_capacity(count * 3);
    let mut colors = Vec::with_capacity(count * 3);
    let mut points = Vec::with_capacity(count);

    for i in 0..params.particles_count {
        // Arm membership depends on the index only
        let branch_angle = (i % branches) as f32 / branches as f32 * TAU;

        // Linear in U rather than sqrt(U): points bunch up toward the core.
        // This is the look the field is meant to have, keep it.
        let radius = params.galaxy_radius * sampler.next_uniform();
        let angle = branch_angle + radius * params.spiral_angle;

        let offset = jitter(sampler.next_uniform(), sampler.next_uniform());
        let y = (sampler.next_uniform() - 0.5) * VERTICAL_SPREAD;

        // The same offset goes on x and z, skewing the scatter along the
        // x = z diagonal. Intentional; independent per-axis noise looks different.
        positions.extend_from_slice(&[
            radius * angle.cos() + offset,
            y,
            radius * angle.sin() + offset,
        ]);

        let color = radial_color(radius, params);
        colors.extend_from_slice(&color.to_array());

        points.push(PointInfo { distance: radius });
    }

    Ok(GalaxyField {
        positions,
        colors,
        points,
    })
}

/// Generate with a fresh thread-local RNG.
pub fn generate_with_rng(params: &GalaxyParams) -> Result<GalaxyField> {
    generate(params, &mut rand::thread_rng())
}

/// Scatter offset `base ^ (exponent - 0.5)`.
///
/// A zero base with a negative exponent would be infinite; that case
/// collapses to no offset so every position stays finite.
fn jitter(base: f32, exponent: f32) -> f32 {
    let offset = base.powf(exponent - 0.5);
    if offset.is_finite() {
        offset
    } else {
        0.0
    }
}
