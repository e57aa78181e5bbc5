//! Color-only updates.
//!
//! Changing the gradient colors does not move any point, so the color buffer
//! can be rebuilt from the [`PointInfo`] kept from the last generation
//! without drawing new samples.

use log::debug;

use crate::color::{mix, Color};
use crate::error::{GalaxyError, Result};
use crate::generator::PointInfo;
use crate::params::GalaxyParams;

/// Rebuild the color buffer for `points` under new gradient colors.
///
/// `points` must come from the most recent generation with the same
/// `particles_count`; otherwise this fails with
/// [`InvalidState`](GalaxyError::InvalidState) and the caller should
/// regenerate. Deterministic: identical inputs give bit-identical output.
pub fn recolor(points: &[PointInfo], params: &GalaxyParams) -> Result<Vec<f32>> {
    params.validate()?;

    let expected = params.particles_count as usize;
    if points.len() != expected {
        return Err(GalaxyError::InvalidState {
            expected,
            actual: points.len(),
        });
    }

    debug!(
        "Recoloring {} points: {} -> {}",
        points.len(),
        params.inside_color,
        params.outside_color
    );

    let mut colors = Vec::with_capacity(points.len() * 3);
    for point in points {
        colors.extend_from_slice(&radial_color(point.distance, params).to_array());
    }
    Ok(colors)
}

/// Gradient color for a point at `distance` from the center.
///
/// Shared by generation and recoloring so both produce the same bits for the
/// same distance.
#[inline]
pub(crate) fn radial_color(distance: f32, params: &GalaxyParams) -> Color {
    mix(
        params.inside_color,
        params.outside_color,
        distance / params.galaxy_radius,
    )
}
