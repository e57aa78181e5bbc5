//! Host-side galaxy state.
//!
//! [`Galaxy`] keeps the current parameters, the generated field and the
//! sampler together and works out the cheapest way to apply a parameter
//! change:
//!
//! ```
//! use galaxy_field::{Color, Galaxy, GalaxyParams, Update};
//!
//! let mut galaxy = Galaxy::with_seed(GalaxyParams::default(), 42).unwrap();
//! let positions = galaxy.field().positions.clone();
//!
//! let recolored = galaxy.params().with_colors(Color::WHITE, Color::BLACK);
//! assert_eq!(galaxy.update(recolored).unwrap(), Update::Recolor);
//! assert_eq!(galaxy.field().positions, positions);
//!
//! let bigger = galaxy.params().with_galaxy_radius(12.0);
//! assert_eq!(galaxy.update(bigger).unwrap(), Update::Regenerate);
//! ```
//!
//! Updates are all-or-nothing: when an update fails, the parameters and
//! buffers from before the call are kept.

use log::{trace, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::generator::{generate, GalaxyField};
use crate::params::{GalaxyParams, Update};
use crate::recolor::recolor;
use crate::sampler::UniformSampler;

/// Current parameters plus the field generated from them.
#[derive(Debug, Clone)]
pub struct Galaxy<S = SmallRng> {
    params: GalaxyParams,
    field: GalaxyField,
    sampler: S,
}

impl Galaxy<SmallRng> {
    /// Generate a galaxy seeded from system entropy.
    pub fn new(params: GalaxyParams) -> Result<Self> {
        Self::with_sampler(params, SmallRng::from_entropy())
    }

    /// Generate a reproducible galaxy: the same seed and the same sequence of
    /// updates always produce the same buffers.
    pub fn with_seed(params: GalaxyParams, seed: u64) -> Result<Self> {
        Self::with_sampler(params, SmallRng::seed_from_u64(seed))
    }
}

impl<S: UniformSampler> Galaxy<S> {
    /// Generate a galaxy drawing samples from `sampler`.
    pub fn with_sampler(params: GalaxyParams, mut sampler: S) -> Result<Self> {
        let field = generate(&params, &mut sampler)?;
        Ok(Self {
            params,
            field,
            sampler,
        })
    }

    pub fn params(&self) -> &GalaxyParams {
        &self.params
    }

    pub fn field(&self) -> &GalaxyField {
        &self.field
    }

    /// Point size for the renderer.
    pub fn particles_size(&self) -> f32 {
        self.params.particles_size
    }

    /// Apply new parameters, doing only the work the change requires.
    ///
    /// Structural changes regenerate everything, color changes rebuild the
    /// color buffer from the stored point metadata, and a size change only
    /// stores the new parameters. Returns which of those happened.
    pub fn update(&mut self, params: GalaxyParams) -> Result<Update> {
        let update = self.params.diff(&params).update();
        trace!("Galaxy update: {:?}", update);

        let result = match update {
            Update::Regenerate => generate(&params, &mut self.sampler).map(|field| {
                self.field = field;
            }),
            Update::Recolor => recolor(&self.field.points, &params).map(|colors| {
                self.field.colors = colors;
            }),
            Update::Resize | Update::None => Ok(()),
        };

        match result {
            Ok(()) => {
                self.params = params;
                Ok(update)
            }
            Err(e) => {
                warn!("Rejected galaxy update: {}", e);
                Err(e)
            }
        }
    }

    /// Regenerate with the current parameters, drawing fresh samples.
    pub fn regenerate(&mut self) -> Result<()> {
        self.field = generate(&self.params, &mut self.sampler)?;
        Ok(())
    }

    /// Give up the field, e.g. to move the buffers into a renderer.
    pub fn into_field(self) -> GalaxyField {
        self.field
    }
}
