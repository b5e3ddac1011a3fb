//! The dot-field engine.
//!
//! A [`DotField`] owns the configuration, the random source, every
//! [`Dot`], and the [`FrameCanvas`] they are drawn onto. One logical tick
//! is [`DotField::update`] followed by [`DotField::render`]; both run to
//! completion, so a tick is atomic.

use crate::canvas::{Frame, FrameCanvas};
use crate::config::Config;
use crate::dot::Dot;
use crate::error::RdmError;
use crate::prng::Xorshift64;
use crate::radius::RadiusSampler;
use glam::DVec2;
use log::{debug, info};

/// A field of dots moving inside a circular aperture.
#[derive(Debug, Clone)]
pub struct DotField {
    config: Config,
    center: DVec2,
    dots: Vec<Dot>,
    rng: Xorshift64,
    canvas: FrameCanvas,
    tick: u64,
    recycles: u64,
}

impl DotField {
    /// Builds a field from a configuration and an injected random source.
    ///
    /// Samples `n_dots` initial radii with density proportional to radius
    /// over the integer radii `{0, ..., min(R - 1, floor(max_radius))}` and
    /// constructs one dot per radius, so the aperture bound holds from the
    /// first frame without piling dots onto the edge. With `dot_size <= 2`
    /// this is the full `{0, ..., R - 1}`. The canvas starts cleared to
    /// `background_color`; call [`render`](Self::render) to draw the dots.
    ///
    /// Returns `RdmError::InvalidConfig` if the configuration fails
    /// [`Config::validate`].
    pub fn new(config: Config, mut rng: Xorshift64) -> Result<Self, RdmError> {
        config.validate()?;

        let display_size = config.display_size();
        let half = display_size as f64 / 2.0;
        let center = DVec2::new(half, half);
        let canvas = FrameCanvas::new(display_size, config.background_color)?;

        // Whole radii up to the dot bound; validation guarantees max_radius >= 1.
        let reach = (config.max_radius().floor() as usize + 1).min(config.dot_area_radius);
        let sampler = RadiusSampler::new(reach)?;
        let radii = sampler.sample_n(config.n_dots, &mut rng);
        let dots: Vec<Dot> = radii
            .into_iter()
            .map(|r| Dot::new(r as f64, center, &config, &mut rng))
            .collect();

        let coherent = dots
            .iter()
            .filter(|d| d.motion_angle() == config.motion_angle)
            .count();
        info!(
            "dot field ready: {} dots ({} coherent), {}x{} px, aperture radius {}",
            dots.len(),
            coherent,
            display_size,
            display_size,
            config.dot_area_radius
        );

        Ok(Self {
            config,
            center,
            dots,
            rng,
            canvas,
            tick: 0,
            recycles: 0,
        })
    }

    /// Builds a field with a fresh [`Xorshift64`] seeded from `seed`.
    pub fn from_seed(config: Config, seed: u64) -> Result<Self, RdmError> {
        debug!("seeding dot field with {seed}");
        Self::new(config, Xorshift64::new(seed))
    }

    /// Moves every dot one frame, recycling those that leave the aperture.
    pub fn update(&mut self) {
        for dot in &mut self.dots {
            if dot.update(&mut self.rng) {
                self.recycles += 1;
            }
        }
        self.tick += 1;
    }

    /// Clears the canvas to the background color and draws every dot.
    pub fn render(&mut self) {
        self.canvas.clear(self.config.background_color);
        for dot in &self.dots {
            self.canvas
                .draw_square(dot.position(), self.config.dot_size, self.config.dot_color);
        }
    }

    /// One full tick: [`update`](Self::update) then [`render`](Self::render).
    pub fn step(&mut self) {
        self.update();
        self.render();
    }

    /// Current canvas as a row-major `(size, size, 3)` observation.
    pub fn frame(&self) -> Frame {
        self.canvas.extract_frame()
    }

    pub fn canvas(&self) -> &FrameCanvas {
        &self.canvas
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Aperture center in pixel space, `(display_size/2, display_size/2)`.
    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn display_size(&self) -> usize {
        self.canvas.size()
    }

    /// Number of updates applied since construction.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Total recycling events since construction.
    pub fn recycle_count(&self) -> u64 {
        self.recycles
    }
}
