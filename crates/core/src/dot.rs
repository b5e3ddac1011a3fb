//! A single moving dot.
//!
//! A dot's motion angle is drawn once, at construction, and never changes.
//! When a move carries it beyond the aperture it is recycled in place: the
//! position jumps to the far edge of the aperture, roughly opposite its
//! heading, while the motion angle is preserved.

use crate::config::Config;
use crate::prng::Xorshift64;
use crate::vector::{from_polar, from_screen, to_screen};
use glam::DVec2;

/// Half-width, in whole degrees, of the jitter band around the antipode of
/// a dot's heading used when recycling.
pub const RECYCLE_JITTER_DEGREES: i64 = 90;

/// One dot of the field, stored as plain data and driven by [`DotField`](crate::DotField).
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    /// Pixel-space position of the sprite center (y down).
    position: DVec2,
    /// Aperture center in pixel space.
    center: DVec2,
    /// Degrees, math convention. Fixed for the dot's lifetime.
    motion_angle: f64,
    /// Math-convention displacement per frame (y up).
    velocity: DVec2,
    max_radius: f64,
}

impl Dot {
    /// Creates a dot at `initial_radius` from `center` (at most
    /// `config.max_radius()`) with a uniformly random angular position.
    ///
    /// With probability `config.motion_coherence` the dot moves along
    /// `config.motion_angle`; otherwise its direction is uniform in [0, 360).
    pub fn new(initial_radius: f64, center: DVec2, config: &Config, rng: &mut Xorshift64) -> Self {
        let motion_angle = if rng.next_f64() < config.motion_coherence {
            config.motion_angle
        } else {
            rng.next_range(0.0, 360.0)
        };
        let velocity = from_polar(config.dot_velocity, motion_angle);

        let position_angle = rng.next_range(0.0, 360.0);
        let max_radius = config.max_radius();

        Self {
            position: place_within(center, initial_radius, position_angle, max_radius),
            center,
            motion_angle,
            velocity,
            max_radius,
        }
    }

    /// Advances one frame. Returns `true` if the move left the aperture and
    /// the dot was recycled.
    pub fn update(&mut self, rng: &mut Xorshift64) -> bool {
        // Screen y points down, velocity is in math convention.
        self.position += DVec2::new(self.velocity.x, -self.velocity.y);

        if self.distance_to_center() > self.max_radius {
            self.recycle(rng);
            true
        } else {
            false
        }
    }

    /// Moves the dot onto the aperture edge at
    /// `motion_angle - 180 + jitter`, jitter uniform over the integers in
    /// `[-90, 90]`. The motion angle is untouched.
    pub fn recycle(&mut self, rng: &mut Xorshift64) {
        let jitter = rng.next_int_inclusive(-RECYCLE_JITTER_DEGREES, RECYCLE_JITTER_DEGREES);
        let angle = self.motion_angle - 180.0 + jitter as f64;
        self.position = place_within(self.center, self.max_radius, angle, self.max_radius);
        log::trace!(
            "recycled dot heading {:.1} deg to edge angle {:.1} deg",
            self.motion_angle,
            angle
        );
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn motion_angle(&self) -> f64 {
        self.motion_angle
    }

    /// Per-frame displacement in math convention (y up).
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// Position relative to the center in math convention (y up).
    pub fn offset(&self) -> DVec2 {
        from_screen(self.position, self.center)
    }

    pub fn distance_to_center(&self) -> f64 {
        self.position.distance(self.center)
    }
}

/// Pixel position `radius` from `center` along `angle_degrees`, pulled
/// inward until its distance from `center` is at most `limit`.
///
/// Converting through screen space can round a point on the `limit` circle
/// a few ULPs outside it; the result always satisfies the bound exactly.
fn place_within(center: DVec2, radius: f64, angle_degrees: f64, limit: f64) -> DVec2 {
    let step = (center.abs().max_element() + limit) * f64::EPSILON;
    let mut r = radius.min(limit);
    let mut position = to_screen(from_polar(r, angle_degrees), center);
    while position.distance(center) > limit {
        r = (r - step).max(0.0);
        position = to_screen(from_polar(r, angle_degrees), center);
    }
    position
}
