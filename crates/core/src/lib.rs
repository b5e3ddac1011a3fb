#![deny(unsafe_code)]
//! Core of the random-dot-motion stimulus.
//!
//! A [`DotField`] moves `n_dots` [`Dot`]s inside a circular aperture, a
//! `motion_coherence` fraction of them along a shared `motion_angle`, and
//! draws them onto a [`FrameCanvas`] each tick. [`DotField::frame`] yields
//! the `(size, size, 3)` row-major [`Frame`] observation.
//!
//! Also provides the [`Config`] model, the [`RadiusSampler`] used for
//! uniform-area initial placement, polar/screen [`vector`] helpers, the
//! [`Xorshift64`] PRNG, and the [`Display`] seam for frame consumers.

pub mod canvas;
pub mod color;
pub mod config;
pub mod display;
pub mod dot;
pub mod error;
pub mod field;
pub mod prng;
pub mod radius;
pub mod vector;

pub use glam;

pub use canvas::{Frame, FrameCanvas};
pub use color::Rgb;
pub use config::Config;
pub use display::Display;
pub use dot::Dot;
pub use error::RdmError;
pub use field::DotField;
pub use prng::Xorshift64;
pub use radius::RadiusSampler;
