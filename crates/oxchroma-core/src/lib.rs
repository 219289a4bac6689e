//! # oxchroma - color values, color scales and dichromat simulation
//!
//! A small color engine built around three pieces:
//!
//! - **[`Color`]**: one color stored as clamped RGBA, readable and writable
//!   through RGB, HSL, CIE Lab, CMYK, gamma-encoded RGB, bytes, hex and a
//!   function-style string grammar
//! - **[`ColorScale`]**: resamples positioned color stops into an evenly
//!   spaced list and exports it as byte or float buffers
//! - **[`daltonize`](daltonize::daltonize)**: simulates protanopia,
//!   deuteranopia and tritanopia by confusion-line projection
//!
//! ## Quick Start
//!
//! ```
//! use oxchroma_core::{Color, ColorSpace, ColorVisionDeficiency, DEFAULT_GAMMA};
//!
//! let mut color: Color = "hsl(0.33, 0.8, 0.5)".parse().unwrap();
//! color.set_a(0.5);
//!
//! let lab = color.lab();
//! assert!(lab.iter().all(|v| (0.0..=1.0).contains(v)));
//!
//! let seen = oxchroma_core::daltonize::daltonize(
//!     &color,
//!     ColorVisionDeficiency::Deuteranope,
//!     DEFAULT_GAMMA,
//! );
//! println!("{} looks like {}", color.format(ColorSpace::Rgb, true, 3), seen);
//! ```
//!
//! All math is `f64`. Out-of-range input is clamped, never rejected; only
//! malformed strings and inconsistent scale arguments produce an [`Error`].

pub mod color;
pub mod convert;
pub mod daltonize;
pub mod error;
pub mod math;
pub mod scale;
pub mod tuple;

pub use color::{Color, ColorPrefix, ColorSpace, DEFAULT_ALPHA, DEFAULT_PRECISION, GrayscaleAlgorithm};
pub use convert::DEFAULT_GAMMA;
pub use daltonize::ColorVisionDeficiency;
pub use error::{Error, Result};
pub use scale::{
    ColorEncoding, ColorScale, InterpolationMode, Preset, PresetType, ScaleOptions, find_preset,
    parse_presets,
};
pub use tuple::{Tuple3, Tuple4, Tuple5};

/// Version of oxchroma
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
