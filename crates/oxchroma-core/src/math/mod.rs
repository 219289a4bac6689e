//! Scalar math used by the conversion routines
//!
//! - Transfer functions (piecewise sRGB and simple gamma power)
//! - Linear interpolation of scalars and tuples
//! - 3x3 matrices for RGB↔XYZ and confusion-line transforms

pub mod gamma;
pub mod interpolation;
pub mod matrix;

pub use gamma::{gamma_decode, gamma_encode, srgb_gamma_decode, srgb_gamma_encode};
pub use interpolation::{lerp, lerp_n};
pub use matrix::Matrix3x3;
