//! color-triage: classification of CSS color strings
//!
//! This library sorts raw color values into the buckets a palette builder
//! cares about: real colors, grayscale tones, color expressions a baseline
//! parser cannot handle, and plain non-colors.
//!
//! # Quick Start
//!
//! [`classify`] is the primary entry point:
//!
//! ```
//! use color_triage::{classify, Classification};
//!
//! assert_eq!(classify("#ff0000"), Classification::TrueColor);
//! assert_eq!(classify("#808080"), Classification::Grayscale);
//! assert_eq!(classify("banana"), Classification::NonColor);
//! ```
//!
//! # Classification Rules
//!
//! A value is first handed to the baseline CSS parser (hex notation, named
//! keywords, functional notation with well-formed numeric arguments). Values
//! the parser rejects are not all equal: something shaped like `rgb(...)` or
//! `hsl(...)` was clearly typed as a color and becomes
//! [`Classification::AmbiguousFormat`] instead of being lumped in with
//! arbitrary strings.
//!
//! Parsed values with exactly equal R, G and B channels are achromatic. The
//! remaining values pass through an HSV test: a color whose value falls
//! below the curve `v = 1.3 / (1 + 8.5 * s)` still reads as gray to a human
//! eye and is classified [`Classification::Grayscale`]. Low value pulls a
//! color into the gray bucket regardless of saturation; a highly saturated
//! color needs a very low value to qualify.
//!
//! Classification is total: no input errors or panics, and the same input
//! always yields the same class.

mod classify;
mod hsv;

pub use classify::{classify, Classification};
pub use hsv::Hsv;
