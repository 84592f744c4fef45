//! wp-palette - WordPress editor color palette generator
//!
//! Builds a `theme.json` color palette from Sass design tokens compiled to
//! JSON by a Sass-to-JSON exporter.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
