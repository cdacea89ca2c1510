//! **TV mounting geometry**: where to sit and how high to hang a TV.
//!
//! Given a TV diagonal, the seated eye height, an optional manual viewing
//! distance and a distance strategy, [`calculate`] derives the viewing
//! distance, the TV centre and bottom mounting heights, and the vertical and
//! horizontal viewing angles. Every function is pure; the mounting mode and
//! the distance strategy are explicit inputs.
//!
//! ```
//! use tvmount::{DistanceStrategy, FieldOfView, MountingMode, ViewingInputs, calculate};
//!
//! let inputs = ViewingInputs::new(DistanceStrategy::FieldOfView(FieldOfView::Smpte))
//!     .with_tv_size(65)
//!     .with_eye_level(92.0)
//!     .with_mounting_mode(MountingMode::Ergonomic);
//! let result = calculate(&inputs).unwrap();
//! assert!((result.distance_m - 2.685).abs() < 1e-3);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: export the side-view diagram as SVG
//! - **serde**: `Serialize`/`Deserialize` on the input and output records
//! - **cli**: the `tvmount` command-line binary
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **wasm**: `wasm-bindgen` bindings for browser front ends

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod angles;
pub mod breakdown;
pub mod calculator;
pub mod config;
pub mod diagram;
pub mod distance;
pub mod errors;
pub mod float_types;
pub mod mounting;
pub mod screen;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use angles::actual_horizontal_angle;
pub use breakdown::Breakdown;
pub use calculator::{DistanceSource, ViewingInputs, ViewingResult, calculate, calculate_unchecked};
pub use distance::{DistanceStrategy, FieldOfView, heuristic_distance, recommended_distance};
pub use errors::GeometryError;
pub use mounting::{MountingHeight, MountingMode, mounting_height};
pub use screen::Screen;
