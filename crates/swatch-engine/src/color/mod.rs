//! Color types and conversion utilities
//!
//! Colors enter the pipeline as HSL in the catalog's native units and leave
//! it as 8-bit RGB triples.
//!
//! # Example
//!
//! ```
//! use swatch_engine::{Hsl, Rgb8};
//!
//! let red = Hsl::new(0.0, 100.0, 50.0);
//! assert_eq!(red.to_rgb8(), Rgb8::new(255, 0, 0));
//! ```

mod hsl;
mod rgb;

pub use hsl::Hsl;
pub use rgb::Rgb8;
