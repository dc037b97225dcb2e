//! Recursive fractal outlines, triangulated and split into the triangles inside
//! the outline and the ones spanning its concavities.
//!
//! ```
//! use fractri::{perturb::NoPerturbation, Sketch};
//!
//! let mut sketch = Sketch::builder().depth(1).perturbation(NoPerturbation).build();
//! let output = sketch.run().unwrap();
//! assert_eq!(output.points.len(), 6);
//! assert!(output.classification.outside.is_empty());
//! ```
mod classify;
mod error;
pub mod frames;
mod generator;
pub mod loader;
pub mod perturb;
pub mod render;
mod sketch;
mod triangulation;
mod vector;

pub use classify::{classify, diff_angle, is_inside, is_outline_or_inside, Classification};
pub use error::{Error, Result};
pub use generator::{expected_point_count, generate_outline, OutlineParams};
pub use sketch::{Observer, Sketch, SketchBuilder, SketchOutput};
pub use triangulation::{flatten, Delaunator, TriangleIndices, Triangulator};
pub use vector::Vec2;
