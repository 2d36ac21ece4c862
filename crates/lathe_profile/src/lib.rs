//! # Lathe Profile Extraction Library
//!
//! Turns the silhouette of a turned object (a chess pawn, a vase, a spindle)
//! into a uniformly sampled radial profile that can be revolved into a mesh.
//!
//! ## Stages
//!
//! - **Silhouette**: inverted threshold, outer contour tracing, largest region by area
//! - **Half profile**: boundary points at or right of the image's vertical centre, sorted by row
//! - **Normalization**: height to `[0, 1]`, radius to `offset / max offset / x_scale`
//! - **Resampling**: `sample_count` evenly spaced heights by linear interpolation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lathe_profile::Pipeline;
//!
//! let pipeline = Pipeline::builder()
//!     .threshold(240)
//!     .sample_count(500)
//!     .build()?;
//!
//! let profile = pipeline.process_path("pawn.png")?;
//! profile.save_text("pawn_outline_coords.txt")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Revolving
//!
//! ```rust,no_run
//! use lathe_profile::{io::load_profile, RevolveOptions, RevolvedMesh};
//!
//! let rows = load_profile("pawn_outline_coords.txt")?;
//! let mesh = RevolvedMesh::from_profile(&rows, &RevolveOptions::default())?;
//! println!("{} triangles", mesh.triangle_count());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Core modules
pub mod error;
pub mod types;
pub mod config;
pub mod traits;
pub mod algorithms;
pub mod pipeline;
pub mod io;
pub mod revolve;

// Re-exports for convenience
pub use error::{ProfileError, Result};
pub use types::{BoundaryPointSet, HalfProfile, NormalizedProfile, OutputProfile, ProfilePoint};
pub use config::{DuplicatePolicy, ProfileConfig};
pub use traits::*;
pub use algorithms::*;
pub use pipeline::{Pipeline, builder::PipelineBuilder};
pub use revolve::{MeshVertex, RevolveOptions, RevolvedMesh, Surface};
