pub mod preprocessing;
pub mod extraction;
pub mod selection;
pub mod normalization;
pub mod resampling;

pub use preprocessing::*;
pub use extraction::*;
pub use selection::*;
pub use normalization::*;
pub use resampling::*;
