use image::GrayImage;
use crate::{error::Result, types::{BoundaryPointSet, Contour}};

/// Trait for turning a grayscale raster into a binary foreground mask
pub trait ImagePreprocessor: Send + Sync {
    /// Produce a mask with 255 for foreground and 0 for background
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage>;
}

/// Trait for contour extraction algorithms
pub trait ContourExtractor: Send + Sync {
    /// Extract the outer borders of all foreground regions
    fn extract_contours(&self, mask: &GrayImage) -> Result<Vec<Contour>>;
}

/// Trait for choosing the silhouette among extracted contours
pub trait ContourSelector: Send + Sync {
    fn select(&self, contours: Vec<Contour>) -> Result<BoundaryPointSet>;
}
