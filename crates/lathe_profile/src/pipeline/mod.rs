pub mod builder;

use std::path::Path;

use image::GrayImage;
use tracing::{debug, info};

use crate::{
    algorithms::{has_foreground, normalize, resample, select_half_profile, symmetry_axis},
    config::ProfileConfig,
    error::{ProfileError, Result},
    traits::{ContourExtractor, ContourSelector, ImagePreprocessor},
    types::{BoundaryPointSet, OutputProfile},
};

/// Silhouette-to-profile pipeline.
///
/// Stages run strictly in order and the first failure aborts the run:
/// binarize, trace and select the silhouette border, keep the right half,
/// normalize, resample.
pub struct Pipeline {
    config: ProfileConfig,
    preprocessor: Box<dyn ImagePreprocessor>,
    contour_extractor: Box<dyn ContourExtractor>,
    contour_selector: Box<dyn ContourSelector>,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    /// Create a new pipeline with the given components
    pub fn new(
        config: ProfileConfig,
        preprocessor: Box<dyn ImagePreprocessor>,
        contour_extractor: Box<dyn ContourExtractor>,
        contour_selector: Box<dyn ContourSelector>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            preprocessor,
            contour_extractor,
            contour_selector,
        })
    }

    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    /// Boundary of the largest foreground region
    pub fn extract_silhouette(&self, image: &GrayImage) -> Result<BoundaryPointSet> {
        let mask = self.preprocessor.preprocess(image)?;
        if !has_foreground(&mask) {
            return Err(ProfileError::EmptySilhouette);
        }

        let contours = self.contour_extractor.extract_contours(&mask)?;
        if contours.is_empty() {
            return Err(ProfileError::NoContourFound);
        }

        let boundary = self.contour_selector.select(contours)?;
        debug!(points = boundary.len(), "silhouette boundary");
        Ok(boundary)
    }

    /// Process an image through the entire pipeline
    pub fn process(&self, image: &GrayImage) -> Result<OutputProfile> {
        let boundary = self.extract_silhouette(image)?;

        let axis = symmetry_axis(image.width());
        let half = select_half_profile(&boundary, axis)?;

        let normalized = normalize(&half, self.config.x_scale)?;

        let profile = resample(
            &normalized,
            self.config.sample_count,
            self.config.duplicate_policy,
        )?;

        info!(
            width = image.width(),
            height = image.height(),
            boundary = boundary.len(),
            half = half.points.len(),
            samples = profile.len(),
            "extracted profile"
        );
        Ok(profile)
    }

    /// Load a grayscale image from disk and process it
    pub fn process_path<P: AsRef<Path>>(&self, path: P) -> Result<OutputProfile> {
        let image = image::open(path.as_ref())?.to_luma8();
        debug!(path = %path.as_ref().display(), "loaded image");
        self.process(&image)
    }

    /// Get information about the pipeline configuration
    pub fn info(&self) -> String {
        format!(
            "Pipeline: threshold < {}, {} samples, x scale 1/{}, duplicates: {}",
            self.config.threshold,
            self.config.sample_count,
            self.config.x_scale,
            self.config.duplicate_policy
        )
    }
}
