use crate::{
    pipeline::Pipeline,
    config::{DuplicatePolicy, ProfileConfig},
    error::Result,
    traits::{ImagePreprocessor, ContourExtractor, ContourSelector},
    algorithms::{
        ImageprocContourExtractor,
        InverseThresholdPreprocessor,
        LargestAreaSelector,
    },
};

/// Builder for creating processing pipelines with a fluent API
pub struct PipelineBuilder {
    config: ProfileConfig,
    preprocessor: Option<Box<dyn ImagePreprocessor>>,
    contour_extractor: Option<Box<dyn ContourExtractor>>,
    contour_selector: Option<Box<dyn ContourSelector>>,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            config: ProfileConfig::default(),
            preprocessor: None,
            contour_extractor: None,
            contour_selector: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ProfileConfig) -> Self {
        self.config = config;
        self
    }

    pub fn threshold(mut self, threshold: u8) -> Self {
        self.config.threshold = threshold;
        self
    }

    pub fn sample_count(mut self, sample_count: usize) -> Self {
        self.config.sample_count = sample_count;
        self
    }

    pub fn x_scale(mut self, x_scale: f64) -> Self {
        self.config.x_scale = x_scale;
        self
    }

    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicate_policy = policy;
        self
    }

    /// Set the binarization step. When set, the configured threshold is not used.
    pub fn set_preprocessor<P>(mut self, preprocessor: P) -> Self
    where
        P: ImagePreprocessor + 'static,
    {
        self.preprocessor = Some(Box::new(preprocessor));
        self
    }

    /// Set the contour extractor (replaces any existing one)
    pub fn set_contour_extractor<E>(mut self, extractor: E) -> Self
    where
        E: ContourExtractor + 'static,
    {
        self.contour_extractor = Some(Box::new(extractor));
        self
    }

    /// Set the contour selector (replaces any existing one)
    pub fn set_contour_selector<S>(mut self, selector: S) -> Self
    where
        S: ContourSelector + 'static,
    {
        self.contour_selector = Some(Box::new(selector));
        self
    }

    /// Build the pipeline with default components if not specified
    pub fn build(self) -> Result<Pipeline> {
        let threshold = self.config.threshold;
        let preprocessor = self.preprocessor
            .unwrap_or_else(|| Box::new(InverseThresholdPreprocessor { threshold }));

        let contour_extractor = self.contour_extractor
            .unwrap_or_else(|| Box::new(ImageprocContourExtractor));

        let contour_selector = self.contour_selector
            .unwrap_or_else(|| Box::new(LargestAreaSelector));

        Pipeline::new(
            self.config,
            preprocessor,
            contour_extractor,
            contour_selector,
        )
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
