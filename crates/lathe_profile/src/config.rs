use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

use crate::error::{ProfileError, Result};

/// How samples sharing the same height are collapsed before interpolation
#[derive(
    Debug, Clone, Copy, Default,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, EnumIter, VariantNames, IntoStaticStr,
    PartialEq, Eq,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the sample encountered first in the sorted half-profile
    KeepFirst,
    /// Use the mean radius of all samples at that height
    Average,
    /// Use the largest radius at that height (the silhouette's outer edge)
    #[default]
    Outermost,
}

impl DuplicatePolicy {
    pub fn description(&self) -> &'static str {
        match self {
            Self::KeepFirst => "first sample at each height in boundary order",
            Self::Average => "mean radius of all samples at each height",
            Self::Outermost => "largest radius at each height",
        }
    }
}

/// Parameters of one extraction run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ProfileConfig {
    /// Pixels strictly darker than this are foreground
    pub threshold: u8,
    /// Number of points in the output profile
    #[schemars(range(min = 2))]
    pub sample_count: usize,
    /// Divisor applied to the unit radius
    pub x_scale: f64,
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            threshold: 240,
            sample_count: 500,
            x_scale: 2.5,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl ProfileConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sample_count < 2 {
            return Err(ProfileError::InvalidConfig(format!(
                "sample_count must be at least 2, got {}",
                self.sample_count
            )));
        }
        if !self.x_scale.is_finite() || self.x_scale <= 0.0 {
            return Err(ProfileError::InvalidConfig(format!(
                "x_scale must be a positive finite number, got {}",
                self.x_scale
            )));
        }
        Ok(())
    }

    /// Get the JSON schema for the configuration
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ProfileConfig)
    }
}
