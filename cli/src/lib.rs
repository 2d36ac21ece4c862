use lathe_profile::{DuplicatePolicy, Pipeline, ProfileConfig, ProfileError};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSerError(#[from] toml::ser::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error("Unsupported file format. Please use .toml or .json files")]
    UnsupportedFileFormat,
}

impl CliError {
    /// Step that failed, for the top-level error report
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Profile(e) => e.stage(),
            _ => "configuration",
        }
    }
}

/// One extraction: which image to read, where to write, and how
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ExtractJob {
    pub input_path: String,
    pub output_path: String,
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Command-line values that take precedence over a loaded configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileOverrides {
    pub threshold: Option<u8>,
    pub sample_count: Option<usize>,
    pub x_scale: Option<f64>,
    pub duplicate_policy: Option<DuplicatePolicy>,
}

impl ProfileOverrides {
    pub fn apply(&self, config: ProfileConfig) -> ProfileConfig {
        ProfileConfig {
            threshold: self.threshold.unwrap_or(config.threshold),
            sample_count: self.sample_count.unwrap_or(config.sample_count),
            x_scale: self.x_scale.unwrap_or(config.x_scale),
            duplicate_policy: self.duplicate_policy.unwrap_or(config.duplicate_policy),
        }
    }
}

/// Load a bare profile configuration, format chosen by extension
pub fn load_profile_config<P: AsRef<Path>>(path: P) -> Result<ProfileConfig, CliError> {
    let path_ref = path.as_ref();
    let content = fs::read_to_string(path_ref)?;
    match path_ref.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(toml::from_str(&content)?),
        Some("json") => Ok(serde_json::from_str(&content)?),
        _ => Err(CliError::UnsupportedFileFormat),
    }
}

impl ExtractJob {
    /// Load ExtractJob configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load ExtractJob configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(content)?)
    }

    /// Load ExtractJob configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load ExtractJob configuration from JSON string
    pub fn from_json(content: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Auto-detect file format and load configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let path_ref = path.as_ref();
        match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(CliError::UnsupportedFileFormat),
        }
    }

    /// Convert ExtractJob to TOML string
    pub fn to_toml(&self) -> Result<String, CliError> {
        Ok(toml::to_string_pretty(&self)?)
    }

    /// Convert ExtractJob to JSON string
    pub fn to_json(&self) -> Result<String, CliError> {
        Ok(serde_json::to_string_pretty(&self)?)
    }

    /// JSON schema of the job file, profile configuration included
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ExtractJob)
    }

    /// Run the pipeline and write the profile. Nothing is written on failure.
    pub fn run(&self) -> Result<usize, CliError> {
        let pipeline = Pipeline::builder()
            .with_config(self.profile.clone())
            .build()?;
        info!("{}", pipeline.info());

        let profile = pipeline.process_path(&self.input_path)?;
        profile.save_text(&self.output_path)?;

        info!("Wrote {} profile points to {}", profile.len(), self.output_path);
        Ok(profile.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_job_from_toml_with_defaults() {
        let job = ExtractJob::from_toml(
            r#"
            input_path = "pawn.webp"
            output_path = "pawn_outline_coords.txt"
            "#,
        )
        .expect("Should parse job");

        assert_eq!(job.input_path, "pawn.webp");
        assert_eq!(job.profile, ProfileConfig::default());
    }

    #[test]
    fn test_job_from_toml_with_profile_table() {
        let job = ExtractJob::from_toml(
            r#"
            input_path = "vase.png"
            output_path = "vase.txt"

            [profile]
            threshold = 200
            sample_count = 64
            duplicate_policy = "keep_first"
            "#,
        )
        .expect("Should parse job");

        assert_eq!(job.profile.threshold, 200);
        assert_eq!(job.profile.sample_count, 64);
        assert_eq!(job.profile.x_scale, 2.5);
        assert_eq!(job.profile.duplicate_policy, DuplicatePolicy::KeepFirst);
    }

    #[test]
    fn test_job_json_matches_toml() {
        let job = ExtractJob::from_toml("input_path = \"a.png\"\noutput_path = \"a.txt\"\n")
            .expect("Should parse job");
        let json = job.to_json().expect("Should serialize");
        assert_eq!(ExtractJob::from_json(&json).expect("Should parse json"), job);
        let toml = job.to_toml().expect("Should serialize");
        assert_eq!(ExtractJob::from_toml(&toml).expect("Should parse toml"), job);
    }

    #[test]
    fn test_schema_describes_job_and_profile() {
        let schema = serde_json::to_value(ExtractJob::schema()).expect("Should serialize schema");
        let properties = &schema["properties"];
        assert!(properties.get("input_path").is_some());
        assert!(properties.get("output_path").is_some());
        assert!(properties.get("profile").is_some());
        assert!(schema["definitions"]["ProfileConfig"]["properties"]["sample_count"].is_object());
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let result = ExtractJob::from_file("job.yaml");
        assert!(matches!(result, Err(CliError::UnsupportedFileFormat)));
    }

    #[test]
    fn test_overrides_win() {
        let overrides = ProfileOverrides {
            sample_count: Some(10),
            duplicate_policy: Some(DuplicatePolicy::Average),
            ..Default::default()
        };
        let config = overrides.apply(ProfileConfig::default());
        assert_eq!(config.sample_count, 10);
        assert_eq!(config.threshold, 240);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Average);
    }

    #[test]
    fn test_run_writes_output() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let input = dir.path().join("square.png");
        let output = dir.path().join("square.txt");

        let mut img = GrayImage::from_pixel(200, 200, Luma([255u8]));
        for y in 50..150 {
            for x in 50..150 {
                img.put_pixel(x, y, Luma([0u8]));
            }
        }
        img.save(&input).expect("Should save image");

        let job = ExtractJob {
            input_path: input.to_string_lossy().to_string(),
            output_path: output.to_string_lossy().to_string(),
            profile: ProfileConfig {
                sample_count: 11,
                ..Default::default()
            },
        };
        assert_eq!(job.run().expect("Should run job"), 11);

        let text = fs::read_to_string(&output).expect("Should read output");
        assert_eq!(text.lines().count(), 11);
        assert!(text.lines().all(|l| l.starts_with("\t{0.400, ")));
    }

    #[test]
    fn test_failed_run_writes_nothing() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let input = dir.path().join("blank.png");
        let output = dir.path().join("blank.txt");
        GrayImage::from_pixel(32, 32, Luma([255u8]))
            .save(&input)
            .expect("Should save image");

        let job = ExtractJob {
            input_path: input.to_string_lossy().to_string(),
            output_path: output.to_string_lossy().to_string(),
            profile: ProfileConfig::default(),
        };
        let err = job.run().expect_err("Blank image should fail");
        assert_eq!(err.stage(), "silhouette extraction");
        assert!(!output.exists());
    }
}
