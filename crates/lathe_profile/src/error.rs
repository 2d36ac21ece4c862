use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    #[error("Silhouette is empty: no foreground pixel after thresholding")]
    EmptySilhouette,

    #[error("No outer contour found in the binary mask")]
    NoContourFound,

    #[error("No boundary point lies at or right of the symmetry axis x = {axis}")]
    EmptyHalfProfile { axis: i32 },

    #[error("Degenerate profile: {0}")]
    DegenerateProfile(String),

    #[error("Interpolation error: {0}")]
    Interpolation(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Malformed profile line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProfileError {
    /// Name of the pipeline stage that produced this error
    pub fn stage(&self) -> &'static str {
        match self {
            Self::ImageLoad(_) | Self::Io(_) => "io",
            Self::EmptySilhouette | Self::NoContourFound => "silhouette extraction",
            Self::EmptyHalfProfile { .. } => "half-profile selection",
            Self::DegenerateProfile(_) => "normalization",
            Self::Interpolation(_) => "resampling",
            Self::InvalidConfig(_) => "configuration",
            Self::Parse { .. } => "profile parsing",
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
