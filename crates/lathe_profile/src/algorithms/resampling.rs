use tracing::debug;

use crate::{
    config::DuplicatePolicy,
    error::{ProfileError, Result},
    types::{NormalizedProfile, OutputProfile, ProfilePoint},
};

/// Piecewise-linear function `x(y)` over strictly increasing knots.
///
/// Queries outside the knot range continue the first or last segment.
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    knots: Vec<ProfilePoint>,
}

impl LinearInterpolator {
    /// Build from samples in any order, collapsing equal heights with `policy`.
    ///
    /// Samples are stably sorted by `y` first, so `KeepFirst` keeps the
    /// earliest sample of each height in input order.
    pub fn from_samples(samples: &[ProfilePoint], policy: DuplicatePolicy) -> Result<Self> {
        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.y.total_cmp(&b.y));

        let knots = collapse_duplicates(&sorted, policy);
        if knots.len() < 2 {
            return Err(ProfileError::Interpolation(format!(
                "need at least 2 distinct heights, got {}",
                knots.len()
            )));
        }
        Ok(Self { knots })
    }

    pub fn knots(&self) -> &[ProfilePoint] {
        &self.knots
    }

    pub fn eval(&self, y: f64) -> f64 {
        let last = self.knots.len() - 1;
        let upper = self.knots.partition_point(|k| k.y <= y).clamp(1, last);
        let (a, b) = (self.knots[upper - 1], self.knots[upper]);
        let t = (y - a.y) / (b.y - a.y);
        a.x + t * (b.x - a.x)
    }
}

/// Merge runs of equal `y` into one knot each. Input must be sorted by `y`.
fn collapse_duplicates(sorted: &[ProfilePoint], policy: DuplicatePolicy) -> Vec<ProfilePoint> {
    sorted
        .chunk_by(|a, b| a.y == b.y)
        .map(|run| {
            let x = match policy {
                DuplicatePolicy::KeepFirst => run[0].x,
                DuplicatePolicy::Average => run.iter().map(|p| p.x).sum::<f64>() / run.len() as f64,
                DuplicatePolicy::Outermost => run.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max),
            };
            ProfilePoint::new(x, run[0].y)
        })
        .collect()
}

/// `count` heights from 1.0 down to 0.0 inclusive, evenly spaced
pub fn uniform_heights(count: usize) -> Result<Vec<f64>> {
    if count < 2 {
        return Err(ProfileError::Interpolation(format!(
            "sample count must be at least 2, got {count}"
        )));
    }

    let step = 1.0 / (count - 1) as f64;
    Ok((0..count)
        .map(|i| if i + 1 == count { 0.0 } else { 1.0 - i as f64 * step })
        .collect())
}

/// Resample a normalized profile to `count` uniformly spaced heights
pub fn resample(
    profile: &NormalizedProfile,
    count: usize,
    policy: DuplicatePolicy,
) -> Result<OutputProfile> {
    let heights = uniform_heights(count)?;
    let interpolator = LinearInterpolator::from_samples(&profile.points, policy)?;
    debug!(
        samples = profile.points.len(),
        knots = interpolator.knots().len(),
        count,
        %policy,
        "resampling profile"
    );

    let points = heights
        .into_iter()
        .map(|y| ProfilePoint::new(interpolator.eval(y), y))
        .collect();

    Ok(OutputProfile::new(points))
}
