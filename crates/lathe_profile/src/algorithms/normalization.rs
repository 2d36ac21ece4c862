use tracing::debug;

use crate::{
    error::{ProfileError, Result},
    types::{HalfProfile, NormalizedProfile, ProfilePoint},
};

/// Rescale a half-profile.
///
/// Height maps to `[0, 1]` over the sequence's own row range, radius to
/// `offset / max|offset| / x_scale`.
pub fn normalize(half: &HalfProfile, x_scale: f64) -> Result<NormalizedProfile> {
    let axis = half.axis;

    let (y_min, y_max) = half
        .points
        .iter()
        .fold((i32::MAX, i32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
    let max_offset = half
        .points
        .iter()
        .map(|p| (i64::from(p.x) - i64::from(axis)).abs())
        .max()
        .unwrap_or(0);

    if half.points.is_empty() || y_max <= y_min {
        return Err(ProfileError::DegenerateProfile(format!(
            "vertical extent is zero (rows {y_min}..={y_max})"
        )));
    }
    if max_offset == 0 {
        return Err(ProfileError::DegenerateProfile(
            "every boundary point lies on the symmetry axis".to_string(),
        ));
    }

    debug!(y_min, y_max, max_offset, "normalizing half-profile");

    let y_range = f64::from(y_max) - f64::from(y_min);
    let max_offset = max_offset as f64;
    let points = half
        .points
        .iter()
        .map(|p| {
            let y = (f64::from(p.y) - f64::from(y_min)) / y_range;
            let x = (f64::from(p.x) - f64::from(axis)) / max_offset / x_scale;
            ProfilePoint::new(x, y)
        })
        .collect();

    Ok(NormalizedProfile { points })
}
