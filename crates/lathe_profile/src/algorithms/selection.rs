use tracing::debug;

use crate::{
    error::{ProfileError, Result},
    types::{BoundaryPointSet, HalfProfile},
};

/// Symmetry axis for an image of the given width
pub fn symmetry_axis(width: u32) -> i32 {
    // Contour coordinates are i32.
    i32::try_from(width / 2).unwrap_or(i32::MAX)
}

/// Keep the boundary points at or right of `axis`, ordered top to bottom.
///
/// The sort is stable, so points sharing a row keep their boundary order.
pub fn select_half_profile(boundary: &BoundaryPointSet, axis: i32) -> Result<HalfProfile> {
    let mut points: Vec<_> = boundary
        .points()
        .iter()
        .copied()
        .filter(|p| p.x >= axis)
        .collect();

    if points.is_empty() {
        return Err(ProfileError::EmptyHalfProfile { axis });
    }

    points.sort_by_key(|p| p.y);
    debug!(axis, kept = points.len(), dropped = boundary.len() - points.len(), "selected half-profile");

    Ok(HalfProfile { axis, points })
}
