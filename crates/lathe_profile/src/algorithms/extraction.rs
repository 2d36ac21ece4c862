use image::GrayImage;
use imageproc::contours::BorderType;
use tracing::debug;

use crate::{
    error::{ProfileError, Result},
    traits::{ContourExtractor, ContourSelector},
    types::{BoundaryPointSet, Contour, PixelPoint},
};

/// Imageproc-based contour extractor.
///
/// Keeps only outermost borders: borders of regions nested inside a hole of
/// another region are dropped.
#[derive(Debug, Clone, Default)]
pub struct ImageprocContourExtractor;

impl ContourExtractor for ImageprocContourExtractor {
    fn extract_contours(&self, mask: &GrayImage) -> Result<Vec<Contour>> {
        let contours = imageproc::contours::find_contours::<i32>(mask);
        let total = contours.len();

        let outer: Vec<Contour> = contours
            .into_iter()
            .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
            .map(|c| {
                Contour::new(
                    c.points
                        .iter()
                        .map(|p| PixelPoint { x: p.x, y: p.y })
                        .collect(),
                )
            })
            .collect();

        debug!(total, outer = outer.len(), "traced contours");
        Ok(outer)
    }
}

/// Selects the contour enclosing the largest area.
///
/// Equal areas resolve to the contour discovered first.
#[derive(Debug, Clone, Default)]
pub struct LargestAreaSelector;

impl ContourSelector for LargestAreaSelector {
    fn select(&self, contours: Vec<Contour>) -> Result<BoundaryPointSet> {
        let (index, area) = contours
            .iter()
            .enumerate()
            .map(|(i, c)| (i, c.area()))
            .fold(None, |best: Option<(usize, f64)>, (i, area)| match best {
                Some((_, best_area)) if area <= best_area => best,
                _ => Some((i, area)),
            })
            .ok_or(ProfileError::NoContourFound)?;

        debug!(index, area, candidates = contours.len(), "selected silhouette contour");

        let contour = contours
            .into_iter()
            .nth(index)
            .ok_or(ProfileError::NoContourFound)?;
        Ok(BoundaryPointSet::from_contour(contour))
    }
}
