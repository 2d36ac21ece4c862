use std::collections::HashSet;

use geo_types::{Coord, LineString, Polygon};

/// Integer pixel coordinate on the raster grid
pub type PixelPoint = Coord<i32>;

/// A closed border traced around one connected foreground region
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Vec<PixelPoint>,
}

impl Contour {
    pub fn new(points: Vec<PixelPoint>) -> Self {
        Self { points }
    }

    /// Convert to a geo-types Polygon for area computation
    pub fn to_geo_polygon(&self) -> Polygon<f64> {
        let coords: Vec<Coord<f64>> = self
            .points
            .iter()
            .map(|p| Coord {
                x: f64::from(p.x),
                y: f64::from(p.y),
            })
            .collect();

        Polygon::new(LineString::new(coords), vec![])
    }

    /// Area enclosed by the border polygon
    pub fn area(&self) -> f64 {
        use geo::Area;
        self.to_geo_polygon().unsigned_area()
    }
}

/// Boundary pixels of the selected silhouette, without repeated coordinates.
///
/// Border following may visit a pixel twice (thin necks, one-pixel-wide
/// spurs); only the first visit is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPointSet {
    points: Vec<PixelPoint>,
}

impl BoundaryPointSet {
    pub fn from_contour(contour: Contour) -> Self {
        let mut seen = HashSet::new();
        let points = contour
            .points
            .into_iter()
            .filter(|p| seen.insert((p.x, p.y)))
            .collect();

        Self { points }
    }

    pub fn points(&self) -> &[PixelPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Boundary points right of (or on) the symmetry axis, sorted by `y`
#[derive(Debug, Clone, PartialEq)]
pub struct HalfProfile {
    pub axis: i32,
    pub points: Vec<PixelPoint>,
}

/// One normalized sample: `x` is the scaled radius, `y` the relative height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    pub x: f64,
    pub y: f64,
}

impl ProfilePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Normalized half-profile, same length and order as the source sequence
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedProfile {
    pub points: Vec<ProfilePoint>,
}

/// The resampled profile.
///
/// Points are held in generation order (`y` from 1.0 down to 0.0);
/// [`OutputProfile::emitted`] yields them bottom-to-top as written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputProfile {
    points: Vec<ProfilePoint>,
}

impl OutputProfile {
    pub(crate) fn new(points: Vec<ProfilePoint>) -> Self {
        Self { points }
    }

    /// Points in generation order
    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    /// Points in emission order (`y` ascending)
    pub fn emitted(&self) -> impl DoubleEndedIterator<Item = &ProfilePoint> + '_ {
        self.points.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest radius in the profile
    pub fn max_radius(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_contour(side: i32) -> Contour {
        let mut points = Vec::new();
        for x in 0..side {
            points.push(PixelPoint { x, y: 0 });
        }
        for y in 1..side {
            points.push(PixelPoint { x: side - 1, y });
        }
        for x in (0..side - 1).rev() {
            points.push(PixelPoint { x, y: side - 1 });
        }
        for y in (1..side - 1).rev() {
            points.push(PixelPoint { x: 0, y });
        }
        Contour::new(points)
    }

    #[test]
    fn test_contour_area() {
        let contour = square_contour(11);
        assert!((contour.area() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_set_drops_revisited_pixels() {
        let contour = Contour::new(vec![
            PixelPoint { x: 1, y: 1 },
            PixelPoint { x: 2, y: 1 },
            PixelPoint { x: 3, y: 1 },
            PixelPoint { x: 2, y: 1 },
        ]);
        let set = BoundaryPointSet::from_contour(contour);
        assert_eq!(set.len(), 3);
        assert_eq!(set.points()[2], PixelPoint { x: 3, y: 1 });
    }

    #[test]
    fn test_emitted_order_is_reversed() {
        let profile = OutputProfile::new(vec![
            ProfilePoint::new(0.1, 1.0),
            ProfilePoint::new(0.2, 0.5),
            ProfilePoint::new(0.3, 0.0),
        ]);
        let ys: Vec<f64> = profile.emitted().map(|p| p.y).collect();
        assert_eq!(ys, vec![0.0, 0.5, 1.0]);
        assert!((profile.max_radius() - 0.3).abs() < 1e-12);
    }
}
