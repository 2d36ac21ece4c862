//! Lathe mesh generation: sweep a profile around the vertical axis.

use std::f32::consts::TAU;

use strum::Display;
use tracing::debug;

use crate::{
    error::{ProfileError, Result},
    types::ProfilePoint,
};

/// Which texture a vertex samples from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Surface {
    Body,
    Base,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub surface: Surface,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevolveOptions {
    /// Angular steps over a full turn
    pub segments: u32,
    /// Trailing profile rows tagged as the base
    pub base_rows: usize,
}

impl Default for RevolveOptions {
    fn default() -> Self {
        Self {
            segments: 360,
            base_rows: 3,
        }
    }
}

/// Indexed triangle mesh of a surface of revolution
#[derive(Debug, Clone, PartialEq)]
pub struct RevolvedMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl RevolvedMesh {
    /// Revolve `profile` (radius `x`, height `y`) given in emission order.
    ///
    /// Rings are laid out ring-major: vertex `i * rows + j` is profile row `j`
    /// at angular step `i`. The seam ring is repeated so `u` reaches 1.
    pub fn from_profile(profile: &[ProfilePoint], options: &RevolveOptions) -> Result<Self> {
        if options.segments < 3 {
            return Err(ProfileError::InvalidConfig(format!(
                "revolve needs at least 3 segments, got {}",
                options.segments
            )));
        }
        if profile.len() < 2 {
            return Err(ProfileError::DegenerateProfile(format!(
                "revolve needs at least 2 profile rows, got {}",
                profile.len()
            )));
        }

        let max_y = profile.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        if max_y.is_nan() || max_y <= 0.0 {
            return Err(ProfileError::DegenerateProfile(format!(
                "profile height must be positive, got {max_y}"
            )));
        }

        let rows = profile.len();
        let segments = options.segments as usize;
        let base_start = rows.saturating_sub(options.base_rows);

        let mut vertices = Vec::with_capacity((segments + 1) * rows);
        for i in 0..=segments {
            let u = i as f32 / segments as f32;
            let (sin, cos) = (u * TAU).sin_cos();

            for (j, p) in profile.iter().enumerate() {
                let r = p.x as f32;
                let surface = if j >= base_start { Surface::Base } else { Surface::Body };
                vertices.push(MeshVertex {
                    position: [r * cos, p.y as f32, r * sin],
                    uv: [u, (p.y / max_y) as f32],
                    surface,
                });
            }
        }

        let mut indices = Vec::with_capacity(segments * (rows - 1) * 6);
        for i in 0..segments {
            for j in 0..rows - 1 {
                let current = (i * rows + j) as u32;
                let next = ((i + 1) * rows + j) as u32;

                indices.extend_from_slice(&[current, next, current + 1]);
                indices.extend_from_slice(&[next, next + 1, current + 1]);
            }
        }

        debug!(
            rows,
            segments,
            vertices = vertices.len(),
            triangles = indices.len() / 3,
            "revolved profile"
        );
        Ok(Self { vertices, indices })
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
