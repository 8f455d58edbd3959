use glam::Vec3;

use crate::deform::height_at;
use crate::params::Parameters;
use crate::types::Vertex;

/// Flat rectangular grid lying in the XY plane, displaced along Z
///
/// Vertex order and winding follow the usual plane-geometry convention:
/// rows run from +Y down to -Y, columns from -X to +X, and each cell is
/// split into the triangles (a, b, d) and (b, c, d).
#[derive(Debug, Clone)]
pub struct PlaneMesh {
    width: f32,
    height: f32,
    segments_x: u32,
    segments_y: u32,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
    dirty: bool,
}

impl PlaneMesh {
    /// Build a plane of `width` x `height` world units split into
    /// `segments_x` x `segments_y` cells. Zero segment counts are raised to 1.
    pub fn new(width: f32, height: f32, segments_x: u32, segments_y: u32) -> Self {
        let segments_x = segments_x.max(1);
        let segments_y = segments_y.max(1);
        let columns = segments_x + 1;
        let rows = segments_y + 1;

        let half_width = width * 0.5;
        let half_height = height * 0.5;
        let cell_width = width / segments_x as f32;
        let cell_height = height / segments_y as f32;

        let positions: Vec<Vec3> = (0..rows)
            .flat_map(|iy| {
                let y = iy as f32 * cell_height - half_height;
                (0..columns).map(move |ix| {
                    let x = ix as f32 * cell_width - half_width;
                    Vec3::new(x, -y, 0.0)
                })
            })
            .collect();

        let indices = (0..segments_y)
            .flat_map(|iy| {
                (0..segments_x).flat_map(move |ix| {
                    let a = ix + columns * iy;
                    let b = ix + columns * (iy + 1);
                    let c = (ix + 1) + columns * (iy + 1);
                    let d = (ix + 1) + columns * iy;
                    [a, b, d, b, c, d]
                })
            })
            .collect();

        let normals = vec![Vec3::Z; positions.len()];

        Self {
            width,
            height,
            segments_x,
            segments_y,
            positions,
            normals,
            indices,
            dirty: true,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn segments(&self) -> (u32, u32) {
        (self.segments_x, self.segments_y)
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Rewrite every vertex height for `time`, keeping x and y.
    /// Marks the geometry dirty.
    pub fn deform(&mut self, time: f64, params: &Parameters) {
        for p in &mut self.positions {
            p.z = height_at(p.x, p.y, time, params);
        }
        self.dirty = true;
    }

    /// Smooth per-vertex normals: every face adds its unnormalised cross
    /// product (twice its area) to its three corners, then each sum is
    /// normalised.
    pub fn compute_vertex_normals(&mut self) {
        self.normals.iter_mut().for_each(|n| *n = Vec3::ZERO);

        for tri in self.indices.chunks_exact(3) {
            let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let (a, b, c) = (self.positions[ia], self.positions[ib], self.positions[ic]);
            let face = (c - b).cross(a - b);
            self.normals[ia] += face;
            self.normals[ib] += face;
            self.normals[ic] += face;
        }

        for n in &mut self.normals {
            *n = n.try_normalize().unwrap_or(Vec3::Z);
        }
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning whether it was set
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Interleaved GPU vertices
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(p, n)| Vertex::new(p.to_array(), n.to_array()))
            .collect()
    }
}
