use glam::{Mat4, Vec3};

use crate::camera::PerspectiveCamera;
use crate::math::Rgb;
use crate::mesh::PlaneMesh;
use crate::types::SceneUniform;

pub const PLANE_SIZE: f32 = 10.0;
pub const PLANE_SEGMENTS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: Rgb::WHITE,
            intensity: 0.5,
        }
    }
}

/// Parallel light shining from `position` towards `target`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Rgb,
    pub intensity: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl DirectionalLight {
    /// Unit vector from a lit surface towards the light
    pub fn direction(&self) -> Vec3 {
        (self.position - self.target)
            .try_normalize()
            .unwrap_or(Vec3::Y)
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Rgb::WHITE,
            intensity: 1.0,
            position: Vec3::new(10.0, 10.0, 10.0),
            target: Vec3::ZERO,
        }
    }
}

/// Lit, double-sided surface material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub double_sided: bool,
}

/// What the embedding shell may configure about the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub color: Rgb,
    pub plane_size: f32,
    pub segments: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            color: Rgb::LAVENDER,
            plane_size: PLANE_SIZE,
            segments: PLANE_SEGMENTS,
        }
    }
}

/// One camera, two lights, one mesh
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: PerspectiveCamera,
    pub ambient: AmbientLight,
    pub sun: DirectionalLight,
    pub mesh: PlaneMesh,
    pub material: Material,
    /// Lays the XY plane flat onto XZ
    pub model: Mat4,
}

impl Scene {
    pub fn new(config: &SceneConfig, aspect: f32) -> Self {
        Self {
            camera: PerspectiveCamera::new(aspect),
            ambient: AmbientLight::default(),
            sun: DirectionalLight::default(),
            mesh: PlaneMesh::new(
                config.plane_size,
                config.plane_size,
                config.segments,
                config.segments,
            ),
            material: Material {
                color: config.color,
                double_sided: true,
            },
            model: Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2),
        }
    }

    pub fn set_base_color(&mut self, color: Rgb) {
        self.material.color = color;
    }

    /// Camera, lights and material packed for the shader
    pub fn uniform(&self) -> SceneUniform {
        let [r, g, b] = self.material.color.to_linear();
        let ambient = scaled(self.ambient.color, self.ambient.intensity);
        let sun = scaled(self.sun.color, self.sun.intensity);
        let dir = self.sun.direction();

        SceneUniform {
            view_proj: self.camera.view_projection().to_cols_array_2d(),
            model: self.model.to_cols_array_2d(),
            base_color: [r, g, b, 1.0],
            ambient: [ambient[0], ambient[1], ambient[2], 0.0],
            light_direction: [dir.x, dir.y, dir.z, 0.0],
            light_color: [sun[0], sun[1], sun[2], 0.0],
        }
    }
}

fn scaled(color: Rgb, intensity: f32) -> [f32; 3] {
    color.to_linear().map(|c| c * intensity)
}
