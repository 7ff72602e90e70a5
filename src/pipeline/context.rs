/// Per-frame shared state.
///
/// Everything the capture stage uploads as scene uniforms lives here, built
/// fresh by the caller each frame. Nothing in the pipeline holds onto a
/// context across frames.

use glam::{Mat4, Vec3};

/// Point light parameters, uploaded under the `pointLight.*` uniforms
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    /// World-space position
    pub position: Vec3,
    /// Ambient color contribution
    pub ambient: Vec3,
    /// Diffuse color contribution
    pub diffuse: Vec3,
    /// Specular color contribution
    pub specular: Vec3,
    /// Constant attenuation term
    pub constant: f32,
    /// Linear attenuation term
    pub linear: f32,
    /// Quadratic attenuation term
    pub quadratic: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 0.0),
            ambient: Vec3::splat(0.05),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::ONE,
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }
}

/// Camera-attached spotlight toggle and cone, uploaded under `spotLight.*`
#[derive(Debug, Clone, Copy)]
pub struct SpotLight {
    /// Whether the spotlight contributes this frame
    pub enabled: bool,
    /// Cosine of the inner cone angle
    pub cut_off: f32,
    /// Cosine of the outer cone angle
    pub outer_cut_off: f32,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            enabled: false,
            cut_off: 12.5_f32.to_radians().cos(),
            outer_cut_off: 15.0_f32.to_radians().cos(),
        }
    }
}

/// Everything the capture stage needs to shade one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// World-to-view transform
    pub view: Mat4,
    /// View-to-clip transform
    pub projection: Mat4,
    /// World-space camera position
    pub camera_position: Vec3,
    /// World-space camera forward direction
    pub camera_front: Vec3,
    /// Color the capture target is cleared to
    pub clear_color: [f32; 4],
    /// Luminance above which a fragment enters the bright output
    pub bright_threshold: f32,
    /// Scene point light
    pub point_light: PointLight,
    /// Camera spotlight
    pub spot_light: SpotLight,
}

impl Default for FrameContext {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            camera_position: Vec3::ZERO,
            camera_front: Vec3::NEG_Z,
            clear_color: [0.05, 0.05, 0.05, 1.0],
            bright_threshold: 1.0,
            point_light: PointLight::default(),
            spot_light: SpotLight::default(),
        }
    }
}
