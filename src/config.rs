use glam::{Vec2, Vec3, Vec4};

use crate::math::Domain;
use crate::math::mesh::ShadingMode;

pub const WINDOW_TITLE: &str = "Enneper Minimal Surface";
pub const WINDOW_WIDTH: u32 = 1024;
pub const WINDOW_HEIGHT: u32 = 768;

pub const GRID_ROWS: usize = 100;
pub const GRID_COLS: usize = 100;
pub const DOMAIN: Domain = Domain {
    u_min: -2.0,
    u_max: 2.0,
    v_min: -2.0,
    v_max: 2.0,
};

pub const INITIAL_PITCH: f32 = 20.0;
pub const INITIAL_YAW: f32 = 30.0;
pub const INITIAL_DISTANCE: f32 = 6.0;
pub const INITIAL_PAN: Vec2 = Vec2::ZERO;

/// Degrees of orbit per pixel of left-drag.
pub const ORBIT_SENSITIVITY: f32 = 0.5;
pub const PITCH_LIMIT: f32 = 90.0;
/// Pan per pixel of middle-drag, as a fraction of the camera distance.
pub const PAN_SENSITIVITY: f32 = 0.015;
/// Pan per key press, as a fraction of the camera distance.
pub const KEY_MOVE_FACTOR: f32 = 0.05;
pub const ZOOM_STEP: f32 = 0.3;
pub const MIN_DISTANCE: f32 = 1.0;

pub const FOV_Y_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

// Light position is in eye space.
pub const LIGHT_POSITION: Vec4 = Vec4::new(6.0, 6.0, 6.0, 1.0);
pub const LIGHT_AMBIENT: Vec3 = Vec3::splat(0.2);
pub const LIGHT_DIFFUSE: Vec3 = Vec3::splat(0.8);
pub const LIGHT_SPECULAR: Vec3 = Vec3::splat(1.0);
pub const SCENE_AMBIENT: Vec3 = Vec3::splat(0.2);
pub const SURFACE_COLOR: Vec3 = Vec3::new(0.4, 0.75, 1.0);
pub const MATERIAL_SPECULAR: Vec3 = Vec3::splat(1.0);
pub const MATERIAL_SHININESS: f32 = 64.0;

/// The subset of settings the control panel may change at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerConfig {
    pub rows: usize,
    pub cols: usize,
    pub domain: Domain,
    pub shading: ShadingMode,
    pub vsync: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            domain: DOMAIN,
            shading: ShadingMode::Flat,
            vsync: true,
        }
    }
}
