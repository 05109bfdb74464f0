use glam::{Vec3, Vec4};

use crate::config::{
    LIGHT_AMBIENT, LIGHT_DIFFUSE, LIGHT_POSITION, LIGHT_SPECULAR, MATERIAL_SHININESS,
    MATERIAL_SPECULAR, SCENE_AMBIENT, SURFACE_COLOR,
};

/// Single point light plus material, uploaded once at startup.
///
/// Every colour is padded to a `vec4` so the layout matches WGSL uniform rules.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    pub light_position: [f32; 4],
    pub scene_ambient: [f32; 4],
    pub light_ambient: [f32; 4],
    pub light_diffuse: [f32; 4],
    pub light_specular: [f32; 4],
    pub material_color: [f32; 4],
    pub material_specular: [f32; 4],
    pub shininess: f32,
    pub _padding: [f32; 3],
}

fn rgba(c: Vec3) -> [f32; 4] {
    c.extend(1.0).to_array()
}

impl Default for LightingUniform {
    fn default() -> Self {
        Self::new(LIGHT_POSITION, SURFACE_COLOR)
    }
}

impl LightingUniform {
    pub fn new(light_position: Vec4, material_color: Vec3) -> Self {
        Self {
            light_position: light_position.to_array(),
            scene_ambient: rgba(SCENE_AMBIENT),
            light_ambient: rgba(LIGHT_AMBIENT),
            light_diffuse: rgba(LIGHT_DIFFUSE),
            light_specular: rgba(LIGHT_SPECULAR),
            material_color: rgba(material_color),
            material_specular: rgba(MATERIAL_SPECULAR),
            shininess: MATERIAL_SHININESS,
            _padding: [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_size_is_a_multiple_of_sixteen() {
        assert_eq!(std::mem::size_of::<LightingUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<LightingUniform>(), 128);
    }

    #[test]
    fn default_light_sits_at_six_six_six() {
        let l = LightingUniform::default();
        assert_eq!(l.light_position, [6.0, 6.0, 6.0, 1.0]);
        assert_eq!(l.shininess, 64.0);
        assert_eq!(l.material_color, [0.4, 0.75, 1.0, 1.0]);
    }
}
