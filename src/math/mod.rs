pub mod mesh;
pub mod normals;
pub mod surface;

pub use mesh::{MeshRenderer, ShadingMode};
pub use surface::{Domain, Mesh, generate};
