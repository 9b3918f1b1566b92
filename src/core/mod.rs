//! Kern-Datenmodell: Mesh, Spatial-Index, Kamera und Picking.

pub mod camera;
pub mod mesh;
pub mod picking;
pub mod spatial;

pub use camera::OrbitCamera;
pub use mesh::TriMesh;
pub use picking::{surface_hit, Ray, SurfaceHit};
pub use spatial::{SpatialIndex, SpatialMatch};
