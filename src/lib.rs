//! Mesh Vertex Picker Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod io;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, PickRecord, SelectionState, UiState, ViewState,
};
pub use core::{surface_hit, OrbitCamera, Ray, SpatialIndex, SpatialMatch, SurfaceHit, TriMesh};
pub use io::load_mesh;
pub use shared::{RenderScene, ViewerOptions};
