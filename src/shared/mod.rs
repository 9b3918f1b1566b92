//! Geteilte Verträge zwischen App-, UI- und Render-Schicht.

pub mod options;
pub mod render_scene;

pub use options::ViewerOptions;
pub use render_scene::RenderScene;
