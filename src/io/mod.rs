//! Mesh-I/O: Laden von Wavefront-OBJ-Dateien.
//! Alle Dateisystem-Operationen für Geometrie sind hier zentralisiert.

use crate::core::TriMesh;
use anyhow::{bail, Context};
use glam::Vec3;
use std::path::Path;

/// Lädt ein Dreiecksmesh aus einer OBJ-Datei.
///
/// Mehrere Modelle in einer Datei werden zu einem Mesh zusammengeführt,
/// die Vertex-Reihenfolge der Datei bleibt erhalten (IDs = Dateireihenfolge).
/// Meshes ohne Vertices werden abgelehnt.
pub fn load_mesh(path: &Path) -> anyhow::Result<TriMesh> {
    if !path.exists() {
        bail!("OBJ-Datei nicht gefunden: {}", path.display());
    }

    // single_index bleibt aus: damit entsprechen `positions` den `v`-Zeilen
    // der Datei und `indices` den Positions-Indizes der Faces. Die Vertex-IDs
    // der Anwendung sind dadurch stabil gegenüber Normalen/Texturkoordinaten.
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            ..Default::default()
        },
    )
    .with_context(|| format!("OBJ-Datei konnte nicht geladen werden: {}", path.display()))?;

    let mut vertices: Vec<Vec3> = Vec::new();
    let mut faces: Vec<[u32; 3]> = Vec::new();

    for model in &models {
        log::debug!("OBJ-Modell '{}' wird übernommen", model.name);
        let vertex_offset = vertices.len() as u32;
        let obj_mesh = &model.mesh;

        for chunk in obj_mesh.positions.chunks_exact(3) {
            vertices.push(Vec3::new(chunk[0], chunk[1], chunk[2]));
        }

        for chunk in obj_mesh.indices.chunks_exact(3) {
            faces.push([
                chunk[0] + vertex_offset,
                chunk[1] + vertex_offset,
                chunk[2] + vertex_offset,
            ]);
        }
    }

    if vertices.is_empty() {
        bail!("Mesh enthält keine Vertices: {}", path.display());
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("mesh")
        .to_string();

    let mesh = TriMesh::new(name, vertices, faces);
    log::info!(
        "Mesh geladen: {} Vertices, {} Faces aus {} Modellen ({})",
        mesh.vertex_count(),
        mesh.face_count(),
        models.len(),
        path.display()
    );

    Ok(mesh)
}
