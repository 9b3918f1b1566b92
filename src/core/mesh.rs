//! Die zentrale Mesh-Datenstruktur mit Vertices, Faces und Spatial-Index.

use super::{SpatialIndex, SpatialMatch};
use glam::Vec3;

/// Dreiecksmesh, unveränderlich nach dem Laden.
///
/// Vertex-IDs sind die Indizes in `vertices`; die Reihenfolge entspricht
/// der Quelldatei und bleibt über die gesamte Laufzeit stabil.
#[derive(Debug, Clone)]
pub struct TriMesh {
    /// Alle Vertex-Positionen in Ladereihenfolge
    vertices: Vec<Vec3>,
    /// Dreiecks-Faces als Indizes in `vertices`
    faces: Vec<[u32; 3]>,
    /// Anzeigename (Dateiname der Quelle)
    pub name: String,
    /// Persistenter Spatial-Index fuer schnelle Vertex-Abfragen
    spatial_index: SpatialIndex,
}

impl TriMesh {
    /// Erstellt ein Mesh aus Vertices und Faces und baut den Spatial-Index auf.
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>, faces: Vec<[u32; 3]>) -> Self {
        let spatial_index = SpatialIndex::from_vertices(&vertices);
        Self {
            vertices,
            faces,
            name: name.into(),
            spatial_index,
        }
    }

    /// Gibt die Anzahl der Vertices zurück.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Gibt die Anzahl der Faces zurück.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Read-only Sicht auf alle Vertex-Positionen.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Read-only Sicht auf alle Faces.
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Gibt die Position eines Vertex zurück.
    pub fn vertex(&self, vertex_id: u32) -> Option<Vec3> {
        self.vertices.get(vertex_id as usize).copied()
    }

    /// Findet den Vertex mit minimaler euklidischer Distanz zum Punkt.
    ///
    /// Es gibt bewusst keinen Distanz-Schwellwert: solange das Mesh
    /// mindestens einen Vertex hat, liefert die Abfrage immer ein Ergebnis.
    pub fn nearest_vertex(&self, point: Vec3) -> Option<SpatialMatch> {
        self.spatial_index.nearest(point)
    }

    /// Axis-aligned Bounding-Box über alle Vertices.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;
        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }
        Some((min, max))
    }

    /// Mittelpunkt der Bounding-Box (Kamera-Ziel nach dem Laden).
    pub fn center(&self) -> Vec3 {
        self.bounds()
            .map(|(min, max)| (min + max) * 0.5)
            .unwrap_or(Vec3::ZERO)
    }

    /// Eindeutige Kantenliste für das Wireframe-Rendering.
    ///
    /// Kanten werden mit sortierten Endpunkten dedupliziert, damit jede
    /// geteilte Dreieckskante nur einmal gezeichnet wird.
    pub fn edges(&self) -> Vec<[u32; 2]> {
        let mut edges: Vec<[u32; 2]> = Vec::with_capacity(self.faces.len() * 3);
        for face in &self.faces {
            for (a, b) in [(face[0], face[1]), (face[1], face[2]), (face[2], face[0])] {
                edges.push(if a < b { [a, b] } else { [b, a] });
            }
        }
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    /// Glatte Vertex-Normalen als flächengewichtetes Mittel der Face-Normalen.
    pub fn vertex_normals(&self) -> Vec<Vec3> {
        let mut normals = vec![Vec3::ZERO; self.vertices.len()];

        for face in &self.faces {
            let [a, b, c] = face.map(|i| self.vertices[i as usize]);
            // Kreuzprodukt ist flächenproportional — gewichtet große Dreiecke stärker
            let face_normal = (b - a).cross(c - a);
            for &index in face {
                normals[index as usize] += face_normal;
            }
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }
        normals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Einfache quadratische Platte aus zwei Dreiecken in der XY-Ebene.
    fn quad_mesh() -> TriMesh {
        TriMesh::new(
            "quad",
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        )
    }

    #[test]
    fn nearest_vertex_has_no_distance_threshold() {
        let mesh = quad_mesh();
        let hit = mesh
            .nearest_vertex(Vec3::new(100.0, 100.0, 100.0))
            .expect("Treffer erwartet");

        // Weit entfernte Abfragen liefern trotzdem den nächsten Vertex
        assert_eq!(hit.vertex_id, 2);
    }

    #[test]
    fn bounds_and_center() {
        let mesh = quad_mesh();
        let (min, max) = mesh.bounds().expect("Bounds erwartet");

        assert_eq!(min, Vec3::ZERO);
        assert_eq!(max, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(mesh.center(), Vec3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn edges_are_deduplicated() {
        let mesh = quad_mesh();
        let edges = mesh.edges();

        // 2 Dreiecke teilen sich die Diagonale 0-2: 6 Kanten minus 1 Duplikat
        assert_eq!(edges.len(), 5);
        assert!(edges.contains(&[0, 2]));
    }

    #[test]
    fn vertex_normals_point_along_plus_z() {
        let mesh = quad_mesh();
        let normals = mesh.vertex_normals();

        assert_eq!(normals.len(), 4);
        for normal in normals {
            assert_relative_eq!(normal.z, 1.0, epsilon = 1e-6);
        }
    }
}
