//! Spatial-Index (KD-Tree) für schnelle Vertex-Abfragen.

use glam::Vec3;
use kiddo::{KdTree, SquaredEuclidean};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// Index des gefundenen Vertex
    pub vertex_id: u32,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über allen Vertices eines Meshes.
///
/// Vertex-IDs sind die Indizes der Eingabereihenfolge, daher braucht der
/// Index keine separate ID-Tabelle.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 3>,
    len: usize,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 3]>::new()).into(),
            len: 0,
        }
    }

    /// Baut einen neuen Index aus den übergebenen Vertex-Positionen.
    pub fn from_vertices(vertices: &[Vec3]) -> Self {
        let entries: Vec<[f64; 3]> = vertices
            .iter()
            .map(|v| [v.x as f64, v.y as f64, v.z as f64])
            .collect();

        let tree: KdTree<f64, 3> = (&entries).into();

        Self {
            tree,
            len: vertices.len(),
        }
    }

    /// Gibt die Anzahl indexierter Vertices zurück.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Gibt `true` zurück, wenn keine Vertices im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Findet den nächsten Vertex zur gegebenen Weltposition.
    pub fn nearest(&self, query: Vec3) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64, query.z as f64]);

        Some(SpatialMatch {
            vertex_id: result.item as u32,
            distance: (result.distance as f32).sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vertices() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(4.0, 3.0, 0.0),
            Vec3::new(0.0, 0.0, 8.0),
        ]
    }

    #[test]
    fn nearest_returns_expected_vertex() {
        let index = SpatialIndex::from_vertices(&sample_vertices());
        let nearest = index
            .nearest(Vec3::new(3.9, 2.9, 0.1))
            .expect("Treffer erwartet");

        assert_eq!(nearest.vertex_id, 2);
        assert!(nearest.distance < 0.2);
    }

    #[test]
    fn nearest_uses_all_three_axes() {
        let index = SpatialIndex::from_vertices(&sample_vertices());
        let nearest = index
            .nearest(Vec3::new(0.0, 0.0, 7.0))
            .expect("Treffer erwartet");

        assert_eq!(nearest.vertex_id, 3);
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = SpatialIndex::empty();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.nearest(Vec3::new(0.0, 0.0, 0.0)).is_none());
    }
}
