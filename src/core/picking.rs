//! Strahl-basiertes Picking gegen die Mesh-Oberfläche.

use super::TriMesh;
use glam::Vec3;

/// Pick-Strahl in Welt-Koordinaten.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ursprung des Strahls
    pub origin: Vec3,
    /// Normalisierte Richtung
    pub direction: Vec3,
}

/// Treffer eines Strahls auf der Mesh-Oberfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Getroffener Oberflächenpunkt in Welt-Koordinaten
    pub point: Vec3,
    /// Distanz entlang des Strahls
    pub t: f32,
}

/// Numerische Toleranz für den Determinanten-Test.
const EPSILON: f32 = 1e-7;

/// Möller–Trumbore-Schnitt von Strahl und Dreieck.
/// Gibt die Strahl-Distanz `t` zurück, falls der Schnittpunkt vor dem
/// Ursprung liegt. Backfaces zählen als Treffer (das Mesh ist nicht
/// zwingend geschlossen oder konsistent orientiert).
fn ray_triangle(ray: &Ray, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    let edge_ab = b - a;
    let edge_ac = c - a;

    let p = ray.direction.cross(edge_ac);
    let det = edge_ab.dot(p);
    if det.abs() < EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let to_origin = ray.origin - a;
    let u = to_origin.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = to_origin.cross(edge_ab);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge_ac.dot(q) * inv_det;
    (t > EPSILON).then_some(t)
}

/// Findet den vordersten Schnittpunkt des Strahls mit der Mesh-Oberfläche.
///
/// Lineare Suche über alle Faces — bei Picker-typischen Meshgrößen und
/// Klick-Frequenz völlig ausreichend.
pub fn surface_hit(mesh: &TriMesh, ray: &Ray) -> Option<SurfaceHit> {
    let vertices = mesh.vertices();
    let mut best: Option<SurfaceHit> = None;

    for face in mesh.faces() {
        let [a, b, c] = face.map(|i| vertices[i as usize]);
        if let Some(t) = ray_triangle(ray, a, b, c) {
            if best.map_or(true, |hit| t < hit.t) {
                best = Some(SurfaceHit {
                    point: ray.origin + ray.direction * t,
                    t,
                });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_quad() -> TriMesh {
        TriMesh::new(
            "quad",
            vec![
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(-1.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        )
    }

    #[test]
    fn ray_hits_quad_front_on() {
        let mesh = unit_quad();
        let ray = Ray {
            origin: Vec3::new(0.25, 0.25, 5.0),
            direction: Vec3::new(0.0, 0.0, -1.0),
        };

        let hit = surface_hit(&mesh, &ray).expect("Treffer erwartet");
        assert_relative_eq!(hit.t, 5.0, epsilon = 1e-5);
        assert_relative_eq!(hit.point.x, 0.25, epsilon = 1e-5);
        assert_relative_eq!(hit.point.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn ray_from_behind_also_hits() {
        let mesh = unit_quad();
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, -3.0),
            direction: Vec3::new(0.0, 0.0, 1.0),
        };

        assert!(surface_hit(&mesh, &ray).is_some());
    }

    #[test]
    fn ray_beside_quad_misses() {
        let mesh = unit_quad();
        let ray = Ray {
            origin: Vec3::new(5.0, 5.0, 5.0),
            direction: Vec3::new(0.0, 0.0, -1.0),
        };

        assert!(surface_hit(&mesh, &ray).is_none());
    }

    #[test]
    fn hit_behind_origin_is_ignored() {
        let mesh = unit_quad();
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, -1.0),
            direction: Vec3::new(0.0, 0.0, -1.0),
        };

        assert!(surface_hit(&mesh, &ray).is_none());
    }

    #[test]
    fn nearest_of_two_layers_wins() {
        // Zwei parallele Quads, der Strahl muss das vordere treffen
        let mesh = TriMesh::new(
            "layers",
            vec![
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(-1.0, -1.0, 2.0),
                Vec3::new(1.0, -1.0, 2.0),
                Vec3::new(1.0, 1.0, 2.0),
            ],
            vec![[0, 1, 2], [3, 4, 5]],
        );

        let ray = Ray {
            origin: Vec3::new(0.5, -0.5, 10.0),
            direction: Vec3::new(0.0, 0.0, -1.0),
        };

        let hit = surface_hit(&mesh, &ray).expect("Treffer erwartet");
        assert_relative_eq!(hit.point.z, 2.0, epsilon = 1e-5);
    }
}
