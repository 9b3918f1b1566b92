//! Use-Case: Vertex-Selektion per Klick-Strahl (Nearest-Vertex-Pick).

use crate::app::state::{PickRecord, SelectionState};
use crate::app::AppState;
use crate::core::{surface_hit, Ray, TriMesh};
use glam::Vec3;

/// Löst den Pick-Strahl gegen die Mesh-Oberfläche auf und schaltet die
/// Selektion fort.
///
/// Verfehlt der Strahl das Mesh, bleibt die Selektion unverändert und die
/// Statuszeile meldet den Fehlschlag.
pub fn pick_vertex(state: &mut AppState, ray: Ray) {
    let Some(mesh) = state.mesh.clone() else {
        return;
    };

    let Some(hit) = surface_hit(&mesh, &ray) else {
        log::info!("Pick hat das Mesh verfehlt");
        state.ui.status_message = Some("Pick hat das Mesh verfehlt".to_string());
        return;
    };

    apply_pick(&mut state.selection, &mesh, hit.point);
    state.ui.status_message = Some(pick_status_line(&state.selection, &mesh));
}

/// Löst den nächsten Vertex zum Oberflächenpunkt auf und wendet die
/// Selektions-Zustandsmaschine an:
/// - Vertex bereits selektiert → Toggle-off (unabhängig vom Modus)
/// - Multi-Select aus → Selektion ersetzen
/// - Multi-Select an → akkumulieren
pub fn apply_pick(selection: &mut SelectionState, mesh: &TriMesh, picked_point: Vec3) {
    // Vertex-Menge ist beim Laden validiert, nearest kann nicht fehlschlagen
    let Some(nearest) = mesh.nearest_vertex(picked_point) else {
        return;
    };
    let Some(vertex_pos) = mesh.vertex(nearest.vertex_id) else {
        return;
    };

    if selection.picks.shift_remove(&nearest.vertex_id).is_some() {
        log::info!("Vertex {} deselektiert", nearest.vertex_id);
        return;
    }

    if !selection.multi_select {
        selection.picks.clear();
    }

    selection.picks.insert(
        nearest.vertex_id,
        PickRecord {
            vertex_id: nearest.vertex_id,
            picked_point,
            vertex_pos,
        },
    );
    log::info!(
        "Vertex {} selektiert (Distanz {:.4})",
        nearest.vertex_id,
        nearest.distance
    );
}

/// Schaltet den Multi-Select-Modus um, ohne die Selektion anzufassen.
pub fn toggle_multi_select(state: &mut AppState) {
    state.selection.multi_select = !state.selection.multi_select;
    let label = if state.selection.multi_select {
        "an"
    } else {
        "aus"
    };
    log::info!("Multi-Select {label}");
    state.ui.status_message = Some(format!("Multi-Select {label}"));
}

/// Leert die Selektion bedingungslos.
pub fn clear_selection(state: &mut AppState) {
    state.selection.picks.clear();
    state.ui.status_message = Some("Selektion aufgehoben".to_string());
}

fn pick_status_line(selection: &SelectionState, mesh: &TriMesh) -> String {
    match selection.last_pick() {
        Some(record) => format!(
            "Vertex {} / {} selektiert ({} insgesamt)",
            record.vertex_id,
            mesh.vertex_count().saturating_sub(1),
            selection.len()
        ),
        None => format!("{} Vertices selektiert", selection.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Würfel mit Kantenlänge 1 um den Ursprung, 8 Vertices.
    fn cube_mesh() -> TriMesh {
        let vertices = vec![
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, -0.5),
            Vec3::new(0.5, 0.5, -0.5),
            Vec3::new(-0.5, 0.5, -0.5),
            Vec3::new(-0.5, -0.5, 0.5),
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(-0.5, 0.5, 0.5),
        ];
        let faces = vec![
            [0, 1, 2],
            [0, 2, 3],
            [4, 6, 5],
            [4, 7, 6],
            [0, 4, 5],
            [0, 5, 1],
            [1, 5, 6],
            [1, 6, 2],
            [2, 6, 7],
            [2, 7, 3],
            [3, 7, 4],
            [3, 4, 0],
        ];
        TriMesh::new("cube", vertices, faces)
    }

    /// Oberflächenpunkt nahe dem angegebenen Vertex.
    fn near_vertex(mesh: &TriMesh, vertex_id: u32) -> Vec3 {
        mesh.vertex(vertex_id).expect("Vertex vorhanden") * 0.95
    }

    #[test]
    fn single_select_replaces_previous_selection() {
        let mesh = cube_mesh();
        let mut selection = SelectionState::new();

        apply_pick(&mut selection, &mesh, near_vertex(&mesh, 1));
        apply_pick(&mut selection, &mesh, near_vertex(&mesh, 6));

        assert_eq!(selection.selected_ids(), vec![6]);
    }

    #[test]
    fn multi_select_accumulates_in_pick_order() {
        let mesh = cube_mesh();
        let mut selection = SelectionState::new();
        selection.multi_select = true;

        apply_pick(&mut selection, &mesh, near_vertex(&mesh, 3));
        apply_pick(&mut selection, &mesh, near_vertex(&mesh, 0));
        apply_pick(&mut selection, &mesh, near_vertex(&mesh, 6));

        assert_eq!(selection.selected_ids(), vec![3, 0, 6]);
    }

    #[test]
    fn picking_selected_vertex_toggles_it_off_in_both_modes() {
        let mesh = cube_mesh();

        for multi_select in [false, true] {
            let mut selection = SelectionState::new();
            selection.multi_select = multi_select;

            apply_pick(&mut selection, &mesh, near_vertex(&mesh, 2));
            apply_pick(&mut selection, &mesh, near_vertex(&mesh, 2));

            assert!(selection.is_empty(), "multi_select = {multi_select}");
        }
    }

    #[test]
    fn record_keeps_raw_picked_point_and_resolved_position() {
        let mesh = cube_mesh();
        let mut selection = SelectionState::new();

        let picked = near_vertex(&mesh, 6);
        apply_pick(&mut selection, &mesh, picked);

        let record = selection.picks.get(&6).expect("Pick erwartet");
        assert_eq!(record.picked_point, picked);
        assert_eq!(record.vertex_pos, Vec3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn toggling_mode_never_changes_membership() {
        let mesh = cube_mesh();
        let mut state = AppState::new();
        state.mesh = Some(std::sync::Arc::new(mesh));

        let mesh = state.mesh.clone().unwrap();
        apply_pick(&mut state.selection, &mesh, near_vertex(&mesh, 4));
        let before = state.selection.selected_ids();

        toggle_multi_select(&mut state);
        assert!(state.selection.multi_select);
        assert_eq!(state.selection.selected_ids(), before);

        toggle_multi_select(&mut state);
        assert!(!state.selection.multi_select);
        assert_eq!(state.selection.selected_ids(), before);
    }

    #[test]
    fn scenario_pick_toggle_and_clear() {
        // Szenario: Pick 3 → [3], Multi an, Pick 5 → [3,5],
        // Pick 3 erneut → [5], Clear → []
        let mesh = cube_mesh();
        let mut state = AppState::new();
        state.mesh = Some(std::sync::Arc::new(mesh));
        let mesh = state.mesh.clone().unwrap();

        apply_pick(&mut state.selection, &mesh, near_vertex(&mesh, 3));
        assert_eq!(state.selection.selected_ids(), vec![3]);

        toggle_multi_select(&mut state);
        apply_pick(&mut state.selection, &mesh, near_vertex(&mesh, 5));
        assert_eq!(state.selection.selected_ids(), vec![3, 5]);

        apply_pick(&mut state.selection, &mesh, near_vertex(&mesh, 3));
        assert_eq!(state.selection.selected_ids(), vec![5]);

        clear_selection(&mut state);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn pick_miss_leaves_selection_unchanged() {
        let mut state = AppState::new();
        state.mesh = Some(std::sync::Arc::new(cube_mesh()));
        let mesh = state.mesh.clone().unwrap();

        apply_pick(&mut state.selection, &mesh, near_vertex(&mesh, 1));

        // Strahl weit am Würfel vorbei
        pick_vertex(
            &mut state,
            Ray {
                origin: Vec3::new(50.0, 50.0, 50.0),
                direction: Vec3::new(0.0, 1.0, 0.0),
            },
        );

        assert_eq!(state.selection.selected_ids(), vec![1]);
        assert_eq!(
            state.ui.status_message.as_deref(),
            Some("Pick hat das Mesh verfehlt")
        );
    }

    #[test]
    fn pick_ray_through_surface_resolves_nearest_vertex() {
        let mut state = AppState::new();
        state.mesh = Some(std::sync::Arc::new(cube_mesh()));

        // Strahl von vorne auf die +Z-Fläche, nahe der Ecke (0.5, 0.5, 0.5);
        // leicht asymmetrisch, damit der Treffer nicht auf der Diagonale liegt
        pick_vertex(
            &mut state,
            Ray {
                origin: Vec3::new(0.4, 0.35, 5.0),
                direction: Vec3::new(0.0, 0.0, -1.0),
            },
        );

        assert_eq!(state.selection.selected_ids(), vec![6]);
    }
}
