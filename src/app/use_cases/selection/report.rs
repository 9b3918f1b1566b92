//! Text-Präsentation der Selektion für Overlay und Zwischenablage.

use crate::app::state::{PickRecord, SelectionState};
use std::fmt::Write;

/// Maximale Anzahl Einträge im On-Screen-Overlay.
/// Die Zwischenablage erhält immer alle Einträge.
pub const OVERLAY_MAX_ENTRIES: usize = 20;

/// Formatiert die Selektion für das On-Screen-Overlay.
///
/// Zeigt Modus, Anzahl, den rohen Oberflächenpunkt des letzten Picks und
/// bis zu [`OVERLAY_MAX_ENTRIES`] Einträge; darüber hinaus nur noch eine
/// Zeile mit der Anzahl der ausgelassenen Einträge.
pub fn overlay_text(selection: &SelectionState) -> String {
    let mut out = header(selection);

    if let Some(last) = selection.last_pick() {
        let p = last.picked_point;
        let _ = writeln!(out, "Picked point: ({:.5}, {:.5}, {:.5})", p.x, p.y, p.z);
    }

    for (index, record) in selection.picks.values().enumerate() {
        if index >= OVERLAY_MAX_ENTRIES {
            let omitted = selection.len() - OVERLAY_MAX_ENTRIES;
            let _ = writeln!(out, "... and {omitted} more");
            break;
        }
        out.push_str(&entry_line(index, record));
    }

    out
}

/// Formatiert die Selektion für die Zwischenablage: alle Einträge,
/// keine Kürzung.
pub fn clipboard_text(selection: &SelectionState) -> String {
    let mut out = header(selection);
    for (index, record) in selection.picks.values().enumerate() {
        out.push_str(&entry_line(index, record));
    }
    out
}

fn header(selection: &SelectionState) -> String {
    let mode = if selection.multi_select { "ON" } else { "OFF" };
    format!(
        "Multi-select: {mode}\nSelected: {count}\n",
        count = selection.len()
    )
}

fn entry_line(index: usize, record: &PickRecord) -> String {
    let v = record.vertex_pos;
    format!(
        "#{no:<3} id {id:<6} ({x:.5}, {y:.5}, {z:.5})\n",
        no = index + 1,
        id = record.vertex_id,
        x = v.x,
        y = v.y,
        z = v.z
    )
}
