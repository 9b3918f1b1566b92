use glam::Vec3;
use indexmap::IndexMap;

/// Ein aufgezeichneter Pick: Vertex-ID plus Roh- und aufgelöste Koordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickRecord {
    /// Index des Vertex im Mesh
    pub vertex_id: u32,
    /// Roher Oberflächenpunkt zum Klickzeitpunkt
    pub picked_point: Vec3,
    /// Aufgelöste Vertex-Position
    pub vertex_pos: Vec3,
}

/// Auswahlbezogener Anwendungszustand.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Aktuell selektierte Picks, Einfüge-Reihenfolge = Anzeige-Reihenfolge
    /// (IndexMap für deterministische Selektionsreihenfolge)
    pub picks: IndexMap<u32, PickRecord>,
    /// Multi-Select-Modus: neue Picks akkumulieren statt zu ersetzen
    pub multi_select: bool,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand (Multi-Select aus).
    pub fn new() -> Self {
        Self {
            picks: IndexMap::new(),
            multi_select: false,
        }
    }

    /// Gibt die Anzahl selektierter Vertices zurück.
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Prüft, ob ein Vertex aktuell selektiert ist.
    pub fn contains(&self, vertex_id: u32) -> bool {
        self.picks.contains_key(&vertex_id)
    }

    /// IDs der selektierten Vertices in Anzeige-Reihenfolge.
    pub fn selected_ids(&self) -> Vec<u32> {
        self.picks.keys().copied().collect()
    }

    /// Zuletzt aufgezeichneter Pick (für die Overlay-Kopfzeile).
    pub fn last_pick(&self) -> Option<&PickRecord> {
        self.picks.values().last()
    }
}
