/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (geladenes Mesh, View, Selektion).
mod app_state;
mod selection;
mod ui;
mod view;

pub use app_state::AppState;
pub use selection::{PickRecord, SelectionState};
pub use ui::UiState;
pub use view::ViewState;
