//! UI-Schicht: Menü, Status-Bar, Overlay, Dialoge und Viewport-Input.

pub mod dialogs;
pub mod input;
mod keyboard;
pub mod menu;
pub mod overlay;
pub mod status;

pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use menu::render_menu;
pub use overlay::render_selection_overlay;
pub use status::render_status_bar;
