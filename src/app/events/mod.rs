//! Event-Typen der Anwendung: Intents (Eingaben) und Commands (Mutationen).

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
