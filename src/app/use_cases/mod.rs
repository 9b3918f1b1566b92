//! Use-Cases: die eigentliche Anwendungslogik hinter den Handlern.

pub mod clipboard;
pub mod file_io;
pub mod selection;
pub mod view;
