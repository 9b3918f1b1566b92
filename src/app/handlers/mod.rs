//! Feature-Handler: dünne Dispatch-Schicht zwischen Controller und Use-Cases.

pub mod file_io;
pub mod selection;
pub mod view;
