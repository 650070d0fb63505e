//! devdir CLI library - commands, rendering and the interactive session

pub mod commands;
pub mod interactive;
pub mod render;
pub mod source;
