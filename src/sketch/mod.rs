//! Sketch state machine and input handling

/// Key bindings and scripted presses
pub mod input;
/// Application state and frame update
pub mod state;

pub use input::{KeyPress, KeyScript, SketchCommand};
pub use state::Sketch;
