//! Input/output: command line, configuration, errors, image files and logging

/// Command-line parsing and batch rendering
pub mod cli;
/// Constants and sketch configuration
pub mod configuration;
/// Error types
pub mod error;
/// Source image loading and PNG export
pub mod image;
/// Diagnostic logging setup
pub mod logging;
/// Terminal progress display
pub mod progress;
/// Frame capture and GIF export
pub mod visualization;
