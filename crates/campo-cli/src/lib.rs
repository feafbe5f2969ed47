//! Library side of the `campo` driver: argument parsing helpers, the JSON
//! driver configuration, and the scripted demonstration runs.
pub mod demo;
pub mod input;
