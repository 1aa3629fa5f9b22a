#![deny(missing_docs)]

//! Opens a fullscreen GLFW window on a dot-matrix display monitor.
//!
//! The window takes over one monitor at its current video mode, loads the
//! OpenGL entry points and then idles until Escape is pressed.

pub use error::{SettingsError, SetupError};
pub use monitor::{MonitorInfo, MonitorSelector, VideoMode};
pub use settings::{parse_opengl, ExitAction, WindowSettings};
pub use window_glfw::{list_monitors, DmdWindow};

pub mod log;

mod error;
mod monitor;
mod settings;
mod window_glfw;
