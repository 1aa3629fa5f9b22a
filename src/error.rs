//! Errors raised while bringing the window up.

use thiserror::Error;

/// Everything that can stop [`DmdWindow::new`](crate::DmdWindow::new)
/// from producing a usable fullscreen window.
#[derive(Error, Debug)]
pub enum SetupError {
    /// GLFW itself could not be initialized.
    #[error("GLFW initialization failure: {0}")]
    Init(#[from] glfw::InitError),
    /// No monitor is connected.
    #[error("no monitor connected, unable to initialize")]
    NoMonitor,
    /// The configured monitor index does not exist.
    #[error("monitor {index} requested but only {count} connected")]
    MonitorOutOfRange {
        /// The index that was asked for.
        index: usize,
        /// How many monitors are connected.
        count: usize,
    },
    /// GLFW reported no current video mode for the target monitor.
    #[error("target monitor reports no video mode")]
    NoVideoMode,
    /// The fullscreen window could not be created.
    #[error("failed to create GLFW window")]
    WindowCreation,
    /// The framebuffer GLFW handed back is not the size of the video mode.
    #[error(
        "incompatible video mode: expected {}x{}, framebuffer is {}x{}",
        .expected.0, .expected.1, .framebuffer.0, .framebuffer.1
    )]
    IncompatibleVideoMode {
        /// Width and height of the monitor's video mode.
        expected: (u32, u32),
        /// Width and height of the window's framebuffer.
        framebuffer: (i32, i32),
    },
    /// The GL entry points could not be loaded through the context.
    #[error("failed to load OpenGL entry points")]
    GlLoad,
}

/// Failure to read a settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The file could not be read.
    #[error("could not read settings: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid settings TOML.
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn mismatch_message_names_both_sizes() {
        let err = SetupError::IncompatibleVideoMode {
            expected: (128, 32),
            framebuffer: (256, 64),
        };
        assert_eq!(
            err.to_string(),
            "incompatible video mode: expected 128x32, framebuffer is 256x64"
        );
    }

    #[test]
    fn out_of_range_message() {
        let err = SetupError::MonitorOutOfRange { index: 3, count: 2 };
        assert_eq!(err.to_string(), "monitor 3 requested but only 2 connected");
        assert!(err.source().is_none());
    }

    #[test]
    fn io_error_is_the_source() {
        let err = SettingsError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        assert!(err.to_string().starts_with("could not read settings"));
        assert!(err.source().is_some());
    }

    #[test]
    fn toml_error_converts_to_parse() {
        let err: SettingsError = toml::from_str::<toml::Value>("= nope").unwrap_err().into();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("invalid settings"));
    }
}
