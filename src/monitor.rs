//! Picking the target monitor and checking its video mode.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};

use crate::error::SetupError;

/// Which of the connected monitors gets the fullscreen window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MonitorSelector {
    /// The last monitor GLFW enumerates. On a two-head setup this is the
    /// secondary display.
    #[default]
    Last,
    /// The primary monitor.
    Primary,
    /// A zero-based position in GLFW's monitor list.
    Index(usize),
}

impl MonitorSelector {
    /// Resolves the selector against `count` connected monitors.
    pub fn resolve(self, count: usize) -> Result<usize, SetupError> {
        if count == 0 {
            return Err(SetupError::NoMonitor);
        }
        match self {
            MonitorSelector::Last => Ok(count - 1),
            // GLFW always lists the primary monitor first.
            MonitorSelector::Primary => Ok(0),
            MonitorSelector::Index(index) if index < count => Ok(index),
            MonitorSelector::Index(index) => Err(SetupError::MonitorOutOfRange { index, count }),
        }
    }
}

impl FromStr for MonitorSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("last") {
            Ok(MonitorSelector::Last)
        } else if s.eq_ignore_ascii_case("primary") {
            Ok(MonitorSelector::Primary)
        } else {
            s.parse().map(MonitorSelector::Index).map_err(|_| {
                format!(
                    "invalid monitor `{}`: expected `last`, `primary` or an index",
                    s
                )
            })
        }
    }
}

impl<'de> Deserialize<'de> for MonitorSelector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MonitorSelectorVisitor)
    }
}

/// Accepts `"last"`, `"primary"`, `"2"` or a bare `2`.
struct MonitorSelectorVisitor;

impl<'de> Visitor<'de> for MonitorSelectorVisitor {
    type Value = MonitorSelector;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("`last`, `primary` or a monitor index")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        usize::try_from(v)
            .map(MonitorSelector::Index)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        usize::try_from(v)
            .map(MonitorSelector::Index)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }
}

impl fmt::Display for MonitorSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorSelector::Last => f.write_str("last"),
            MonitorSelector::Primary => f.write_str("primary"),
            MonitorSelector::Index(index) => write!(f, "{}", index),
        }
    }
}

/// The current video mode of a monitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoMode {
    /// Width in screen coordinates.
    pub width: u32,
    /// Height in screen coordinates.
    pub height: u32,
    /// Bit depth of the red channel.
    pub red_bits: u32,
    /// Bit depth of the green channel.
    pub green_bits: u32,
    /// Bit depth of the blue channel.
    pub blue_bits: u32,
    /// Refresh rate in Hz.
    pub refresh_rate: u32,
}

impl VideoMode {
    /// Width and height of the mode.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Fails unless `framebuffer` is exactly the size of this mode.
    pub fn check_framebuffer(&self, framebuffer: (i32, i32)) -> Result<(), SetupError> {
        let (width, height) = framebuffer;
        let matches = u32::try_from(width).map_or(false, |w| w == self.width)
            && u32::try_from(height).map_or(false, |h| h == self.height);
        if matches {
            Ok(())
        } else {
            Err(SetupError::IncompatibleVideoMode {
                expected: self.size(),
                framebuffer,
            })
        }
    }
}

impl From<glfw::VidMode> for VideoMode {
    fn from(mode: glfw::VidMode) -> Self {
        VideoMode {
            width: mode.width,
            height: mode.height,
            red_bits: mode.red_bits,
            green_bits: mode.green_bits,
            blue_bits: mode.blue_bits,
            refresh_rate: mode.refresh_rate,
        }
    }
}

impl fmt::Display for VideoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} r{}g{}b{} @ {} Hz",
            self.width, self.height, self.red_bits, self.green_bits, self.blue_bits, self.refresh_rate
        )
    }
}

/// A connected monitor as reported by `--list-monitors`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonitorInfo {
    /// Position in GLFW's monitor list.
    pub index: usize,
    /// Human readable name, if GLFW knows one.
    pub name: Option<String>,
    /// Current video mode, if GLFW reports one.
    pub mode: Option<VideoMode>,
}

impl fmt::Display for MonitorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.index, self.name.as_deref().unwrap_or("<unnamed>"))?;
        match self.mode {
            Some(mode) => write!(f, " ({})", mode),
            None => f.write_str(" (no video mode)"),
        }
    }
}

/// Lists every connected monitor with its current video mode.
pub fn describe_monitors(glfw: &mut glfw::Glfw) -> Vec<MonitorInfo> {
    glfw.with_connected_monitors(|_, monitors| {
        monitors
            .iter()
            .enumerate()
            .map(|(index, monitor)| MonitorInfo {
                index,
                name: monitor.get_name(),
                mode: monitor.get_video_mode().map(VideoMode::from),
            })
            .collect()
    })
}
