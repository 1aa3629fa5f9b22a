//! Window settings, loadable from a TOML file.

use std::fs;
use std::path::Path;

use serde::{de, Deserialize, Deserializer};
use shader_version::OpenGL;

use crate::error::SettingsError;
use crate::monitor::MonitorSelector;

/// What pressing Escape does to the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExitAction {
    /// Ask the window to close, which ends the event loop.
    #[default]
    Close,
    /// Minimize the window and keep running.
    Iconify,
}

/// Settings for the fullscreen window.
///
/// Every field has a default, so a settings file only needs the keys it
/// wants to change:
///
/// ```toml
/// monitor = "primary"
/// opengl = "4.1"
/// hide_cursor = false
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSettings {
    title: String,
    monitor: MonitorSelector,
    #[serde(deserialize_with = "deserialize_opengl")]
    opengl: OpenGL,
    auto_iconify: bool,
    hide_cursor: bool,
    vsync: bool,
    exit_action: ExitAction,
    strict_video_mode: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        WindowSettings::new("DMD Test Window")
    }
}

impl WindowSettings {
    /// Creates settings with the given title and defaults for the rest.
    pub fn new<T: Into<String>>(title: T) -> Self {
        WindowSettings {
            title: title.into(),
            monitor: MonitorSelector::Last,
            opengl: OpenGL::V3_3,
            auto_iconify: false,
            hide_cursor: true,
            vsync: true,
            exit_action: ExitAction::Close,
            strict_video_mode: true,
        }
    }

    /// Parses settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads settings from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        WindowSettings::from_toml_str(&text)
    }

    /// Sets the window title.
    pub fn title<T: Into<String>>(mut self, value: T) -> Self {
        self.title = value.into();
        self
    }

    /// Sets which monitor to go fullscreen on.
    pub fn monitor(mut self, value: MonitorSelector) -> Self {
        self.monitor = value;
        self
    }

    /// Sets the requested OpenGL context version.
    pub fn opengl(mut self, value: OpenGL) -> Self {
        self.opengl = value;
        self
    }

    /// Sets whether the fullscreen window iconifies when it loses focus.
    pub fn auto_iconify(mut self, value: bool) -> Self {
        self.auto_iconify = value;
        self
    }

    /// Sets whether the cursor is hidden over the window.
    pub fn hide_cursor(mut self, value: bool) -> Self {
        self.hide_cursor = value;
        self
    }

    /// Sets whether buffer swaps wait for vertical sync.
    pub fn vsync(mut self, value: bool) -> Self {
        self.vsync = value;
        self
    }

    /// Sets what Escape does.
    pub fn exit_action(mut self, value: ExitAction) -> Self {
        self.exit_action = value;
        self
    }

    /// Sets whether a framebuffer that does not match the video mode is fatal.
    pub fn strict_video_mode(mut self, value: bool) -> Self {
        self.strict_video_mode = value;
        self
    }

    /// Gets the window title.
    pub fn get_title(&self) -> &str {
        &self.title
    }

    /// Gets the monitor selector.
    pub fn get_monitor(&self) -> MonitorSelector {
        self.monitor
    }

    /// Gets the requested OpenGL version.
    pub fn get_opengl(&self) -> OpenGL {
        self.opengl
    }

    /// Gets the requested context version as `(major, minor)`.
    pub fn get_context_version(&self) -> (u32, u32) {
        let (major, minor) = self.opengl.get_major_minor();
        (major as u32, minor as u32)
    }

    /// Gets whether the window auto-iconifies.
    pub fn get_auto_iconify(&self) -> bool {
        self.auto_iconify
    }

    /// Gets whether the cursor is hidden.
    pub fn get_hide_cursor(&self) -> bool {
        self.hide_cursor
    }

    /// Gets whether vsync is on.
    pub fn get_vsync(&self) -> bool {
        self.vsync
    }

    /// Gets what Escape does.
    pub fn get_exit_action(&self) -> ExitAction {
        self.exit_action
    }

    /// Gets whether a framebuffer mismatch is fatal.
    pub fn get_strict_video_mode(&self) -> bool {
        self.strict_video_mode
    }
}

/// Parses an OpenGL version such as `"3.3"`.
pub fn parse_opengl(s: &str) -> Result<OpenGL, String> {
    let opengl = match s.trim() {
        "2.0" => OpenGL::V2_0,
        "2.1" => OpenGL::V2_1,
        "3.0" => OpenGL::V3_0,
        "3.1" => OpenGL::V3_1,
        "3.2" => OpenGL::V3_2,
        "3.3" => OpenGL::V3_3,
        "4.0" => OpenGL::V4_0,
        "4.1" => OpenGL::V4_1,
        "4.2" => OpenGL::V4_2,
        "4.3" => OpenGL::V4_3,
        "4.4" => OpenGL::V4_4,
        "4.5" => OpenGL::V4_5,
        other => return Err(format!("unsupported OpenGL version `{}`", other)),
    };
    Ok(opengl)
}

fn deserialize_opengl<'de, D>(deserializer: D) -> Result<OpenGL, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_opengl(&s).map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = WindowSettings::default();
        assert_eq!(settings.get_title(), "DMD Test Window");
        assert_eq!(settings.get_monitor(), MonitorSelector::Last);
        assert_eq!(settings.get_context_version(), (3, 3));
        assert!(!settings.get_auto_iconify());
        assert!(settings.get_hide_cursor());
        assert!(settings.get_vsync());
        assert_eq!(settings.get_exit_action(), ExitAction::Close);
        assert!(settings.get_strict_video_mode());
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            WindowSettings::from_toml_str("").unwrap(),
            WindowSettings::default()
        );
    }

    #[test]
    fn partial_toml_overrides_only_its_keys() {
        let settings = WindowSettings::from_toml_str(
            r#"
            monitor = "primary"
            opengl = "4.1"
            exit_action = "iconify"
            "#,
        )
        .unwrap();
        assert_eq!(settings.get_monitor(), MonitorSelector::Primary);
        assert_eq!(settings.get_context_version(), (4, 1));
        assert_eq!(settings.get_exit_action(), ExitAction::Iconify);
        assert_eq!(settings.get_title(), "DMD Test Window");
        assert!(settings.get_hide_cursor());
    }

    #[test]
    fn monitor_index_as_string_or_integer() {
        let settings = WindowSettings::from_toml_str(r#"monitor = "1""#).unwrap();
        assert_eq!(settings.get_monitor(), MonitorSelector::Index(1));
        let settings = WindowSettings::from_toml_str("monitor = 2").unwrap();
        assert_eq!(settings.get_monitor(), MonitorSelector::Index(2));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = WindowSettings::from_toml_str("fullscreen = false").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn bad_opengl_version_is_rejected() {
        assert!(WindowSettings::from_toml_str(r#"opengl = "5.0""#).is_err());
        assert!(parse_opengl("1.0").is_err());
        assert_eq!(parse_opengl(" 3.2 "), Ok(OpenGL::V3_2));
    }

    #[test]
    fn builder_chains() {
        let settings = WindowSettings::new("Scoreboard")
            .monitor(MonitorSelector::Index(2))
            .opengl(OpenGL::V2_1)
            .hide_cursor(false)
            .vsync(false)
            .strict_video_mode(false);
        assert_eq!(settings.get_title(), "Scoreboard");
        assert_eq!(settings.get_monitor(), MonitorSelector::Index(2));
        assert_eq!(settings.get_context_version(), (2, 1));
        assert!(!settings.get_hide_cursor());
        assert!(!settings.get_vsync());
        assert!(!settings.get_strict_video_mode());
    }
}
