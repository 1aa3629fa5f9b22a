//! The fullscreen GLFW window and its event loop.

use glfw::{
    Action, Context, CursorMode, Glfw, GlfwReceiver, Key, OpenGlProfileHint, PWindow,
    SwapInterval, WindowEvent, WindowHint, WindowMode,
};
use tracing::{debug, error, info, trace, warn};

use crate::error::SetupError;
use crate::monitor::{self, MonitorInfo, VideoMode};
use crate::settings::{ExitAction, WindowSettings};

/// A fullscreen window covering one monitor at its current video mode.
pub struct DmdWindow {
    /// The window.
    pub window: PWindow,
    /// Receives window events.
    pub events: GlfwReceiver<(f64, WindowEvent)>,
    /// GLFW context.
    pub glfw: Glfw,
    mode: VideoMode,
    monitor_index: usize,
    exit_action: ExitAction,
}

impl DmdWindow {
    /// Opens the window described by `settings`.
    ///
    /// Every step is checked as soon as it runs; the first failure is
    /// returned and nothing is retried.
    pub fn new(settings: &WindowSettings) -> Result<DmdWindow, SetupError> {
        let mut glfw = init_glfw()?;

        let (major, minor) = settings.get_context_version();
        glfw.window_hint(WindowHint::ContextVersion(major, minor));
        // Core profiles only exist from 3.2 on.
        if (major, minor) >= (3, 2) {
            glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));
            #[cfg(target_os = "macos")]
            glfw.window_hint(WindowHint::OpenGlForwardCompat(true));
        }
        glfw.window_hint(WindowHint::AutoIconify(settings.get_auto_iconify()));

        let title = settings.get_title();
        let selector = settings.get_monitor();
        let (mut window, events, mode, monitor_index) =
            glfw.with_connected_monitors(|glfw, monitors| {
                let monitor_index = selector.resolve(monitors.len())?;
                let monitor: &glfw::Monitor = &monitors[monitor_index];
                let mode = monitor
                    .get_video_mode()
                    .map(VideoMode::from)
                    .ok_or(SetupError::NoVideoMode)?;

                glfw.window_hint(WindowHint::RedBits(Some(mode.red_bits)));
                glfw.window_hint(WindowHint::GreenBits(Some(mode.green_bits)));
                glfw.window_hint(WindowHint::BlueBits(Some(mode.blue_bits)));
                glfw.window_hint(WindowHint::RefreshRate(Some(mode.refresh_rate)));
                info!(
                    monitor = monitor_index,
                    width = mode.width,
                    height = mode.height,
                    red_bits = mode.red_bits,
                    green_bits = mode.green_bits,
                    blue_bits = mode.blue_bits,
                    refresh_rate = mode.refresh_rate,
                    "Target monitor properties"
                );

                let (window, events) = glfw
                    .create_window(mode.width, mode.height, title, WindowMode::FullScreen(monitor))
                    .ok_or(SetupError::WindowCreation)?;
                Ok::<_, SetupError>((window, events, mode, monitor_index))
            })?;

        let framebuffer = window.get_framebuffer_size();
        if let Err(err) = mode.check_framebuffer(framebuffer) {
            if settings.get_strict_video_mode() {
                error!(
                    width = framebuffer.0,
                    height = framebuffer.1,
                    "Window framebuffer size"
                );
                return Err(err);
            }
            warn!("{}, continuing", err);
        }

        window.make_current();
        glfw.set_swap_interval(if settings.get_vsync() {
            SwapInterval::Sync(1)
        } else {
            SwapInterval::None
        });

        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);
        if !gl::Viewport::is_loaded() || !gl::Clear::is_loaded() {
            return Err(SetupError::GlLoad);
        }
        debug!(major, minor, "OpenGL entry points loaded");

        if settings.get_hide_cursor() {
            window.set_cursor_mode(CursorMode::Hidden);
        }

        Ok(DmdWindow {
            window,
            events,
            glfw,
            mode,
            monitor_index,
            exit_action: settings.get_exit_action(),
        })
    }

    /// Polls input, swaps buffers and polls events until the window closes.
    pub fn run(&mut self) {
        while !self.should_close() {
            self.process_input();
            self.window.swap_buffers();
            self.glfw.poll_events();
            for (_, event) in glfw::flush_messages(&self.events) {
                trace!(?event, "window event");
            }
        }
        debug!("event loop finished");
    }

    /// Applies the exit action if Escape is held down.
    pub fn process_input(&mut self) {
        if self.window.get_key(Key::Escape) != Action::Press {
            return;
        }
        match self.exit_action {
            ExitAction::Close => self.set_should_close(true),
            ExitAction::Iconify => self.window.iconify(),
        }
    }

    /// Returns true if the event loop should stop.
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Asks the event loop to stop, or not.
    pub fn set_should_close(&mut self, value: bool) {
        self.window.set_should_close(value);
    }

    /// The framebuffer size in pixels.
    pub fn framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    /// The video mode the window was created with.
    pub fn video_mode(&self) -> VideoMode {
        self.mode
    }

    /// Position of the target monitor in GLFW's monitor list.
    pub fn monitor_index(&self) -> usize {
        self.monitor_index
    }
}

/// Lists the connected monitors without opening a window.
pub fn list_monitors() -> Result<Vec<MonitorInfo>, SetupError> {
    let mut glfw = init_glfw()?;
    Ok(monitor::describe_monitors(&mut glfw))
}

fn init_glfw() -> Result<Glfw, SetupError> {
    Ok(glfw::init(log_glfw_error)?)
}

fn log_glfw_error(err: glfw::Error, description: String) {
    error!(?err, "GLFW error: {}", description);
}
