//! `dmd`: fullscreen window on the dot-matrix display.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use shader_version::OpenGL;
use tracing::{error, info};

use dmd_window::{list_monitors, parse_opengl, DmdWindow, ExitAction, MonitorSelector, WindowSettings};

#[derive(Parser)]
#[command(name = "dmd")]
#[command(about = "Fullscreen window on a dot-matrix display monitor", long_about = None)]
struct Cli {
    /// Settings file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Monitor to use: `last`, `primary` or an index
    #[arg(short, long)]
    monitor: Option<MonitorSelector>,

    /// Window title
    #[arg(long)]
    title: Option<String>,

    /// OpenGL context version, e.g. 3.3
    #[arg(long, value_parser = parse_opengl)]
    opengl: Option<OpenGL>,

    /// What Escape does
    #[arg(long, value_enum)]
    exit_action: Option<ExitAction>,

    /// Keep the cursor visible over the window
    #[arg(long)]
    show_cursor: bool,

    /// Print the connected monitors and exit
    #[arg(long)]
    list_monitors: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn settings(&self) -> Result<WindowSettings> {
        let mut settings = match &self.config {
            Some(path) => WindowSettings::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => WindowSettings::default(),
        };
        if let Some(monitor) = self.monitor {
            settings = settings.monitor(monitor);
        }
        if let Some(title) = &self.title {
            settings = settings.title(title.as_str());
        }
        if let Some(opengl) = self.opengl {
            settings = settings.opengl(opengl);
        }
        if let Some(exit_action) = self.exit_action {
            settings = settings.exit_action(exit_action);
        }
        if self.show_cursor {
            settings = settings.hide_cursor(false);
        }
        Ok(settings)
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.list_monitors {
        for monitor in list_monitors()? {
            println!("{}", monitor);
        }
        return Ok(());
    }

    let settings = cli.settings()?;
    let mut window = DmdWindow::new(&settings).context("window setup failed")?;
    let (width, height) = window.framebuffer_size();
    info!(
        monitor = window.monitor_index(),
        width, height, "window ready, press Escape to quit"
    );
    window.run();
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    dmd_window::log::init(cli.verbose);

    if let Err(err) = run(&cli) {
        error!("{:#}", err);
        process::exit(-1);
    }
}
