// main.rs - Desktop front end for the unbounded Game of Life

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use egui::Color32;
use life::{FileFormat, Session, patterns};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod args;
mod ui;

use args::Args;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut app = LifeApp::new(Session::new(args.session_config()));
    if let Some(path) = &args.input {
        app.file_path = path.display().to_string();
        app.load_from_path(path);
    } else if let Some(pattern) = patterns::PATTERNS.first() {
        app.session.apply_pattern(pattern);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )
}

pub struct LifeApp {
    pub session: Session,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub file_path: String,
    /// Result of the last load/save, shown under the controls.
    pub notice: Option<String>,
    seed: u64,
}

impl LifeApp {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            file_path: String::from("pattern.json"),
            notice: None,
            seed: 0,
        }
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            self.session.apply_pattern(pattern);
        }
    }

    pub fn randomize(&mut self) {
        self.seed = self.seed.wrapping_add(1);
        self.session.randomize(self.seed);
    }

    pub fn load_from_path(&mut self, path: &Path) {
        self.notice = Some(match self.try_load(path) {
            Ok(()) => format!("Loaded {}", path.display()),
            Err(err) => {
                warn!(path = %path.display(), "load failed: {err:#}");
                format!("Load failed: {err:#}")
            }
        });
    }

    pub fn save_to_path(&mut self, path: &Path) {
        self.notice = Some(match self.try_save(path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(err) => {
                warn!(path = %path.display(), "save failed: {err:#}");
                format!("Save failed: {err:#}")
            }
        });
    }

    pub fn selected_path(&self) -> PathBuf {
        PathBuf::from(self.file_path.trim())
    }

    fn try_load(&mut self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        match FileFormat::for_path(path) {
            FileFormat::Snapshot => self.session.load_snapshot(&text)?,
            FileFormat::Ascii => self.session.load_ascii(&text),
        }
        info!(path = %path.display(), "loaded");
        Ok(())
    }

    fn try_save(&self, path: &Path) -> Result<()> {
        let text = match FileFormat::for_path(path) {
            FileFormat::Snapshot => self.session.save_snapshot()?,
            FileFormat::Ascii => self.session.save_ascii(),
        };
        fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
