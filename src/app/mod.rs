//! App module - contains the main application state and logic

mod images;
pub mod panel;
mod views;

use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use crate::utils::get_cache_dir;
use eframe::egui;
use panel::{ControlPanel, SelectedDate};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) control: ControlPanel,
    pub(crate) settings: Settings,
    // Solar frame for the selected date
    pub(crate) frame_state: Arc<Mutex<FrameState>>,
    pub(crate) frame_texture: Option<egui::TextureHandle>,
    pub(crate) frame_texture_url: Option<String>,
    pub(crate) cancel_token: Option<CancellationToken>,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) cache_dir: PathBuf,
    // Window / lifecycle
    pub(crate) startup_done: bool,
    pub(crate) needs_center: bool,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> std::io::Result<Self> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let cache_dir = get_cache_dir();
        std::fs::create_dir_all(&cache_dir).ok();

        Ok(Self {
            control: ControlPanel::mount(SelectedDate::today()),
            settings,
            frame_state: Arc::new(Mutex::new(FrameState::default())),
            frame_texture: None,
            frame_texture_url: None,
            cancel_token: None,
            runtime: tokio::runtime::Runtime::new()?,
            cache_dir,
            startup_done: false,
            needs_center: false,
            window_pos: None,
            window_size: None,
            data_dir,
        })
    }

    pub fn save_settings(&mut self) {
        self.settings.window_x = self.window_pos.map(|p| p.x);
        self.settings.window_y = self.window_pos.map(|p| p.y);
        self.settings.window_w = self.window_size.map(|s| s.x);
        self.settings.window_h = self.window_size.map(|s| s.y);
        self.settings.save(&self.data_dir);
    }
}
