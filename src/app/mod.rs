//! App module - contains the main application state and logic

mod input_panel;
mod timer_cards;
mod toast;

use crate::board::TimerBoard;
use crate::constants::TICK_PERIOD;
use crate::settings::Settings;
use crate::theme;
use crate::ticker::Ticker;
use crate::types::{TimerDraft, TimerId};
use chrono::{Local, NaiveDate};
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Timers (the board owns the ticker, so it must drop before the runtime)
    pub(crate) board: TimerBoard,
    // Input panel
    pub(crate) draft: TimerDraft,
    pub(crate) picker_date: NaiveDate,
    pub(crate) add_error: Option<String>,
    // Display preferences
    pub(crate) always_show_days: bool,
    pub(crate) toast_on_expiry: bool,
    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    pub(crate) central_panel_rect: Option<egui::Rect>,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
    // Runs the tick tasks; dropped after the board
    _runtime: tokio::runtime::Runtime,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        // Tick tasks wake the UI so it drains them even when idle
        let ctx = cc.egui_ctx.clone();
        let ticker = Ticker::new(
            runtime.handle().clone(),
            TICK_PERIOD,
            Arc::new(move || ctx.request_repaint()),
        );

        Self {
            board: TimerBoard::with_ticker(ticker),
            draft: TimerDraft::default(),
            picker_date: Local::now().date_naive(),
            add_error: None,
            always_show_days: settings.always_show_days,
            toast_on_expiry: settings.toast_on_expiry,
            toast_message: None,
            toast_start: None,
            central_panel_rect: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
            _runtime: runtime,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            always_show_days: self.always_show_days,
            toast_on_expiry: self.toast_on_expiry,
        };
        settings.save(&self.data_dir);
    }

    /// Add action of the input panel; a failed add keeps the form and
    /// records a message under it.
    pub fn add_timer(&mut self) {
        self.add_error = self.board.submit(&mut self.draft).err().map(|e| e.to_string());
    }

    pub fn remove_timer(&mut self, id: TimerId) {
        if let Err(e) = self.board.remove(id) {
            warn!(error = %e, "Remove rejected");
        }
    }

    /// Apply pending ticks and announce any timer that just expired
    pub fn poll_timers(&mut self) {
        let expired = self.board.poll();
        if !self.toast_on_expiry {
            return;
        }
        for id in expired {
            if let Some(timer) = self.board.get(id) {
                let msg = format!("{}  {} is here", egui_phosphor::regular::ALARM, timer.title);
                self.show_toast(msg);
            }
        }
    }

    /// Tear down every outstanding tick before the window goes away
    pub fn shutdown(&mut self) {
        info!(timers = self.board.len(), active = self.board.active_count(), "Stopping timers");
        self.board.shutdown();
    }
}
