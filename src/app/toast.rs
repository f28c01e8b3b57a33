//! Transient notification in the bottom-right corner of the board

use super::App;
use crate::constants::TOAST_DURATION;
use crate::theme;
use eframe::egui;
use std::time::Instant;

const FADE_SECS: f32 = 1.0;

/// Opacity of a toast `elapsed` seconds after it appeared
pub(crate) fn toast_alpha(elapsed: f32, total: f32) -> f32 {
    let visible = total - FADE_SECS;
    if elapsed <= visible {
        1.0
    } else {
        ((total - elapsed) / FADE_SECS).clamp(0.0, 1.0)
    }
}

impl App {
    /// Show `msg`, stacking it under a toast that is still on screen
    pub fn show_toast(&mut self, msg: String) {
        self.toast_message = Some(match self.toast_message.take() {
            Some(prev) => format!("{}\n{}", prev, msg),
            None => msg,
        });
        self.toast_start = Some(Instant::now());
    }

    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        let (Some(msg), Some(panel_rect)) = (self.toast_message.clone(), self.central_panel_rect) else {
            return;
        };

        let total = TOAST_DURATION.as_secs_f32();
        let margin = theme::SPACING_LG;
        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);
        let elapsed = self.toast_start.map(|t| t.elapsed().as_secs_f32()).unwrap_or(0.0);
        let alpha = toast_alpha(elapsed, total);

        let response = egui::Area::new(egui::Id::new("expiry_toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                theme::toast_frame(alpha).show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(msg)
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_PRIMARY.gamma_multiply(alpha)),
                    );
                });
            });

        // Pause while hovered
        if response.response.hovered() {
            self.toast_start = Some(Instant::now());
        }

        if elapsed >= total {
            self.toast_message = None;
            self.toast_start = None;
        } else {
            ctx.request_repaint();
        }
    }
}
