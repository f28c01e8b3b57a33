//! Reusable UI components
//!
//! Standalone widgets used by the countdown cards.

use crate::theme;
use crate::types::Remaining;
use eframe::egui;

/// Value/label pairs shown on a countdown card, largest unit first.
/// Days are left out while zero unless `always_show_days` is set.
pub fn countdown_units(remaining: Remaining, always_show_days: bool) -> Vec<(u64, &'static str)> {
    let mut units = Vec::with_capacity(4);
    if always_show_days || remaining.shows_days() {
        units.push((remaining.days, "days"));
    }
    units.push((remaining.hours, "hours"));
    units.push((remaining.minutes, "minutes"));
    units.push((remaining.seconds, "seconds"));
    units
}

/// Light rounded box with a big number over a small unit label
pub fn unit_box(ui: &mut egui::Ui, value: u64, label: &str) -> egui::Response {
    let (w, h) = theme::UNIT_BOX_SIZE;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(w, h), egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, theme::RADIUS_MEDIUM, theme::UNIT_BOX_FILL);
        painter.text(
            rect.center() - egui::vec2(0.0, 8.0),
            egui::Align2::CENTER_CENTER,
            value.to_string(),
            egui::FontId::proportional(theme::FONT_COUNTDOWN),
            theme::TEXT_ON_LIGHT,
        );
        painter.text(
            egui::pos2(rect.center().x, rect.max.y - 12.0),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(theme::FONT_SMALL),
            theme::TEXT_ON_LIGHT,
        );
    }

    response
}

/// Row of unit boxes for a remaining duration
pub fn render_countdown(ui: &mut egui::Ui, remaining: Remaining, always_show_days: bool) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
        for (value, label) in countdown_units(remaining, always_show_days) {
            unit_box(ui, value, label);
        }
    });
}
