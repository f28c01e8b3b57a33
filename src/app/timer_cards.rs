//! Central panel - one card per timer

use super::App;
use crate::theme;
use crate::types::{Timer, TimerId};
use crate::ui::components::render_countdown;
use crate::utils::format_target;
use eframe::egui;

impl App {
    pub(crate) fn render_timer_cards(&mut self, ctx: &egui::Context) {
        // Central panel (MUST be added LAST after all side panels)
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| {
                // Store panel rect for toast positioning
                self.central_panel_rect = Some(ui.max_rect());

                if self.board.is_empty() {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "{}  No timers yet. Add one from the panel on the left.",
                                egui_phosphor::regular::HOURGLASS
                            ))
                            .size(theme::FONT_HEADING)
                            .color(theme::TEXT_DIM),
                        );
                    });
                    return;
                }

                let mut remove: Option<TimerId> = None;
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.horizontal_wrapped(|ui| {
                            ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_XL, theme::SPACING_XL);
                            for timer in self.board.timers() {
                                if timer_card(ui, timer, self.always_show_days) {
                                    remove = Some(timer.id);
                                }
                            }
                        });
                    });

                if let Some(id) = remove {
                    self.remove_timer(id);
                }
            });
    }
}

/// Render one card. Returns true if its Remove button was clicked.
fn timer_card(ui: &mut egui::Ui, timer: &Timer, always_show_days: bool) -> bool {
    let colors = theme::category_colors(timer.category.label());
    let (fill, label_color) = match colors {
        Some((fill, text)) => (Some(fill), text),
        None => (None, theme::TEXT_MUTED),
    };

    let mut clicked = false;
    theme::card_frame(fill).show(ui, |ui| {
        ui.set_width(theme::CARD_WIDTH);
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(&timer.title)
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new(format!("{}  {}", timer.category.icon(), timer.category.label()))
                    .size(theme::FONT_BODY)
                    .color(label_color),
            );
            ui.label(
                egui::RichText::new(format_target(timer.target_ms))
                    .size(theme::FONT_SMALL)
                    .color(label_color),
            );
            ui.add_space(theme::SPACING_MD);

            render_countdown(ui, timer.remaining(), always_show_days);

            ui.add_space(theme::SPACING_MD);
            let status = if timer.is_active {
                egui::RichText::new(format!("{}  Running", egui_phosphor::regular::PLAY))
                    .color(theme::TEXT_SECONDARY)
            } else {
                egui::RichText::new(format!("{}  Finished", egui_phosphor::regular::CHECK_CIRCLE))
                    .color(theme::STATUS_SUCCESS)
            };
            ui.horizontal(|ui| {
                ui.label(status.size(theme::FONT_LABEL));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let remove = ui
                        .add_enabled(
                            timer.is_removable(),
                            theme::button_dark(format!("{}  Remove", egui_phosphor::regular::TRASH))
                                .min_size(egui::vec2(0.0, theme::BUTTON_HEIGHT)),
                        )
                        .on_disabled_hover_text("Timers can be removed once they finish");
                    clicked = remove.clicked();
                });
            });
        });
    });
    clicked
}
