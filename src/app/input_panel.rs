//! Left panel - new timer form and display preferences

use super::App;
use crate::theme;
use crate::types::Category;
use crate::utils::{date_part, with_date};
use eframe::egui;

impl App {
    pub(crate) fn render_input_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("input_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(theme::sidebar_frame())
            .show(ctx, |ui| {
                ui.add_space(theme::SPACING_MD);
                ui.label(
                    egui::RichText::new(format!("{}  Event Countdown Timer", egui_phosphor::regular::TIMER))
                        .size(theme::FONT_TITLE)
                        .color(theme::ACCENT),
                );
                ui.add_space(theme::SPACING_XL);

                let mut edited = false;
                let mut submit = false;
                let field_width = ui.available_width();

                // Title
                section_label(ui, "TITLE");
                let title = ui.add(
                    egui::TextEdit::singleline(&mut self.draft.title)
                        .hint_text("Timer Title")
                        .desired_width(field_width),
                );
                edited |= title.changed();
                submit |= title.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.add_space(theme::SPACING_MD);

                // Category
                section_label(ui, "CATEGORY");
                let selected = self
                    .draft
                    .category
                    .map(|c| format!("{}  {}", c.icon(), c.label()))
                    .unwrap_or_else(|| "Select a Category".to_string());
                egui::ComboBox::from_id_salt("category")
                    .width(field_width)
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        edited |= ui
                            .selectable_value(&mut self.draft.category, None, "Select a Category")
                            .changed();
                        for category in Category::ALL {
                            edited |= ui
                                .selectable_value(
                                    &mut self.draft.category,
                                    Some(category),
                                    format!("{}  {}", category.icon(), category.label()),
                                )
                                .changed();
                        }
                    });
                ui.add_space(theme::SPACING_MD);

                // Target date/time
                section_label(ui, "DATE & TIME");
                if let Some(date) = date_part(&self.draft.target) {
                    self.picker_date = date;
                }
                ui.horizontal(|ui| {
                    let picker = ui.add(
                        egui_extras::DatePickerButton::new(&mut self.picker_date)
                            .id_salt("target_date")
                            .calendar_week(false)
                            .show_icon(true),
                    );
                    if picker.changed() {
                        self.draft.target = with_date(&self.draft.target, self.picker_date);
                        edited = true;
                    }
                    let target = ui.add(
                        egui::TextEdit::singleline(&mut self.draft.target)
                            .hint_text("YYYY-MM-DDTHH:MM")
                            .desired_width(ui.available_width()),
                    );
                    edited |= target.changed();
                    submit |= target.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                });
                ui.add_space(theme::SPACING_LG);

                if edited {
                    self.add_error = None;
                }

                // Add
                let can_add = self.draft.is_complete();
                let add = ui.add_enabled(
                    can_add,
                    theme::button_accent(format!("{}  Add Timer", egui_phosphor::regular::PLUS))
                        .min_size(egui::vec2(field_width, theme::BUTTON_HEIGHT_LARGE)),
                );
                if add.clicked() || (submit && can_add) {
                    self.add_timer();
                }

                if let Some(err) = &self.add_error {
                    ui.add_space(theme::SPACING_SM);
                    ui.label(
                        egui::RichText::new(format!("{}  {}", egui_phosphor::regular::WARNING, err))
                            .size(theme::FONT_LABEL)
                            .color(theme::STATUS_ERROR),
                    );
                }

                ui.add_space(theme::SPACING_XL);
                ui.separator();
                ui.add_space(theme::SPACING_MD);

                // Preferences
                section_label(ui, "DISPLAY");
                if theme::settings_checkbox(ui, self.always_show_days, "Always show days") {
                    self.always_show_days = !self.always_show_days;
                }
                if theme::settings_checkbox(ui, self.toast_on_expiry, "Notify when a timer ends") {
                    self.toast_on_expiry = !self.toast_on_expiry;
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} running • {} total",
                            self.board.active_count(),
                            self.board.len()
                        ))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                    )
                    .on_hover_text(format!("{} tick tasks scheduled", self.board.ticking_count()));
                });
            });
    }
}

fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_SMALL)
            .color(theme::TEXT_MUTED),
    );
}
