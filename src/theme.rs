//! Centralized theme constants for Event Countdown
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_INPUT: Color32 = Color32::from_rgb(0x14, 0x14, 0x18); // input field background
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BG_HOVER: Color32 = Color32::from_rgb(0x0f, 0x1a, 0x19); // subtle teal hover
pub const BG_HOVER_WEAK: Color32 = Color32::from_rgb(0x30, 0x30, 0x35); // hovered combo/button
pub const BG_PRESSED: Color32 = Color32::from_rgb(0x2e, 0x2e, 0x33); // widget held down
pub const BG_POPUP: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x1e); // date picker, combo menus
pub const SELECTION_FILL: Color32 = Color32::from_rgb(0x3a, 0x3a, 0x3f); // selected text/item

// =============================================================================
// COLORS - Accent (Teal)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500
pub const TEXT_ON_LIGHT: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700
pub const BORDER_POPUP: Color32 = Color32::from_rgb(0x2a, 0x2a, 0x2e);

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400
pub const BTN_DARK: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900

// =============================================================================
// COLORS - Unit boxes inside countdown cards
// =============================================================================
pub const UNIT_BOX_FILL: Color32 = Color32::from_rgb(0xf4, 0xf4, 0xf5); // zinc-100

// =============================================================================
// COLORS - Categories
// =============================================================================

/// Returns (card fill, label color) for a category label, or None for
/// labels without an accent.
pub fn category_colors(category: &str) -> Option<(Color32, Color32)> {
    match category {
        "Meeting" => Some((
            Color32::from_rgb(0x25, 0x63, 0xeb), // blue-600
            Color32::from_rgb(0xbf, 0xdb, 0xfe), // blue-200
        )),
        "Birthday" => Some((
            Color32::from_rgb(0xdc, 0x26, 0x26), // red-600
            Color32::from_rgb(0xfe, 0xca, 0xca), // red-200
        )),
        "Reminder" => Some((
            Color32::from_rgb(0x05, 0x96, 0x69), // emerald-600
            Color32::from_rgb(0xa7, 0xf3, 0xd0), // emerald-200
        )),
        _ => None,
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;
pub const FONT_COUNTDOWN: f32 = 28.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const SIDEBAR_WIDTH: f32 = 300.0;
pub const BUTTON_HEIGHT: f32 = 28.0;
pub const BUTTON_HEIGHT_LARGE: f32 = 36.0;

// =============================================================================
// DIMENSIONS - Countdown cards
// =============================================================================
pub const CARD_WIDTH: f32 = 340.0;
pub const UNIT_BOX_SIZE: (f32, f32) = (68.0, 64.0);

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_MEDIUM: f32 = 6.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================

fn widget_state(bg: Color32, weak: Color32, border: Color32, fg: egui::Stroke) -> egui::style::WidgetVisuals {
    egui::style::WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: weak,
        bg_stroke: egui::Stroke::new(STROKE_DEFAULT, border),
        fg_stroke: fg,
        corner_radius: RADIUS_DEFAULT.into(),
        expansion: 0.0,
    }
}

/// Dark visuals built from the palette above
pub fn visuals() -> egui::Visuals {
    let text = egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY);
    let pressed = egui::style::WidgetVisuals {
        expansion: -1.0,
        ..widget_state(BG_PRESSED, BG_PRESSED, ACCENT, text)
    };

    egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_POPUP,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: SELECTION_FILL,
            stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
        },
        widgets: egui::style::Widgets {
            noninteractive: widget_state(BG_ELEVATED, BG_SURFACE, BORDER_SUBTLE, text),
            inactive: widget_state(
                BG_INPUT,
                BG_ELEVATED,
                BORDER_DEFAULT,
                egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
            ),
            hovered: widget_state(
                BG_HOVER,
                BG_HOVER_WEAK,
                ACCENT,
                egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
            ),
            active: pressed,
            open: widget_state(BG_SURFACE, BG_ELEVATED, BORDER_SUBTLE, text),
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        popup_shadow: egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(80),
        },
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_POPUP),
        window_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
        menu_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
        ..egui::Visuals::dark()
    }
}

pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(visuals());

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.menu_margin = egui::Margin::symmetric(6, 4);
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(SPACING_LG, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Card frame
// =============================================================================

/// Countdown card frame, tinted with the category fill when there is one
pub fn card_frame(fill: Option<Color32>) -> egui::Frame {
    egui::Frame::new()
        .fill(fill.unwrap_or(BG_ELEVATED))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

// =============================================================================
// HELPER - Sidebar frame
// =============================================================================
pub fn sidebar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_BASE)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
}

// =============================================================================
// HELPER - Toast frame
// =============================================================================
pub fn toast_frame(opacity: f32) -> egui::Frame {
    egui::Frame::new()
        .fill(BG_SURFACE.gamma_multiply(opacity))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, ACCENT.gamma_multiply(opacity)))
        .corner_radius(RADIUS_MEDIUM)
        .inner_margin(egui::Margin::symmetric(SPACING_LG as i8, SPACING_MD as i8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Accent teal button (for the primary Add action)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(Color32::from_rgb(0x04, 0x2f, 0x2e)))
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Dark button used on top of tinted cards
pub fn button_dark(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY))
        .fill(BTN_DARK)
        .corner_radius(RADIUS_DEFAULT)
}

/// Settings checkbox row. Returns true if toggled.
pub fn settings_checkbox(ui: &mut egui::Ui, checked: bool, label: &str) -> bool {
    let full_width = ui.available_width();
    let row_height = 20.0;
    let (row_rect, row_resp) =
        ui.allocate_exact_size(egui::vec2(full_width, row_height), egui::Sense::click());
    if row_resp.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    let painter = ui.painter();
    let cb_size = 16.0;
    let cb_rect = egui::Rect::from_min_size(
        egui::pos2(row_rect.min.x, row_rect.center().y - cb_size / 2.0),
        egui::vec2(cb_size, cb_size),
    );
    if checked {
        painter.rect_stroke(cb_rect, 3.0, egui::Stroke::new(1.5, ACCENT), egui::StrokeKind::Inside);
        painter.rect_filled(cb_rect.shrink(3.0), 2.0, ACCENT);
    } else {
        painter.rect_stroke(cb_rect, 3.0, egui::Stroke::new(1.5, BORDER_DEFAULT), egui::StrokeKind::Inside);
    }
    painter.text(
        egui::pos2(cb_rect.max.x + 8.0, row_rect.center().y),
        egui::Align2::LEFT_CENTER,
        label,
        egui::FontId::proportional(FONT_LABEL),
        TEXT_SECONDARY,
    );
    row_resp.clicked()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    #[test]
    fn every_category_has_an_accent() {
        for category in Category::ALL {
            assert!(category_colors(category.label()).is_some(), "{category}");
        }
    }

    #[test]
    fn accents_are_distinct() {
        let fills: Vec<_> = Category::ALL
            .iter()
            .filter_map(|c| category_colors(c.label()).map(|(fill, _)| fill))
            .collect();
        assert_eq!(fills.len(), 3);
        assert_ne!(fills[0], fills[1]);
        assert_ne!(fills[1], fills[2]);
        assert_ne!(fills[0], fills[2]);
    }

    #[test]
    fn visuals_use_the_palette() {
        let v = visuals();
        assert!(v.dark_mode);
        assert_eq!(v.window_fill, BG_POPUP);
        assert_eq!(v.selection.bg_fill, SELECTION_FILL);
        assert_eq!(v.window_stroke.color, BORDER_POPUP);
        assert_eq!(v.widgets.hovered.weak_bg_fill, BG_HOVER_WEAK);
        assert_eq!(v.widgets.active.bg_fill, BG_PRESSED);
        assert_eq!(v.widgets.active.expansion, -1.0);
        assert_eq!(v.widgets.inactive.expansion, 0.0);
    }

    #[test]
    fn unknown_category_has_no_accent() {
        assert_eq!(category_colors("Holiday"), None);
        assert_eq!(category_colors(""), None);
        assert_eq!(category_colors("meeting"), None);
    }
}
