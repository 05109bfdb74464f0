use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub const BG_PURE_BLACK: Color32 = Color32::from_rgb(0, 0, 0);
pub const BG_PANEL: Color32 = Color32::from_rgb(6, 8, 12);
pub const BG_WIDGET: Color32 = Color32::from_rgb(16, 20, 28);
pub const BG_WIDGET_HOVER: Color32 = Color32::from_rgb(26, 34, 48);
pub const BG_WIDGET_ACTIVE: Color32 = Color32::from_rgb(36, 48, 68);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(168, 172, 178);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(104, 110, 120);
pub const TEXT_BRIGHT: Color32 = Color32::from_rgb(220, 226, 232);

/// Matches the surface's material colour (0.4, 0.75, 1.0).
pub const ACCENT_SURFACE: Color32 = Color32::from_rgb(102, 191, 255);
pub const ACCENT_ORANGE: Color32 = Color32::from_rgb(172, 117, 35);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgba_premultiplied(40, 60, 90, 77);

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.window_rounding = Rounding::same(6.0);
    visuals.faint_bg_color = BG_PANEL;
    visuals.extreme_bg_color = BG_PURE_BLACK;
    visuals.warn_fg_color = ACCENT_ORANGE;
    visuals.hyperlink_color = ACCENT_SURFACE;
    visuals.selection.bg_fill = ACCENT_SURFACE.gamma_multiply(0.4);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT_SURFACE);
    visuals.slider_trailing_fill = true;

    let widgets = &mut visuals.widgets;
    for (w, fill, stroke) in [
        (&mut widgets.noninteractive, BG_WIDGET, BORDER_SUBTLE),
        (&mut widgets.inactive, BG_WIDGET, BORDER_SUBTLE),
        (&mut widgets.hovered, BG_WIDGET_HOVER, ACCENT_SURFACE),
        (&mut widgets.active, BG_WIDGET_ACTIVE, ACCENT_SURFACE),
        (&mut widgets.open, BG_WIDGET_ACTIVE, ACCENT_SURFACE),
    ] {
        w.bg_fill = fill;
        w.weak_bg_fill = fill;
        w.bg_stroke = Stroke::new(1.0, stroke);
        w.rounding = Rounding::same(4.0);
    }
    widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_BRIGHT);
    widgets.active.fg_stroke = Stroke::new(1.0, TEXT_BRIGHT);

    let mut style = Style {
        visuals,
        ..Default::default()
    };

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.slider_width = 160.0;

    style.text_styles = [
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
    ]
    .into();

    ctx.set_style(style);
}
