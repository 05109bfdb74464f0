use egui::{Color32, Context, RichText, Ui};

use crate::math::ShadingMode;
use crate::renderer::camera::CameraState;
use crate::ui::state::{MAX_RESOLUTION, MIN_RESOLUTION, UiState};
use crate::ui::theme::*;

#[derive(Default)]
pub struct UiActions {
    pub regenerate_mesh: bool,
    pub reset_camera: bool,
}

/// Read-only figures shown alongside the controls.
pub struct SceneInfo {
    pub camera: CameraState,
    pub vertices: usize,
    pub strips: usize,
}

pub fn draw_side_panel(ctx: &Context, state: &mut UiState, info: &SceneInfo) -> UiActions {
    let mut actions = UiActions::default();

    if !state.show_panel {
        return actions;
    }

    egui::SidePanel::right("control_panel")
        .min_width(240.0)
        .max_width(320.0)
        .default_width(260.0)
        .frame(egui::Frame::default().fill(BG_PANEL).inner_margin(16.0))
        .show(ctx, |ui| {
            ui.heading(RichText::new("ENNEPER").strong());
            ui.add_space(4.0);
            ui.label(RichText::new("Minimal surface viewer").color(TEXT_MUTED).size(11.0));
            ui.add_space(16.0);

            section_header(ui, "MESH");
            let mut changed = false;
            ui.horizontal(|ui| {
                ui.label("Rows:");
                changed |= ui
                    .add(egui::Slider::new(&mut state.rows, MIN_RESOLUTION..=MAX_RESOLUTION))
                    .changed();
            });
            ui.horizontal(|ui| {
                ui.label("Cols:");
                changed |= ui
                    .add(egui::Slider::new(&mut state.cols, MIN_RESOLUTION..=MAX_RESOLUTION))
                    .changed();
            });
            if changed {
                actions.regenerate_mesh = true;
            }
            ui.label(
                RichText::new(format!("{} vertices in {} strips", info.vertices, info.strips))
                    .color(TEXT_MUTED)
                    .size(11.0),
            );
            ui.add_space(16.0);

            section_header(ui, "SHADING");
            ui.horizontal(|ui| {
                for mode in [ShadingMode::Flat, ShadingMode::Smooth] {
                    if ui.selectable_label(state.shading == mode, mode.label()).clicked() {
                        state.shading = mode;
                    }
                }
            });
            ui.add_space(16.0);

            ui.separator();
            ui.add_space(12.0);

            section_header(ui, "CAMERA");
            camera_grid(ui, &info.camera);
            ui.add_space(8.0);
            if ui
                .add(
                    egui::Button::new(RichText::new("Reset").color(BG_PURE_BLACK))
                        .fill(ACCENT_SURFACE)
                        .min_size(egui::vec2(ui.available_width(), 28.0)),
                )
                .clicked()
            {
                actions.reset_camera = true;
            }
            ui.add_space(16.0);

            section_header(ui, "DISPLAY");
            ui.horizontal(|ui| {
                ui.checkbox(&mut state.vsync_enabled, "VSync");
                ui.checkbox(&mut state.show_help, "Help");
            });
        });

    actions
}

fn section_header(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(TEXT_MUTED).size(11.0).strong());
    ui.add_space(4.0);
}

fn camera_grid(ui: &mut Ui, camera: &CameraState) {
    egui::Frame::default()
        .fill(BG_WIDGET)
        .stroke(egui::Stroke::new(1.0, BORDER_SUBTLE))
        .rounding(6.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.style_mut().override_font_id =
                Some(egui::FontId::new(11.0, egui::FontFamily::Monospace));

            egui::Grid::new("camera_state")
                .num_columns(2)
                .spacing([20.0, 4.0])
                .show(ui, |ui| {
                    let rows = [
                        ("Pitch", format!("{:.1}°", camera.pitch)),
                        ("Yaw", format!("{:.1}°", camera.yaw)),
                        ("Distance", format!("{:.2}", camera.distance)),
                        ("Pan", format!("({:.2}, {:.2})", camera.pan.x, camera.pan.y)),
                    ];
                    for (label, value) in rows {
                        ui.label(RichText::new(label).color(TEXT_MUTED));
                        ui.label(RichText::new(value).color(TEXT_BRIGHT));
                        ui.end_row();
                    }
                });
        });
}

pub fn draw_help_overlay(ctx: &Context, camera: &CameraState, shading: ShadingMode) {
    egui::Area::new(egui::Id::new("help_overlay"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(Color32::from_black_alpha(180))
                .rounding(6.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.style_mut().override_font_id =
                        Some(egui::FontId::new(11.0, egui::FontFamily::Monospace));
                    ui.label(
                        RichText::new("LMB+Drag - Orbit | MMB+Drag - Pan | Scroll/Q/E - Zoom")
                            .color(TEXT_MUTED),
                    );
                    ui.label(
                        RichText::new("WASD/Arrows - Move | Tab - Panel | Esc - Quit")
                            .color(TEXT_MUTED),
                    );
                    ui.label(
                        RichText::new(format!(
                            "Pitch {:.0}° | Yaw {:.0}° | Dist {:.1} | {}",
                            camera.pitch,
                            camera.yaw,
                            camera.distance,
                            shading.label()
                        ))
                        .color(ACCENT_SURFACE),
                    );
                });
        });
}
