use egui::Color32;

use crate::SketchApp;
use crate::command::Command;
use crate::components::ToolButton;
use crate::style::{FillMode, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, PALETTE};
use crate::tools::ToolKind;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            // a modal prompt owns input until it is answered
            let enabled = !app.is_blocked();
            ui.add_enabled_ui(enabled, |ui| {
                ui.heading("Tools");

                let active = app.editor().tool();
                ui.horizontal_wrapped(|ui| {
                    for tool in ToolKind::ALL {
                        let response = ToolButton::new(tool, tool == active)
                            .show(ui)
                            .on_hover_text(tool.name());
                        if response.clicked() {
                            log::info!("Tool selected from UI: {}", tool.name());
                            app.execute_command(Command::SetTool(tool));
                        }
                    }
                });
                ui.separator();

                let style = *app.editor().style();

                let mut filled = style.fill_mode.is_filled();
                if ui.checkbox(&mut filled, "Fill shapes").changed() {
                    let mode = if filled { FillMode::Filled } else { FillMode::Outlined };
                    app.execute_command(Command::SetFillMode(mode));
                }

                ui.horizontal(|ui| {
                    ui.label("Width:");
                    let mut width = style.stroke_width;
                    if ui
                        .add(egui::Slider::new(&mut width, MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH))
                        .changed()
                    {
                        app.execute_command(Command::SetStrokeWidth(width));
                    }
                });

                ui.horizontal(|ui| {
                    for swatch in PALETTE {
                        if color_swatch(ui, swatch, swatch == style.color).clicked() {
                            app.execute_command(Command::SetColor(swatch));
                        }
                    }
                    let mut picked = style.color;
                    if egui::color_picker::color_edit_button_srgba(
                        ui,
                        &mut picked,
                        egui::color_picker::Alpha::Opaque,
                    )
                    .changed()
                    {
                        app.execute_command(Command::SetColor(picked));
                    }
                });
                ui.separator();

                // Undo/Redo section
                ui.horizontal(|ui| {
                    let can_undo = app.editor().can_undo();
                    let can_redo = app.editor().can_redo();

                    if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                        app.execute_command(Command::Undo);
                    }
                    if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                        app.execute_command(Command::Redo);
                    }
                });

                ui.horizontal(|ui| {
                    // the button clears straight away; only the keyboard asks first
                    if ui.button("Clear Canvas").clicked() {
                        app.execute_command(Command::Clear);
                    }
                    if ui.button("Save Image").clicked() {
                        app.save_image();
                    }
                });
                ui.separator();

                ui.horizontal(|ui| {
                    let mut grid = app.editor().view().grid_visible;
                    if ui.checkbox(&mut grid, "Grid").changed() {
                        app.execute_command(Command::ToggleGrid);
                    }
                    if ui.button("−").clicked() {
                        app.execute_command(Command::ZoomOut);
                    }
                    ui.label(format!("{}%", app.editor().view().zoom_percent()));
                    if ui.button("+").clicked() {
                        app.execute_command(Command::ZoomIn);
                    }
                });
                ui.separator();

                let history = app.editor().history();
                ui.label(format!(
                    "History: {} / {} (max {})",
                    history.cursor() + 1,
                    history.len(),
                    history.capacity()
                ));
                ui.label(format!("State: {}", app.editor().state().name()));

                if let Some(status) = &app.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });
}

fn color_swatch(ui: &mut egui::Ui, color: Color32, selected: bool) -> egui::Response {
    let size = egui::vec2(18.0, 18.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(rect, 9.0, color);
        let outline = if selected {
            egui::Stroke::new(2.0, Color32::from_rgb(33, 150, 243))
        } else {
            egui::Stroke::new(1.0, Color32::from_gray(120))
        };
        ui.painter().rect_stroke(rect, 9.0, outline);
    }
    response
}
