use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::config::SketchConfig;
use crate::editor::Editor;
use crate::error::PaintResult;
use crate::export;
use crate::input::{InputEvent, InputHandler, Shortcut, shortcut_for};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::style::Style;
use crate::tools::ToolKind;
use crate::util::time;
use crate::view::ViewTransform;

/// UI preferences restored between runs. The artwork itself is never persisted.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Preferences {
    pub tool: ToolKind,
    pub style: Style,
    pub view: ViewTransform,
}

/// Text typed into the inline entry box while a request is pending
#[derive(Debug, Default)]
pub struct TextDraft {
    pub content: String,
}

pub struct SketchApp {
    editor: Editor,
    renderer: Renderer,
    input: InputHandler,
    config: SketchConfig,
    pub(crate) text_draft: TextDraft,
    /// Modal shown before a keyboard-triggered clear
    pub(crate) confirm_clear: bool,
    pub(crate) status: Option<String>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(SketchConfig::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = match SketchConfig::load_default() {
            Ok(config) => config,
            Err(err) => {
                log::error!("ignoring config: {err}");
                SketchConfig::default()
            }
        };
        let mut app = Self::with_config(config);

        if let Some(storage) = cc.storage {
            if let Some(prefs) = eframe::get_value::<Preferences>(storage, eframe::APP_KEY) {
                app.apply_preferences(&prefs);
            }
        }
        app
    }

    pub fn with_config(config: SketchConfig) -> Self {
        let mut editor = Editor::from_config(&config).unwrap_or_else(|err| {
            log::error!("invalid config, using defaults: {err}");
            Editor::default()
        });
        if let Some(path) = &config.font {
            if let Err(err) = editor.load_font(path) {
                log::error!("keeping the default font: {err}");
            }
        }
        Self {
            editor,
            renderer: Renderer::new(),
            input: InputHandler::new(),
            config,
            text_draft: TextDraft::default(),
            confirm_clear: false,
            status: None,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            tool: self.editor.tool(),
            style: *self.editor.style(),
            view: *self.editor.view(),
        }
    }

    pub fn apply_preferences(&mut self, prefs: &Preferences) {
        self.editor.set_tool(prefs.tool);
        self.editor.set_style(prefs.style);
        self.editor.set_view(prefs.view);
    }

    pub fn execute_command(&mut self, command: Command) {
        log::debug!("command: {}", command.label());
        self.editor.execute(command);
    }

    /// Export the surface and report the outcome in the status line
    pub fn save_image(&mut self) {
        let status = match self.export_image() {
            Ok(message) => message,
            Err(err) => {
                log::error!("save failed: {err}");
                format!("Save failed: {err}")
            }
        };
        self.status = Some(status);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn export_image(&self) -> PaintResult<String> {
        let path = export::save_to_dir(
            self.editor.surface().image(),
            std::path::Path::new("."),
            &self.config.export_prefix,
            time::timestamp_millis(),
        )?;
        Ok(format!("Saved {}", path.display()))
    }

    #[cfg(target_arch = "wasm32")]
    fn export_image(&self) -> PaintResult<String> {
        let png = self.editor.export_png()?;
        let name = export::file_name(&self.config.export_prefix, time::timestamp_millis());
        export::offer_download(&name, &png)?;
        Ok(format!("Downloaded {name}"))
    }

    /// Handle a shortcut from the keyboard
    pub fn apply_shortcut(&mut self, shortcut: Shortcut) {
        match shortcut {
            Shortcut::Command(command) => self.execute_command(command),
            Shortcut::RequestClear => self.confirm_clear = true,
            Shortcut::Save => self.save_image(),
            Shortcut::CancelStroke => self.editor.cancel_stroke(),
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        // typing into the text box must not switch tools
        if self.editor.pending_text().is_some() || ctx.wants_keyboard_input() {
            return;
        }
        let presses: Vec<(egui::Key, egui::Modifiers)> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => Some((*key, *modifiers)),
                    _ => None,
                })
                .collect()
        });
        for (key, modifiers) in presses {
            if let Some(shortcut) = shortcut_for(key, modifiers) {
                self.apply_shortcut(shortcut);
            }
        }
    }

    pub(crate) fn handle_canvas_input(&mut self, response: &egui::Response, surface_rect: egui::Rect) {
        for event in self.input.process_input(response, surface_rect) {
            self.route_pointer(event);
        }
    }

    /// Send one pointer event to the editor. Dropped while the clear
    /// confirmation is open.
    pub fn route_pointer(&mut self, event: InputEvent) {
        if self.confirm_clear {
            return;
        }
        if let Some(request) = crate::input::route_event(&event, &mut self.editor) {
            log::debug!("text entry requested at {:?}", request.position);
            self.text_draft.content.clear();
        }
    }

    /// True while a modal prompt owns all input
    pub fn is_blocked(&self) -> bool {
        self.confirm_clear
    }

    /// Answer the clear confirmation
    pub fn resolve_clear(&mut self, confirmed: bool) {
        if !self.confirm_clear {
            return;
        }
        self.confirm_clear = false;
        if confirmed {
            self.execute_command(Command::Clear);
        } else {
            log::debug!("clear declined");
        }
    }

    pub(crate) fn render_surface(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        self.renderer.render(ctx, painter, rect, &self.editor);
    }

    fn show_clear_confirmation(&mut self, ctx: &egui::Context) {
        if !self.confirm_clear {
            return;
        }
        let mut answer = None;
        let modal = egui::Modal::new(egui::Id::new("confirm_clear")).show(ctx, |ui| {
            ui.set_width(260.0);
            ui.heading("Clear canvas?");
            ui.label("This will erase the whole drawing.");
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    answer = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    answer = Some(false);
                }
            });
        });
        // Escape or a click on the backdrop
        if answer.is_none() && modal.should_close() {
            answer = Some(false);
        }
        if let Some(confirmed) = answer {
            self.resolve_clear(confirmed);
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.preferences());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.is_blocked() {
            self.handle_keyboard(ctx);
        }

        tools_panel(self, ctx);
        central_panel(self, ctx);
        self.show_clear_confirmation(ctx);

        if self.editor.is_drawing() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_clear_waits_for_confirmation() {
        let mut app = SketchApp::default();
        app.editor_mut().pointer_down(egui::pos2(10.0, 10.0));
        app.editor_mut().pointer_up(egui::pos2(30.0, 30.0));
        let entries = app.editor().history().len();

        app.apply_shortcut(Shortcut::RequestClear);
        assert!(app.confirm_clear);
        assert_eq!(app.editor().history().len(), entries);

        app.resolve_clear(false);
        assert!(!app.confirm_clear);
        assert_eq!(app.editor().history().len(), entries);

        app.apply_shortcut(Shortcut::RequestClear);
        app.resolve_clear(true);
        assert_eq!(app.editor().history().len(), entries + 1);
    }

    #[test]
    fn test_pending_clear_blocks_canvas_input() {
        let mut app = SketchApp::default();
        app.apply_shortcut(Shortcut::RequestClear);
        let blank = app.editor().surface().snapshot();

        for event in [
            InputEvent::PointerDown { position: egui::pos2(10.0, 10.0) },
            InputEvent::PointerMove { position: egui::pos2(60.0, 40.0) },
            InputEvent::PointerUp { position: egui::pos2(60.0, 40.0) },
        ] {
            app.route_pointer(event);
        }

        assert!(!app.editor().is_drawing());
        assert_eq!(app.editor().history().len(), 1);
        assert!(app.editor().surface().matches(&blank));
        assert!(app.is_blocked());
    }

    #[test]
    fn test_preferences_round_trip_through_editor() {
        let mut app = SketchApp::default();
        let prefs = Preferences {
            tool: ToolKind::Circle,
            style: Style::default().with_stroke_width(12.0),
            view: ViewTransform {
                zoom: 1.4,
                grid_visible: true,
            },
        };
        app.apply_preferences(&prefs);
        let restored = app.preferences();
        assert_eq!(restored.tool, ToolKind::Circle);
        assert_eq!(restored.style.stroke_width, 12.0);
        assert!(restored.view.grid_visible);
    }
}
