use std::path::Path;

use egui::{Color32, Pos2};
use image::RgbaImage;

use crate::command::{Command, HistoryLog};
use crate::config::{ConfigError, SketchConfig};
use crate::error::PaintResult;
use crate::export::{self, ExportError};
use crate::raster;
use crate::state::{EditorState, StateMachine};
use crate::stroke::StrokeSession;
use crate::style::{self, FillMode, Style};
use crate::surface::Surface;
use crate::text::{self, TextEntryRequest, TextRenderer};
use crate::tools::ToolKind;
use crate::view::{self, ViewTransform};

/// The whole drawing application state: one surface, its history, the current
/// style and tool, the view parameters and the interaction state machine.
///
/// Every input (pointer events, commands, text answers) goes through here, so
/// several editors can live side by side.
#[derive(Debug)]
pub struct Editor {
    surface: Surface,
    background: Color32,
    style: Style,
    tool: ToolKind,
    view: ViewTransform,
    history: HistoryLog,
    state: StateMachine,
    grid_spacing: u32,
    text_renderer: Option<TextRenderer>,
    /// Bumped on every change to what `composite` would return
    revision: u64,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(800, 600, Color32::WHITE)
    }
}

impl Editor {
    /// Create an editor with a blank surface and the default style
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        let surface = Surface::new(width, height, background);
        let history = HistoryLog::new(surface.snapshot());
        let text_renderer = match TextRenderer::egui_default() {
            Ok(renderer) => Some(renderer),
            Err(err) => {
                log::warn!("text tool unavailable: {err}");
                None
            }
        };
        Self {
            surface,
            background,
            style: Style::default(),
            tool: ToolKind::default(),
            view: ViewTransform::default(),
            history,
            state: StateMachine::new(),
            grid_spacing: 20,
            text_renderer,
            revision: 0,
        }
    }

    /// Create an editor from a validated config
    pub fn from_config(config: &SketchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut editor = Self::new(
            config.canvas_width,
            config.canvas_height,
            config.background_color()?,
        );
        editor.style = config.style()?;
        editor.grid_spacing = config.grid_spacing;
        let initial = editor.surface.snapshot();
        editor.history = HistoryLog::with_capacity(initial, config.history_capacity);
        Ok(editor)
    }

    /// Replace the font used by the text tool
    pub fn set_text_renderer(&mut self, renderer: TextRenderer) {
        self.text_renderer = Some(renderer);
    }

    /// Use the TrueType/OpenType file at `path` for the text tool
    pub fn load_font(&mut self, path: &Path) -> PaintResult<()> {
        let data = std::fs::read(path)?;
        let renderer = TextRenderer::from_bytes(data)?;
        self.set_text_renderer(renderer);
        log::info!("text tool font loaded from {}", path.display());
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Pointer input

    /// Handle a pointer press in surface coordinates.
    ///
    /// Returns a text-entry request when the text tool opens one; the host
    /// answers it with [`Self::commit_text`] or [`Self::cancel_text`].
    pub fn pointer_down(&mut self, pos: Pos2) -> Option<TextEntryRequest> {
        if self.state.current().is_entering_text() {
            log::debug!("pointer down ignored while text entry is open");
            return None;
        }
        if self.state.current().is_drawing() {
            // a missed release; close that stroke before starting another
            self.end_stroke();
        }

        match self.tool {
            ToolKind::Eyedropper => {
                self.pick_color(pos);
                None
            }
            ToolKind::Text => {
                let request = TextEntryRequest::new(pos, text::font_size_for_width(self.style.stroke_width));
                match self.state.transition_to(EditorState::EnteringText(request.clone())) {
                    Ok(()) => Some(request),
                    Err(err) => {
                        log::debug!("text entry not opened: {err}");
                        None
                    }
                }
            }
            tool => {
                let session = StrokeSession::begin(tool, pos, self.style, &mut self.surface);
                if let Err(err) = self.state.transition_to(EditorState::Drawing(session)) {
                    log::debug!("stroke not started: {err}");
                }
                self.touch();
                None
            }
        }
    }

    /// Handle pointer movement. Ignored unless a stroke is in progress.
    pub fn pointer_move(&mut self, pos: Pos2) {
        let Some(session) = self.state.current_mut().stroke_mut() else {
            return;
        };
        session.update(pos, &mut self.surface);
        self.touch();
    }

    /// Handle a pointer release: the final position is applied, then the
    /// stroke is committed. Ignored while idle.
    pub fn pointer_up(&mut self, pos: Pos2) {
        if !self.state.current().is_drawing() {
            return;
        }
        self.pointer_move(pos);
        self.end_stroke();
    }

    /// The pointer left the surface: end the stroke where it last was
    pub fn pointer_leave(&mut self) {
        if self.state.current().is_drawing() {
            self.end_stroke();
        }
    }

    /// Abandon the stroke in progress, restoring the surface to how it was at pointer-down
    pub fn cancel_stroke(&mut self) {
        if !self.state.current().is_drawing() {
            return;
        }
        if let EditorState::Drawing(session) = self.state.take() {
            session.cancel(&mut self.surface);
            log::debug!("stroke cancelled");
            self.touch();
        }
    }

    fn end_stroke(&mut self) {
        if let EditorState::Drawing(session) = self.state.take() {
            let tool = session.tool();
            let before = session.snapshot().clone();
            session.finish(&mut self.surface);
            if self.surface.matches(&before) {
                log::debug!("{} stroke left no ink, nothing to commit", tool.name());
                self.touch();
                return;
            }
            self.commit(tool.name());
        }
    }

    fn pick_color(&mut self, pos: Pos2) {
        if pos.x < 0.0 || pos.y < 0.0 {
            return;
        }
        if let Some(pixel) = self.surface.pixel(pos.x as u32, pos.y as u32) {
            self.style.color = style::from_pixel(pixel);
            log::debug!("picked color {:?} at {pos:?}", self.style.color);
        }
    }

    // ------------------------------------------------------------------------
    // Text entry

    pub fn pending_text(&self) -> Option<&TextEntryRequest> {
        self.state.current().text_request()
    }

    /// Answer the pending text request. Blank text counts as a cancel.
    pub fn commit_text(&mut self, content: &str) {
        let Some(request) = self.pending_text().cloned() else {
            return;
        };
        self.state.take();

        if content.trim().is_empty() {
            log::debug!("empty text discarded");
            return;
        }
        let Some(renderer) = &self.text_renderer else {
            log::warn!("no font loaded, text discarded");
            return;
        };
        renderer.render(
            &mut self.surface,
            request.position,
            content,
            request.font_size,
            self.style.pixel(),
        );
        self.commit("Text");
    }

    /// Close the pending text request without touching the surface
    pub fn cancel_text(&mut self) {
        if self.state.current().is_entering_text() {
            self.state.take();
        }
    }

    // ------------------------------------------------------------------------
    // History

    /// Step back one history entry. Ignored at the oldest entry and while a
    /// stroke is in progress.
    pub fn undo(&mut self) {
        if self.state.current().is_drawing() {
            log::debug!("undo ignored during a stroke");
            return;
        }
        if let Some(snapshot) = self.history.undo() {
            self.surface.restore(snapshot);
            self.touch();
        }
    }

    /// Step forward one history entry. Ignored at the newest entry and while
    /// a stroke is in progress.
    pub fn redo(&mut self) {
        if self.state.current().is_drawing() {
            log::debug!("redo ignored during a stroke");
            return;
        }
        if let Some(snapshot) = self.history.redo() {
            self.surface.restore(snapshot);
            self.touch();
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo() && !self.state.current().is_drawing()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo() && !self.state.current().is_drawing()
    }

    fn commit(&mut self, what: &str) {
        self.history.commit(self.surface.snapshot());
        log::info!(
            "committed {what} ({}/{} history entries)",
            self.history.cursor() + 1,
            self.history.len()
        );
        self.touch();
    }

    // ------------------------------------------------------------------------
    // Discrete actions

    /// Fill the surface with the background and record it as a history entry.
    /// Any stroke or text entry in progress is dropped.
    pub fn clear(&mut self) {
        match self.state.take() {
            EditorState::Drawing(session) => session.cancel(&mut self.surface),
            EditorState::EnteringText(_) | EditorState::Idle => {}
        }
        self.surface.clear(self.background);
        self.commit("Clear");
    }

    /// Start over with a blank surface of a new size and a fresh history
    pub fn reset(&mut self, width: u32, height: u32) {
        self.state.take();
        self.surface = Surface::new(width, height, self.background);
        self.history.reset(self.surface.snapshot());
        log::info!("surface reset to {width}x{height}");
        self.touch();
    }

    pub fn toggle_grid(&mut self) {
        let visible = self.view.toggle_grid();
        log::debug!("grid {}", if visible { "shown" } else { "hidden" });
        self.touch();
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom_out();
    }

    /// Switch tools. An open text request is cancelled; a stroke in progress
    /// keeps the tool it started with.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if tool == self.tool {
            return;
        }
        self.cancel_text();
        log::debug!("tool {} -> {}", self.tool.name(), tool.name());
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color32) {
        self.style.color = color;
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.style.stroke_width = style::clamp_width(width);
    }

    pub fn set_fill_mode(&mut self, fill_mode: FillMode) {
        self.style.fill_mode = fill_mode;
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
        self.set_stroke_width(style.stroke_width);
    }

    pub fn set_view(&mut self, view: ViewTransform) {
        self.view.grid_visible = view.grid_visible;
        self.view.set_zoom(view.zoom);
        self.touch();
    }

    /// Run a toolbar or keyboard command
    pub fn execute(&mut self, command: Command) {
        if command.touches_history() && self.state.current().is_drawing() {
            log::debug!("{} ignored during a stroke", command.label());
            return;
        }
        match command {
            Command::SetTool(tool) => self.set_tool(tool),
            Command::SetColor(color) => self.set_color(color),
            Command::SetStrokeWidth(width) => self.set_stroke_width(width),
            Command::SetFillMode(fill_mode) => self.set_fill_mode(fill_mode),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::Clear => self.clear(),
            Command::ToggleGrid => self.toggle_grid(),
            Command::ZoomIn => self.zoom_in(),
            Command::ZoomOut => self.zoom_out(),
        }
    }

    // ------------------------------------------------------------------------
    // Output

    /// What should be on screen: the surface, the shape preview over it and
    /// the grid on top. The surface itself is left untouched.
    pub fn composite(&self) -> RgbaImage {
        let mut image = self.surface.image().clone();
        if let Some(preview) = self.state.current().stroke().and_then(StrokeSession::preview) {
            raster::paint(&mut image, preview);
        }
        if self.view.grid_visible {
            view::draw_grid(&mut image, self.grid_spacing);
        }
        image
    }

    /// PNG bytes of the surface (no grid, no preview)
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        export::encode_png(self.surface.image())
    }

    // ------------------------------------------------------------------------
    // Accessors

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn state(&self) -> &EditorState {
        self.state.current()
    }

    pub fn is_drawing(&self) -> bool {
        self.state.current().is_drawing()
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn grid_spacing(&self) -> u32 {
        self.grid_spacing
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
